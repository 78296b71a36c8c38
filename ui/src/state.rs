//! Session form state shared through Leptos context

use formdeck::schema::{FieldType, FormField};
use formdeck::store::{FieldValue, FormData, FormStore};
use leptos::prelude::*;

/// Reactive handle to the session's [`FormStore`].
///
/// Created once by the app root and provided as context. Views read through
/// the accessors (which subscribe them to changes) and write only through
/// the two mutating operations.
#[derive(Clone, Copy)]
pub struct FormState {
    store: RwSignal<FormStore>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(FormStore::new()),
        }
    }

    /// Shallow-merge `partial` into the form data. Observers are only
    /// notified when something actually changed.
    pub fn update_form_data<I, K, V>(&self, partial: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.store.maybe_update(|store| store.update_form_data(partial));
    }

    pub fn reset_form_data(&self) {
        self.store.maybe_update(|store| store.reset_form_data());
    }

    /// Snapshot of the current form data
    pub fn form_data(&self) -> FormData {
        self.store.with(|store| store.form_data().clone())
    }

    pub fn value(&self, name: &str) -> Option<FieldValue> {
        self.store.with(|store| store.get(name).cloned())
    }

    pub fn revision(&self) -> u64 {
        self.store.with(|store| store.revision())
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// The form state provided by the app root
pub fn use_form_state() -> FormState {
    expect_context::<FormState>()
}

/// Convert the raw text of an input element into the value stored for it.
///
/// Number inputs keep a `Number` only when the number renders back as the
/// exact text typed. Anything else, including half-typed input like `4.`,
/// stays text so the input does not rewrite what the user sees.
pub fn value_from_input(field: &FormField, raw: String) -> FieldValue {
    if field.field_type == FieldType::Input && field.input_type() == "number" {
        let parsed = raw
            .parse::<i64>()
            .map(FieldValue::from)
            .or_else(|_| raw.parse::<f64>().map(FieldValue::from))
            .ok();
        if let Some(value @ FieldValue::Number(_)) = parsed {
            if value.to_string() == raw {
                return value;
            }
        }
    }
    FieldValue::Text(raw)
}

/// Value stored for a select: the chosen option's value
pub fn value_from_select(raw: String) -> FieldValue {
    FieldValue::Text(raw)
}

/// Value stored for a checkbox
pub fn value_from_checkbox(checked: bool) -> FieldValue {
    FieldValue::Bool(checked)
}
