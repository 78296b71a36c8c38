//! Field Renderers
//!
//! One component per field type. Every control reads its value from the
//! session form state and writes back through `update_form_data`.

use formdeck::schema::{FieldType, FormField};
use leptos::prelude::*;

use crate::state::{use_form_state, value_from_checkbox, value_from_input, value_from_select};

const CONTROL_CLASS: &str =
    "w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

// ============================================================================
// Field Row
// ============================================================================

/// Label, control and help text for one field
#[component]
pub fn FieldRow(field: FormField) -> impl IntoView {
    let label = field.label.clone();
    let label_for = field.name.clone();
    let required = field.is_required();
    let description = field.description().map(String::from);
    let field_type = field.field_type;
    let is_checkbox = field_type == FieldType::Checkbox;

    let control = match field_type {
        FieldType::Input => view! { <TextInput field=field /> }.into_any(),
        FieldType::Select => view! { <SelectInput field=field /> }.into_any(),
        FieldType::Checkbox => view! { <CheckboxInput field=field /> }.into_any(),
        FieldType::Textarea => view! { <TextareaInput field=field /> }.into_any(),
    };

    view! {
        <div class="mb-4">
            {if is_checkbox {
                view! {
                    <label for=label_for class="flex items-center gap-2 text-sm text-gray-700">
                        {control}
                        <span>{label}</span>
                    </label>
                }.into_any()
            } else {
                view! {
                    <div>
                        <label for=label_for class="block text-sm font-medium text-gray-700 mb-1">
                            {label}
                            {required.then(|| view! { <span class="text-red-500">" *"</span> })}
                        </label>
                        {control}
                    </div>
                }.into_any()
            }}
            {description.map(|text| view! {
                <p class="mt-1 text-xs text-gray-500">{text}</p>
            })}
        </div>
    }
}

// ============================================================================
// Text Input
// ============================================================================

#[component]
fn TextInput(field: FormField) -> impl IntoView {
    let form = use_form_state();
    let name = field.name.clone();
    let id = field.name.clone();
    let input_name = field.name.clone();
    let input_type = field.input_type().to_string();
    // The browser checks these natively and shows `title` on mismatch
    let pattern = field.regex.as_ref().map(|p| p.as_str().to_string());
    let title = field.error_message.clone();
    let required = field.is_required();

    let on_input = move |ev: leptos::ev::Event| {
        let value = value_from_input(&field, event_target_value(&ev));
        form.update_form_data([(field.name.clone(), value)]);
    };

    view! {
        <input
            type=input_type
            id=id
            name=input_name
            class=CONTROL_CLASS
            pattern=pattern
            title=title
            required=required
            prop:value=move || form.value(&name).map(|v| v.to_string()).unwrap_or_default()
            on:input=on_input
        />
    }
}

// ============================================================================
// Select
// ============================================================================

#[component]
fn SelectInput(field: FormField) -> impl IntoView {
    let form = use_form_state();
    let name = field.name.clone();
    let id = field.name.clone();
    let input_name = field.name.clone();
    let name_for_change = field.name.clone();
    let options = field.effective_options().to_vec();
    let required = field.is_required();
    let title = field.error_message.clone();

    let on_change = move |ev: leptos::ev::Event| {
        form.update_form_data([(name_for_change.clone(), value_from_select(event_target_value(&ev)))]);
    };

    view! {
        <select
            id=id
            name=input_name
            class=CONTROL_CLASS
            title=title
            required=required
            prop:value=move || form.value(&name).map(|v| v.to_string()).unwrap_or_default()
            on:change=on_change
        >
            <option value="">"-- Select --"</option>
            {options.into_iter().map(|opt| {
                view! {
                    <option value=opt.value>{opt.label}</option>
                }
            }).collect_view()}
        </select>
    }
}

// ============================================================================
// Checkbox
// ============================================================================

#[component]
fn CheckboxInput(field: FormField) -> impl IntoView {
    let form = use_form_state();
    let name = field.name.clone();
    let id = field.name.clone();
    let input_name = field.name.clone();
    let name_for_change = field.name;

    let on_change = move |ev: leptos::ev::Event| {
        form.update_form_data([(name_for_change.clone(), value_from_checkbox(event_target_checked(&ev)))]);
    };

    view! {
        <input
            type="checkbox"
            id=id
            name=input_name
            class="h-4 w-4 rounded border-gray-300"
            prop:checked=move || form.value(&name).and_then(|v| v.as_bool()).unwrap_or(false)
            on:change=on_change
        />
    }
}

// ============================================================================
// Textarea
// ============================================================================

#[component]
fn TextareaInput(field: FormField) -> impl IntoView {
    let form = use_form_state();
    let name = field.name.clone();
    let id = field.name.clone();
    let input_name = field.name.clone();
    let rows = field.rows().map(|r| r.to_string());
    let required = field.is_required();
    let title = field.error_message.clone();

    let on_input = move |ev: leptos::ev::Event| {
        let value = value_from_input(&field, event_target_value(&ev));
        form.update_form_data([(field.name.clone(), value)]);
    };

    view! {
        <textarea
            id=id
            name=input_name
            class=CONTROL_CLASS
            rows=rows
            title=title
            required=required
            prop:value=move || form.value(&name).map(|v| v.to_string()).unwrap_or_default()
            on:input=on_input
        />
    }
}
