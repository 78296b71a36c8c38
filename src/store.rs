//! In-memory form state
//!
//! A [`FormStore`] holds the values of an in-progress form for the lifetime
//! of one application session. It is mutated only through shallow merges and
//! full resets; everything else is read access.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

// ============================================================================
// Field Value
// ============================================================================

/// Current value of one form field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox state
    Bool(bool),
    /// Numeric input, kept exactly as given
    Number(serde_json::Number),
    /// Text input, textarea or selected option value
    Text(String),
    /// Anything else a view chooses to keep
    Json(Value),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Json(v) => v.as_bool(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            FieldValue::Json(v) => v.as_f64(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    /// Renders the value the way an input element would show it
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Json(Value::String(s)) => f.write_str(s),
            FieldValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    /// Non-finite numbers have no JSON form and become `null`
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(n) => FieldValue::Number(n),
            None => FieldValue::Json(Value::Null),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => FieldValue::Bool(b),
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => FieldValue::Number(n),
            other => FieldValue::Json(other),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Number(n) => Value::Number(n),
            FieldValue::Text(s) => Value::String(s),
            FieldValue::Json(v) => v,
        }
    }
}

// ============================================================================
// Form Data
// ============================================================================

/// Field name -> current value
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, FieldValue>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }

    /// Shallow merge: keys in `partial` overwrite, other keys stay.
    ///
    /// Returns `true` if any entry was added or changed.
    pub fn merge<I, K, V>(&mut self, partial: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut changed = false;
        for (name, value) in partial {
            let name = name.into();
            let value = value.into();
            if self.0.get(&name) != Some(&value) {
                self.0.insert(name, value);
                changed = true;
            }
        }
        changed
    }

    fn clear(&mut self) -> bool {
        let had_entries = !self.0.is_empty();
        self.0.clear();
        had_entries
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut data = FormData::new();
        data.merge(iter);
        data
    }
}

impl<'a> IntoIterator for &'a FormData {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Form Store
// ============================================================================

/// Session-scoped holder of the in-progress form values
#[derive(Clone, Debug, Default)]
pub struct FormStore {
    data: FormData,
    revision: u64,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current values
    pub fn form_data(&self) -> &FormData {
        &self.data
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.data.get(name)
    }

    /// Number of effective mutations since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Merge `partial` into the current values.
    ///
    /// Returns `false` when the merge left everything as it was, in which
    /// case the revision is not bumped.
    pub fn update_form_data<I, K, V>(&mut self, partial: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let changed = self.data.merge(partial);
        if changed {
            self.revision += 1;
            debug!(
                fields = self.data.len(),
                revision = self.revision,
                "Form data updated"
            );
        }
        changed
    }

    /// Drop every value
    pub fn reset_form_data(&mut self) -> bool {
        let changed = self.data.clear();
        if changed {
            self.revision += 1;
            debug!(revision = self.revision, "Form data reset");
        }
        changed
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data<const N: usize>(entries: [(&str, FieldValue); N]) -> FormData {
        entries.into_iter().collect()
    }

    #[test]
    fn test_update_adds_and_overwrites() {
        let mut store = FormStore::new();
        store.update_form_data([("name", "Alice")]);
        store.update_form_data([("email", "a@x.com")]);
        store.update_form_data([("name", "Bob")]);

        assert_eq!(
            store.form_data(),
            &data([("name", "Bob".into()), ("email", "a@x.com".into())])
        );
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut store = FormStore::new();
        store.update_form_data([("name", "Alice")]);
        let before = store.form_data().clone();

        let changed = store.update_form_data(Vec::<(String, FieldValue)>::new());

        assert!(!changed);
        assert_eq!(store.form_data(), &before);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_repeated_update_is_idempotent() {
        let mut store = FormStore::new();
        let partial = [("agree", FieldValue::Bool(true)), ("age", 42i64.into())];

        assert!(store.update_form_data(partial.clone()));
        let once = store.form_data().clone();
        assert!(!store.update_form_data(partial));

        assert_eq!(store.form_data(), &once);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = FormStore::new();
        store.update_form_data([("a", "1"), ("b", "2")]);

        assert!(store.reset_form_data());
        assert!(store.form_data().is_empty());
        assert!(!store.reset_form_data());
    }

    #[test]
    fn test_nested_values_are_replaced_not_merged() {
        let mut store = FormStore::new();
        store.update_form_data([("address", json!({"city": "Paris", "zip": "75001"}))]);
        store.update_form_data([("address", json!({"city": "Lyon"}))]);

        assert_eq!(
            store.get("address"),
            Some(&FieldValue::Json(json!({"city": "Lyon"})))
        );
    }

    #[test]
    fn test_value_from_json_prefers_typed_variants() {
        assert_eq!(FieldValue::from(json!(true)), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(json!(3)), FieldValue::Number(3.into()));
        assert_eq!(FieldValue::from(json!("x")), FieldValue::Text("x".into()));
        assert_eq!(
            FieldValue::from(json!(["a", "b"])),
            FieldValue::Json(json!(["a", "b"]))
        );
    }

    #[test]
    fn test_form_data_serializes_as_plain_object() {
        let form = data([
            ("name", "Alice".into()),
            ("newsletter", true.into()),
            ("rating", 4i64.into()),
        ]);

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            json!({"name": "Alice", "newsletter": true, "rating": 4})
        );

        let parsed: FormData = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, form);
    }

    #[test]
    fn test_display_matches_input_text() {
        assert_eq!(FieldValue::Text("hi".into()).to_string(), "hi");
        assert_eq!(FieldValue::from(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::from(4i64).to_string(), "4");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_integers_are_stored_exactly() {
        let form: FormData =
            serde_json::from_value(json!({"age": 42, "big": 9007199254740993u64})).unwrap();

        assert_eq!(
            serde_json::to_string(&form).unwrap(),
            r#"{"age":42,"big":9007199254740993}"#
        );
        assert_eq!(
            FieldValue::from(json!(9007199254740993u64)),
            FieldValue::Number(9007199254740993u64.into())
        );
    }

    #[test]
    fn test_non_finite_update_is_idempotent() {
        let mut store = FormStore::new();

        assert!(store.update_form_data([("x", f64::NAN)]));
        assert!(!store.update_form_data([("x", f64::NAN)]));

        assert_eq!(store.revision(), 1);
        assert_eq!(store.get("x"), Some(&FieldValue::Json(Value::Null)));
        assert_eq!(store.form_data(), &store.form_data().clone());
    }
}
