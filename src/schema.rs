//! Form schema types
//!
//! Declarative description of the inputs a form renders. These are
//! configuration literals: nothing here checks a value against `regex` or
//! `required`, that is left to whoever consumes the schema.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::SchemaError;

// ============================================================================
// Field Type
// ============================================================================

/// Kind of input a field renders as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Input,
    Select,
    Checkbox,
    Textarea,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Input => "input",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Textarea => "textarea",
        }
    }

    /// Whether `options` carry meaning for this type
    pub fn is_select_like(&self) -> bool {
        matches!(self, FieldType::Select)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Attributes & Options
// ============================================================================

/// Rendering hints for a field
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAttrs {
    /// Help text shown under the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Native input subtype ("email", "number", ...)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Visible rows of a textarea
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    /// Any other hint, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FieldAttrs {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn hint(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// One choice of a select field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// Pattern
// ============================================================================

/// Compiled validation pattern, serialized as its source text
#[derive(Clone, Debug)]
pub struct FieldPattern(Regex);

impl FieldPattern {
    pub fn new(pattern: &str) -> Result<Self, SchemaError> {
        Ok(Self(Regex::new(pattern)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }
}

impl PartialEq for FieldPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl FromStr for FieldPattern {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for FieldPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::new(&source).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Form Field
// ============================================================================

/// Descriptor of one form input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Key of this field's value in the form data
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<FieldAttrs>,
    /// Only meaningful for select fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<FieldPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            attrs: None,
            options: None,
            regex: None,
            error_message: None,
            required: None,
        }
    }

    pub fn input(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Input)
    }

    pub fn select(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Select)
    }

    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Checkbox)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Textarea)
    }

    pub fn with_attrs(mut self, attrs: FieldAttrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = SelectOption>,
    {
        self.options = Some(options.into_iter().collect());
        self
    }

    /// Attach a pattern. Fails if the pattern does not compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, SchemaError> {
        self.regex = Some(FieldPattern::new(pattern)?);
        Ok(self)
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    pub fn description(&self) -> Option<&str> {
        self.attrs.as_ref().and_then(|a| a.description.as_deref())
    }

    /// Native input subtype, defaulting to "text"
    pub fn input_type(&self) -> &str {
        self.attrs
            .as_ref()
            .and_then(|a| a.input_type.as_deref())
            .unwrap_or("text")
    }

    pub fn rows(&self) -> Option<u32> {
        self.attrs.as_ref().and_then(|a| a.rows)
    }

    /// Options a renderer should offer: none unless the field is select-like
    pub fn effective_options(&self) -> &[SelectOption] {
        match (&self.options, self.field_type.is_select_like()) {
            (Some(options), true) => options.as_slice(),
            _ => &[],
        }
    }

    /// Consistency lint. Never run implicitly; consumers decide how to
    /// react to the returned problems.
    pub fn check(&self) -> Result<(), Vec<SchemaError>> {
        let mut errors = Vec::new();
        self.collect_problems(0, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn collect_problems(&self, index: usize, errors: &mut Vec<SchemaError>) {
        if self.name.trim().is_empty() {
            errors.push(SchemaError::EmptyName { index });
        }

        let options = self.options.as_deref().unwrap_or_default();
        if self.field_type.is_select_like() {
            if options.is_empty() {
                errors.push(SchemaError::SelectWithoutOptions(self.name.clone()));
            }
        } else if !options.is_empty() {
            errors.push(SchemaError::OptionsOnNonSelect {
                name: self.name.clone(),
                field_type: self.field_type.to_string(),
                count: options.len(),
            });
        }

        let mut seen = HashSet::new();
        for option in options {
            if !seen.insert(option.value.as_str()) {
                errors.push(SchemaError::DuplicateOption {
                    field: self.name.clone(),
                    value: option.value.clone(),
                });
            }
        }
    }
}

// ============================================================================
// Form Schema
// ============================================================================

/// Ordered fields of one form
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check every field plus name uniqueness across the schema
    pub fn check(&self) -> Result<(), Vec<SchemaError>> {
        let mut errors = Vec::new();
        let mut seen_names = HashMap::new();

        for (idx, field) in self.fields.iter().enumerate() {
            field.collect_problems(idx, &mut errors);

            if field.name.trim().is_empty() {
                continue;
            }
            if let Some(prev_idx) = seen_names.insert(field.name.as_str(), idx) {
                errors.push(SchemaError::DuplicateField {
                    name: field.name.clone(),
                    first: prev_idx,
                    second: idx,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Run [`check`](Self::check) and log each problem as a warning.
    ///
    /// Returns the number of problems found.
    pub fn lint(&self) -> usize {
        match self.check() {
            Ok(()) => 0,
            Err(problems) => {
                for problem in &problems {
                    warn!(form = %self.title, "{}", problem);
                }
                problems.len()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
