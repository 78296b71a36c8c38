//! Schema error types

use thiserror::Error;

/// Problems found in a form schema declaration
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Field declared without a name
    #[error("Field at index {index} has an empty name")]
    EmptyName { index: usize },

    /// Two fields in one schema share a name
    #[error("Duplicate field name '{name}' at indices {first} and {second}")]
    DuplicateField {
        name: String,
        first: usize,
        second: usize,
    },

    /// Options declared on a field that does not render a selection
    #[error("Field '{name}' of type '{field_type}' declares {count} option(s) but only select fields use options")]
    OptionsOnNonSelect {
        name: String,
        field_type: String,
        count: usize,
    },

    /// Select field without anything to choose from
    #[error("Select field '{0}' has no options")]
    SelectWithoutOptions(String),

    /// Two options of one select share a value
    #[error("Select field '{field}' repeats option value '{value}'")]
    DuplicateOption { field: String, value: String },

    /// Pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
