//! Error types.

use thiserror::Error;

/// Why a widget could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The widget root holds no native select control.
    #[error("root '{root}' has no select element")]
    MissingSelect { root: String },

    /// The native control has no options to choose from.
    #[error("widget '{root}' has no options")]
    NoOptions { root: String },

    /// Two options share a value, so lookups by value would be ambiguous.
    #[error("widget '{root}' has option value '{value}' more than once")]
    DuplicateValue { root: String, value: String },

    /// The initial value is not one of the option values.
    #[error("widget '{root}' starts at '{value}', which is not an option")]
    UnknownValue { root: String, value: String },

    /// The root element is not part of the document.
    #[error("root '{root}' is not in the document")]
    MissingRoot { root: String },
}

/// Settings could not be read.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid select settings: {0}")]
    Parse(#[from] serde_json::Error),
}
