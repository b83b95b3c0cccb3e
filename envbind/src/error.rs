//! Error types for binding environment variables to struct fields

use crate::value::FieldKind;

/// Errors produced while parsing a single `#[env("...")]` annotation.
///
/// A `TagError` knows nothing about the field it was read from; the binder
/// wraps it into [`BindError::InvalidTag`] together with the field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// The name segment is empty (or only whitespace) while the tag is not.
    #[error("tag has an empty name segment")]
    EmptyName,

    /// The mode segment is something other than `mandatory` or `optional`.
    #[error("tag mode '{mode}' must be either 'mandatory' or 'optional'")]
    InvalidMode {
        /// The offending segment, as written
        mode: String,
    },
}

/// Errors that abort a [`Binder::map`](crate::Binder::map) call.
///
/// The first failing field wins; errors are not aggregated. Every variant
/// names the struct field it was raised for.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The field's annotation does not follow `<name>;<mandatory|optional>;<default>`.
    #[error("invalid tag {tag:?} on field '{field}': {source}")]
    InvalidTag {
        /// Struct field carrying the annotation
        field: String,
        /// The raw annotation
        tag: String,
        /// What was wrong with it
        source: TagError,
    },

    /// A mandatory field has neither an environment value nor a default.
    #[error("mandatory value missing in environment for field '{field}' (expected '{key}')")]
    MandatoryValueMissing {
        /// Struct field that could not be populated
        field: String,
        /// Environment variable that was looked up
        key: String,
    },

    /// The resolved value could not be converted to the field's type.
    #[error("invalid value {value:?} for {kind} field '{field}' (from '{key}'): {message}")]
    InvalidValue {
        /// Struct field that rejected the value
        field: String,
        /// Environment variable the value was resolved for
        key: String,
        /// Kind of the field
        kind: FieldKind,
        /// The resolved text
        value: String,
        /// Error message from the parser
        message: String,
    },
}

impl BindError {
    /// Name of the struct field this error was raised for.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidTag { field, .. }
            | Self::MandatoryValueMissing { field, .. }
            | Self::InvalidValue { field, .. } => field,
        }
    }
}
