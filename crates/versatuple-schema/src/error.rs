use crate::registry::OperationKind;
use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Construction-time failure of a record type. Every variant aborts the build;
/// no partially built record type is ever returned.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("record '{record}' has {expected} fields but {found} defaults were supplied")]
    DefaultsLengthMismatch {
        record: String,
        expected: usize,
        found: usize,
    },

    #[error("field '{field}' is declared more than once")]
    DuplicateField { field: String },

    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    #[error("'{owner}' references unknown field '{field}'")]
    InvalidPresetField { owner: String, field: String },

    #[error("operation '{name}' collides with an existing {existing}")]
    OperationNameCollision {
        name: String,
        existing: OperationKind,
    },

    #[error("field name '{field}' is reserved for a built-in operation")]
    ReservedName { field: String },
}

impl ConfigError {
    /// The user-supplied identifier the error is about.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::DefaultsLengthMismatch { record, .. } => record,
            Self::DuplicateField { field }
            | Self::InvalidPresetField { field, .. }
            | Self::ReservedName { field } => field,
            Self::InvalidIdentifier { name, .. } | Self::OperationNameCollision { name, .. } => {
                name
            }
        }
    }
}
