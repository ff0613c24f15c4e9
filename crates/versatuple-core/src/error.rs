use thiserror::Error as ThisError;
use versatuple_schema::ConfigError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    RecordError(#[from] RecordError),
}

///
/// RecordError
///
/// Misuse of a built record type at a call site: wrong arity, names that the
/// type does not define, or an operation invoked as the wrong kind.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RecordError {
    #[error("record '{record}' expects {expected} values, got {found}")]
    ArityMismatch {
        record: String,
        expected: usize,
        found: usize,
    },

    #[error("field '{field}' supplied more than once")]
    DuplicateArgument { field: String },

    #[error("record '{record}' is missing a value for field '{field}'")]
    MissingField { record: String, field: String },

    #[error("operation '{operation}' takes {expected} arguments, got {found}")]
    OperationArity {
        operation: String,
        expected: usize,
        found: usize,
    },

    #[error("operation '{operation}' is a {kind}, not a {expected}")]
    OperationKind {
        operation: String,
        kind: String,
        expected: &'static str,
    },

    #[error("record '{record}' has no field '{field}'")]
    UnknownField { record: String, field: String },

    #[error("record '{record}' has no operation '{operation}'")]
    UnknownOperation { record: String, operation: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordType, Value};

    fn build_and_construct(fields: &[&str], row: usize) -> Result<usize, Error> {
        let ty = RecordType::builder("VTuple", fields.iter().copied()).build()?;
        let record = ty.new(vec![Value::from(1); row])?;

        Ok(record.values().len())
    }

    #[test]
    fn config_and_call_errors_convert_into_error() {
        assert_eq!(build_and_construct(&["id", "count"], 2).unwrap(), 2);

        let err = build_and_construct(&["id", "id"], 2).unwrap_err();
        assert!(matches!(
            err,
            Error::ConfigError(ConfigError::DuplicateField { ref field }) if field == "id"
        ));

        let err = build_and_construct(&["id", "count"], 3).unwrap_err();
        assert!(matches!(
            err,
            Error::RecordError(RecordError::ArityMismatch { expected: 2, found: 3, .. })
        ));
        assert_eq!(err.to_string(), "record 'VTuple' expects 2 values, got 3");
    }
}
