
use crate::{
    error::RecordError,
    record_type::{RecordType, wrong_kind},
    value::Value,
};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};
use versatuple_schema::{registry::OperationKind, reserved::Builtin};

///
/// Record
///
/// Immutable instance of a runtime record type: one value per field, in field
/// order. Every update returns a new record and leaves the receiver untouched.
///

#[derive(Clone)]
pub struct Record {
    record_type: Arc<RecordType>,
    values: Vec<Value>,
}

impl Record {
    // callers guarantee values.len() == record_type.len()
    pub(crate) const fn from_parts(record_type: Arc<RecordType>, values: Vec<Value>) -> Self {
        Self {
            record_type,
            values,
        }
    }

    #[must_use]
    pub const fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record_type
            .field_index(field)
            .map(|index| &self.values[index])
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// `(field, value)` pairs in field order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.record_type.field_names().zip(&self.values)
    }

    /// Call a generated setter such as `with_count`.
    pub fn update(&self, setter: &str, value: impl Into<Value>) -> Result<Self, RecordError> {
        match self.record_type.resolve_operation(setter)? {
            OperationKind::Setter { field } => Ok(self.with_value(field, value.into())),
            kind => Err(wrong_kind(setter, kind, "setter")),
        }
    }

    /// Copy of this record with `field` replaced.
    pub fn set(&self, field: &str, value: impl Into<Value>) -> Result<Self, RecordError> {
        let index = self.record_type.require_field(field)?;

        Ok(self.with_value(index, value.into()))
    }

    /// Copy of this record with several fields replaced at once.
    pub fn replace<I, S>(&self, pairs: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let mut values = self.values.clone();
        for (field, value) in pairs {
            let index = self.record_type.require_field(field.as_ref())?;
            values[index] = value;
        }

        Ok(Self::from_parts(Arc::clone(&self.record_type), values))
    }

    /// Call a shortcut by name.
    pub fn shortcut(&self, name: &str) -> Result<Self, RecordError> {
        match self.record_type.resolve_operation(name)? {
            OperationKind::Shortcut { index, .. } => {
                let plan = self.record_type.shortcut_plan(index);

                Ok(self.with_value(plan.field, plan.value.clone()))
            }
            kind => Err(wrong_kind(name, kind, "shortcut")),
        }
    }

    /// Dispatch any record-producing operation by its registered name.
    ///
    /// Setters take one argument, the positional constructor one per field,
    /// everything else none.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Self, RecordError> {
        let kind = self.record_type.resolve_operation(name)?;
        let expect_args = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(RecordError::OperationArity {
                    operation: name.to_string(),
                    expected,
                    found: args.len(),
                })
            }
        };

        match kind {
            OperationKind::Setter { field } => {
                expect_args(1)?;
                Ok(self.with_value(field, args[0].clone()))
            }
            OperationKind::Shortcut { .. } => {
                expect_args(0)?;
                self.shortcut(name)
            }
            OperationKind::Preset { .. } => {
                expect_args(0)?;
                self.record_type.preset(name)
            }
            OperationKind::Builtin(Builtin::DefaultConstructor) => {
                expect_args(0)?;
                Ok(self.record_type.default_instance())
            }
            OperationKind::Builtin(Builtin::Constructor) => {
                expect_args(self.record_type.len())?;
                self.record_type.new(args.iter().cloned())
            }
            kind => Err(wrong_kind(name, kind, "record-producing operation")),
        }
    }

    /// Run every validator bound to a field of this record. Vacuously true
    /// when none apply.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.values.iter().enumerate().all(|(index, value)| {
            self.record_type
                .field_validator(index)
                .is_none_or(|validator| validator.check(value))
        })
    }

    fn with_value(&self, index: usize, value: Value) -> Self {
        let mut values = self.values.clone();
        values[index] = value;

        Self::from_parts(Arc::clone(&self.record_type), values)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.record_type, &other.record_type) && self.values == other.values
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    /// Lexicographic over field values; records of different types are
    /// unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Arc::ptr_eq(&self.record_type, &other.record_type).then(|| self.values.cmp(&other.values))
    }
}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.record_type.name());
        for (name, value) in self.pairs() {
            s.field(name, value);
        }

        s.finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.record_type.name())?;
        for (i, (name, value)) in self.pairs().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }

        write!(f, ")")
    }
}
