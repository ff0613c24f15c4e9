mod builder;


use crate::{error::RecordError, record::Record, validator::Validator, value::Value};
use std::sync::Arc;
use tracing::debug;
use versatuple_schema::{
    ConfigError, RecordConfig,
    plan::{PresetPlan, RecordPlan, ShortcutPlan},
    registry::{OperationKind, OperationRegistry},
};

pub use builder::RecordTypeBuilder;

/// Build a runtime record type from its declarative description.
///
/// Fails on the first configuration error; nothing is returned for a
/// rejected config.
pub fn build(config: RecordConfig<Value, Validator>) -> Result<Arc<RecordType>, ConfigError> {
    let name = config.name.clone();

    match config.resolve() {
        Ok(plan) => {
            let record_type = RecordType::from_plan(plan);
            debug!(
                record = %record_type.name,
                fields = record_type.fields.len(),
                operations = record_type.registry.len(),
                "record type built"
            );

            Ok(Arc::new(record_type))
        }
        Err(err) => {
            debug!(record = %name, error = %err, "record type rejected");

            Err(err)
        }
    }
}

///
/// Field
///

#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    pub index: usize,
    pub default: Value,
    pub setter: String,
}

///
/// RecordType
///
/// Immutable record definition. Shared as `Arc<RecordType>`; every record
/// carries a handle to the type that built it.
///

#[derive(Debug)]
pub struct RecordType {
    name: String,
    fields: Vec<Field>,

    // positional validator table, one slot per field
    field_validators: Vec<Option<Validator>>,
    validators: Vec<(String, Validator)>,

    presets: Vec<PresetPlan<Value>>,
    shortcuts: Vec<ShortcutPlan<Value>>,
    registry: OperationRegistry,
}

impl RecordType {
    /// Start a fluent description of a record type.
    pub fn builder<I, S>(name: impl Into<String>, fields: I) -> RecordTypeBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RecordTypeBuilder::new(name, fields)
    }

    fn from_plan(plan: RecordPlan<Value, Validator>) -> Self {
        let RecordPlan {
            name,
            fields,
            presets,
            shortcuts,
            validators,
            registry,
        } = plan;

        for (field, _) in &validators {
            if !fields.iter().any(|f| f.name == *field) {
                debug!(record = %name, field = %field, "validator bound to no field");
            }
        }

        let mut field_validators = Vec::with_capacity(fields.len());
        let fields = fields
            .into_iter()
            .map(|f| {
                field_validators.push(f.validator);

                Field {
                    name: f.name,
                    index: f.index,
                    default: f.default,
                    setter: f.setter,
                }
            })
            .collect();

        Self {
            name,
            fields,
            field_validators,
            validators,
            presets,
            shortcuts,
            registry,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    #[must_use]
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == field)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolved default row in field order.
    pub fn defaults(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|f| &f.default)
    }

    /// The validator table exactly as configured, including entries that
    /// name no field.
    #[must_use]
    pub fn validators(&self) -> &[(String, Validator)] {
        &self.validators
    }

    #[must_use]
    pub fn operation(&self, name: &str) -> Option<OperationKind> {
        self.registry.get(name)
    }

    /// Every attached operation name, built-ins first, in attachment order.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    /// Construct a record from positional values.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(
        self: &Arc<Self>,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Record, RecordError> {
        let values: Vec<Value> = values.into_iter().collect();
        if values.len() != self.fields.len() {
            return Err(RecordError::ArityMismatch {
                record: self.name.clone(),
                expected: self.fields.len(),
                found: values.len(),
            });
        }

        Ok(Record::from_parts(Arc::clone(self), values))
    }

    /// Construct a record from `(field, value)` pairs; every field must be
    /// supplied exactly once.
    pub fn from_named<I, S>(self: &Arc<Self>, pairs: I) -> Result<Record, RecordError>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let mut slots: Vec<Option<Value>> = vec![None; self.fields.len()];

        for (field, value) in pairs {
            let field = field.as_ref();
            let index = self.require_field(field)?;
            if slots[index].replace(value).is_some() {
                return Err(RecordError::DuplicateArgument {
                    field: field.to_string(),
                });
            }
        }

        let values = slots
            .into_iter()
            .zip(&self.fields)
            .map(|(slot, field)| {
                slot.ok_or_else(|| RecordError::MissingField {
                    record: self.name.clone(),
                    field: field.name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Record::from_parts(Arc::clone(self), values))
    }

    /// The default instance: every field at its resolved default.
    #[must_use]
    pub fn default_instance(self: &Arc<Self>) -> Record {
        Record::from_parts(Arc::clone(self), self.defaults().cloned().collect())
    }

    /// Construct a record from the named factory preset.
    pub fn preset(self: &Arc<Self>, name: &str) -> Result<Record, RecordError> {
        match self.resolve_operation(name)? {
            OperationKind::Preset { index } => Ok(Record::from_parts(
                Arc::clone(self),
                self.presets[index].values.clone(),
            )),
            kind => Err(wrong_kind(name, kind, "factory preset")),
        }
    }

    /// Fields the named factory preset sets explicitly, in field order. Every
    /// other field keeps its default.
    #[must_use]
    pub fn preset_fields(&self, name: &str) -> Option<Vec<&str>> {
        let preset = self.presets.iter().find(|p| p.name == name)?;

        Some(
            preset
                .overrides
                .iter()
                .filter_map(|&index| self.fields.get(index))
                .map(|field| field.name.as_str())
                .collect(),
        )
    }

    // internal lookups shared with Record

    pub(crate) fn require_field(&self, field: &str) -> Result<usize, RecordError> {
        self.field_index(field)
            .ok_or_else(|| RecordError::UnknownField {
                record: self.name.clone(),
                field: field.to_string(),
            })
    }

    pub(crate) fn resolve_operation(&self, name: &str) -> Result<OperationKind, RecordError> {
        self.registry
            .get(name)
            .ok_or_else(|| RecordError::UnknownOperation {
                record: self.name.clone(),
                operation: name.to_string(),
            })
    }

    pub(crate) fn shortcut_plan(&self, index: usize) -> &ShortcutPlan<Value> {
        &self.shortcuts[index]
    }

    pub(crate) fn field_validator(&self, index: usize) -> Option<&Validator> {
        self.field_validators[index].as_ref()
    }
}

pub(crate) fn wrong_kind(name: &str, kind: OperationKind, expected: &'static str) -> RecordError {
    RecordError::OperationKind {
        operation: name.to_string(),
        kind: kind.to_string(),
        expected,
    }
}
