use crate::{
    record_type::{RecordType, build},
    validator::Validator,
    value::Value,
};
use std::sync::Arc;
use versatuple_schema::{ConfigError, RecordConfig};

///
/// RecordTypeBuilder
///
/// Fluent front end over `RecordConfig<Value, Validator>`.
///

#[derive(Clone, Debug)]
pub struct RecordTypeBuilder {
    config: RecordConfig<Value, Validator>,
}

impl RecordTypeBuilder {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config: RecordConfig::new(name, fields),
        }
    }

    #[must_use]
    pub fn validator(mut self, field: impl Into<String>, validator: impl Into<Validator>) -> Self {
        self.config = self.config.validator(field, validator.into());
        self
    }

    #[must_use]
    pub fn shortcut(
        mut self,
        field: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.config = self.config.shortcut(field, name, value.into());
        self
    }

    #[must_use]
    pub fn preset<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        self.config = self.config.preset(name, values);
        self
    }

    #[must_use]
    pub fn defaults(mut self, defaults: impl IntoIterator<Item = Value>) -> Self {
        self.config = self.config.defaults(defaults);
        self
    }

    #[must_use]
    pub fn into_config(self) -> RecordConfig<Value, Validator> {
        self.config
    }

    pub fn build(self) -> Result<Arc<RecordType>, ConfigError> {
        build(self.config)
    }
}
