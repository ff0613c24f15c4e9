///
/// RecordConfig
///
/// Declarative description of a record type.
///
/// `V` is the value representation (runtime values, or expression tokens in
/// the attribute macro) and `P` the predicate representation. The description
/// is inert until [`RecordConfig::resolve`](crate::RecordConfig::resolve) turns
/// it into a [`RecordPlan`](crate::plan::RecordPlan).
///

#[derive(Clone, Debug)]
pub struct RecordConfig<V, P> {
    pub name: String,
    pub fields: Vec<String>,

    /// Field name to predicate. Entries naming unknown fields never apply.
    pub validators: Vec<(String, P)>,

    /// Field name to `(operation name, fixed value)` pairs.
    pub shortcuts: Vec<(String, Vec<(String, V)>)>,

    /// Preset name to a partial field mapping.
    pub presets: Vec<(String, Vec<(String, V)>)>,

    /// One value per field, in field order.
    pub defaults: Option<Vec<V>>,
}

impl<V, P> RecordConfig<V, P> {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            validators: Vec::new(),
            shortcuts: Vec::new(),
            presets: Vec::new(),
            defaults: None,
        }
    }

    /// Set the predicate for `field`, replacing any earlier one.
    #[must_use]
    pub fn validator(mut self, field: impl Into<String>, predicate: P) -> Self {
        let field = field.into();
        self.validators.retain(|(name, _)| *name != field);
        self.validators.push((field, predicate));

        self
    }

    /// Append a shortcut `name` that pins `field` to `value`.
    #[must_use]
    pub fn shortcut(mut self, field: impl Into<String>, name: impl Into<String>, value: V) -> Self {
        let field = field.into();
        let entry = (name.into(), value);

        match self.shortcuts.iter_mut().find(|(f, _)| *f == field) {
            Some((_, list)) => list.push(entry),
            None => self.shortcuts.push((field, vec![entry])),
        }

        self
    }

    /// Add a factory preset overriding the listed fields.
    ///
    /// Presets are kept in declaration order; declaring the same name twice is
    /// reported as a collision when the config is resolved.
    #[must_use]
    pub fn preset<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(field, value)| (field.into(), value))
            .collect();
        self.presets.push((name.into(), values));

        self
    }

    #[must_use]
    pub fn defaults(mut self, defaults: impl IntoIterator<Item = V>) -> Self {
        self.defaults = Some(defaults.into_iter().collect());

        self
    }

    #[must_use]
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Config = RecordConfig<i32, &'static str>;

    #[test]
    fn validator_replaces_earlier_entry() {
        let config = Config::new("Point", ["x", "y"])
            .validator("x", "first")
            .validator("y", "other")
            .validator("x", "second");

        assert_eq!(
            config.validators,
            vec![("y".to_string(), "other"), ("x".to_string(), "second")]
        );
    }

    #[test]
    fn shortcuts_group_by_field() {
        let config = Config::new("Point", ["x", "y"])
            .shortcut("x", "origin_x", 0)
            .shortcut("y", "origin_y", 0)
            .shortcut("x", "unit_x", 1);

        assert_eq!(config.shortcuts.len(), 2);
        assert_eq!(
            config.shortcuts[0].1,
            vec![("origin_x".to_string(), 0), ("unit_x".to_string(), 1)]
        );
    }

    #[test]
    fn presets_keep_declaration_order() {
        let config = Config::new("Point", ["x", "y"])
            .preset("b", [("x", 1)])
            .preset("a", [("y", 2)]);

        let names: Vec<_> = config.presets.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
