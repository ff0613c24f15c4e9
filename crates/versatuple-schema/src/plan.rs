use crate::{
    config::RecordConfig,
    error::ConfigError,
    naming::{setter_name, validate_ident},
    registry::{OperationKind, OperationRegistry},
    reserved::is_builtin,
};
use std::collections::HashSet;

///
/// Absent
///
/// The value a field takes when no default was configured.
///

pub trait Absent {
    fn absent() -> Self;
}

///
/// FieldPlan
///

#[derive(Clone, Debug)]
pub struct FieldPlan<V, P> {
    pub name: String,
    pub index: usize,
    pub default: V,
    pub setter: String,
    pub validator: Option<P>,
}

///
/// PresetPlan
///
/// A factory preset with its complete value row, defaults already merged in.
///

#[derive(Clone, Debug)]
pub struct PresetPlan<V> {
    pub name: String,
    pub values: Vec<V>,

    /// Field positions the preset sets explicitly, in field order.
    pub overrides: Vec<usize>,
}

///
/// ShortcutPlan
///

#[derive(Clone, Debug)]
pub struct ShortcutPlan<V> {
    pub name: String,
    pub field: usize,
    pub value: V,
}

///
/// RecordPlan
///
/// Fully resolved record type: every name checked, every field reference bound
/// to a position.
///

#[derive(Clone, Debug)]
pub struct RecordPlan<V, P> {
    pub name: String,
    pub fields: Vec<FieldPlan<V, P>>,
    pub presets: Vec<PresetPlan<V>>,
    pub shortcuts: Vec<ShortcutPlan<V>>,

    /// Validator table exactly as configured.
    pub validators: Vec<(String, P)>,
    pub registry: OperationRegistry,
}

impl<V, P> RecordPlan<V, P> {
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Default value row in field order.
    pub fn defaults(&self) -> impl Iterator<Item = &V> {
        self.fields.iter().map(|f| &f.default)
    }
}

impl<V, P> RecordConfig<V, P>
where
    V: Absent + Clone,
    P: Clone,
{
    /// Run the build algorithm, returning the resolved plan or the first
    /// configuration error encountered.
    pub fn resolve(self) -> Result<RecordPlan<V, P>, ConfigError> {
        let Self {
            name,
            fields,
            validators,
            shortcuts,
            presets,
            defaults,
        } = self;

        // names
        check_ident(&name)?;
        validate_fields(&fields)?;

        // defaults
        let defaults = match defaults {
            Some(defaults) if defaults.len() != fields.len() => {
                return Err(ConfigError::DefaultsLengthMismatch {
                    record: name,
                    expected: fields.len(),
                    found: defaults.len(),
                });
            }
            Some(defaults) => defaults,
            None => fields.iter().map(|_| V::absent()).collect(),
        };

        // built-ins and accessors
        let mut registry = OperationRegistry::with_builtins();
        for (index, field) in fields.iter().enumerate() {
            registry.attach(field, OperationKind::Getter { field: index })?;
        }

        let position = |owner: &str, field: &str| {
            fields
                .iter()
                .position(|f| f == field)
                .ok_or_else(|| ConfigError::InvalidPresetField {
                    owner: owner.to_string(),
                    field: field.to_string(),
                })
        };

        // factory presets
        let mut preset_plans = Vec::with_capacity(presets.len());
        for (index, (preset, values)) in presets.into_iter().enumerate() {
            check_ident(&preset)?;
            registry.attach(&preset, OperationKind::Preset { index })?;

            let mut row = defaults.clone();
            let mut overrides = Vec::with_capacity(values.len());
            for (field, value) in values {
                let pos = position(&preset, &field)?;
                row[pos] = value;
                if !overrides.contains(&pos) {
                    overrides.push(pos);
                }
            }
            overrides.sort_unstable();

            preset_plans.push(PresetPlan {
                name: preset,
                values: row,
                overrides,
            });
        }

        // setters
        let mut field_plans = Vec::with_capacity(fields.len());
        for (index, (field, default)) in fields.into_iter().zip(defaults).enumerate() {
            let setter = setter_name(&field);
            registry.attach(&setter, OperationKind::Setter { field: index })?;

            field_plans.push(FieldPlan {
                name: field,
                index,
                default,
                setter,
                validator: None,
            });
        }

        // validators
        for (field, predicate) in &validators {
            if let Some(plan) = field_plans.iter_mut().find(|f| f.name == *field) {
                plan.validator = Some(predicate.clone());
            }
        }

        // shortcuts
        let mut shortcut_plans = Vec::new();
        for (field, list) in shortcuts {
            for (shortcut, value) in list {
                check_ident(&shortcut)?;
                let pos = field_plans
                    .iter()
                    .position(|f| f.name == field)
                    .ok_or_else(|| ConfigError::InvalidPresetField {
                        owner: shortcut.clone(),
                        field: field.clone(),
                    })?;
                let index = shortcut_plans.len();
                registry.attach(&shortcut, OperationKind::Shortcut { field: pos, index })?;

                shortcut_plans.push(ShortcutPlan {
                    name: shortcut,
                    field: pos,
                    value,
                });
            }
        }

        Ok(RecordPlan {
            name,
            fields: field_plans,
            presets: preset_plans,
            shortcuts: shortcut_plans,
            validators,
            registry,
        })
    }
}

fn check_ident(name: &str) -> Result<(), ConfigError> {
    validate_ident(name).map_err(|reason| ConfigError::InvalidIdentifier {
        name: name.to_string(),
        reason,
    })
}

// Identifier rules, reserved names and uniqueness, checked before anything
// is attached.
fn validate_fields(fields: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for field in fields {
        check_ident(field)?;

        if is_builtin(field) {
            return Err(ConfigError::ReservedName {
                field: field.clone(),
            });
        }

        if !seen.insert(field.as_str()) {
            return Err(ConfigError::DuplicateField {
                field: field.clone(),
            });
        }
    }

    Ok(())
}
