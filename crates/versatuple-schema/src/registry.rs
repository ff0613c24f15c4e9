use crate::{error::ConfigError, reserved::Builtin};
use std::{collections::HashMap, fmt};

///
/// OperationKind
///
/// What an attached operation name resolves to. Field and table positions are
/// fixed when the record type is built, so dispatch never looks names up
/// against field strings again.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Builtin(Builtin),
    Getter { field: usize },
    Preset { index: usize },
    Setter { field: usize },
    Shortcut { field: usize, index: usize },
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(builtin) => write!(f, "built-in operation '{builtin}'"),
            Self::Getter { field } => write!(f, "accessor of field #{field}"),
            Self::Preset { .. } => write!(f, "factory preset"),
            Self::Setter { field } => write!(f, "setter of field #{field}"),
            Self::Shortcut { field, .. } => write!(f, "shortcut on field #{field}"),
        }
    }
}

///
/// OperationRegistry
///
/// Names attached to a record type, in attachment order. Every attachment
/// checks the names already present, so a collision is reported at the exact
/// step that introduces it.
///

#[derive(Clone, Debug, Default)]
pub struct OperationRegistry {
    entries: Vec<(String, OperationKind)>,
    index: HashMap<String, usize>,
}

impl OperationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in operation.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for builtin in Builtin::ALL {
            registry.push(builtin.name().to_string(), OperationKind::Builtin(builtin));
        }

        registry
    }

    /// Attach `name`, failing if any operation already uses it.
    pub fn attach(&mut self, name: &str, kind: OperationKind) -> Result<(), ConfigError> {
        if let Some(existing) = self.get(name) {
            return Err(ConfigError::OperationNameCollision {
                name: name.to_string(),
                existing,
            });
        }

        self.push(name.to_string(), kind);

        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<OperationKind> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attached operations in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, OperationKind)> {
        self.entries.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Attached operation names in attachment order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    fn push(&mut self, name: String, kind: OperationKind) {
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, kind));
    }
}
