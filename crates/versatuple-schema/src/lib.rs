//! Declarative record configuration and the build algorithm shared by the
//! runtime factory (`versatuple-core`) and the `#[record]` attribute macro
//! (`versatuple-derive`).
//!
//! Both consumers describe a record type as a [`RecordConfig`] and call
//! [`RecordConfig::resolve`], so naming, reserved-word and collision rules are
//! enforced by exactly one implementation.

pub mod config;
pub mod error;
pub mod naming;
pub mod plan;
pub mod registry;
pub mod reserved;

/// Maximum length for record type and field identifiers.
pub const MAX_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::RecordConfig,
        error::ConfigError,
        naming::setter_name,
        plan::{Absent, FieldPlan, PresetPlan, RecordPlan, ShortcutPlan},
        registry::{OperationKind, OperationRegistry},
        reserved::Builtin,
    };
}

pub use config::RecordConfig;
pub use error::ConfigError;
