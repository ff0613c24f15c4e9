//! ## Crate layout
//! - `core`: runtime record types, instances, values and validators.
//! - `schema`: record configuration, naming rules and the build algorithm.
//! - `record`: the attribute macro generating record types at compile time.
//!
//! Both factories share one build algorithm, so a record rejected at compile
//! time is rejected at runtime with the same [`ConfigError`].

pub use versatuple_core as core;
pub use versatuple_schema as schema;

// generated code refers to ::versatuple
extern crate self as versatuple;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use versatuple_core::values;
pub use versatuple_derive::record;

pub use versatuple_core::{
    Error, Record, RecordError, RecordType, RecordTypeBuilder, Validator, Value, build, traits,
    traits::RecordKind,
};
pub use versatuple_schema::ConfigError;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        core::{
            record::Record,
            record_type::{RecordType, RecordTypeBuilder},
            traits::RecordKind as _,
            validator::{self, Validator},
            value::Value,
        },
        record, values,
    };
}
