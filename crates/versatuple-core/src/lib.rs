//! Runtime record factory.
//!
//! A [`RecordType`] is built once from a declarative description and shared
//! as `Arc<RecordType>`; [`Record`]s are immutable instances of it. The
//! [`RecordKind`](traits::RecordKind) trait is the common surface of records
//! generated at compile time by `#[record]`.

pub mod error;
pub mod record;
pub mod record_type;
pub mod traits;
pub mod validator;
pub mod value;

pub use error::{Error, RecordError};
pub use record::Record;
pub use record_type::{Field, RecordType, RecordTypeBuilder, build};
pub use validator::Validator;
pub use value::Value;

/// Build a `Vec<Value>` from heterogeneous literals.
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ( $( $value:expr ),+ $(,)? ) => {
        ::std::vec![ $( $crate::value::Value::from($value) ),+ ]
    };
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        record::Record,
        record_type::{RecordType, RecordTypeBuilder},
        traits::RecordKind as _,
        validator::Validator,
        value::Value,
        values,
    };
}
