use crate::prelude::*;

///
/// Validator
///
/// `validator(field = "count", check = "count_in_range")`
///

#[derive(Clone, Debug, FromMeta)]
pub struct Validator {
    pub field: Ident,
    pub check: Predicate,
}
