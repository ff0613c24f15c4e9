use crate::prelude::*;

///
/// Shortcut
///
/// `shortcut(field = "color", name = "yellow", value = "yellow")`
///

#[derive(Clone, Debug, FromMeta)]
pub struct Shortcut {
    pub field: Ident,
    pub name: Ident,
    pub value: Arg,
}
