use crate::prelude::*;
use derive_more::Deref;

///
/// FieldList
///

#[derive(Clone, Debug, Default, Deref, FromMeta)]
pub struct FieldList {
    #[darling(multiple, rename = "field")]
    pub fields: Vec<Field>,
}

impl FieldList {
    /// Declared identifier named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == name)
    }
}

///
/// Field
///

#[derive(Clone, Debug, FromMeta)]
pub struct Field {
    pub ident: Ident,
    pub ty: Type,
}
