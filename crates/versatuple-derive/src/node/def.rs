use crate::prelude::*;
use syn::{Attribute, Fields, ItemStruct, Visibility};

///
/// Def
///
/// The item the attribute sits on: its name, visibility and remaining
/// attributes (doc comments included).
///

#[derive(Clone, Debug)]
pub struct Def {
    pub ident: Ident,
    pub vis: Visibility,
    pub attrs: Vec<Attribute>,
}

impl Def {
    pub fn from_item(item: &ItemStruct) -> Result<Self, syn::Error> {
        if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
            return Err(syn::Error::new_spanned(
                &item.generics,
                "#[record] types cannot be generic",
            ));
        }

        if !matches!(item.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &item.fields,
                "#[record] expects a unit struct; declare fields with `fields(field(..))`",
            ));
        }

        Ok(Self {
            ident: item.ident.clone(),
            vis: item.vis.clone(),
            attrs: item.attrs.clone(),
        })
    }

    pub const fn ident(&self) -> &Ident {
        &self.ident
    }
}
