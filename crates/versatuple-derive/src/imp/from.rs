use crate::prelude::*;

///
/// FromTrait
///
/// Conversions to and from the positional tuple of field values.
///

pub struct FromTrait {}

impl Imp<RecordGen> for FromTrait {
    fn strategy(node: &RecordGen) -> Option<TraitStrategy> {
        let ident = node.def().ident();
        let tuple = node.tuple_type();
        let fields = node.field_idents();
        let indexes = tuple_indexes(fields.len());

        let tokens = quote! {
            impl ::core::convert::From<#tuple> for #ident {
                fn from(value: #tuple) -> Self {
                    Self {
                        #(#fields: value.#indexes),*
                    }
                }
            }

            impl ::core::convert::From<#ident> for #tuple {
                fn from(record: #ident) -> Self {
                    record.into_tuple()
                }
            }
        };

        Some(TraitStrategy::from_impl(tokens))
    }
}
