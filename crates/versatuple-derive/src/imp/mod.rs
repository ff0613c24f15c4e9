mod default;
mod field_enum;
mod from;
mod inherent;
mod record_kind;

pub use default::DefaultTrait;
pub use field_enum::field_enum_tokens;
pub use from::FromTrait;
pub use inherent::InherentTrait;
pub use record_kind::RecordKindTrait;

use crate::prelude::*;

///
/// Imp
///
/// One trait's code generator for node type `N`.
///

pub trait Imp<N> {
    fn strategy(node: &N) -> Option<TraitStrategy>;
}

///
/// TraitStrategy
///
/// How a trait reaches the generated type: listed in the derive attribute,
/// implemented by hand, or both.
///

#[derive(Debug, Default)]
pub struct TraitStrategy {
    pub derive: Option<TraitKind>,
    pub imp: Option<TokenStream>,
}

impl TraitStrategy {
    pub const fn from_derive(tr: TraitKind) -> Self {
        Self {
            derive: Some(tr),
            imp: None,
        }
    }

    pub const fn from_impl(tokens: TokenStream) -> Self {
        Self {
            derive: None,
            imp: Some(tokens),
        }
    }
}

///
/// Implementor
///
/// Wraps generated items in `impl Trait for Type { .. }`, or `impl Type { .. }`
/// for [`TraitKind::Inherent`].
///

pub struct Implementor<'a> {
    def: &'a Def,
    trait_kind: TraitKind,
    tokens: TokenStream,
}

impl<'a> Implementor<'a> {
    pub fn new(def: &'a Def, trait_kind: TraitKind) -> Self {
        Self {
            def,
            trait_kind,
            tokens: TokenStream::new(),
        }
    }

    #[must_use]
    pub fn set_tokens(mut self, tokens: TokenStream) -> Self {
        self.tokens = tokens;
        self
    }
}

impl ToTokens for Implementor<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = self.def.ident();
        let inner = &self.tokens;

        let q = match self.trait_kind {
            TraitKind::Inherent => quote! {
                impl #ident {
                    #inner
                }
            },
            tr => {
                let path = tr.impl_path();
                quote! {
                    impl #path for #ident {
                        #inner
                    }
                }
            }
        };

        tokens.extend(q);
    }
}
