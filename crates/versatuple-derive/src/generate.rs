use crate::{imp::*, prelude::*};

///
/// GenField
///

#[derive(Clone, Debug)]
pub struct GenField {
    pub ident: Ident,
    pub ty: Type,

    /// Variant of the companion field enum.
    pub variant: Ident,
}

///
/// RecordGen
///
/// A checked record: the item, its typed fields and the resolved plan. All
/// code generation reads from here.
///

#[derive(Debug)]
pub struct RecordGen {
    pub def: Def,
    pub fields: Vec<GenField>,

    /// Preset names as declared, in plan order.
    pub presets: Vec<Ident>,

    pub plan: RecordPlan<Arg, Predicate>,
    pub traits: TraitSet,
}

impl RecordGen {
    pub const fn def(&self) -> &Def {
        &self.def
    }

    /// Companion enum naming each field (`VTuple` -> `VTupleField`).
    pub fn field_enum_ident(&self) -> Ident {
        format_ident!("{}Field", self.def.ident)
    }

    pub fn field_idents(&self) -> Vec<&Ident> {
        self.fields.iter().map(|f| &f.ident).collect()
    }

    pub fn field_types(&self) -> Vec<&Type> {
        self.fields.iter().map(|f| &f.ty).collect()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.ident.to_string()).collect()
    }

    /// The record's fields as a tuple type.
    pub fn tuple_type(&self) -> TokenStream {
        quote_tuple(&self.field_types())
    }

    /// One typed value expression per field, from a full value row.
    pub fn row_values(&self, row: &[Arg]) -> Vec<TokenStream> {
        self.fields
            .iter()
            .zip(row)
            .map(|(field, arg)| arg.to_value(&field.ty))
            .collect()
    }

    fn map_trait(&self, t: TraitKind) -> Option<TraitStrategy> {
        match t {
            TraitKind::Inherent => InherentTrait::strategy(self),
            TraitKind::Default => DefaultTrait::strategy(self),
            TraitKind::From => FromTrait::strategy(self),
            TraitKind::RecordKind => RecordKindTrait::strategy(self),

            _ => Some(TraitStrategy::from_derive(t)),
        }
    }

    fn type_part(&self) -> TokenStream {
        let Def { ident, vis, attrs } = &self.def;
        let fields = self.field_idents();
        let types = self.field_types();

        quote! {
            #(#attrs)*
            #vis struct #ident {
                #(#fields: #types),*
            }
        }
    }

    // trait_tokens
    // splits the resolved traits into one derive attribute and the manual impls
    fn trait_tokens(&self) -> (TokenStream, TokenStream) {
        let mut derives = Vec::new();
        let mut impls = TokenStream::new();

        for tr in self.traits.to_vec() {
            let Some(strategy) = self.map_trait(tr) else {
                continue;
            };

            if let Some(ts) = strategy.imp {
                impls.extend(ts);
            }
            if let Some(path) = strategy.derive.and_then(TraitKind::derive_path) {
                derives.push(path);
            }
        }

        let derive = if derives.is_empty() {
            quote!()
        } else {
            quote!(#[derive(#(#derives),*)])
        };

        (derive, impls)
    }
}

impl ToTokens for RecordGen {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let (derive, impls) = self.trait_tokens();
        let type_part = self.type_part();
        let field_enum = field_enum_tokens(self);

        tokens.extend(quote! {
            // MAIN TYPE
            #derive
            #type_part

            // FIELD ENUM
            #field_enum

            // IMPLEMENTATIONS
            #impls
        });
    }
}
