use crate::prelude::*;

/// Companion enum with one variant per field, in field order.
pub fn field_enum_tokens(node: &RecordGen) -> TokenStream {
    let Def { ident, vis, .. } = node.def();
    let enum_ident = node.field_enum_ident();
    let variants: Vec<&Ident> = node.fields.iter().map(|f| &f.variant).collect();
    let names = node.field_names();
    let indexes = 0..variants.len();
    let len = variants.len();
    let doc = format!("Fields of [`{ident}`], in positional order.");

    quote! {
        #[doc = #doc]
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #vis enum #enum_ident {
            #(#variants),*
        }

        impl #enum_ident {
            /// Every field, in positional order.
            pub const ALL: [Self; #len] = [#(Self::#variants),*];

            /// Position of the field in the record.
            #[must_use]
            pub const fn index(self) -> usize {
                match self {
                    #(Self::#variants => #indexes),*
                }
            }

            /// Declared field name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    #(Self::#variants => #names),*
                }
            }
        }

        impl ::core::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }
    }
}
