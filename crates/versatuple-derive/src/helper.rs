use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Index};

// Naming helpers

/// Field-enum variant for a field identifier (`field_2` -> `Field2`).
#[must_use]
pub fn field_variant(ident: &Ident) -> Ident {
    let name = ident.to_string().to_case(Case::Pascal);

    format_ident!("{}", name, span = ident.span())
}

/// Identifier for a generated method, spanned at the declaration it came from.
#[must_use]
pub fn method_ident(name: &str, origin: &Ident) -> Ident {
    format_ident!("{}", name, span = origin.span())
}

/// Hidden per-field validator shim.
#[must_use]
pub fn validator_shim(ident: &Ident) -> Ident {
    format_ident!("__validate_{}", ident)
}

// Quoting helpers

/// Quote a list of strings as a `&[&str]` slice expression.
pub fn quote_str_slice<I, S>(items: I) -> TokenStream
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items = items.into_iter().map(|s| s.as_ref().to_string());

    quote! {
        &[#(#items),*]
    }
}

/// Quote a tuple type with a trailing comma, so one field still reads as a tuple.
pub fn quote_tuple<T: quote::ToTokens>(items: &[T]) -> TokenStream {
    quote! {
        (#(#items,)*)
    }
}

/// Positional tuple accessors `0, 1, ..`.
#[must_use]
pub fn tuple_indexes(len: usize) -> Vec<Index> {
    (0..len).map(Index::from).collect()
}
