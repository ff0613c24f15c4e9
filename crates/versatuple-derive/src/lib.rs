use proc_macro::TokenStream;

mod generate;
mod helper;
mod imp;
mod node;
mod trait_kind;

#[cfg(test)]
mod tests;

///
/// Prelude
///

mod prelude {
    pub use crate::{
        generate::{GenField, RecordGen},
        helper::*,
        imp::{Imp, Implementor, TraitStrategy},
        node::*,
        trait_kind::{TraitBuilder, TraitKind, TraitSet},
    };
    pub use darling::{Error as DarlingError, FromMeta, ast::NestedMeta};
    pub use proc_macro2::{Span, TokenStream};
    pub use quote::{ToTokens, format_ident, quote};
    pub use syn::{Expr, Ident, Type};
    pub use versatuple_schema::{
        ConfigError, RecordConfig,
        plan::{Absent, RecordPlan},
    };
}

/// Generate an immutable record type from a unit struct.
///
/// ```ignore
/// #[record(
///     fields(
///         field(ident = "id", ty = "u32"),
///         field(ident = "color", ty = "&'static str"),
///     ),
///     defaults = [33, "red"],
///     shortcut(field = "color", name = "yellow", value = "yellow"),
///     preset(name = "id22", values(id = 22)),
/// )]
/// pub struct VTuple;
/// ```
#[proc_macro_attribute]
pub fn record(args: TokenStream, input: TokenStream) -> TokenStream {
    node::expand(args.into(), input.into()).into()
}
