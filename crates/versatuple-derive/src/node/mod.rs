mod arg;
mod def;
mod field;
mod preset;
mod record;
mod shortcut;
mod validator;

// pub use all node types
pub use self::arg::*;
pub use self::def::*;
pub use self::field::*;
pub use self::preset::*;
pub use self::record::*;
pub use self::shortcut::*;
pub use self::validator::*;

use crate::prelude::*;
use syn::ItemStruct;

/// Expand `#[record(args)] item` into the generated record type.
///
/// Every failure, from attribute parsing through configuration checks, is
/// reported as `compile_error!` tokens.
pub fn expand(args: TokenStream, input: TokenStream) -> TokenStream {
    try_expand(args, input).unwrap_or_else(DarlingError::write_errors)
}

fn try_expand(args: TokenStream, input: TokenStream) -> Result<TokenStream, DarlingError> {
    let list = NestedMeta::parse_meta_list(args)?;
    let item: ItemStruct = syn::parse2(input)?;

    let def = Def::from_item(&item)?;
    let node = Record::from_list(&list)?;
    let generated = node.resolve(def)?;

    Ok(generated.to_token_stream())
}
