use crate::prelude::*;
use syn::{ExprLit, Lit};

///
/// Arg
///
/// A value expression from the attribute: a default, a preset value or a
/// shortcut's fixed value. Typed against the field it lands in only when the
/// code is generated.
///

#[derive(Clone, Debug)]
pub struct Arg(pub Expr);

impl Arg {
    /// Expression producing a value of `ty`.
    ///
    /// String literals go through `Into`, so `"red"` fills both `String` and
    /// `&'static str` fields. Everything else is bound to a typed local, which
    /// lets integer and float literals take the field's type.
    pub fn to_value(&self, ty: &Type) -> TokenStream {
        let expr = &self.0;

        match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => quote!(::core::convert::Into::<#ty>::into(#lit)),

            _ => quote!({
                let value: #ty = #expr;
                value
            }),
        }
    }
}

impl Absent for Arg {
    fn absent() -> Self {
        Self(syn::parse_quote!(::core::default::Default::default()))
    }
}

impl FromMeta for Arg {
    fn from_expr(expr: &Expr) -> Result<Self, DarlingError> {
        Ok(Self(expr.clone()))
    }
}

///
/// Predicate
///
/// A validator check: a path to a `fn(&T) -> bool` or a closure, given
/// either bare or as a string.
///

#[derive(Clone, Debug)]
pub struct Predicate(pub Expr);

impl Predicate {
    /// Call the predicate on `arg`.
    pub fn call(&self, arg: &TokenStream) -> TokenStream {
        let check = &self.0;

        quote!((#check)(#arg))
    }
}

impl FromMeta for Predicate {
    fn from_expr(expr: &Expr) -> Result<Self, DarlingError> {
        match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => lit
                .parse::<Expr>()
                .map(Self)
                .map_err(DarlingError::from),

            _ => Ok(Self(expr.clone())),
        }
    }
}
