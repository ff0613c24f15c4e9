use crate::prelude::*;

///
/// DefaultTrait
///
/// `Default` yields the configured defaults, or `Default::default()` per
/// field when none were given.
///

pub struct DefaultTrait {}

impl Imp<RecordGen> for DefaultTrait {
    fn strategy(node: &RecordGen) -> Option<TraitStrategy> {
        let defaults: Vec<Arg> = node.plan.defaults().cloned().collect();
        let fields = node.field_idents();
        let values = node.row_values(&defaults);

        let q = quote! {
            fn default() -> Self {
                Self {
                    #(#fields: #values),*
                }
            }
        };

        let tokens = Implementor::new(node.def(), TraitKind::Default)
            .set_tokens(q)
            .to_token_stream();

        Some(TraitStrategy::from_impl(tokens))
    }
}
