use crate::prelude::*;

///
/// RecordKindTrait
///

pub struct RecordKindTrait {}

impl Imp<RecordGen> for RecordKindTrait {
    fn strategy(node: &RecordGen) -> Option<TraitStrategy> {
        let name = &node.plan.name;
        let fields = quote_str_slice(node.plan.field_names());
        let operations = quote_str_slice(node.plan.registry.names());

        let q = quote! {
            const NAME: &'static str = #name;
            const FIELDS: &'static [&'static str] = #fields;
            const OPERATIONS: &'static [&'static str] = #operations;

            fn is_valid(&self) -> bool {
                Self::is_valid(self)
            }
        };

        let tokens = Implementor::new(node.def(), TraitKind::RecordKind)
            .set_tokens(q)
            .to_token_stream();

        Some(TraitStrategy::from_impl(tokens))
    }
}
