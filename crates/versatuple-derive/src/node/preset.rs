use crate::prelude::*;
use derive_more::Deref;

///
/// Preset
///
/// `preset(name = "id22", values(id = 22))`: a constructor taking no
/// arguments that starts from the defaults and overrides the listed fields.
///

#[derive(Clone, Debug, FromMeta)]
pub struct Preset {
    pub name: Ident,

    #[darling(default)]
    pub values: PresetValues,
}

///
/// PresetValues
///

#[derive(Clone, Debug, Default, Deref)]
pub struct PresetValues(pub Vec<(Ident, Arg)>);

impl FromMeta for PresetValues {
    fn from_list(items: &[NestedMeta]) -> Result<Self, DarlingError> {
        let mut errors = DarlingError::accumulator();
        let mut values = Vec::with_capacity(items.len());

        for item in items {
            match item {
                NestedMeta::Meta(syn::Meta::NameValue(nv)) => match nv.path.get_ident() {
                    Some(ident) => values.push((ident.clone(), Arg(nv.value.clone()))),
                    None => errors.push(
                        DarlingError::custom("expected a field name").with_span(&nv.path),
                    ),
                },

                _ => errors.push(DarlingError::custom("expected `field = value`").with_span(item)),
            }
        }

        errors.finish_with(Self(values))
    }
}
