use crate::prelude::*;
use derive_more::{Deref, DerefMut, Display, FromStr, IntoIterator};
use std::{collections::BTreeSet, str::FromStr, sync::LazyLock};

///
/// TraitKind
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd)]
pub enum TraitKind {
    // inherent impl
    Inherent,

    // rust
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,

    // kind
    RecordKind,
}

// derived unless removed
static DEFAULT_TRAITS: LazyLock<Vec<TraitKind>> = LazyLock::new(|| {
    vec![
        TraitKind::Clone,
        TraitKind::Debug,
        TraitKind::Eq,
        TraitKind::Hash,
        TraitKind::Ord,
        TraitKind::PartialEq,
        TraitKind::PartialOrd,
    ]
});

// always generated; cannot be removed
static RECORD_TRAITS: LazyLock<Vec<TraitKind>> = LazyLock::new(|| {
    vec![
        TraitKind::Inherent,
        TraitKind::Clone,
        TraitKind::Debug,
        TraitKind::Default,
        TraitKind::From,
        TraitKind::PartialEq,
        TraitKind::RecordKind,
    ]
});

// path_to_string
fn path_to_string(path: &syn::Path) -> String {
    path.to_token_stream()
        .to_string()
        .replace(' ', "")
        .trim_matches(':')
        .to_string()
}

impl TraitKind {
    #[must_use]
    #[remain::check]
    pub(crate) fn derive_path(self) -> Option<TokenStream> {
        #[remain::sorted]
        match self {
            Self::Clone => Some(quote!(Clone)),
            Self::Copy => Some(quote!(Copy)),
            Self::Debug => Some(quote!(Debug)),
            Self::Eq => Some(quote!(Eq)),
            Self::Hash => Some(quote!(Hash)),
            Self::Ord => Some(quote!(Ord)),
            Self::PartialEq => Some(quote!(PartialEq)),
            Self::PartialOrd => Some(quote!(PartialOrd)),

            _ => None,
        }
    }

    /// Trait path used in a manual `impl ... for` block.
    #[must_use]
    pub(crate) fn impl_path(self) -> TokenStream {
        match self {
            Self::Default => quote!(::core::default::Default),
            Self::From => quote!(::core::convert::From),
            Self::RecordKind => quote!(::versatuple::traits::RecordKind),
            _ => self.derive_path().unwrap_or_default(),
        }
    }

    /// Traits a derive of `self` needs alongside it.
    pub(crate) const fn prerequisites(self) -> &'static [Self] {
        match self {
            Self::Copy => &[Self::Clone],
            Self::Eq | Self::PartialOrd => &[Self::PartialEq],
            Self::Ord => &[Self::Eq, Self::PartialOrd],
            _ => &[],
        }
    }

    const fn is_required(self) -> bool {
        matches!(
            self,
            Self::Inherent
                | Self::Clone
                | Self::Debug
                | Self::Default
                | Self::From
                | Self::PartialEq
                | Self::RecordKind
        )
    }
}

impl FromMeta for TraitKind {
    fn from_nested_meta(item: &NestedMeta) -> Result<Self, DarlingError> {
        match item {
            NestedMeta::Meta(syn::Meta::Path(path)) => {
                let path_str = path_to_string(path);

                Self::from_str(&path_str)
                    .map_err(|_| DarlingError::unknown_value(&path_str).with_span(path))
            }

            _ => Err(DarlingError::custom("expected a trait name").with_span(item)),
        }
    }
}

///
/// TraitSet
///
/// Ordered so the generated derive list is stable between expansions.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, PartialEq)]
pub struct TraitSet(pub BTreeSet<TraitKind>);

impl TraitSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend<I: IntoIterator<Item = TraitKind>>(&mut self, traits: I) {
        self.0.extend(traits);
    }

    pub(crate) fn to_vec(&self) -> Vec<TraitKind> {
        self.0.iter().copied().collect()
    }
}

impl FromIterator<TraitKind> for TraitSet {
    fn from_iter<I: IntoIterator<Item = TraitKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// TraitBuilder
///
/// Trait additions and removals from `traits(add(..), remove(..))`.
///

#[derive(Clone, Debug, Default, FromMeta)]
pub struct TraitBuilder {
    #[darling(default)]
    pub add: TraitListMeta,

    #[darling(default)]
    pub remove: TraitListMeta,
}

impl TraitBuilder {
    // build
    // defaults plus additions minus removals, with the record traits forced in
    pub(crate) fn build(&self) -> Result<TraitSet, DarlingError> {
        let mut set = TraitSet::new();
        set.extend(DEFAULT_TRAITS.iter().copied());

        for tr in self.add.iter() {
            if tr.derive_path().is_none() {
                return Err(DarlingError::custom(format!(
                    "trait '{tr}' is generated by #[record] and cannot be added"
                )));
            }
            if !set.insert(*tr) {
                return Err(DarlingError::custom(format!(
                    "adding duplicate trait '{tr}'"
                )));
            }
        }

        for tr in self.remove.iter() {
            if tr.is_required() {
                return Err(DarlingError::custom(format!(
                    "trait '{tr}' is required by record types"
                )));
            }
            if !set.remove(tr) {
                return Err(DarlingError::custom(format!(
                    "cannot remove trait '{tr}' from {:?}",
                    set.to_vec()
                )));
            }
        }

        set.extend(RECORD_TRAITS.iter().copied());

        for tr in set.iter() {
            if let Some(missing) = tr.prerequisites().iter().find(|p| !set.contains(*p)) {
                return Err(DarlingError::custom(format!(
                    "trait '{tr}' requires trait '{missing}'"
                )));
            }
        }

        Ok(set)
    }
}

///
/// TraitListMeta
/// Used only for parsing trait lists from attributes via darling.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, IntoIterator)]
pub struct TraitListMeta(pub Vec<TraitKind>);

impl FromMeta for TraitListMeta {
    fn from_list(items: &[NestedMeta]) -> Result<Self, DarlingError> {
        let mut traits = Self::default();

        for item in items {
            let tr = TraitKind::from_nested_meta(item)?;
            traits.push(tr);
        }

        Ok(traits)
    }
}
