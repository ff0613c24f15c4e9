use crate::prelude::*;

///
/// InherentTrait
///
/// Constructors, accessors, non-destructive setters, shortcuts, factory
/// presets and the validator table.
///

pub struct InherentTrait {}

impl Imp<RecordGen> for InherentTrait {
    fn strategy(node: &RecordGen) -> Option<TraitStrategy> {
        let tokens = [
            constructors(node),
            accessors(node),
            setters(node),
            shortcuts(node),
            presets(node),
            validators(node),
        ]
        .into_iter()
        .collect::<TokenStream>();

        let tokens = Implementor::new(node.def(), TraitKind::Inherent)
            .set_tokens(tokens)
            .to_token_stream();

        Some(TraitStrategy::from_impl(tokens))
    }
}

// constructors
// new, fields, into_tuple
fn constructors(node: &RecordGen) -> TokenStream {
    let fields = node.field_idents();
    let types = node.field_types();
    let names = quote_str_slice(node.field_names());
    let tuple = node.tuple_type();

    quote! {
        /// Construct a record from one value per field, in field order.
        #[must_use]
        #[allow(clippy::too_many_arguments)]
        pub const fn new(#(#fields: #types),*) -> Self {
            Self { #(#fields),* }
        }

        /// Field names in positional order.
        #[must_use]
        pub const fn fields() -> &'static [&'static str] {
            #names
        }

        /// Consume the record into its positional tuple.
        #[must_use]
        pub fn into_tuple(self) -> #tuple {
            (#(self.#fields,)*)
        }
    }
}

fn accessors(node: &RecordGen) -> TokenStream {
    let getters = node.fields.iter().map(|field| {
        let GenField { ident, ty, .. } = field;
        let doc = format!("Value of `{ident}`.");

        quote! {
            #[doc = #doc]
            #[must_use]
            pub const fn #ident(&self) -> &#ty {
                &self.#ident
            }
        }
    });

    quote!(#(#getters)*)
}

fn setters(node: &RecordGen) -> TokenStream {
    let setters = node.fields.iter().zip(&node.plan.fields).map(|(field, plan)| {
        let GenField { ident, ty, .. } = field;
        let setter = method_ident(&plan.setter, ident);
        let doc = format!("Copy of the record with `{ident}` replaced.");

        quote! {
            #[doc = #doc]
            #[must_use]
            pub fn #setter(&self, value: #ty) -> Self {
                let mut next = ::core::clone::Clone::clone(self);
                next.#ident = value;
                next
            }
        }
    });

    quote!(#(#setters)*)
}

fn shortcuts(node: &RecordGen) -> TokenStream {
    let shortcuts = node.plan.shortcuts.iter().filter_map(|shortcut| {
        let field = node.fields.get(shortcut.field)?;
        let plan = node.plan.fields.get(shortcut.field)?;

        let name = method_ident(&shortcut.name, &field.ident);
        let setter = method_ident(&plan.setter, &field.ident);
        let value = shortcut.value.to_value(&field.ty);
        let doc = format!("Copy of the record with `{}` set by `{name}`.", field.ident);

        Some(quote! {
            #[doc = #doc]
            #[must_use]
            pub fn #name(&self) -> Self {
                self.#setter(#value)
            }
        })
    });

    quote!(#(#shortcuts)*)
}

fn presets(node: &RecordGen) -> TokenStream {
    let fields = node.field_idents();
    let names = node.field_names();

    let presets = node.plan.presets.iter().zip(&node.presets).map(|(preset, origin)| {
        let name = method_ident(&preset.name, origin);
        let values = node.row_values(&preset.values);
        let doc = preset_doc(&names, &preset.overrides);

        quote! {
            #[doc = #doc]
            #[must_use]
            pub fn #name() -> Self {
                Self {
                    #(#fields: #values),*
                }
            }
        }
    });

    quote!(#(#presets)*)
}

// preset_doc
// names the fields the preset sets; the rest come from the defaults
fn preset_doc(names: &[String], overrides: &[usize]) -> String {
    let set: Vec<String> = overrides
        .iter()
        .filter_map(|&index| names.get(index))
        .map(|name| format!("`{name}`"))
        .collect();

    if set.is_empty() {
        "Factory preset equal to the default record.".to_string()
    } else {
        format!("Factory preset: the default record with {} set.", set.join(", "))
    }
}

// validators
// one hidden shim per configured validator, the table that lists them, and
// the validity check that runs the table
fn validators(node: &RecordGen) -> TokenStream {
    let enum_ident = node.field_enum_ident();

    let bound: Vec<(&GenField, &Predicate)> = node
        .plan
        .validators
        .iter()
        .filter_map(|(name, predicate)| {
            let index = node.plan.field_index(name)?;
            node.fields.get(index).map(|field| (field, predicate))
        })
        .collect();

    let shims = bound.iter().map(|(field, predicate)| {
        let ident = &field.ident;
        let shim = validator_shim(ident);
        let call = predicate.call(&quote!(&record.#ident));

        quote! {
            #[doc(hidden)]
            #[allow(clippy::redundant_closure_call)]
            fn #shim(record: &Self) -> bool {
                #call
            }
        }
    });

    let entries = bound.iter().map(|(field, _)| {
        let variant = &field.variant;
        let shim = validator_shim(&field.ident);

        quote!((#enum_ident::#variant, Self::#shim as fn(&Self) -> bool))
    });

    quote! {
        #(#shims)*

        #[doc(hidden)]
        const __VALIDATORS: &'static [(#enum_ident, fn(&Self) -> bool)] = &[#(#entries),*];

        /// Validator table in declaration order.
        #[must_use]
        pub const fn validators() -> &'static [(#enum_ident, fn(&Self) -> bool)] {
            Self::__VALIDATORS
        }

        /// Whether every bound validator accepts its field. True when none are
        /// configured.
        #[must_use]
        pub fn is_valid(&self) -> bool {
            Self::__VALIDATORS.iter().all(|(_, check)| check(self))
        }
    }
}
