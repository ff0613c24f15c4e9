use crate::prelude::*;
use std::collections::HashMap;
use syn::spanned::Spanned;
use versatuple_schema::reserved::{is_keyword, is_trait_method};

///
/// Record
///
/// Arguments of `#[record(..)]`.
///

#[derive(Debug, FromMeta)]
pub struct Record {
    pub fields: FieldList,

    #[darling(default)]
    pub defaults: Option<Defaults>,

    #[darling(multiple, rename = "validator")]
    pub validators: Vec<Validator>,

    #[darling(multiple, rename = "shortcut")]
    pub shortcuts: Vec<Shortcut>,

    #[darling(multiple, rename = "preset")]
    pub presets: Vec<Preset>,

    #[darling(default)]
    pub traits: TraitBuilder,
}

impl Record {
    /// Check the arguments against the item and resolve the record plan.
    pub fn resolve(self, def: Def) -> Result<RecordGen, DarlingError> {
        let traits = self.traits.build()?;
        self.validate_validators()?;
        self.validate_method_names()?;

        let plan = self
            .config(&def)
            .resolve()
            .map_err(|err| self.config_error(&def, &err))?;

        let fields = self.gen_fields()?;
        let presets = self.presets.iter().map(|p| p.name.clone()).collect();

        Ok(RecordGen {
            def,
            fields,
            presets,
            plan,
            traits,
        })
    }

    // config
    // the attribute as a declarative record config
    fn config(&self, def: &Def) -> RecordConfig<Arg, Predicate> {
        let mut config = RecordConfig::new(
            def.ident().to_string(),
            self.fields.iter().map(|f| f.ident.to_string()),
        );

        if let Some(defaults) = &self.defaults {
            config = config.defaults(defaults.values.iter().cloned());
        }
        for validator in &self.validators {
            config = config.validator(validator.field.to_string(), validator.check.clone());
        }
        for shortcut in &self.shortcuts {
            config = config.shortcut(
                shortcut.field.to_string(),
                shortcut.name.to_string(),
                shortcut.value.clone(),
            );
        }
        for preset in &self.presets {
            config = config.preset(
                preset.name.to_string(),
                preset
                    .values
                    .iter()
                    .map(|(field, value)| (field.to_string(), value.clone())),
            );
        }

        config
    }

    // validate_validators
    // generated checks bind to a field, so an unknown field is a typo
    fn validate_validators(&self) -> Result<(), DarlingError> {
        let mut errors = DarlingError::accumulator();

        for validator in &self.validators {
            if self.fields.get(&validator.field.to_string()).is_none() {
                errors.push(
                    syn::Error::new(
                        validator.field.span(),
                        format!("validator references unknown field '{}'", validator.field),
                    )
                    .into(),
                );
            }
        }

        errors.finish()
    }

    // validate_method_names
    // getters, shortcuts and presets become inherent methods, which would
    // shadow a trait method of the same name
    fn validate_method_names(&self) -> Result<(), DarlingError> {
        let mut errors = DarlingError::accumulator();

        let names = self
            .fields
            .iter()
            .map(|f| &f.ident)
            .chain(self.shortcuts.iter().map(|s| &s.name))
            .chain(self.presets.iter().map(|p| &p.name));

        for name in names {
            if is_trait_method(&name.to_string()) {
                errors.push(
                    syn::Error::new(
                        name.span(),
                        format!("'{name}' would shadow a trait method of the record"),
                    )
                    .into(),
                );
            }
        }

        errors.finish()
    }

    fn gen_fields(&self) -> Result<Vec<GenField>, DarlingError> {
        let mut seen: HashMap<String, &Ident> = HashMap::new();
        let mut fields = Vec::with_capacity(self.fields.len());

        for field in self.fields.iter() {
            let variant = field_variant(&field.ident);

            if is_keyword(&variant.to_string()) {
                return Err(syn::Error::new(
                    field.ident.span(),
                    format!(
                        "field '{}' maps to the keyword '{variant}' as a field variant",
                        field.ident
                    ),
                )
                .into());
            }

            if let Some(other) = seen.insert(variant.to_string(), &field.ident) {
                return Err(syn::Error::new(
                    field.ident.span(),
                    format!(
                        "fields '{other}' and '{}' map to the same variant '{variant}'",
                        field.ident
                    ),
                )
                .into());
            }

            fields.push(GenField {
                ident: field.ident.clone(),
                ty: field.ty.clone(),
                variant,
            });
        }

        Ok(fields)
    }

    // config_error
    // report a config error at the identifier that caused it
    fn config_error(&self, def: &Def, err: &ConfigError) -> DarlingError {
        syn::Error::new(self.error_span(def, err), err.to_string()).into()
    }

    fn error_span(&self, def: &Def, err: &ConfigError) -> Span {
        let fallback = def.ident().span();

        match err {
            ConfigError::DefaultsLengthMismatch { .. } => {
                self.defaults.as_ref().map_or(fallback, |d| d.span)
            }

            ConfigError::InvalidPresetField { owner, field } => self
                .presets
                .iter()
                .filter(|p| p.name == owner)
                .flat_map(|p| p.values.iter().map(|(f, _)| f))
                .chain(
                    self.shortcuts
                        .iter()
                        .filter(|s| s.name == owner)
                        .map(|s| &s.field),
                )
                .find(|f| *f == field)
                .map_or(fallback, Ident::span),

            _ => {
                let name = err.identifier();

                // latest declaration wins; it is the one that clashed
                self.fields
                    .iter()
                    .map(|f| &f.ident)
                    .chain(self.presets.iter().map(|p| &p.name))
                    .chain(self.shortcuts.iter().map(|s| &s.name))
                    .filter(|ident| *ident == name)
                    .next_back()
                    .map_or(fallback, Ident::span)
            }
        }
    }
}

///
/// Defaults
///
/// `defaults = [33, "red"]`: one value per field, in field order.
///

#[derive(Clone, Debug)]
pub struct Defaults {
    pub values: Vec<Arg>,
    pub span: Span,
}

impl FromMeta for Defaults {
    fn from_expr(expr: &Expr) -> Result<Self, DarlingError> {
        match expr {
            Expr::Array(array) => Ok(Self {
                values: array.elems.iter().cloned().map(Arg).collect(),
                span: expr.span(),
            }),

            _ => Err(DarlingError::custom("expected an array of default values").with_span(expr)),
        }
    }
}
