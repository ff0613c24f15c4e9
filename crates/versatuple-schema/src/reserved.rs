use derive_more::Display;
use std::{collections::HashSet, sync::LazyLock};

///
/// Builtin
///
/// Operations every record type carries. Their names are reserved: no field,
/// setter, shortcut or preset may reuse them.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Builtin {
    #[display("new")]
    Constructor,

    #[display("default")]
    DefaultConstructor,

    #[display("fields")]
    FieldNames,

    #[display("into_tuple")]
    IntoTuple,

    #[display("validators")]
    ValidatorsTable,

    #[display("is_valid")]
    ValidityCheck,
}

impl Builtin {
    pub const ALL: [Self; 6] = [
        Self::Constructor,
        Self::DefaultConstructor,
        Self::FieldNames,
        Self::IntoTuple,
        Self::ValidityCheck,
        Self::ValidatorsTable,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Constructor => "new",
            Self::DefaultConstructor => "default",
            Self::FieldNames => "fields",
            Self::IntoTuple => "into_tuple",
            Self::ValidityCheck => "is_valid",
            Self::ValidatorsTable => "validators",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

/// Check whether a name belongs to the built-in operation set.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    Builtin::from_name(name).is_some()
}

///
/// KEYWORDS
/// rust keywords, strict and reserved
/// https://doc.rust-lang.org/reference/keywords.html
///

static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
        "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
        "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ]
    .into_iter()
    .collect()
});

/// Check if an identifier is a Rust keyword.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

///
/// TRAIT_METHODS
/// methods generated record types pick up from their derived and implemented
/// traits; an inherent method with one of these names would shadow it
///

static TRAIT_METHODS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "borrow", "borrow_mut", "clamp", "clone", "clone_from", "cmp", "eq", "fmt", "from", "ge",
        "gt", "hash", "hash_slice", "into", "le", "lt", "max", "min", "ne", "partial_cmp",
        "to_owned", "try_from", "try_into", "type_id",
    ]
    .into_iter()
    .collect()
});

/// Check if a method name belongs to a trait every generated record may carry.
#[must_use]
pub fn is_trait_method(name: &str) -> bool {
    TRAIT_METHODS.contains(name)
}
