///
/// RecordKind
///
/// Implemented by every type generated with `#[record]`. Exposes the static
/// shape of the record and its validity check without naming the concrete
/// type.
///

pub trait RecordKind: Clone + PartialEq + Default + Sized {
    /// Record type name.
    const NAME: &'static str;

    /// Field names in positional order.
    const FIELDS: &'static [&'static str];

    /// Every attached operation name, built-ins first, in attachment order.
    const OPERATIONS: &'static [&'static str];

    /// Run every validator bound to a field. Vacuously true when none apply.
    fn is_valid(&self) -> bool;

    /// Whether `name` is an operation attached to this record type.
    #[must_use]
    fn has_operation(name: &str) -> bool {
        Self::OPERATIONS.contains(&name)
    }
}
