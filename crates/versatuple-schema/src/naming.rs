use crate::{MAX_NAME_LEN, reserved::is_keyword};

/// Prefix of the generated per-field update operation.
pub const SETTER_PREFIX: &str = "with_";

/// Name of the non-destructive update operation generated for `field`.
///
/// Prefixing is injective: distinct fields always yield distinct setters.
#[must_use]
pub fn setter_name(field: &str) -> String {
    format!("{SETTER_PREFIX}{field}")
}

/// Ensure a record or field name is usable as a generated identifier.
///
/// Names must start with an ASCII letter; a leading underscore is kept free for
/// generated helpers.
pub fn validate_ident(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("ident is empty".to_string());
    }
    if ident.len() > MAX_NAME_LEN {
        return Err(format!("ident exceeds max length {MAX_NAME_LEN}"));
    }
    if !ident.is_ascii() {
        return Err("ident must be ASCII".to_string());
    }

    let mut chars = ident.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err("ident must start with a letter".to_string());
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(format!("ident contains invalid character '{c}'"));
    }

    if is_keyword(ident) {
        return Err(format!("the word '{ident}' is reserved"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setter_names_are_prefixed() {
        assert_eq!(setter_name("id"), "with_id");
        assert_eq!(setter_name("count"), "with_count");
    }

    #[test]
    fn rejects_empty_keyword_and_malformed_idents() {
        assert!(validate_ident("").is_err(), "empty identifiers should fail");
        assert!(validate_ident("type").is_err(), "keywords should be rejected");
        assert!(validate_ident("_hidden").is_err());
        assert!(validate_ident("9lives").is_err());
        assert!(validate_ident("two words").is_err());
        assert!(validate_ident("café").is_err());
        assert!(validate_ident(&"a".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn accepts_plain_identifiers() {
        assert!(validate_ident("color").is_ok());
        assert!(validate_ident("VTuple").is_ok());
        assert!(validate_ident("field_2").is_ok());
    }
}
