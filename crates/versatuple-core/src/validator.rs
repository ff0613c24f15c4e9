use crate::value::Value;
use std::{fmt, sync::Arc};

///
/// Validator
///
/// Shared predicate over a single field value. Cloning shares the closure.
///

#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Validator {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    #[must_use]
    pub fn check(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

impl<F> From<F> for Validator
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    fn from(predicate: F) -> Self {
        Self::new(predicate)
    }
}

///
/// Helpers
///

/// Inclusive-exclusive integer range check; non-integers fail.
#[must_use]
pub fn int_range(min: i64, max: i64) -> Validator {
    Validator::new(move |value| value.as_i64().is_some_and(|v| (min..max).contains(&v)))
}

/// Membership check against a fixed set of text values; non-text fails.
#[must_use]
pub fn one_of(allowed: &[&str]) -> Validator {
    let allowed: Vec<String> = allowed.iter().map(ToString::to_string).collect();

    Validator::new(move |value| {
        value
            .as_text()
            .is_some_and(|text| allowed.iter().any(|a| a == text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_range_is_half_open() {
        let check = int_range(0, 100);

        assert!(check.check(&Value::Int(0)));
        assert!(check.check(&Value::Uint(99)));
        assert!(!check.check(&Value::Int(100)));
        assert!(!check.check(&Value::Int(-1)));
        assert!(!check.check(&Value::Text("50".into())));
    }

    #[test]
    fn one_of_matches_text_only() {
        let check = one_of(&["n", "e", "s", "w"]);

        assert!(check.check(&Value::from("n")));
        assert!(!check.check(&Value::from("x")));
        assert!(!check.check(&Value::None));
    }

    #[test]
    fn closures_convert_into_validators() {
        let check: Validator = (|v: &Value| v.is_none()).into();

        assert!(check.check(&Value::None));
        assert!(!check.check(&Value::Bool(false)));
    }
}
