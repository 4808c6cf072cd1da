//! Value checks attached to scalar declarations.
//!
//! A validator receives the value being assigned to a property and returns
//! what should be stored, or the reason the value is rejected. Validators are
//! shared by every node of a type, so they hold no per-node state.

use super::value::Scalar;
use crate::error::{Result, SevdError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

pub trait Validator: fmt::Debug + Send + Sync {
    /// Checks `value` for `property` and returns the value to store.
    fn check(&self, property: &str, value: Option<Scalar>) -> Result<Option<Scalar>>;
}

/// Accepts anything with a textual form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

/// Integral values, or text consisting of an optional minus sign and digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

/// Anything convertible to a floating point number, scientific notation included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Double;

/// Native booleans or the exact strings `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

pub static TEXT: Text = Text;
pub static INTEGER: Integer = Integer;
pub static DOUBLE: Double = Double;
pub static BOOLEAN: Boolean = Boolean;

impl Validator for Text {
    fn check(&self, _property: &str, value: Option<Scalar>) -> Result<Option<Scalar>> {
        Ok(value)
    }
}

impl Validator for Integer {
    fn check(&self, property: &str, value: Option<Scalar>) -> Result<Option<Scalar>> {
        let Some(scalar) = value else {
            return Ok(None);
        };
        match &scalar {
            Scalar::Integer(_) => Ok(Some(scalar)),
            Scalar::Boolean(_) => Err(type_mismatch(property, "an int", &scalar)),
            Scalar::Text(text) if !is_integral(text) && !is_numeric(text) => {
                Err(type_mismatch(property, "an int", &scalar))
            }
            // A float never has an integral textual form, even when whole.
            Scalar::Double(value) => Err(SevdError::FormatError {
                property: property.to_string(),
                value: format!("{value:?}"),
            }),
            _ => {
                let text = scalar.to_text();
                if is_integral(&text) {
                    Ok(Some(scalar))
                } else {
                    Err(SevdError::FormatError {
                        property: property.to_string(),
                        value: text,
                    })
                }
            }
        }
    }
}

impl Validator for Double {
    fn check(&self, property: &str, value: Option<Scalar>) -> Result<Option<Scalar>> {
        match &value {
            None | Some(Scalar::Double(_) | Scalar::Integer(_) | Scalar::Decimal(_)) => Ok(value),
            Some(Scalar::Text(text)) if text.trim().parse::<f64>().is_ok() => Ok(value),
            Some(other) => Err(type_mismatch(property, "a double", other)),
        }
    }
}

impl Validator for Boolean {
    fn check(&self, property: &str, value: Option<Scalar>) -> Result<Option<Scalar>> {
        match &value {
            None | Some(Scalar::Boolean(_)) => Ok(value),
            Some(Scalar::Text(text)) if matches!(text.trim(), "true" | "false") => Ok(value),
            Some(other) => Err(invalid(property, other, "is not a valid boolean value")),
        }
    }
}

/// A closed set of allowed codes, compared case-sensitively after trimming.
#[derive(Debug)]
pub struct OneOf {
    label: &'static str,
    allowed: &'static [&'static str],
}

impl OneOf {
    pub const fn new(label: &'static str, allowed: &'static [&'static str]) -> Self {
        Self { label, allowed }
    }

    pub fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }
}

impl Validator for OneOf {
    fn check(&self, property: &str, value: Option<Scalar>) -> Result<Option<Scalar>> {
        let Some(scalar) = value else {
            return Ok(None);
        };
        if self.allowed.contains(&scalar.to_text().trim()) {
            Ok(Some(scalar))
        } else {
            Err(invalid(
                property,
                &scalar,
                &format!("is not a valid {}", self.label),
            ))
        }
    }
}

/// Text that must fully match a regular expression after trimming.
///
/// The expression is compiled on first use and anchored at both ends. The
/// required variant stores an empty string in place of an absent value, so a
/// required element may still be written out empty.
#[derive(Debug)]
pub struct Pattern {
    source: &'static str,
    required: bool,
    compiled: OnceLock<Regex>,
}

impl Pattern {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            required: false,
            compiled: OnceLock::new(),
        }
    }

    pub const fn required(source: &'static str) -> Self {
        Self {
            source,
            required: true,
            compiled: OnceLock::new(),
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn is_match(&self, text: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(text))
    }

    fn regex(&self) -> Result<&Regex> {
        if let Some(regex) = self.compiled.get() {
            return Ok(regex);
        }
        let regex = Regex::new(&format!("^(?:{})$", self.source))?;
        Ok(self.compiled.get_or_init(|| regex))
    }
}

impl Validator for Pattern {
    fn check(&self, property: &str, value: Option<Scalar>) -> Result<Option<Scalar>> {
        let scalar = match value {
            Some(scalar) => scalar,
            None if self.required => Scalar::Text(String::new()),
            None => return Ok(None),
        };
        if self.is_match(scalar.to_text().trim())? {
            Ok(Some(scalar))
        } else {
            Err(invalid(
                property,
                &scalar,
                &format!("must match pattern {}", self.source),
            ))
        }
    }
}

fn is_integral(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_numeric(text: &str) -> bool {
    text.trim().parse::<i128>().is_ok()
}

fn type_mismatch(property: &str, expected: &str, found: &Scalar) -> SevdError {
    SevdError::TypeMismatch {
        property: property.to_string(),
        expected: expected.to_string(),
        found: format!("{} \"{}\"", found.kind(), found),
    }
}

fn invalid(property: &str, value: &Scalar, reason: &str) -> SevdError {
    SevdError::InvalidValue {
        property: property.to_string(),
        value: value.to_text(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn accepts(validator: &dyn Validator, value: impl Into<Scalar>) -> bool {
        validator.check("prop", Some(value.into())).is_ok()
    }

    #[test]
    fn test_text_accepts_everything() {
        assert!(accepts(&TEXT, "test"));
        assert!(accepts(&TEXT, 12));
        assert_eq!(TEXT.check("prop", None).unwrap(), None);
    }

    #[test]
    fn test_integer() {
        assert_eq!(INTEGER.check("prop", None).unwrap(), None);
        assert!(accepts(&INTEGER, 12));
        assert!(accepts(&INTEGER, "39"));
        assert!(accepts(&INTEGER, "-7"));

        assert!(matches!(
            INTEGER.check("prop", Some("test".into())),
            Err(SevdError::TypeMismatch { .. })
        ));
        assert!(matches!(
            INTEGER.check("prop", Some(12.1223.into())),
            Err(SevdError::FormatError { .. })
        ));
        assert!(matches!(
            INTEGER.check("prop", Some(" 39".into())),
            Err(SevdError::FormatError { .. })
        ));
        assert!(matches!(
            INTEGER.check("prop", Some(12.0.into())),
            Err(SevdError::FormatError { value, .. }) if value == "12.0"
        ));
        assert!(!accepts(&INTEGER, "1.5"));
        assert!(!accepts(&INTEGER, true));
        assert!(!accepts(&INTEGER, dec!(1.25)));
    }

    #[test]
    fn test_double() {
        assert_eq!(DOUBLE.check("prop", None).unwrap(), None);
        assert!(accepts(&DOUBLE, 1.2322));
        assert!(accepts(&DOUBLE, 3.323e122));
        assert!(accepts(&DOUBLE, "3.2343"));
        assert!(accepts(&DOUBLE, "2.3332E10"));
        assert!(accepts(&DOUBLE, dec!(1892.59)));

        assert!(matches!(
            DOUBLE.check("prop", Some("test".into())),
            Err(SevdError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_boolean() {
        assert_eq!(BOOLEAN.check("prop", None).unwrap(), None);
        assert!(accepts(&BOOLEAN, "true"));
        assert!(accepts(&BOOLEAN, "false"));
        assert!(accepts(&BOOLEAN, " true "));
        assert!(accepts(&BOOLEAN, true));
        assert!(accepts(&BOOLEAN, false));

        for rejected in [Scalar::from("test"), 2.343.into(), 3.into(), "True".into()] {
            assert!(matches!(
                BOOLEAN.check("prop", Some(rejected)),
                Err(SevdError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn test_one_of() {
        static CODES: OneOf = OneOf::new("code", &["AA", "BB"]);
        assert_eq!(CODES.check("prop", None).unwrap(), None);
        assert!(accepts(&CODES, "AA"));
        assert!(accepts(&CODES, " BB "));
        assert!(!accepts(&CODES, "aa"));
        assert!(!accepts(&CODES, 123));
        assert!(!accepts(&CODES, true));
    }

    #[test]
    fn test_pattern() {
        static ABC: Pattern = Pattern::new("^[ABC]+$");
        assert_eq!(ABC.check("prop", None).unwrap(), None);
        assert!(accepts(&ABC, "ABBBBA"));
        assert!(accepts(&ABC, "ABBCC"));

        for rejected in [Scalar::from("DkJS"), "".into(), 1.into(), 23.55.into(), true.into()] {
            assert!(matches!(
                ABC.check("prop", Some(rejected)),
                Err(SevdError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn test_required_pattern_defaults_to_empty() {
        static ABC: Pattern = Pattern::required("^[ABC]*$");
        assert_eq!(
            ABC.check("prop", None).unwrap(),
            Some(Scalar::Text(String::new()))
        );
        assert!(accepts(&ABC, ""));
        assert!(accepts(&ABC, "ABBCC"));
        assert!(!accepts(&ABC, "DkJS"));
        assert!(!accepts(&ABC, 1));
        assert!(!accepts(&ABC, true));
    }

    #[test]
    fn test_pattern_is_anchored() {
        static DIGITS: Pattern = Pattern::new("[0-9]+");
        assert!(accepts(&DIGITS, "123"));
        assert!(!accepts(&DIGITS, "a123"));
    }

    #[test]
    fn test_invalid_pattern_surfaces_as_error() {
        static BROKEN: Pattern = Pattern::new("([A-Z");
        assert!(matches!(
            BROKEN.check("prop", Some("A".into())),
            Err(SevdError::Pattern(_))
        ));
    }

    #[test]
    fn test_reassignment_is_idempotent() {
        let first = INTEGER.check("prop", Some("39".into())).unwrap();
        let second = INTEGER.check("prop", first.clone()).unwrap();
        assert_eq!(first, second);
    }
}
