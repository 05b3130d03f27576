//! Boundary validation for caller-supplied input.
//!
//! Every value coming from a request or a file passes through these helpers
//! before it reaches the store or the ranker. Nothing is coerced silently:
//! a value either parses into the expected type or produces a
//! [`SchoolError`].

use crate::error::{Result, SchoolError};
use crate::geo::Coordinate;

/// Require a non-blank text value and return it trimmed.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<String> {
    let value = value.ok_or(SchoolError::MissingField { field })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SchoolError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Require a finite decimal number.
///
/// Surrounding whitespace is ignored. Blank input counts as missing.
///
/// # Examples
///
/// ```
/// use nearschool::validate::require_number;
///
/// assert_eq!(require_number("latitude", Some(" 12.5 ")).unwrap(), 12.5);
/// assert!(require_number("latitude", Some("12.5abc")).is_err());
/// assert!(require_number("latitude", Some("NaN")).is_err());
/// assert!(require_number("latitude", None).is_err());
/// ```
pub fn require_number(field: &'static str, value: Option<&str>) -> Result<f64> {
    let raw = value.ok_or(SchoolError::MissingField { field })?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SchoolError::MissingField { field });
    }

    let parsed: f64 = trimmed.parse().map_err(|_| SchoolError::NotNumeric {
        field,
        value: raw.to_string(),
    })?;

    require_finite(field, parsed).map_err(|_| SchoolError::NotNumeric {
        field,
        value: raw.to_string(),
    })
}

/// Reject `NaN` and infinities.
pub fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SchoolError::NotNumeric {
            field,
            value: value.to_string(),
        })
    }
}

/// Apply the optional geographic range check.
///
/// With `strict` unset every finite coordinate is accepted.
pub fn check_range(coordinate: Coordinate, strict: bool) -> Result<Coordinate> {
    if strict {
        coordinate.validate_range()?;
    }
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("name", Some("Oak")).unwrap(), "Oak");
        assert!(matches!(
            require_text("name", None),
            Err(SchoolError::MissingField { field: "name" })
        ));
        assert!(matches!(
            require_text("name", Some("")),
            Err(SchoolError::EmptyField { field: "name" })
        ));
        assert!(matches!(
            require_text("name", Some(" \t")),
            Err(SchoolError::EmptyField { field: "name" })
        ));
    }

    #[test]
    fn test_require_number_accepts_decimal_forms() {
        assert_eq!(require_number("latitude", Some("0")).unwrap(), 0.0);
        assert_eq!(require_number("latitude", Some("-33.8688")).unwrap(), -33.8688);
        assert_eq!(require_number("latitude", Some("1e1")).unwrap(), 10.0);
        assert_eq!(require_number("latitude", Some("+7")).unwrap(), 7.0);
    }

    #[test]
    fn test_require_number_rejects_garbage() {
        for raw in ["abc", "12,5", "1.2.3", "0x10", "NaN", "inf", "-infinity"] {
            match require_number("latitude", Some(raw)) {
                Err(SchoolError::NotNumeric { field, value }) => {
                    assert_eq!(field, "latitude");
                    assert_eq!(value, raw);
                }
                other => panic!("{:?} gave {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_require_number_blank_is_missing() {
        assert!(matches!(
            require_number("longitude", Some("  ")),
            Err(SchoolError::MissingField { field: "longitude" })
        ));
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("latitude", 1.0).unwrap(), 1.0);
        assert!(require_finite("latitude", f64::NAN).is_err());
        assert!(require_finite("latitude", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_check_range() {
        let outside = Coordinate::new(95.0, 0.0);
        assert!(check_range(outside, false).is_ok());
        assert!(matches!(
            check_range(outside, true),
            Err(SchoolError::OutOfRange { field: "latitude", .. })
        ));
        assert!(check_range(Coordinate::new(45.0, 90.0), true).is_ok());
    }
}
