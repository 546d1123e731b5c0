//! Validation of user-supplied menu answers.
//!
//! # Validation Rules
//!
//! - Choices match an allowed value case-insensitively and normalise to the
//!   allowed spelling.
//! - Counts are integers between [`COUNT_MIN`] and [`COUNT_MAX`] inclusive;
//!   surrounding whitespace is ignored.

use tracing::debug;

use crate::error::InputError;

/// Smallest number of emails a single request may generate.
pub const COUNT_MIN: usize = 1;

/// Largest number of emails a single request may generate.
pub const COUNT_MAX: usize = 50;

/// Checks `value` against `allowed`, ignoring case.
///
/// Returns the matching entry from `allowed`, so `"MALE"` normalises to
/// `"male"`.
///
/// # Errors
///
/// Returns [`InputError::InvalidChoice`] listing every allowed value when
/// `value` matches none of them.
///
/// # Examples
///
/// ```
/// use email_generator::validate_choice;
///
/// let allowed = ["male", "female", "neutral"];
/// assert_eq!(validate_choice("MALE", &allowed), Ok("male"));
/// assert!(validate_choice("robot", &allowed).is_err());
/// ```
pub fn validate_choice<'a>(value: &str, allowed: &[&'a str]) -> Result<&'a str, InputError> {
    let lowered = value.to_lowercase();
    allowed
        .iter()
        .copied()
        .find(|candidate| candidate.to_lowercase() == lowered)
        .ok_or_else(|| {
            debug!(value, "rejected choice");
            InputError::InvalidChoice {
                value: value.to_owned(),
                allowed: allowed.join(", "),
            }
        })
}

/// Parses a requested email count.
///
/// # Errors
///
/// Returns [`InputError::InvalidCount`] when `raw` is not an unsigned
/// integer or lies outside `COUNT_MIN..=COUNT_MAX`.
///
/// # Examples
///
/// ```
/// use email_generator::validate_count;
///
/// assert_eq!(validate_count("12"), Ok(12));
/// assert!(validate_count("0").is_err());
/// assert!(validate_count("abc").is_err());
/// ```
pub fn validate_count(raw: &str) -> Result<usize, InputError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|count| (COUNT_MIN..=COUNT_MAX).contains(count))
        .ok_or_else(|| {
            debug!(raw, "rejected count");
            InputError::InvalidCount {
                raw: raw.to_owned(),
                min: COUNT_MIN,
                max: COUNT_MAX,
            }
        })
}

#[cfg(test)]
mod tests {
    //! Covers choice and count validation.

    use rstest::rstest;

    use super::*;

    const GENDERS: [&str; 3] = ["male", "female", "neutral"];

    #[rstest]
    #[case("male", "male")]
    #[case("MALE", "male")]
    #[case("Female", "female")]
    #[case("nEuTrAl", "neutral")]
    fn accepts_any_case_variant(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(validate_choice(value, &GENDERS), Ok(expected));
    }

    #[rstest]
    #[case("robot")]
    #[case("")]
    #[case("males")]
    fn rejects_values_outside_the_set(#[case] value: &str) {
        assert_eq!(
            validate_choice(value, &GENDERS),
            Err(InputError::InvalidChoice {
                value: value.to_owned(),
                allowed: "male, female, neutral".to_owned(),
            })
        );
    }

    #[rstest]
    #[case("1", 1)]
    #[case("50", 50)]
    #[case("25", 25)]
    #[case(" 7 ", 7)]
    fn accepts_counts_in_range(#[case] raw: &str, #[case] expected: usize) {
        assert_eq!(validate_count(raw), Ok(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("51")]
    #[case("abc")]
    #[case("")]
    #[case("-3")]
    #[case("2.5")]
    fn rejects_counts_out_of_range_or_unparseable(#[case] raw: &str) {
        let result = validate_count(raw);
        assert!(
            matches!(result, Err(InputError::InvalidCount { min: COUNT_MIN, max: COUNT_MAX, .. })),
            "expected InvalidCount for {raw:?}, got {result:?}"
        );
    }
}
