//! Resolves the active `(review_count, price)` pair from either the manual
//! fields or the last fetched record.
//!
//! Field-level display validation accepts zero, while calculation demands a
//! strictly positive value. A zero field is therefore marked valid yet still
//! blocks the calculation.

use super::entities::{FetchedRecord, InputMode};
use crate::error::CalcError;

pub const MANUAL_INPUT_MESSAGE: &str = "Please enter valid positive numbers for both fields.";
pub const FETCH_FIRST_MESSAGE: &str =
    "Please fetch game data first by clicking \"Fetch Game Data\".";
pub const REVIEW_OVERRIDE_MESSAGE: &str =
    "Please enter a valid review count in the manual input field.";

/// Display state of a numeric text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    Empty,
    Valid,
    Invalid,
}

pub fn field_state(raw: &str) -> FieldState {
    if raw.is_empty() {
        return FieldState::Empty;
    }
    match parse_number(raw) {
        Some(value) if value >= 0.0 => FieldState::Valid,
        _ => FieldState::Invalid,
    }
}

/// Parses a finite number, ignoring surrounding whitespace.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses a value usable as a calculation input: finite and strictly positive.
pub fn parse_positive(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|value| *value > 0.0)
}

/// Raw text of every field the resolver may read. Which ones matter depends
/// on the active [`InputMode`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawInputs {
    pub review_count: String,
    pub price: String,
    /// Only read in fetched mode when the record has no review total.
    pub review_override: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedInputs {
    pub review_count: f64,
    pub price: f64,
}

pub fn resolve_inputs(
    mode: InputMode,
    raw: &RawInputs,
    fetched: Option<&FetchedRecord>,
) -> Result<ResolvedInputs, CalcError> {
    match mode {
        InputMode::Manual => resolve_manual(raw),
        InputMode::Fetched => resolve_fetched(raw, fetched),
    }
}

fn resolve_manual(raw: &RawInputs) -> Result<ResolvedInputs, CalcError> {
    match (parse_positive(&raw.review_count), parse_positive(&raw.price)) {
        (Some(review_count), Some(price)) => Ok(ResolvedInputs {
            review_count,
            price,
        }),
        _ => Err(CalcError::validation(MANUAL_INPUT_MESSAGE)),
    }
}

fn resolve_fetched(
    raw: &RawInputs,
    fetched: Option<&FetchedRecord>,
) -> Result<ResolvedInputs, CalcError> {
    let record = fetched.ok_or_else(|| CalcError::state(FETCH_FIRST_MESSAGE))?;

    let review_count = match record.review_count {
        Some(count) => count as f64,
        None => parse_positive(&raw.review_override)
            .ok_or_else(|| CalcError::validation(REVIEW_OVERRIDE_MESSAGE))?,
    };

    Ok(ResolvedInputs {
        review_count,
        price: record.price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual(review_count: &str, price: &str) -> RawInputs {
        RawInputs {
            review_count: review_count.to_string(),
            price: price.to_string(),
            review_override: String::new(),
        }
    }

    fn record(review_count: Option<u64>) -> FetchedRecord {
        FetchedRecord {
            app_id: "620".to_string(),
            name: "Portal 2".to_string(),
            price: 9.99,
            review_count,
        }
    }

    #[test]
    fn field_state_treats_zero_as_valid() {
        assert_eq!(field_state(""), FieldState::Empty);
        assert_eq!(field_state("0"), FieldState::Valid);
        assert_eq!(field_state("12.5"), FieldState::Valid);
        assert_eq!(field_state("-1"), FieldState::Invalid);
        assert_eq!(field_state("abc"), FieldState::Invalid);
        assert_eq!(field_state("inf"), FieldState::Invalid);
    }

    #[test]
    fn manual_mode_accepts_positive_pair() {
        let resolved = resolve_inputs(InputMode::Manual, &manual("1000", " 9.99 "), None).unwrap();
        assert_eq!(resolved.review_count, 1000.0);
        assert_eq!(resolved.price, 9.99);
    }

    #[test]
    fn manual_mode_rejects_blank_zero_negative_and_garbage() {
        for (reviews, price) in [("", "9.99"), ("0", "9.99"), ("100", "-1"), ("ten", "5"), ("5", "NaN")] {
            let err = resolve_inputs(InputMode::Manual, &manual(reviews, price), None).unwrap_err();
            assert!(err.is_validation(), "{reviews:?}/{price:?}");
            assert_eq!(err.to_string(), MANUAL_INPUT_MESSAGE);
        }
    }

    #[test]
    fn fetched_mode_requires_a_record() {
        let err = resolve_inputs(InputMode::Fetched, &RawInputs::default(), None).unwrap_err();
        assert!(err.is_state());
        assert_eq!(err.to_string(), FETCH_FIRST_MESSAGE);
    }

    #[test]
    fn fetched_mode_ignores_manual_fields() {
        let raw = manual("5", "1");
        let resolved = resolve_inputs(InputMode::Fetched, &raw, Some(&record(Some(1000)))).unwrap();
        assert_eq!(resolved.review_count, 1000.0);
        assert_eq!(resolved.price, 9.99);
    }

    #[test]
    fn missing_review_total_needs_override() {
        let fetched = record(None);
        let err = resolve_inputs(InputMode::Fetched, &RawInputs::default(), Some(&fetched))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), REVIEW_OVERRIDE_MESSAGE);

        let raw = RawInputs {
            review_override: "0".to_string(),
            ..RawInputs::default()
        };
        assert!(resolve_inputs(InputMode::Fetched, &raw, Some(&fetched)).is_err());
    }

    #[test]
    fn override_resolves_like_manual_entry() {
        let raw = RawInputs {
            review_override: "1000".to_string(),
            ..RawInputs::default()
        };
        let from_override = resolve_inputs(InputMode::Fetched, &raw, Some(&record(None))).unwrap();
        let from_manual = resolve_inputs(InputMode::Manual, &manual("1000", "9.99"), None).unwrap();
        assert_eq!(from_override, from_manual);
    }
}
