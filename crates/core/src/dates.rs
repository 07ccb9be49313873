//! Temporal feature calculation.
//!
//! Every quantity a guideline branches on (current age, onset age, time since diagnosis) is
//! derived here from calendar dates. Dates are `chrono::NaiveDate` values: they carry no time of
//! day and no timezone, so a date can never roll over to a neighbouring day during conversion.
//!
//! Whole-year and whole-month counts use calendar anniversaries rather than an average year
//! length. A patient born on 10 March turns one year older on 10 March, not 365.25 days later.

use crate::constants::{DATE_FORMAT, DAYS_PER_YEAR};
use crate::{UveCheckError, UveCheckResult};
use chrono::{Datelike, NaiveDate};

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`UveCheckError::InvalidDate`] if the text is not a valid calendar date.
pub fn parse_date(value: &str) -> UveCheckResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        UveCheckError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// Parse an optional `YYYY-MM-DD` date where an empty string means "not provided".
///
/// # Errors
///
/// Returns [`UveCheckError::InvalidDate`] if the text is non-empty and not a valid date.
pub fn parse_optional_date(value: &str) -> UveCheckResult<Option<NaiveDate>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date(value).map(Some)
}

/// Completed years between two dates, clamped to zero.
pub fn whole_years_between(early: NaiveDate, late: NaiveDate) -> u32 {
    let mut years = late.year() - early.year();
    if (late.month(), late.day()) < (early.month(), early.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Completed months between two dates, clamped to zero.
pub fn whole_months_between(early: NaiveDate, late: NaiveDate) -> u32 {
    let mut months = (late.year() - early.year()) * 12 + late.month() as i32 - early.month() as i32;
    if late.day() < early.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Elapsed days divided by 365.25, clamped to zero.
pub fn fractional_years_between(early: NaiveDate, late: NaiveDate) -> f64 {
    let days = late.signed_duration_since(early).num_days();
    (days as f64 / DAYS_PER_YEAR).max(0.0)
}

/// Numeric features derived from a patient's dates for one assessment.
///
/// Built fresh for every evaluation from an explicit `today`; never cached. A missing date makes
/// every quantity that depends on it zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemporalFeatures {
    pub current_age: u32,
    pub current_age_fractional: f64,
    pub age_at_onset: u32,
    pub years_since_diagnosis: u32,
    pub fractional_years_since_diagnosis: f64,
    pub months_since_diagnosis: u32,
}

impl TemporalFeatures {
    pub fn compute(
        birth_date: Option<NaiveDate>,
        diagnosis_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let since = |date: Option<NaiveDate>, f: fn(NaiveDate, NaiveDate) -> u32| {
            date.map_or(0, |d| f(d, today))
        };

        Self {
            current_age: since(birth_date, whole_years_between),
            current_age_fractional: birth_date
                .map_or(0.0, |d| fractional_years_between(d, today)),
            age_at_onset: match (birth_date, diagnosis_date) {
                (Some(birth), Some(diagnosis)) => whole_years_between(birth, diagnosis),
                _ => 0,
            },
            years_since_diagnosis: since(diagnosis_date, whole_years_between),
            fractional_years_since_diagnosis: diagnosis_date
                .map_or(0.0, |d| fractional_years_between(d, today)),
            months_since_diagnosis: since(diagnosis_date, whole_months_between),
        }
    }
}
