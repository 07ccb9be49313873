//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, so that every assessment served by one process sees the same
//! evaluation-date policy.

use crate::dates::parse_date;
use crate::UveCheckResult;
use chrono::NaiveDate;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    fixed_today: Option<NaiveDate>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// With `fixed_today` set, every assessment is evaluated as of that date instead of the
    /// system clock. This is intended for audits and reproducible reports.
    pub fn new(fixed_today: Option<NaiveDate>) -> Self {
        Self { fixed_today }
    }

    pub fn fixed_today(&self) -> Option<NaiveDate> {
        self.fixed_today
    }

    /// The evaluation date for one assessment.
    ///
    /// Callers must read this once per assessment and pass the value down.
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Parse the evaluation-date override from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `None` (use the system clock).
pub fn today_from_env_value(value: Option<String>) -> UveCheckResult<Option<NaiveDate>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    value.map(|v| parse_date(&v)).transpose()
}
