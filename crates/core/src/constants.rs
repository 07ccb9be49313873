//! Constants used throughout the UveCheck core crate.
//!
//! Shared result texts live here so the guideline procedures and their tests agree on the exact
//! wording callers display.

/// Date format accepted for every calendar date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days per year used for continuous-time thresholds.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Environment variable holding an optional fixed evaluation date.
pub const TODAY_ENV_VAR: &str = "UVECHECK_TODAY";

/// Recommendation returned when a guideline's age-out gate applies.
pub const NO_SCREENING_REQUIRED: &str = "No screening required";

/// Recommendation returned for an unrecognised guideline identifier.
pub const GUIDELINE_NOT_FOUND: &str = "Guideline not found.";

pub const EVERY_3_MONTHS: &str = "Every 3 Months";
pub const EVERY_6_MONTHS: &str = "Every 6 Months";
pub const EVERY_12_MONTHS: &str = "Every 12 Months";

/// Biologic treatment label meaning "no biologic, or one not listed".
pub const BIOLOGIC_NONE_OTHER: &str = "None / Other";
