/// Errors raised at the parsing boundary of the assessment engine.
///
/// The decision procedures themselves never fail: once a [`crate::PatientRecord`] has been
/// assembled, every guideline returns a well-formed [`crate::RiskAssessment`]. These errors only
/// surface while turning caller-supplied text into typed inputs.
#[derive(Debug, thiserror::Error)]
pub enum UveCheckError {
    #[error("invalid date '{value}' (expected YYYY-MM-DD): {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("unknown guideline: {0}")]
    UnknownGuideline(String),
}

pub type UveCheckResult<T> = std::result::Result<T, UveCheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_date, Guideline};

    #[test]
    fn boundary_errors_name_the_bad_value() {
        let err = parse_date("2023-02-30").expect_err("no such day");
        assert!(matches!(&err, UveCheckError::InvalidDate { value, .. } if value == "2023-02-30"));
        assert!(err.to_string().starts_with("invalid date '2023-02-30' (expected YYYY-MM-DD)"));
        assert!(std::error::Error::source(&err).is_some());

        let err = "ATLANTIS".parse::<Guideline>().expect_err("not a guideline");
        assert_eq!(err.to_string(), "unknown guideline: ATLANTIS");
    }
}
