//! Czech / Slovak guideline.
//!
//! Uses continuous time: both the patient's age and the time since diagnosis are fractional years.
//! RF-positive polyarthritis and systemic onset arthritis are graded before the age-out gate, so
//! they stay Medium regardless of age.

use crate::constants::NO_SCREENING_REQUIRED;
use crate::guidelines::{group_of, SubtypeTable};
use crate::{PatientRecord, RiskAssessment, RiskLevel, TemporalFeatures};

const MAX_SCREENING_AGE: f64 = 18.0;
const ONSET_CUTOFF: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CzechSlovakGroup {
    /// Oligoarthritis, psoriatic and RF-negative polyarthritis.
    Articular,
    Hlab27,
    RfPositiveOrSystemic,
}

pub const SUBTYPES: &SubtypeTable<CzechSlovakGroup> = &[
    ("Persistent Oligoarthritis", Some(CzechSlovakGroup::Articular)),
    ("Extended Oligoarthritis", Some(CzechSlovakGroup::Articular)),
    ("RF Negative Polyarthritis", Some(CzechSlovakGroup::Articular)),
    ("Psoriatic Arthritis", Some(CzechSlovakGroup::Articular)),
    ("RF Positive Polyarthritis", Some(CzechSlovakGroup::RfPositiveOrSystemic)),
    ("Systemic Onset Arthritis", Some(CzechSlovakGroup::RfPositiveOrSystemic)),
    ("HLAB27+ Arthritis", Some(CzechSlovakGroup::Hlab27)),
];

pub fn evaluate(patient: &PatientRecord, features: &TemporalFeatures) -> RiskAssessment {
    let group = group_of(SUBTYPES, &patient.sub_diagnosis);

    if group == Some(CzechSlovakGroup::RfPositiveOrSystemic) {
        return RiskAssessment::new(
            RiskLevel::Medium,
            "Screen at diagnosis, then every 6 months until 18 years of age",
            "",
            "Medium risk due to diagnosis of RF Positive Polyarthritis or Systemic Onset Arthritis.",
        );
    }

    let ana = patient.ana_positive();
    let age = features.current_age_fractional;

    if age > MAX_SCREENING_AGE && !ana {
        return RiskAssessment::new(
            RiskLevel::VeryLow,
            NO_SCREENING_REQUIRED,
            "None",
            "Very low risk due to age > 18 years and negative ANA.",
        );
    }

    if group.is_none() {
        return RiskAssessment::new(RiskLevel::NoRisk, "", "", "");
    }

    let years = features.fractional_years_since_diagnosis;

    if features.age_at_onset <= ONSET_CUTOFF || ana {
        let follow_up = "Continue into adulthood";
        let (level, recommendation, justification) = if years < 0.5 {
            (
                RiskLevel::High,
                "Every 2 months",
                "High risk due to onset age ≤ 6 or positive ANA, and time since diagnosis < 0.5 years.",
            )
        } else if years <= 4.0 {
            (
                RiskLevel::High,
                "Every 3 months",
                "High risk due to onset age ≤ 6 or positive ANA, and time since diagnosis ≤ 4 years.",
            )
        } else if age < MAX_SCREENING_AGE {
            (
                RiskLevel::Medium,
                "Every 6 months",
                "Medium risk due to onset age ≤ 6 or positive ANA, time since diagnosis > 4 years, and age < 18.",
            )
        } else if age > MAX_SCREENING_AGE && ana {
            (
                RiskLevel::LowToMedium,
                "Every 6–12 months",
                "Low to medium risk due to age > 18 and positive ANA.",
            )
        } else {
            // Exactly 18 years of age is not graded by the guideline.
            (RiskLevel::NoRisk, "", "")
        };
        return RiskAssessment::new(level, recommendation, follow_up, justification);
    }

    if years < 4.0 {
        RiskAssessment::new(
            RiskLevel::High,
            "Every 3 months",
            "Until 18 years of age",
            "High risk due to negative ANA, onset age > 6, and time since diagnosis < 4 years.",
        )
    } else {
        RiskAssessment::new(
            RiskLevel::Medium,
            "Every 6 months",
            "Until 18 years of age",
            "Medium risk due to negative ANA, onset age > 6, and time since diagnosis ≥ 4 years.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::test_support::{features, patient};
    use crate::AntibodyStatus;

    fn run(p: &PatientRecord, today: &str) -> RiskAssessment {
        evaluate(p, &features(p, today))
    }

    #[test]
    fn young_onset_continuous_time_tiers() {
        let p = patient("2012-01-01", "2017-01-01", "Persistent Oligoarthritis");
        let result = run(&p, "2017-05-01");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.recommendation, "Every 2 months");
        assert_eq!(result.follow_up, "Continue into adulthood");

        assert_eq!(run(&p, "2020-12-01").recommendation, "Every 3 months");

        let result = run(&p, "2021-02-01");
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.recommendation, "Every 6 months");
    }

    #[test]
    fn onset_six_counts_as_young_onset() {
        let p = patient("2011-01-01", "2017-01-01", "HLAB27+ Arthritis");
        let result = run(&p, "2018-01-01");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.follow_up, "Continue into adulthood");
    }

    #[test]
    fn older_onset_negative_ana() {
        let p = patient("2010-01-01", "2017-06-01", "Extended Oligoarthritis")
            .with_antibody(AntibodyStatus::Negative);
        let result = run(&p, "2019-01-01");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.follow_up, "Until 18 years of age");
        assert_eq!(run(&p, "2021-06-02").risk_level, RiskLevel::Medium);
    }

    #[test]
    fn adult_with_positive_ana_is_low_to_medium() {
        let p = patient("2000-01-01", "2008-01-01", "Psoriatic Arthritis")
            .with_antibody(AntibodyStatus::Positive);
        let result = run(&p, "2019-01-01");
        assert_eq!(result.risk_level, RiskLevel::LowToMedium);
        assert_eq!(result.risk_level.label(), "Low to Medium Risk");
    }

    #[test]
    fn adult_with_negative_ana_ages_out() {
        let p = patient("2000-01-01", "2008-01-01", "Psoriatic Arthritis")
            .with_antibody(AntibodyStatus::Negative);
        let result = run(&p, "2019-01-01");
        assert_eq!(result.risk_level, RiskLevel::VeryLow);
        assert_eq!(result.recommendation, NO_SCREENING_REQUIRED);
    }

    #[test]
    fn rf_positive_is_medium_even_past_age_out() {
        let p = patient("1990-01-01", "1995-01-01", "RF Positive Polyarthritis")
            .with_antibody(AntibodyStatus::Negative);
        let result = run(&p, "2020-01-01");
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(result.follow_up.is_empty());
    }

    #[test]
    fn unknown_subtype_is_no_risk() {
        let p = patient("2012-01-01", "2017-01-01", "Oligoarthritis");
        let result = run(&p, "2018-01-01");
        assert_eq!(result, RiskAssessment::new(RiskLevel::NoRisk, "", "", ""));
    }
}
