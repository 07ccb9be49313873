//! Multinational Interdisciplinary Working Group for Uveitis in Childhood (MIWGUC).
//!
//! Only two subtypes and no antibody or treatment inputs. The frequency is reported in
//! `follow_up`, the recommendation carries the screening intensity.

use crate::constants::{EVERY_12_MONTHS, EVERY_6_MONTHS, NO_SCREENING_REQUIRED};
use crate::guidelines::{group_of, SubtypeTable};
use crate::{PatientRecord, RiskAssessment, RiskLevel, TemporalFeatures};

const ONSET_CUTOFF: u32 = 7;

const FREQUENT: &str = "Frequent screening required";
const MODERATE: &str = "Moderate screening required";
const ROUTINE: &str = "Routine screening required";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MiwgucGroup {
    Jia,
    Systemic,
}

pub const SUBTYPES: &SubtypeTable<MiwgucGroup> = &[
    ("Juvenile Idiopathic Arthritis", Some(MiwgucGroup::Jia)),
    ("Systemic-onset Arthritis", Some(MiwgucGroup::Systemic)),
];

pub fn evaluate(patient: &PatientRecord, features: &TemporalFeatures) -> RiskAssessment {
    match group_of(SUBTYPES, &patient.sub_diagnosis) {
        Some(MiwgucGroup::Systemic) => RiskAssessment::new(
            RiskLevel::VeryLow,
            NO_SCREENING_REQUIRED,
            "None",
            "Very low risk due to diagnosis of Systemic-onset Arthritis, which has a low likelihood of uveitis.",
        ),
        Some(MiwgucGroup::Jia) if features.age_at_onset <= ONSET_CUTOFF => {
            young_onset(features.years_since_diagnosis)
        }
        Some(MiwgucGroup::Jia) => older_onset(features.years_since_diagnosis),
        None => RiskAssessment::new(RiskLevel::NoRisk, NO_SCREENING_REQUIRED, "None", "None"),
    }
}

fn young_onset(years: u32) -> RiskAssessment {
    let (level, recommendation, follow_up, justification) = match years {
        0..=1 => (
            RiskLevel::High,
            FREQUENT,
            "Every 2 Months",
            "High risk due to Juvenile Idiopathic Arthritis diagnosed at or before 7 years of age and within the last year, requiring frequent monitoring for uveitis.",
        ),
        2..=4 => (
            RiskLevel::High,
            FREQUENT,
            "Every 3–4 Months",
            "High risk due to Juvenile Idiopathic Arthritis diagnosed at or before 7 years of age and within 4 years, maintaining a need for frequent uveitis screening.",
        ),
        5..=7 => (
            RiskLevel::Medium,
            MODERATE,
            EVERY_6_MONTHS,
            "Medium risk due to Juvenile Idiopathic Arthritis diagnosed at or before 7 years of age and within 7 years, with a decreasing but still notable uveitis risk.",
        ),
        _ => (
            RiskLevel::Low,
            ROUTINE,
            EVERY_12_MONTHS,
            "Low risk due to Juvenile Idiopathic Arthritis diagnosed at or before 7 years of age and over 7 years ago, with reduced uveitis risk over time.",
        ),
    };
    RiskAssessment::new(level, recommendation, follow_up, justification)
}

fn older_onset(years: u32) -> RiskAssessment {
    let (level, recommendation, follow_up, justification) = match years {
        0..=1 => (
            RiskLevel::High,
            FREQUENT,
            "Every 3–4 Months",
            "High risk due to Juvenile Idiopathic Arthritis diagnosed after 7 years of age and within the last year, requiring frequent uveitis monitoring.",
        ),
        2..=4 => (
            RiskLevel::Medium,
            MODERATE,
            EVERY_6_MONTHS,
            "Medium risk due to Juvenile Idiopathic Arthritis diagnosed after 7 years of age and within 4 years, with a moderate uveitis risk.",
        ),
        _ => (
            RiskLevel::Low,
            ROUTINE,
            EVERY_12_MONTHS,
            "Low risk due to Juvenile Idiopathic Arthritis diagnosed after 7 years of age and over 4 years ago, with a lower uveitis risk.",
        ),
    };
    RiskAssessment::new(level, recommendation, follow_up, justification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::test_support::{features, patient};

    fn run(p: &PatientRecord, today: &str) -> RiskAssessment {
        evaluate(p, &features(p, today))
    }

    #[test]
    fn young_onset_tiers() {
        let p = patient("2012-06-01", "2018-06-01", "Juvenile Idiopathic Arthritis");
        let result = run(&p, "2019-06-01");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.recommendation, FREQUENT);
        assert_eq!(result.follow_up, "Every 2 Months");

        assert_eq!(run(&p, "2022-06-01").follow_up, "Every 3–4 Months");

        let result = run(&p, "2025-06-01");
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.recommendation, MODERATE);

        let result = run(&p, "2026-06-01");
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.follow_up, EVERY_12_MONTHS);
    }

    #[test]
    fn onset_at_seven_is_young_onset() {
        let p = patient("2011-06-01", "2018-06-01", "Juvenile Idiopathic Arthritis");
        let result = run(&p, "2019-01-01");
        assert_eq!(result.follow_up, "Every 2 Months");
    }

    #[test]
    fn older_onset_tiers() {
        let p = patient("2010-06-01", "2018-06-01", "Juvenile Idiopathic Arthritis");
        let result = run(&p, "2019-06-01");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.follow_up, "Every 3–4 Months");
        assert_eq!(run(&p, "2022-06-01").risk_level, RiskLevel::Medium);
        assert_eq!(run(&p, "2023-06-01").risk_level, RiskLevel::Low);
    }

    #[test]
    fn systemic_onset_is_very_low() {
        let p = patient("2012-06-01", "2018-06-01", "Systemic-onset Arthritis");
        let result = run(&p, "2019-06-01");
        assert_eq!(result.risk_level, RiskLevel::VeryLow);
        assert_eq!(result.recommendation, NO_SCREENING_REQUIRED);
    }

    #[test]
    fn unlisted_subtype_keeps_defaults() {
        let p = patient("2012-06-01", "2018-06-01", "Persistent Oligoarthritis");
        let result = run(&p, "2019-06-01");
        assert_eq!(
            result,
            RiskAssessment::new(RiskLevel::NoRisk, NO_SCREENING_REQUIRED, "None", "None")
        );
    }
}
