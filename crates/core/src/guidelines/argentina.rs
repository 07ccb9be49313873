//! Argentina guideline.
//!
//! Screening continues until 21 years of age. Systemic onset arthritis is a flat Low and is
//! checked before the remaining subtypes are graded together.

use crate::constants::{EVERY_12_MONTHS, EVERY_3_MONTHS, EVERY_6_MONTHS, NO_SCREENING_REQUIRED};
use crate::guidelines::{group_of, SubtypeTable};
use crate::{PatientRecord, RiskAssessment, RiskLevel, TemporalFeatures};

const MAX_SCREENING_AGE: u32 = 21;
const ONSET_CUTOFF: u32 = 6;
const FOLLOW_UP: &str = "Until 21 years";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgentinaGroup {
    Systemic,
    /// Every other subtype the guideline offers.
    Articular,
}

pub const SUBTYPES: &SubtypeTable<ArgentinaGroup> = &[
    ("Persistent Oligoarthritis", Some(ArgentinaGroup::Articular)),
    ("Extended Oligoarthritis", Some(ArgentinaGroup::Articular)),
    ("RF Negative Polyarthritis", Some(ArgentinaGroup::Articular)),
    ("Psoriatic Arthritis", Some(ArgentinaGroup::Articular)),
    ("RF Positive Arthritis", Some(ArgentinaGroup::Articular)),
    ("Enthesitis related Arthritis", Some(ArgentinaGroup::Articular)),
    ("Systemic onset Arthritis", Some(ArgentinaGroup::Systemic)),
];

pub fn evaluate(patient: &PatientRecord, features: &TemporalFeatures) -> RiskAssessment {
    if features.current_age > MAX_SCREENING_AGE {
        return RiskAssessment::new(
            RiskLevel::VeryLow,
            NO_SCREENING_REQUIRED,
            "None",
            "Very low risk due to age > 21 years.",
        );
    }

    let ana = patient.ana_positive();
    let years = features.years_since_diagnosis;

    let (level, recommendation, justification) = match group_of(SUBTYPES, &patient.sub_diagnosis) {
        Some(ArgentinaGroup::Systemic) => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to diagnosis of Systemic onset Arthritis.",
        ),
        Some(ArgentinaGroup::Articular) if features.age_at_onset <= ONSET_CUTOFF => {
            match (ana, years) {
                (true, 0..=4) => (
                    RiskLevel::High,
                    EVERY_3_MONTHS,
                    "High risk due to positive ANA, onset age ≤ 6, and time since diagnosis ≤ 4 years.",
                ),
                (true, 5..=7) => (
                    RiskLevel::Medium,
                    EVERY_6_MONTHS,
                    "Medium risk due to positive ANA, onset age ≤ 6, and time since diagnosis between 4 and 7 years.",
                ),
                (true, _) => (
                    RiskLevel::Low,
                    EVERY_12_MONTHS,
                    "Low risk due to positive ANA, onset age ≤ 6, and time since diagnosis > 7 years.",
                ),
                (false, 0..=4) => (
                    RiskLevel::Medium,
                    EVERY_6_MONTHS,
                    "Medium risk due to negative ANA, onset age ≤ 6, and time since diagnosis ≤ 4 years.",
                ),
                (false, _) => (
                    RiskLevel::Low,
                    EVERY_12_MONTHS,
                    "Low risk due to negative ANA, onset age ≤ 6, and time since diagnosis > 4 years.",
                ),
            }
        }
        Some(ArgentinaGroup::Articular) if ana && years <= 4 => (
            RiskLevel::Medium,
            EVERY_6_MONTHS,
            "Medium risk due to positive ANA, onset age > 6, and time since diagnosis ≤ 4 years.",
        ),
        Some(ArgentinaGroup::Articular) => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to onset age > 6 and lower risk profile.",
        ),
        None => (RiskLevel::NoRisk, "", ""),
    };

    RiskAssessment::new(level, recommendation, FOLLOW_UP, justification)
}
