//! Germany guideline.
//!
//! Screening stops once more than 7 whole years have passed since diagnosis.

use crate::constants::{EVERY_12_MONTHS, EVERY_3_MONTHS, EVERY_6_MONTHS, NO_SCREENING_REQUIRED};
use crate::guidelines::{group_of, SubtypeTable};
use crate::{PatientRecord, RiskAssessment, RiskLevel, TemporalFeatures};

const MAX_YEARS_SINCE_DIAGNOSIS: u32 = 7;
const ONSET_CUTOFF: u32 = 6;
const SCREENING_PERIOD: &str = "Follow-up continues for 7 years from diagnosis";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GermanyGroup {
    Articular,
    Other,
}

pub const SUBTYPES: &SubtypeTable<GermanyGroup> = &[
    ("Persistent Oligoarthritis", Some(GermanyGroup::Articular)),
    ("Extended Oligoarthritis", Some(GermanyGroup::Articular)),
    ("RF Negative Polyarthritis", Some(GermanyGroup::Articular)),
    ("Psoriatic Arthritis", Some(GermanyGroup::Articular)),
    ("RF Positive Arthritis", Some(GermanyGroup::Other)),
    ("Enthesitis related Arthritis", Some(GermanyGroup::Other)),
    ("Systemic onset Arthritis", Some(GermanyGroup::Other)),
    ("Undifferentiated Arthritis", Some(GermanyGroup::Articular)),
];

pub fn evaluate(patient: &PatientRecord, features: &TemporalFeatures) -> RiskAssessment {
    let years = features.years_since_diagnosis;

    if years > MAX_YEARS_SINCE_DIAGNOSIS {
        return RiskAssessment::new(
            RiskLevel::VeryLow,
            NO_SCREENING_REQUIRED,
            "None",
            "Very low risk due to time since diagnosis > 7 years.",
        );
    }

    let ana = patient.ana_positive();
    let (level, follow_up, justification) = match group_of(SUBTYPES, &patient.sub_diagnosis) {
        Some(GermanyGroup::Articular) if features.age_at_onset <= ONSET_CUTOFF => {
            match (ana, years <= 4) {
                (true, true) => (
                    RiskLevel::High,
                    EVERY_3_MONTHS,
                    "High risk due to positive ANA, onset age ≤ 6, and time since diagnosis ≤ 4 years.",
                ),
                (true, false) => (
                    RiskLevel::Medium,
                    EVERY_6_MONTHS,
                    "Medium risk due to positive ANA, onset age ≤ 6, and time since diagnosis > 4 years.",
                ),
                (false, true) => (
                    RiskLevel::Medium,
                    EVERY_6_MONTHS,
                    "Medium risk due to negative ANA, onset age ≤ 6, and time since diagnosis ≤ 4 years.",
                ),
                (false, false) => (
                    RiskLevel::Low,
                    EVERY_12_MONTHS,
                    "Low risk due to negative ANA, onset age ≤ 6, and time since diagnosis > 4 years.",
                ),
            }
        }
        Some(GermanyGroup::Articular) => match (ana, years <= 2) {
            (true, true) => (
                RiskLevel::Medium,
                EVERY_6_MONTHS,
                "Medium risk due to positive ANA, onset age > 6, and time since diagnosis ≤ 2 years.",
            ),
            (true, false) => (
                RiskLevel::Low,
                EVERY_12_MONTHS,
                "Low risk due to positive ANA, onset age > 6, and time since diagnosis > 2 years.",
            ),
            (false, _) => (
                RiskLevel::Low,
                EVERY_12_MONTHS,
                "Low risk due to negative ANA and onset age > 6.",
            ),
        },
        Some(GermanyGroup::Other) => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to sub-diagnosis in Group 2.",
        ),
        None => return RiskAssessment::new(RiskLevel::NoRisk, "", "", ""),
    };

    RiskAssessment::new(level, SCREENING_PERIOD, follow_up, justification)
}
