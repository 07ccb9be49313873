//! US / Pakistan guideline.
//!
//! No age-out gate. Screening frequency is reported in `follow_up`.

use crate::constants::{EVERY_12_MONTHS, EVERY_3_MONTHS, EVERY_6_MONTHS, NO_SCREENING_REQUIRED};
use crate::guidelines::{group_of, SubtypeTable};
use crate::{PatientRecord, RiskAssessment, RiskLevel, TemporalFeatures};

const ONSET_CUTOFF: u32 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsPakistanGroup {
    /// Group 1: oligoarthritis, RF-negative polyarthritis, psoriatic and undifferentiated.
    Articular,
    /// Group 2: enthesitis related, RF-positive and systemic onset arthritis.
    Other,
}

pub const SUBTYPES: &SubtypeTable<UsPakistanGroup> = &[
    ("Extended Oligoarthritis", Some(UsPakistanGroup::Articular)),
    ("Persistent Oligoarthritis", Some(UsPakistanGroup::Articular)),
    ("RF Negative Polyarthritis", Some(UsPakistanGroup::Articular)),
    ("Psoriatic Arthritis", Some(UsPakistanGroup::Articular)),
    ("RF Positive Arthritis", Some(UsPakistanGroup::Other)),
    ("Enthesitis related Arthritis", Some(UsPakistanGroup::Other)),
    ("Systemic onset Arthritis", Some(UsPakistanGroup::Other)),
    ("Undifferentiated Arthritis", Some(UsPakistanGroup::Articular)),
];

pub fn evaluate(patient: &PatientRecord, features: &TemporalFeatures) -> RiskAssessment {
    let ana = patient.ana_positive();
    let years = features.years_since_diagnosis;

    let (level, follow_up, justification) = match group_of(SUBTYPES, &patient.sub_diagnosis) {
        Some(UsPakistanGroup::Articular) if features.age_at_onset <= ONSET_CUTOFF => {
            match (ana, years) {
                (true, 0..=4) => (
                    RiskLevel::High,
                    EVERY_3_MONTHS,
                    "High risk due to positive ANA and time since diagnosis ≤ 4 years for onset age ≤ 7.",
                ),
                (true, 5..=6) => (
                    RiskLevel::Medium,
                    EVERY_6_MONTHS,
                    "Medium risk due to positive ANA and time since diagnosis between 4 and 7 years for onset age ≤ 7.",
                ),
                (true, _) => (
                    RiskLevel::Low,
                    EVERY_12_MONTHS,
                    "Low risk due to positive ANA and time since diagnosis > 7 years for onset age ≤ 7.",
                ),
                (false, 0..=4) => (
                    RiskLevel::Medium,
                    EVERY_6_MONTHS,
                    "Medium risk due to negative ANA and time since diagnosis ≤ 4 years for onset age ≤ 7.",
                ),
                (false, _) => (
                    RiskLevel::Low,
                    EVERY_12_MONTHS,
                    "Low risk due to negative ANA and time since diagnosis > 4 years for onset age ≤ 7.",
                ),
            }
        }
        Some(UsPakistanGroup::Articular) => match (ana, years) {
            (true, 0..=4) => (
                RiskLevel::Medium,
                EVERY_6_MONTHS,
                "Medium risk due to positive ANA and time since diagnosis ≤ 4 years for onset age > 7.",
            ),
            (true, _) => (
                RiskLevel::Low,
                EVERY_12_MONTHS,
                "Low risk due to positive ANA and time since diagnosis > 4 years for onset age > 7.",
            ),
            (false, _) => (
                RiskLevel::Low,
                EVERY_12_MONTHS,
                "Low risk due to negative ANA for onset age > 7.",
            ),
        },
        Some(UsPakistanGroup::Other) => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to sub-diagnosis in Group 2.",
        ),
        None => (RiskLevel::NoRisk, "None", ""),
    };

    RiskAssessment::new(level, NO_SCREENING_REQUIRED, follow_up, justification)
}
