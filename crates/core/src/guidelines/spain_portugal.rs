//! Spain / Portugal guideline.
//!
//! Screening stops after 16 years of age. Undifferentiated arthritis is offered by the form but
//! not graded.

use crate::constants::{EVERY_12_MONTHS, EVERY_3_MONTHS, EVERY_6_MONTHS, NO_SCREENING_REQUIRED};
use crate::guidelines::{group_of, SubtypeTable};
use crate::{PatientRecord, RiskAssessment, RiskLevel, TemporalFeatures};

const MAX_SCREENING_AGE: u32 = 16;
const ONSET_CUTOFF: u32 = 6;
const SCREENING_PERIOD: &str = "Follow-up continues until 16 years of age";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpainPortugalGroup {
    Articular,
    Other,
}

pub const SUBTYPES: &SubtypeTable<SpainPortugalGroup> = &[
    ("Persistent Oligoarthritis", Some(SpainPortugalGroup::Articular)),
    ("Extended Oligoarthritis", Some(SpainPortugalGroup::Articular)),
    ("RF Negative Polyarthritis", Some(SpainPortugalGroup::Articular)),
    ("Psoriatic Arthritis", Some(SpainPortugalGroup::Articular)),
    ("RF Positive Arthritis", Some(SpainPortugalGroup::Other)),
    ("Enthesitis related Arthritis", Some(SpainPortugalGroup::Other)),
    ("Systemic onset Arthritis", Some(SpainPortugalGroup::Other)),
    ("Undifferentiated Arthritis", None),
];

pub fn evaluate(patient: &PatientRecord, features: &TemporalFeatures) -> RiskAssessment {
    if features.current_age > MAX_SCREENING_AGE {
        return RiskAssessment::new(
            RiskLevel::VeryLow,
            NO_SCREENING_REQUIRED,
            "None",
            "Very low risk due to current age > 16 years.",
        );
    }

    let ana = patient.ana_positive();
    let years = features.years_since_diagnosis;

    let (level, follow_up, justification) = match group_of(SUBTYPES, &patient.sub_diagnosis) {
        Some(SpainPortugalGroup::Articular) if features.age_at_onset <= ONSET_CUTOFF => {
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
        Some(SpainPortugalGroup::Articular) => match (ana, years <= 2) {
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
        Some(SpainPortugalGroup::Other) => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to diagnosis of Enthesitis related Arthritis, RF Positive Arthritis, or Systemic onset Arthritis.",
        ),
        None => (RiskLevel::NoRisk, "", ""),
    };

    RiskAssessment::new(level, SCREENING_PERIOD, follow_up, justification)
}
