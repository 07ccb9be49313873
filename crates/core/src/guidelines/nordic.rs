//! Nordic guideline.
//!
//! Screening stops at 16 years of age. Oligo/polyarticular patients are graded on onset age
//! (cutoff 6), ANA, methotrexate and whole years since diagnosis. A biologic other than
//! etanercept then lowers the grade by one step.

use crate::constants::{EVERY_12_MONTHS, EVERY_3_MONTHS, EVERY_6_MONTHS, NO_SCREENING_REQUIRED};
use crate::guidelines::{group_of, SubtypeTable};
use crate::{BiologicTreatment, PatientRecord, RiskAssessment, RiskLevel, TemporalFeatures};

const MAX_SCREENING_AGE: u32 = 16;
const ONSET_CUTOFF: u32 = 6;

const FOLLOW_UP_YOUNG_ONSET: &str = "Follow-up continues until 16 Years of age";
const FOLLOW_UP_OLDER_ONSET: &str = "Follow-up for 2 - 4 years, max 16 years of age";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NordicGroup {
    /// Oligoarthritis, RF-negative polyarthritis, psoriatic and undifferentiated arthritis.
    Articular,
    EnthesitisRelated,
    /// RF-positive or systemic onset arthritis.
    RfPositiveOrSystemic,
}

pub const SUBTYPES: &SubtypeTable<NordicGroup> = &[
    ("Oligoarthritis", Some(NordicGroup::Articular)),
    ("RF Negative Polyarthritis", Some(NordicGroup::Articular)),
    ("Psoriatic Arthritis", Some(NordicGroup::Articular)),
    ("RF Positive Arthritis", Some(NordicGroup::RfPositiveOrSystemic)),
    ("Enthesitis related Arthritis", Some(NordicGroup::EnthesitisRelated)),
    ("Systemic Onset Arthritis", Some(NordicGroup::RfPositiveOrSystemic)),
    ("Undifferentiated Arthritis", Some(NordicGroup::Articular)),
];

pub fn evaluate(patient: &PatientRecord, features: &TemporalFeatures) -> RiskAssessment {
    if features.current_age > MAX_SCREENING_AGE {
        return RiskAssessment::new(
            RiskLevel::VeryLow,
            NO_SCREENING_REQUIRED,
            "None",
            "Screening guidelines apply only until 16 years of age.",
        );
    }

    let primary = classify(patient, features);
    apply_biologic_downgrade(primary, &patient.biologic_treatment)
}

fn classify(patient: &PatientRecord, features: &TemporalFeatures) -> RiskAssessment {
    let mut assessment = RiskAssessment::new(
        RiskLevel::NoRisk,
        "None",
        "None",
        "Standard risk calculation applied.",
    );

    match group_of(SUBTYPES, &patient.sub_diagnosis) {
        Some(NordicGroup::Articular) => {
            let ana = patient.ana_positive();
            let methotrexate = patient.on_methotrexate.is_yes();
            let years = features.years_since_diagnosis;

            let graded = if features.age_at_onset <= ONSET_CUTOFF {
                assessment.follow_up = FOLLOW_UP_YOUNG_ONSET.into();
                grade_young_onset(ana, methotrexate, years)
            } else {
                assessment.follow_up = FOLLOW_UP_OLDER_ONSET.into();
                grade_older_onset(ana, methotrexate, years)
            };

            if let Some((level, recommendation, justification)) = graded {
                assessment.risk_level = level;
                assessment.recommendation = recommendation.into();
                assessment.justification = justification.into();
            }
        }
        Some(NordicGroup::EnthesitisRelated) => {
            assessment.risk_level = RiskLevel::Low;
            assessment.recommendation = EVERY_12_MONTHS.into();
            if features.age_at_onset <= ONSET_CUTOFF {
                assessment.follow_up = "Follow-up for 4 - 7 years, max 16 years of age".into();
                assessment.justification =
                    "Low risk: Enthesitis related arthritis with onset ≤ 6 years.".into();
            } else {
                assessment.follow_up = FOLLOW_UP_OLDER_ONSET.into();
                assessment.justification =
                    "Low risk: Enthesitis related arthritis with onset > 6 years.".into();
            }
        }
        Some(NordicGroup::RfPositiveOrSystemic) => {
            assessment.risk_level = RiskLevel::VeryLow;
            assessment.recommendation = "Screen at Diagnosis".into();
            assessment.justification =
                "Very low risk: RF positive or systemic onset arthritis.".into();
        }
        None => {}
    }

    assessment
}

type Grade = (RiskLevel, &'static str, &'static str);

fn grade_young_onset(ana: bool, methotrexate: bool, years: u32) -> Option<Grade> {
    let grade = match (ana, methotrexate) {
        (true, false) if years <= 4 => (
            RiskLevel::High,
            EVERY_3_MONTHS,
            "High risk due to ANA+ without methotrexate, onset ≤ 6 years.",
        ),
        (true, false) if years < 7 => (
            RiskLevel::Medium,
            EVERY_6_MONTHS,
            "Medium risk due to ANA+ without methotrexate, time since diagnosis 4–7 years.",
        ),
        (true, false) => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA+ without methotrexate, time since diagnosis ≥ 7 years.",
        ),
        (true, true) if years <= 4 => (
            RiskLevel::Medium,
            EVERY_6_MONTHS,
            "Medium risk due to ANA+ with methotrexate, onset ≤ 6 years.",
        ),
        (true, true) if years < 7 => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA+ with methotrexate, time since diagnosis 4–7 years.",
        ),
        (false, false) if years <= 4 => (
            RiskLevel::Medium,
            EVERY_6_MONTHS,
            "Medium risk due to ANA- without methotrexate, onset ≤ 6 years.",
        ),
        (false, false) => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA- without methotrexate, time since diagnosis > 4 years.",
        ),
        (false, true) if years > 4 => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA- with methotrexate, time since diagnosis > 4 years.",
        ),
        // ANA+ on methotrexate for 7+ years, or ANA- on methotrexate within 4 years, is not
        // graded by the guideline.
        _ => return None,
    };
    Some(grade)
}

fn grade_older_onset(ana: bool, methotrexate: bool, years: u32) -> Option<Grade> {
    let grade = match (ana, methotrexate) {
        (true, false) if years <= 2 => (
            RiskLevel::Medium,
            EVERY_6_MONTHS,
            "Medium risk due to ANA+ without methotrexate, onset > 6 years, time since diagnosis ≤ 2 years.",
        ),
        (true, false) => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA+ without methotrexate, onset > 6 years, time since diagnosis > 2 years.",
        ),
        (true, true) if years > 0 => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA+ with methotrexate, onset > 6 years.",
        ),
        (true, true) => return None,
        (false, _) => (
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA- regardless of methotrexate, onset > 6 years.",
        ),
    };
    Some(grade)
}

/// Lower a primary classification by one step for patients on a risk-lowering biologic.
///
/// Applied exactly once per evaluation. Only High and Medium move; the follow-up duration is
/// left as classified.
pub fn apply_biologic_downgrade(
    mut assessment: RiskAssessment,
    treatment: &BiologicTreatment,
) -> RiskAssessment {
    if !treatment.lowers_uveitis_risk() {
        return assessment;
    }

    let demoted = assessment.risk_level.demote();
    let recommendation = match (assessment.risk_level, demoted) {
        (RiskLevel::High, RiskLevel::Medium) => EVERY_6_MONTHS,
        (RiskLevel::Medium, RiskLevel::Low) => EVERY_12_MONTHS,
        _ => return assessment,
    };

    assessment.risk_level = demoted;
    assessment.recommendation = recommendation.into();
    assessment.justification = "Risk downgraded due to biological treatment.".into();
    assessment
}
