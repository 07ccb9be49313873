//! Dispatch from a guideline to its decision procedure.

use chrono::NaiveDate;

use crate::guidelines::{
    argentina, czech_slovak, germany, miwguc, nordic, spain_portugal, uk, us_pakistan,
};
use crate::{Guideline, PatientRecord, RiskAssessment, TemporalFeatures};

/// Grade a patient under `guideline` as of `today`.
///
/// Pure and total: every patient record produces an assessment, and the same inputs always
/// produce the same result.
pub fn evaluate(guideline: Guideline, patient: &PatientRecord, today: NaiveDate) -> RiskAssessment {
    let features = TemporalFeatures::compute(patient.birth_date, patient.diagnosis_date, today);

    match guideline {
        Guideline::Nordic => nordic::evaluate(patient, &features),
        Guideline::UsPakistan => us_pakistan::evaluate(patient, &features),
        Guideline::Germany => germany::evaluate(patient, &features),
        Guideline::SpainPortugal => spain_portugal::evaluate(patient, &features),
        Guideline::Uk => uk::evaluate(patient, &features),
        Guideline::CzechSlovak => czech_slovak::evaluate(patient, &features),
        Guideline::Argentina => argentina::evaluate(patient, &features),
        Guideline::Miwguc => miwguc::evaluate(patient, &features),
    }
}

/// Like [`evaluate`], keyed by identifier. An unknown identifier yields the `Error` assessment.
pub fn evaluate_by_id(id: &str, patient: &PatientRecord, today: NaiveDate) -> RiskAssessment {
    match id.parse::<Guideline>() {
        Ok(guideline) => evaluate(guideline, patient, today),
        Err(_) => RiskAssessment::guideline_not_found(),
    }
}
