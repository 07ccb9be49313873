//! Assessment service.
//!
//! Wraps [`crate::evaluate`] with the process's evaluation-date policy and echoes the derived
//! inputs back on the result.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    evaluate, CoreConfig, Guideline, InputSummary, PatientRecord, RiskAssessment,
    TemporalFeatures,
};

/// Service for running guideline assessments.
#[derive(Clone)]
pub struct AssessmentService {
    cfg: Arc<CoreConfig>,
}

impl AssessmentService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Assess one patient under `guideline`.
    ///
    /// The evaluation date is read once from the configuration (or the system clock) and used for
    /// both the grading and the input summary.
    pub fn assess(&self, guideline: Guideline, patient: &PatientRecord) -> RiskAssessment {
        let today = self.cfg.today();
        self.assess_on(guideline, patient, today)
    }

    /// Assess as of an explicit date, ignoring the configured policy.
    pub fn assess_on(
        &self,
        guideline: Guideline,
        patient: &PatientRecord,
        today: NaiveDate,
    ) -> RiskAssessment {
        let mut assessment = evaluate(guideline, patient, today);
        let features = TemporalFeatures::compute(patient.birth_date, patient.diagnosis_date, today);
        assessment.inputs = Some(summarise(&features));

        tracing::debug!(
            guideline = guideline.id(),
            sub_diagnosis = %patient.sub_diagnosis,
            %today,
            risk_level = %assessment.risk_level,
            "assessment evaluated"
        );

        assessment
    }
}

fn years(n: u32) -> String {
    if n == 1 {
        "1 year".to_string()
    } else {
        format!("{n} years")
    }
}

fn months(n: u32) -> String {
    if n == 1 {
        "1 month".to_string()
    } else {
        format!("{n} months")
    }
}

fn summarise(features: &TemporalFeatures) -> InputSummary {
    let months_since = features.months_since_diagnosis;
    InputSummary {
        current_age: years(features.current_age),
        age_at_onset: years(features.age_at_onset),
        time_since_diagnosis: format!(
            "{}, {}",
            years(months_since / 12),
            months(months_since % 12)
        ),
    }
}
