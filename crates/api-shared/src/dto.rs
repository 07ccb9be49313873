//! Wire types for the UveCheck APIs.
//!
//! All bodies are JSON with camelCase field names. Form answers arrive as plain strings so that a
//! blank answer is accepted and left for the engine to treat as unset.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uvecheck_core::{
    Guideline, InputSummary, PatientRecord, Question, RiskAssessment, UveCheckResult,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// One assessment request: a guideline identifier and the form answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentReq {
    /// Guideline identifier, e.g. `NORDIC` or `us-pakistan`.
    #[schema(example = "US_PAKISTAN")]
    pub guideline: String,
    #[schema(example = "2015-01-01")]
    pub birth_date: String,
    #[schema(example = "2020-01-01")]
    pub diagnosis_date: String,
    #[schema(example = "RF Negative Polyarthritis")]
    pub sub_diagnosis: String,
    /// "Yes", "No" or empty.
    pub ana: String,
    /// "Yes", "No" or empty.
    pub methotrexate: String,
    pub biologic_treatment: String,
}

impl AssessmentReq {
    /// Parse the answers into a patient record. Fails only on a malformed date.
    pub fn patient_record(&self) -> UveCheckResult<PatientRecord> {
        PatientRecord::from_answers(
            &self.birth_date,
            &self.diagnosis_date,
            &self.sub_diagnosis,
            &self.ana,
            &self.methotrexate,
            &self.biologic_treatment,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InputSummaryRes {
    pub current_age: String,
    pub age_at_onset: String,
    pub time_since_diagnosis: String,
}

impl From<InputSummary> for InputSummaryRes {
    fn from(summary: InputSummary) -> Self {
        Self {
            current_age: summary.current_age,
            age_at_onset: summary.age_at_onset,
            time_since_diagnosis: summary.time_since_diagnosis,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRes {
    #[schema(example = "High Risk")]
    pub risk_level: String,
    pub recommendation: String,
    pub follow_up: String,
    pub justification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<InputSummaryRes>,
}

impl From<RiskAssessment> for AssessmentRes {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            risk_level: assessment.risk_level.label().to_string(),
            recommendation: assessment.recommendation,
            follow_up: assessment.follow_up,
            justification: assessment.justification,
            inputs: assessment.inputs.map(InputSummaryRes::from),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GuidelineSummary {
    #[schema(example = "NORDIC")]
    pub id: String,
    #[schema(example = "Nordic Guidelines")]
    pub name: String,
}

impl From<Guideline> for GuidelineSummary {
    fn from(guideline: Guideline) -> Self {
        Self {
            id: guideline.id().to_string(),
            name: guideline.display_name().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListGuidelinesRes {
    pub guidelines: Vec<GuidelineSummary>,
}

impl ListGuidelinesRes {
    pub fn all() -> Self {
        Self {
            guidelines: Guideline::ALL.into_iter().map(GuidelineSummary::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionRes {
    pub key: String,
    pub label: String,
    /// `date`, `select` or `radio`.
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl From<Question> for QuestionRes {
    fn from(question: Question) -> Self {
        let kind = match question.kind {
            uvecheck_core::QuestionKind::Date => "date",
            uvecheck_core::QuestionKind::Select => "select",
            uvecheck_core::QuestionKind::Radio => "radio",
        };
        Self {
            key: question.key.to_string(),
            label: question.label.to_string(),
            kind: kind.to_string(),
            options: question.options.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Guideline with its form schema and the answers a fresh form starts with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineDetailsRes {
    pub id: String,
    pub name: String,
    pub questions: Vec<QuestionRes>,
    pub default_sub_diagnosis: String,
    pub default_biologic_treatment: String,
}

impl From<Guideline> for GuidelineDetailsRes {
    fn from(guideline: Guideline) -> Self {
        let defaults = guideline.default_answers();
        Self {
            id: guideline.id().to_string(),
            name: guideline.display_name().to_string(),
            questions: guideline
                .questions()
                .into_iter()
                .map(QuestionRes::from)
                .collect(),
            default_sub_diagnosis: defaults.sub_diagnosis.to_string(),
            default_biologic_treatment: defaults.biologic_treatment.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uvecheck_core::RiskLevel;

    #[test]
    fn request_accepts_missing_fields() {
        let req: AssessmentReq = serde_json::from_str(
            r#"{"guideline":"NORDIC","birthDate":"2015-01-01","subDiagnosis":"Oligoarthritis"}"#,
        )
        .expect("partial body deserialises");
        assert_eq!(req.diagnosis_date, "");

        let record = req.patient_record().expect("dates are valid");
        assert_eq!(record.diagnosis_date, None);
        assert!(!record.ana_positive());
    }

    #[test]
    fn request_rejects_malformed_dates() {
        let req = AssessmentReq {
            birth_date: "2015-13-01".into(),
            ..AssessmentReq::default()
        };
        assert!(req.patient_record().is_err());
    }

    #[test]
    fn response_uses_labels() {
        let res = AssessmentRes::from(RiskAssessment::new(
            RiskLevel::LowToMedium,
            "Every 6–12 months",
            "Continue into adulthood",
            "",
        ));
        let json = serde_json::to_value(&res).expect("serialises");
        assert_eq!(json["riskLevel"], "Low to Medium Risk");
        assert_eq!(json["followUp"], "Continue into adulthood");
        assert!(json.get("inputs").is_none());
    }

    #[test]
    fn guideline_details_carry_questions() {
        let details = GuidelineDetailsRes::from(Guideline::Miwguc);
        assert_eq!(details.name, "MIWGUC Guidelines");
        assert_eq!(details.questions.len(), 3);
        assert_eq!(details.questions[2].kind, "select");
        assert_eq!(details.default_sub_diagnosis, "Juvenile Idiopathic Arthritis");
        assert_eq!(ListGuidelinesRes::all().guidelines.len(), 8);
    }
}
