//! Patient input types.
//!
//! A [`PatientRecord`] is assembled once per submission and never mutated by the engine. Clinical
//! answers that a form may leave blank are modelled as tri-states rather than booleans so that
//! "not answered" stays distinguishable from "no" at the boundary, even though the guideline
//! procedures treat both the same way.

use crate::constants::BIOLOGIC_NONE_OTHER;
use crate::dates::parse_optional_date;
use crate::UveCheckResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Antinuclear antibody test result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AntibodyStatus {
    Positive,
    Negative,
    #[default]
    Unset,
}

impl AntibodyStatus {
    /// Map a form answer ("Yes"/"No", "Positive"/"Negative") to a status.
    ///
    /// Anything else, including an empty answer, is `Unset`.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "yes" | "positive" | "+" => AntibodyStatus::Positive,
            "no" | "negative" | "-" => AntibodyStatus::Negative,
            _ => AntibodyStatus::Unset,
        }
    }

    pub fn is_positive(self) -> bool {
        self == AntibodyStatus::Positive
    }
}

/// Yes/No answer that may be left blank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
    #[default]
    Unset,
}

impl YesNo {
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => YesNo::Yes,
            "no" | "n" | "false" => YesNo::No,
            _ => YesNo::Unset,
        }
    }

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

/// Biologic treatment the patient is receiving.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiologicTreatment {
    Adalimumab,
    Certolizumab,
    Golimumab,
    Infliximab,
    Etanercept,
    #[default]
    NoneOther,
    /// A free-text agent not in the known list.
    Other(String),
}

impl BiologicTreatment {
    /// Known agents in the order a form offers them.
    pub const KNOWN: [BiologicTreatment; 6] = [
        BiologicTreatment::Adalimumab,
        BiologicTreatment::Certolizumab,
        BiologicTreatment::Golimumab,
        BiologicTreatment::Infliximab,
        BiologicTreatment::Etanercept,
        BiologicTreatment::NoneOther,
    ];

    pub fn label(&self) -> &str {
        match self {
            BiologicTreatment::Adalimumab => "Adalimumab",
            BiologicTreatment::Certolizumab => "Certolizumab",
            BiologicTreatment::Golimumab => "Golimumab",
            BiologicTreatment::Infliximab => "Infliximab",
            BiologicTreatment::Etanercept => "Etanercept",
            BiologicTreatment::NoneOther => BIOLOGIC_NONE_OTHER,
            BiologicTreatment::Other(label) => label,
        }
    }

    /// Parse a label; an empty label is `NoneOther`, an unknown one is kept as `Other`.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return BiologicTreatment::NoneOther;
        }
        Self::KNOWN
            .iter()
            .find(|known| known.label().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| BiologicTreatment::Other(trimmed.to_string()))
    }

    /// Whether this agent lowers uveitis risk under the Nordic guideline.
    ///
    /// Etanercept is excluded because it is not associated with a lower uveitis incidence.
    pub fn lowers_uveitis_risk(&self) -> bool {
        !matches!(
            self,
            BiologicTreatment::NoneOther | BiologicTreatment::Etanercept
        )
    }
}

/// Inputs for one risk assessment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub birth_date: Option<NaiveDate>,
    pub diagnosis_date: Option<NaiveDate>,
    /// Guideline-specific arthritis subtype label.
    pub sub_diagnosis: String,
    pub antinuclear_antibody: AntibodyStatus,
    pub on_methotrexate: YesNo,
    pub biologic_treatment: BiologicTreatment,
}

impl PatientRecord {
    pub fn new(
        birth_date: Option<NaiveDate>,
        diagnosis_date: Option<NaiveDate>,
        sub_diagnosis: impl Into<String>,
    ) -> Self {
        Self {
            birth_date,
            diagnosis_date,
            sub_diagnosis: sub_diagnosis.into(),
            ..Self::default()
        }
    }

    /// Build a record from raw form answers.
    ///
    /// Dates must be `YYYY-MM-DD` or empty. The other answers never fail: anything unrecognised
    /// becomes `Unset` (or `Other` for the biologic).
    pub fn from_answers(
        birth_date: &str,
        diagnosis_date: &str,
        sub_diagnosis: &str,
        ana: &str,
        methotrexate: &str,
        biologic_treatment: &str,
    ) -> UveCheckResult<Self> {
        Ok(Self::new(
            parse_optional_date(birth_date)?,
            parse_optional_date(diagnosis_date)?,
            sub_diagnosis.trim(),
        )
        .with_antibody(AntibodyStatus::from_answer(ana))
        .with_methotrexate(YesNo::from_answer(methotrexate))
        .with_biologic(BiologicTreatment::from_label(biologic_treatment)))
    }

    pub fn with_antibody(mut self, status: AntibodyStatus) -> Self {
        self.antinuclear_antibody = status;
        self
    }

    pub fn with_methotrexate(mut self, answer: YesNo) -> Self {
        self.on_methotrexate = answer;
        self
    }

    pub fn with_biologic(mut self, treatment: BiologicTreatment) -> Self {
        self.biologic_treatment = treatment;
        self
    }

    pub fn ana_positive(&self) -> bool {
        self.antinuclear_antibody.is_positive()
    }
}
