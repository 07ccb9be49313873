//! Risk levels and assessment results.

use crate::constants::GUIDELINE_NOT_FOUND;
use serde::{Deserialize, Serialize};

/// Risk classification returned by a guideline.
///
/// The serialized form is the canonical display label. Callers style results by matching
/// "high", "medium" or "low" inside the label, so the labels must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    NoRisk,
    VeryLow,
    Low,
    LowToMedium,
    Medium,
    High,
    NotApplicable,
    Error,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 8] = [
        RiskLevel::NoRisk,
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::LowToMedium,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::NotApplicable,
        RiskLevel::Error,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::NoRisk => "No Risk",
            RiskLevel::VeryLow => "Very Low Risk",
            RiskLevel::Low => "Low Risk",
            RiskLevel::LowToMedium => "Low to Medium Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::NotApplicable => "N/A",
            RiskLevel::Error => "Error",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    /// Move one step down the High > Medium > Low scale.
    ///
    /// Levels outside that scale are returned unchanged, and so is `Low`.
    pub fn demote(self) -> Self {
        match self {
            RiskLevel::High => RiskLevel::Medium,
            RiskLevel::Medium => RiskLevel::Low,
            other => other,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for RiskLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RiskLevel::from_label(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown risk level '{s}'")))
    }
}

/// Derived inputs echoed back alongside a result, formatted for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSummary {
    pub current_age: String,
    pub age_at_onset: String,
    pub time_since_diagnosis: String,
}

/// Outcome of one guideline evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub recommendation: String,
    pub follow_up: String,
    pub justification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<InputSummary>,
}

impl RiskAssessment {
    pub fn new(
        risk_level: RiskLevel,
        recommendation: impl Into<String>,
        follow_up: impl Into<String>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            risk_level,
            recommendation: recommendation.into(),
            follow_up: follow_up.into(),
            justification: justification.into(),
            inputs: None,
        }
    }

    /// Result for a guideline identifier the engine does not know.
    pub fn guideline_not_found() -> Self {
        Self::new(RiskLevel::Error, GUIDELINE_NOT_FOUND, "", "")
    }
}
