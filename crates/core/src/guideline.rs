//! Guideline registry.
//!
//! Identifiers, display names and the question schema a form shows for each guideline. The
//! sub-diagnosis options come straight from the procedure modules' subtype tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::guidelines::{
    argentina, czech_slovak, germany, labels_of, miwguc, nordic, spain_portugal, uk, us_pakistan,
};
use crate::{BiologicTreatment, UveCheckError};

/// Regional screening guideline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Guideline {
    Nordic,
    UsPakistan,
    Germany,
    SpainPortugal,
    Uk,
    CzechSlovak,
    Argentina,
    Miwguc,
}

impl Guideline {
    pub const ALL: [Guideline; 8] = [
        Guideline::Nordic,
        Guideline::UsPakistan,
        Guideline::Germany,
        Guideline::SpainPortugal,
        Guideline::Uk,
        Guideline::CzechSlovak,
        Guideline::Argentina,
        Guideline::Miwguc,
    ];

    /// Stable identifier, as used on the wire and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Guideline::Nordic => "NORDIC",
            Guideline::UsPakistan => "US_PAKISTAN",
            Guideline::Germany => "GERMANY",
            Guideline::SpainPortugal => "SPAIN_PORTUGAL",
            Guideline::Uk => "UK",
            Guideline::CzechSlovak => "CZECH_SLOVAK",
            Guideline::Argentina => "ARGENTINA",
            Guideline::Miwguc => "MIWGUC",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Guideline::Nordic => "Nordic Guidelines",
            Guideline::UsPakistan => "US / Pakistan Guidelines",
            Guideline::Germany => "Germany Guidelines",
            Guideline::SpainPortugal => "Spain / Portugal Guidelines",
            Guideline::Uk => "UK Guidelines",
            Guideline::CzechSlovak => "Czech / Slovak Guidelines",
            Guideline::Argentina => "Argentina Guidelines",
            Guideline::Miwguc => "MIWGUC Guidelines",
        }
    }

    /// Sub-diagnosis labels offered for this guideline, in display order.
    pub fn subtype_options(self) -> Vec<&'static str> {
        match self {
            Guideline::Nordic => labels_of(nordic::SUBTYPES),
            Guideline::UsPakistan => labels_of(us_pakistan::SUBTYPES),
            Guideline::Germany => labels_of(germany::SUBTYPES),
            Guideline::SpainPortugal => labels_of(spain_portugal::SUBTYPES),
            Guideline::Uk => labels_of(uk::SUBTYPES),
            Guideline::CzechSlovak => labels_of(czech_slovak::SUBTYPES),
            Guideline::Argentina => labels_of(argentina::SUBTYPES),
            Guideline::Miwguc => labels_of(miwguc::SUBTYPES),
        }
    }

    pub fn asks_for_antibody(self) -> bool {
        self != Guideline::Miwguc
    }

    /// Methotrexate and biologic treatment only affect the Nordic grading.
    pub fn asks_for_treatment(self) -> bool {
        self == Guideline::Nordic
    }

    /// Ordered question schema for this guideline's form.
    pub fn questions(self) -> Vec<Question> {
        let mut questions = vec![
            Question::date("birthDate", "Patient's Date of Birth"),
            Question::date("diagnosisDate", "Date of Diagnosis of Arthritis"),
            Question {
                key: "subDiagnosis",
                label: "Sub-diagnosis of Arthritis",
                kind: QuestionKind::Select,
                options: self.subtype_options(),
            },
        ];

        if self.asks_for_antibody() {
            questions.push(Question::yes_no("ana", "Antinuclear Antibody (ANA)"));
        }

        if self.asks_for_treatment() {
            questions.push(Question::yes_no("methotrexate", "On Methotrexate?"));
            questions.push(Question {
                key: "biologicTreatment",
                label: "Biologic Treatment",
                kind: QuestionKind::Select,
                options: BiologicTreatment::KNOWN.iter().map(biologic_label).collect(),
            });
        }

        questions
    }

    /// Values a fresh form starts with: the first option of each select question.
    pub fn default_answers(self) -> DefaultAnswers {
        let first_option = |key: &str| {
            self.questions()
                .into_iter()
                .find(|q| q.key == key)
                .and_then(|q| q.options.first().copied())
                .unwrap_or_default()
        };

        DefaultAnswers {
            sub_diagnosis: first_option("subDiagnosis"),
            biologic_treatment: first_option("biologicTreatment"),
        }
    }
}

fn biologic_label(treatment: &BiologicTreatment) -> &'static str {
    match treatment {
        BiologicTreatment::Adalimumab => "Adalimumab",
        BiologicTreatment::Certolizumab => "Certolizumab",
        BiologicTreatment::Golimumab => "Golimumab",
        BiologicTreatment::Infliximab => "Infliximab",
        BiologicTreatment::Etanercept => "Etanercept",
        BiologicTreatment::NoneOther | BiologicTreatment::Other(_) => {
            crate::constants::BIOLOGIC_NONE_OTHER
        }
    }
}

impl fmt::Display for Guideline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Guideline {
    type Err = UveCheckError;

    /// Accepts identifiers case-insensitively, with `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().replace('-', "_");
        Guideline::ALL
            .into_iter()
            .find(|g| g.id().eq_ignore_ascii_case(&normalised))
            .ok_or_else(|| UveCheckError::UnknownGuideline(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Date,
    Select,
    Radio,
}

/// One form question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
}

impl Question {
    fn date(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: QuestionKind::Date,
            options: Vec::new(),
        }
    }

    fn yes_no(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: QuestionKind::Radio,
            options: vec!["Yes", "No"],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultAnswers {
    pub sub_diagnosis: &'static str,
    /// Empty for guidelines that do not ask about treatment.
    pub biologic_treatment: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifiers_loosely() {
        assert_eq!("NORDIC".parse::<Guideline>().ok(), Some(Guideline::Nordic));
        assert_eq!("us-pakistan".parse::<Guideline>().ok(), Some(Guideline::UsPakistan));
        assert_eq!(" czech_slovak ".parse::<Guideline>().ok(), Some(Guideline::CzechSlovak));
        assert!(matches!(
            "MARS".parse::<Guideline>(),
            Err(UveCheckError::UnknownGuideline(id)) if id == "MARS"
        ));
    }

    #[test]
    fn ids_round_trip_for_every_guideline() {
        for guideline in Guideline::ALL {
            assert_eq!(guideline.id().parse::<Guideline>().ok(), Some(guideline));
            assert_eq!(guideline.to_string(), guideline.id());
        }
    }

    #[test]
    fn option_lists_match_the_form() {
        assert_eq!(
            Guideline::Nordic.subtype_options(),
            vec![
                "Oligoarthritis",
                "RF Negative Polyarthritis",
                "Psoriatic Arthritis",
                "RF Positive Arthritis",
                "Enthesitis related Arthritis",
                "Systemic Onset Arthritis",
                "Undifferentiated Arthritis",
            ]
        );
        assert_eq!(
            Guideline::Argentina.subtype_options(),
            vec![
                "Persistent Oligoarthritis",
                "Extended Oligoarthritis",
                "RF Negative Polyarthritis",
                "Psoriatic Arthritis",
                "RF Positive Arthritis",
                "Enthesitis related Arthritis",
                "Systemic onset Arthritis",
            ]
        );
        assert!(Guideline::Germany
            .subtype_options()
            .contains(&"Undifferentiated Arthritis"));
        assert_eq!(
            Guideline::Miwguc.subtype_options(),
            vec!["Juvenile Idiopathic Arthritis", "Systemic-onset Arthritis"]
        );
    }

    #[test]
    fn question_schema_per_guideline() {
        let keys = |g: Guideline| g.questions().iter().map(|q| q.key).collect::<Vec<_>>();

        assert_eq!(
            keys(Guideline::Nordic),
            vec![
                "birthDate",
                "diagnosisDate",
                "subDiagnosis",
                "ana",
                "methotrexate",
                "biologicTreatment"
            ]
        );
        assert_eq!(
            keys(Guideline::Uk),
            vec!["birthDate", "diagnosisDate", "subDiagnosis", "ana"]
        );
        assert_eq!(
            keys(Guideline::Miwguc),
            vec!["birthDate", "diagnosisDate", "subDiagnosis"]
        );

        let nordic = Guideline::Nordic.questions();
        let biologic = nordic
            .iter()
            .find(|q| q.key == "biologicTreatment")
            .expect("nordic asks about biologics");
        assert_eq!(biologic.options.last(), Some(&"None / Other"));
    }

    #[test]
    fn defaults_are_first_options() {
        let nordic = Guideline::Nordic.default_answers();
        assert_eq!(nordic.sub_diagnosis, "Oligoarthritis");
        assert_eq!(nordic.biologic_treatment, "Adalimumab");

        let uk = Guideline::Uk.default_answers();
        assert_eq!(uk.sub_diagnosis, "Persistent Oligoarthritis");
        assert_eq!(uk.biologic_treatment, "");
    }
}
