//! UK guideline.
//!
//! Three risk groups. For groups 1 and 2 the length of the screening period depends on the onset
//! age band (and, in group 2, on ANA). Once the fractional years since diagnosis exceed the band's
//! period, screening stops. Patients still inside their period are screened every 3 to 4 months.

use crate::constants::NO_SCREENING_REQUIRED;
use crate::guidelines::{group_of, SubtypeTable};
use crate::{PatientRecord, RiskAssessment, RiskLevel, TemporalFeatures};

const HIGH_RISK_INTERVAL: &str = "Every 3 - 4 Months";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UkGroup {
    /// Oligoarthritis, psoriatic and enthesitis-related arthritis.
    Oligoarticular,
    /// RF-negative polyarthritis.
    RfNegativePolyarticular,
    /// RF-positive polyarthritis and systemic onset arthritis.
    RfPositiveOrSystemic,
}

pub const SUBTYPES: &SubtypeTable<UkGroup> = &[
    ("Persistent Oligoarthritis", Some(UkGroup::Oligoarticular)),
    ("Extended Oligoarthritis", Some(UkGroup::Oligoarticular)),
    ("RF Negative Polyarthritis", Some(UkGroup::RfNegativePolyarticular)),
    ("Psoriatic Arthritis", Some(UkGroup::Oligoarticular)),
    ("Enthesitis-related Arthritis", Some(UkGroup::Oligoarticular)),
    ("RF Positive Polyarthritis", Some(UkGroup::RfPositiveOrSystemic)),
    ("Systemic Onset Arthritis", Some(UkGroup::RfPositiveOrSystemic)),
];

/// Onset-age band and its screening period.
struct Band {
    /// Exclusive upper bound of the onset age, `None` for the open-ended last band.
    onset_below: Option<u32>,
    period_years: f64,
    follow_up: &'static str,
    justification: &'static str,
}

const OLIGOARTICULAR_BANDS: &[Band] = &[
    Band {
        onset_below: Some(3),
        period_years: 8.0,
        follow_up: "Follow up continues for 8 years",
        justification: "High risk due to early onset age.",
    },
    Band {
        onset_below: Some(5),
        period_years: 6.0,
        follow_up: "Follow up continues for 6 years",
        justification: "High risk due to onset age between 3 and 5 years.",
    },
    Band {
        onset_below: Some(9),
        period_years: 3.0,
        follow_up: "Follow up continues for 3 years",
        justification: "High risk due to onset age between 5 and 9 years.",
    },
    Band {
        onset_below: Some(12),
        period_years: 1.0,
        follow_up: "Follow up continues for 1 year",
        justification: "High risk due to onset age between 9 and 12 years.",
    },
    Band {
        onset_below: None,
        period_years: 1.0,
        follow_up: "Follow up continues for 1 year",
        justification: "High risk due to onset age of 12 years or older.",
    },
];

const POLYARTICULAR_ANA_POSITIVE_BANDS: &[Band] = &[
    Band {
        onset_below: Some(6),
        period_years: 5.0,
        follow_up: "Follow up continues for 5 years",
        justification: "High risk due to early onset age with positive ANA.",
    },
    Band {
        onset_below: Some(9),
        period_years: 2.0,
        follow_up: "Follow up continues for 2 years",
        justification: "High risk due to onset age between 6 and 9 years with positive ANA.",
    },
    Band {
        onset_below: Some(12),
        period_years: 1.0,
        follow_up: "Follow up continues for 1 year",
        justification: "High risk due to onset age between 9 and 12 years with positive ANA.",
    },
    Band {
        onset_below: None,
        period_years: 1.0,
        follow_up: "Follow up continues for 1 year",
        justification: "High risk due to onset age of 12 years or older with positive ANA.",
    },
];

const POLYARTICULAR_ANA_NEGATIVE_BANDS: &[Band] = &[
    Band {
        onset_below: Some(7),
        period_years: 5.0,
        follow_up: "Follow up continues for 5 years",
        justification: "High risk due to early onset age with negative ANA.",
    },
    Band {
        onset_below: None,
        period_years: 1.0,
        follow_up: "Follow up continues for 1 year",
        justification: "High risk due to onset age at or after 7 years with negative ANA.",
    },
];

fn band_for(bands: &'static [Band], age_at_onset: u32) -> Option<&'static Band> {
    bands
        .iter()
        .find(|band| band.onset_below.map_or(true, |limit| age_at_onset < limit))
}

pub fn evaluate(patient: &PatientRecord, features: &TemporalFeatures) -> RiskAssessment {
    let bands = match group_of(SUBTYPES, &patient.sub_diagnosis) {
        Some(UkGroup::Oligoarticular) => OLIGOARTICULAR_BANDS,
        Some(UkGroup::RfNegativePolyarticular) if patient.ana_positive() => {
            POLYARTICULAR_ANA_POSITIVE_BANDS
        }
        Some(UkGroup::RfNegativePolyarticular) => POLYARTICULAR_ANA_NEGATIVE_BANDS,
        Some(UkGroup::RfPositiveOrSystemic) => {
            return RiskAssessment::new(
                RiskLevel::NotApplicable,
                "Screen at diagnosis",
                "N/A",
                "Screening required at diagnosis due to sub-diagnosis.",
            );
        }
        None => return RiskAssessment::new(RiskLevel::NoRisk, "None", "None", "None"),
    };

    let Some(band) = band_for(bands, features.age_at_onset) else {
        return RiskAssessment::new(RiskLevel::NoRisk, "None", "None", "None");
    };

    if features.fractional_years_since_diagnosis > band.period_years {
        return RiskAssessment::new(
            RiskLevel::VeryLow,
            NO_SCREENING_REQUIRED,
            "None",
            "Very low risk due to long time since diagnosis.",
        );
    }

    RiskAssessment::new(
        RiskLevel::High,
        HIGH_RISK_INTERVAL,
        band.follow_up,
        band.justification,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::test_support::{features, patient};
    use crate::AntibodyStatus;

    fn run(p: &PatientRecord, today: &str) -> RiskAssessment {
        evaluate(p, &features(p, today))
    }

    #[test]
    fn oligoarticular_band_periods() {
        // Onset 2: screened for 8 years.
        let p = patient("2010-01-01", "2012-06-01", "Persistent Oligoarthritis");
        let result = run(&p, "2020-05-31");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.recommendation, HIGH_RISK_INTERVAL);
        assert_eq!(result.follow_up, "Follow up continues for 8 years");
        assert_eq!(run(&p, "2020-06-03").risk_level, RiskLevel::VeryLow);

        // Onset 4: 6 years.
        let p = patient("2010-01-01", "2014-06-01", "Psoriatic Arthritis");
        assert_eq!(run(&p, "2020-05-31").risk_level, RiskLevel::High);
        assert_eq!(run(&p, "2020-06-03").risk_level, RiskLevel::VeryLow);

        // Onset 5: 3 years.
        let p = patient("2010-01-01", "2015-06-01", "Enthesitis-related Arthritis");
        assert_eq!(run(&p, "2018-05-31").follow_up, "Follow up continues for 3 years");
        assert_eq!(run(&p, "2018-06-03").risk_level, RiskLevel::VeryLow);

        // Onset 12: 1 year.
        let p = patient("2005-01-01", "2017-06-01", "Extended Oligoarthritis");
        let result = run(&p, "2018-01-01");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.follow_up, "Follow up continues for 1 year");
        assert_eq!(run(&p, "2018-06-03").risk_level, RiskLevel::VeryLow);
    }

    #[test]
    fn polyarticular_depends_on_ana() {
        // Onset 6.
        let p = patient("2010-01-01", "2016-06-01", "RF Negative Polyarthritis")
            .with_antibody(AntibodyStatus::Positive);
        let result = run(&p, "2018-05-01");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.follow_up, "Follow up continues for 2 years");
        assert_eq!(run(&p, "2018-06-03").risk_level, RiskLevel::VeryLow);

        let negative = p.with_antibody(AntibodyStatus::Negative);
        let result = run(&negative, "2018-06-03");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.follow_up, "Follow up continues for 5 years");
        assert_eq!(run(&negative, "2021-06-03").risk_level, RiskLevel::VeryLow);
    }

    #[test]
    fn late_onset_bands_split_at_twelve() {
        let p = patient("2005-01-01", "2014-06-01", "Persistent Oligoarthritis");
        let result = run(&p, "2015-01-01");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.follow_up, "Follow up continues for 1 year");
        assert_eq!(
            result.justification,
            "High risk due to onset age between 9 and 12 years."
        );

        let p = patient("2005-01-01", "2017-06-01", "Persistent Oligoarthritis");
        let result = run(&p, "2018-01-01");
        assert_eq!(result.follow_up, "Follow up continues for 1 year");
        assert_eq!(
            result.justification,
            "High risk due to onset age of 12 years or older."
        );

        let p = patient("2005-01-01", "2015-06-01", "RF Negative Polyarthritis")
            .with_antibody(AntibodyStatus::Positive);
        let result = run(&p, "2016-01-01");
        assert_eq!(result.follow_up, "Follow up continues for 1 year");
        assert_eq!(
            result.justification,
            "High risk due to onset age between 9 and 12 years with positive ANA."
        );

        let p = patient("2005-01-01", "2018-06-01", "RF Negative Polyarthritis")
            .with_antibody(AntibodyStatus::Positive);
        let result = run(&p, "2019-01-01");
        assert_eq!(
            result.justification,
            "High risk due to onset age of 12 years or older with positive ANA."
        );
        assert_eq!(run(&p, "2019-06-03").risk_level, RiskLevel::VeryLow);
    }

    #[test]
    fn polyarticular_negative_ana_from_seven() {
        let p = patient("2010-01-01", "2017-06-01", "RF Negative Polyarthritis");
        let result = run(&p, "2018-01-01");
        assert_eq!(result.follow_up, "Follow up continues for 1 year");
        assert_eq!(
            result.justification,
            "High risk due to onset age at or after 7 years with negative ANA."
        );
    }

    #[test]
    fn group_three_screens_at_diagnosis() {
        let p = patient("2010-01-01", "2012-06-01", "Systemic Onset Arthritis")
            .with_antibody(AntibodyStatus::Positive);
        let result = run(&p, "2030-01-01");
        assert_eq!(result.risk_level, RiskLevel::NotApplicable);
        assert_eq!(result.risk_level.label(), "N/A");
        assert_eq!(result.recommendation, "Screen at diagnosis");
    }

    #[test]
    fn unknown_subtype_is_no_risk() {
        let p = patient("2010-01-01", "2012-06-01", "NotARealLabel");
        let result = run(&p, "2013-01-01");
        assert_eq!(result.risk_level, RiskLevel::NoRisk);
        assert_eq!(result.risk_level.label(), "No Risk");
    }
}
