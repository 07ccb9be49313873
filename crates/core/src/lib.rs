//! # UveCheck Core
//!
//! Uveitis screening risk stratification for children with juvenile idiopathic arthritis.
//!
//! This crate contains the pure assessment logic:
//! - Temporal features (ages and elapsed time) derived from calendar dates
//! - One decision procedure per regional guideline
//! - The guideline registry (identifiers, names, question schema, option lists)
//! - An assessment service applying the configured evaluation date
//!
//! **No API concerns**: HTTP servers and command-line parsing belong in `api-rest`, `api-shared`
//! and `cli`.

pub mod config;
pub mod constants;
pub mod dates;
pub mod engine;
pub mod error;
pub mod guideline;
pub mod guidelines;
pub mod patient;
pub mod risk;
pub mod service;

pub use config::{today_from_env_value, CoreConfig};
pub use dates::{parse_date, parse_optional_date, TemporalFeatures};
pub use engine::{evaluate, evaluate_by_id};
pub use error::{UveCheckError, UveCheckResult};
pub use guideline::{DefaultAnswers, Guideline, Question, QuestionKind};
pub use patient::{AntibodyStatus, BiologicTreatment, PatientRecord, YesNo};
pub use risk::{InputSummary, RiskAssessment, RiskLevel};
pub use service::AssessmentService;
