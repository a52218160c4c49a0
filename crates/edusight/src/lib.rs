//! Holistic student assessment engines.
//!
//! Two independent scoring pipelines live here: the EduSight 360° domain
//! aggregator in [`assessment`] and the survey-driven stress classifier in
//! [`stress`]. Both are pure and can be shared across threads without locking;
//! [`service`] and [`router`] wrap them for the HTTP and CLI surfaces.

pub mod assessment;
pub mod config;
pub mod error;
pub mod router;
pub mod service;
pub mod stress;
pub mod telemetry;
pub mod validation;

pub use assessment::{calculate_edusight360_score, EduSight360Result, ScoreEngine};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
pub use stress::{
    calculate_composite_scores, generate_intervention_plan, predict_stress_level,
    StressAnalysisEngine,
};
