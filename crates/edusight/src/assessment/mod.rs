//! EduSight 360° domain aggregation.
//!
//! Folds academic, psychological and physical measures into three bounded domain
//! scores, a weighted overall score, a risk tier, and a templated development plan.

mod config;
pub mod domain;
mod plan;
mod policy;
mod rules;

#[cfg(test)]
pub(crate) mod tests;

pub use config::{
    AcademicWeights, BmiBand, FrameworkMultipliers, FrameworkScaling, OverallWeights,
    PhysicalWeights, PsychologicalWeights, RiskThresholds, ScoreConfig,
};
pub use domain::{
    AcademicAssessment, AssessmentDomain, CognitiveProfile, EmotionalIntelligence,
    FitnessProfile, Framework, HealthIndicators, LearningStyle, MotorSkills,
    PersonalityTraits, PhysicalAssessment, PsychologicalAssessment, ScoreTrend,
    SportsPerformance, SubjectScore,
};
pub use plan::{DevelopmentPlan, Milestone, Priority, Recommendation, RecommendationKind};
pub use policy::RiskLevel;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentArea {
    Academic,
    Psychological,
    Physical,
}

impl AssessmentArea {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Psychological => "Psychological",
            Self::Physical => "Physical",
        }
    }
}

/// Weighted sub-score feeding a domain total, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub area: AssessmentArea,
    pub factor: String,
    pub score: f64,
    pub weight: f64,
}

impl ScoreComponent {
    pub(crate) fn new(area: AssessmentArea, factor: &str, score: f64, weight: f64) -> Self {
        Self {
            area,
            factor: factor.to_string(),
            score,
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EduSight360Result {
    pub overall_score: u8,
    pub academic_score: u8,
    pub psychological_score: u8,
    pub physical_score: u8,
    pub risk_level: RiskLevel,
    pub intervention_required: bool,
    pub medical_referral_needed: bool,
    pub recommendations: Vec<Recommendation>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub development_plan: DevelopmentPlan,
    pub components: Vec<ScoreComponent>,
}

/// Stateless aggregator applying a [`ScoreConfig`] to assessment records.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoreConfig,
}

impl ScoreEngine {
    pub fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Out-of-scale inputs are not rejected here; only the final scores are clamped.
    /// Callers wanting strict input checking run [`AssessmentDomain::validate`] first.
    pub fn calculate(&self, assessment: &AssessmentDomain) -> EduSight360Result {
        let config = &self.config;
        let (scores, components) = rules::score_domains(
            &assessment.academic,
            &assessment.psychological,
            &assessment.physical,
            config,
        );
        let overall = rules::overall_score(&scores, config);
        let risk_level = policy::classify_risk(overall, scores.min(), &config.risk);

        let recommendations = plan::recommendations(&scores, config);
        let strengths = plan::strengths(assessment, config);
        let improvement_areas = plan::improvement_areas(assessment, config);
        let development_plan = plan::development_plan(&recommendations);

        debug!(
            overall,
            academic = scores.academic,
            psychological = scores.psychological,
            physical = scores.physical,
            risk = risk_level.label(),
            "computed 360 score"
        );

        EduSight360Result {
            overall_score: as_score(overall),
            academic_score: as_score(scores.academic),
            psychological_score: as_score(scores.psychological),
            physical_score: as_score(scores.physical),
            risk_level,
            intervention_required: risk_level.intervention_required(),
            medical_referral_needed: risk_level.medical_referral_needed(),
            recommendations,
            strengths,
            improvement_areas,
            development_plan,
            components,
        }
    }
}

/// Scores using the default calibration.
pub fn calculate_edusight360_score(assessment: &AssessmentDomain) -> EduSight360Result {
    ScoreEngine::default().calculate(assessment)
}

fn as_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
