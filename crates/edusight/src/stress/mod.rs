//! Survey-driven stress classification.
//!
//! Twenty survey items are normalized, weighted and banded into no stress,
//! eustress or distress. Threshold rules then surface risk and protective
//! factors, and [`StressAnalysisEngine::generate_intervention_plan`] turns a
//! prediction into a counselor-facing plan.

mod config;
pub mod domain;
mod import;
mod intervention;
mod model;
mod rules;

#[cfg(test)]
pub(crate) mod tests;

pub use config::StressModelConfig;
pub use domain::{
    CompositeScores, FeatureImportance, Impact, InvalidStressLevel, StressAssessmentData,
    StressDomain, StressFeature, StressLevel, StressPredictionResult,
};
pub use import::{StressBatchSummary, StressImportError, StressSurveyImporter, StressSurveyRow};
pub use intervention::{StressInterventionPlan, Urgency};
pub use rules::{ProtectiveFactor, StressRiskFactor};

use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct StressAnalysisEngine {
    config: StressModelConfig,
}

impl StressAnalysisEngine {
    pub fn new(config: StressModelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StressModelConfig {
        &self.config
    }

    pub fn calculate_composite_scores(&self, data: &StressAssessmentData) -> CompositeScores {
        model::composite_scores(data)
    }

    /// Inputs outside their scales are clamped during normalization rather than rejected.
    pub fn predict_stress_level(&self, data: &StressAssessmentData) -> StressPredictionResult {
        let config = &self.config;
        let composite_scores = model::composite_scores(data);
        let stress_score = model::stress_score(data, &composite_scores, config);
        let (stress_level, confidence) = model::classify(stress_score, config);

        let top_predictors = model::top_predictors(data, &composite_scores, config);
        let risk_factors = rules::risk_factors(data);
        let protective_factors = rules::protective_factors(data);
        let recommendations =
            rules::recommendations(stress_level, &risk_factors, config.max_recommendations);

        debug!(
            stress_score,
            level = stress_level.label(),
            confidence,
            risks = risk_factors.len(),
            "predicted stress level"
        );

        StressPredictionResult {
            stress_level,
            confidence,
            stress_score,
            composite_scores,
            top_predictors,
            recommendations,
            risk_factors,
            protective_factors,
        }
    }

    pub fn generate_intervention_plan(
        &self,
        prediction: &StressPredictionResult,
    ) -> StressInterventionPlan {
        intervention::build_plan(prediction)
    }
}

pub fn calculate_composite_scores(data: &StressAssessmentData) -> CompositeScores {
    model::composite_scores(data)
}

/// Predicts using the default weight table.
pub fn predict_stress_level(data: &StressAssessmentData) -> StressPredictionResult {
    StressAnalysisEngine::default().predict_stress_level(data)
}

pub fn generate_intervention_plan(prediction: &StressPredictionResult) -> StressInterventionPlan {
    intervention::build_plan(prediction)
}
