use std::sync::Arc;

use tracing::{info, warn};

use crate::assessment::domain::AssessmentDomain;
use crate::assessment::{EduSight360Result, ScoreEngine};
use crate::config::EngineProfile;
use crate::stress::{
    CompositeScores, StressAnalysisEngine, StressAssessmentData, StressInterventionPlan,
    StressPredictionResult,
};
use crate::validation::ValidationError;

/// Validating front door over both engines, shared by the HTTP and CLI surfaces.
#[derive(Debug, Clone, Default)]
pub struct AssessmentService {
    scoring: Arc<ScoreEngine>,
    stress: Arc<StressAnalysisEngine>,
}

impl AssessmentService {
    pub fn new(scoring: ScoreEngine, stress: StressAnalysisEngine) -> Self {
        Self {
            scoring: Arc::new(scoring),
            stress: Arc::new(stress),
        }
    }

    pub fn from_profile(profile: &EngineProfile) -> Self {
        Self::new(
            ScoreEngine::new(profile.scoring.clone()),
            StressAnalysisEngine::new(profile.stress.clone()),
        )
    }

    pub fn score(
        &self,
        assessment: &AssessmentDomain,
    ) -> Result<EduSight360Result, AssessmentServiceError> {
        assessment.validate().map_err(rejected("360 assessment"))?;
        let result = self.scoring.calculate(assessment);
        info!(
            overall = result.overall_score,
            risk = result.risk_level.label(),
            "scored 360 assessment"
        );
        Ok(result)
    }

    pub fn composite(
        &self,
        survey: &StressAssessmentData,
    ) -> Result<CompositeScores, AssessmentServiceError> {
        survey.validate().map_err(rejected("stress survey"))?;
        Ok(self.stress.calculate_composite_scores(survey))
    }

    pub fn predict(
        &self,
        survey: &StressAssessmentData,
    ) -> Result<StressPredictionResult, AssessmentServiceError> {
        survey.validate().map_err(rejected("stress survey"))?;
        let prediction = self.stress.predict_stress_level(survey);
        info!(
            level = prediction.stress_level.label(),
            confidence = prediction.confidence,
            "classified stress survey"
        );
        Ok(prediction)
    }

    pub fn intervention_plan(&self, prediction: &StressPredictionResult) -> StressInterventionPlan {
        self.stress.generate_intervention_plan(prediction)
    }

    /// Prediction and plan in one call.
    pub fn assess(
        &self,
        survey: &StressAssessmentData,
    ) -> Result<(StressPredictionResult, StressInterventionPlan), AssessmentServiceError> {
        let prediction = self.predict(survey)?;
        let plan = self.intervention_plan(&prediction);
        if plan.referral_needed {
            info!(
                urgency = plan.urgency.label(),
                follow_up_days = plan.follow_up_days,
                "stress plan requires referral"
            );
        }
        Ok((prediction, plan))
    }
}

fn rejected(input: &'static str) -> impl Fn(ValidationError) -> AssessmentServiceError {
    move |error| {
        warn!(input, violations = error.violations.len(), "rejected out-of-range input");
        AssessmentServiceError::Validation(error)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
