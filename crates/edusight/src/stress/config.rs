use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{StressDomain, StressFeature};

const FEATURE_WEIGHTS: [(StressFeature, f64); 20] = [
    (StressFeature::AnxietyLevel, 0.08),
    (StressFeature::SelfEsteem, 0.07),
    (StressFeature::MentalHealthHistory, 0.02),
    (StressFeature::Depression, 0.08),
    (StressFeature::Headache, 0.05),
    (StressFeature::BloodPressure, 0.15),
    (StressFeature::SleepQuality, 0.08),
    (StressFeature::BreathingProblem, 0.04),
    (StressFeature::NoiseLevel, 0.03),
    (StressFeature::LivingConditions, 0.04),
    (StressFeature::Safety, 0.05),
    (StressFeature::BasicNeeds, 0.04),
    (StressFeature::AcademicPerformance, 0.06),
    (StressFeature::StudyLoad, 0.05),
    (StressFeature::TeacherStudentRelationship, 0.05),
    (StressFeature::FutureCareerConcerns, 0.06),
    (StressFeature::SocialSupport, 0.07),
    (StressFeature::PeerPressure, 0.06),
    (StressFeature::ExtracurricularActivities, 0.02),
    (StressFeature::Bullying, 0.08),
];

const COMPOSITE_WEIGHTS: [(StressDomain, f64); 5] = [
    (StressDomain::Psychological, 0.10),
    (StressDomain::Physiological, 0.09),
    (StressDomain::Environmental, 0.05),
    (StressDomain::Academic, 0.07),
    (StressDomain::Social, 0.14),
];

/// Weight table and decision bands for the stress classifier.
///
/// Predictors missing from either weight map contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressModelConfig {
    pub feature_weights: BTreeMap<StressFeature, f64>,
    pub composite_weights: BTreeMap<StressDomain, f64>,
    /// Scores below this are classified as no stress.
    pub eustress_threshold: f64,
    /// Scores at or above this are classified as distress.
    pub distress_threshold: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
    pub max_recommendations: usize,
    pub top_predictors: usize,
}

impl Default for StressModelConfig {
    fn default() -> Self {
        Self {
            feature_weights: FEATURE_WEIGHTS.into_iter().collect(),
            composite_weights: COMPOSITE_WEIGHTS.into_iter().collect(),
            eustress_threshold: 0.3,
            distress_threshold: 0.7,
            min_confidence: 0.5,
            max_confidence: 0.95,
            max_recommendations: 8,
            top_predictors: 10,
        }
    }
}

impl StressModelConfig {
    pub fn feature_weight(&self, feature: StressFeature) -> f64 {
        self.feature_weights.get(&feature).copied().unwrap_or(0.0)
    }

    pub fn composite_weight(&self, domain: StressDomain) -> f64 {
        self.composite_weights.get(&domain).copied().unwrap_or(0.0)
    }

    pub fn total_weight(&self) -> f64 {
        self.feature_weights.values().sum::<f64>() + self.composite_weights.values().sum::<f64>()
    }
}
