use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{RangeCheck, ScoreRange, ValidationError};

use super::rules::{ProtectiveFactor, StressRiskFactor};

/// One student's survey answers. Each field keeps the instrument's native scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressAssessmentData {
    pub anxiety_level: f64,
    pub self_esteem: f64,
    pub mental_health_history: f64,
    pub depression: f64,
    pub headache: f64,
    pub blood_pressure: f64,
    pub sleep_quality: f64,
    pub breathing_problem: f64,
    pub noise_level: f64,
    pub living_conditions: f64,
    pub safety: f64,
    pub basic_needs: f64,
    pub academic_performance: f64,
    pub study_load: f64,
    pub teacher_student_relationship: f64,
    pub future_career_concerns: f64,
    pub social_support: f64,
    pub peer_pressure: f64,
    pub extracurricular_activities: f64,
    pub bullying: f64,
}

impl StressAssessmentData {
    pub fn value(&self, feature: StressFeature) -> f64 {
        match feature {
            StressFeature::AnxietyLevel => self.anxiety_level,
            StressFeature::SelfEsteem => self.self_esteem,
            StressFeature::MentalHealthHistory => self.mental_health_history,
            StressFeature::Depression => self.depression,
            StressFeature::Headache => self.headache,
            StressFeature::BloodPressure => self.blood_pressure,
            StressFeature::SleepQuality => self.sleep_quality,
            StressFeature::BreathingProblem => self.breathing_problem,
            StressFeature::NoiseLevel => self.noise_level,
            StressFeature::LivingConditions => self.living_conditions,
            StressFeature::Safety => self.safety,
            StressFeature::BasicNeeds => self.basic_needs,
            StressFeature::AcademicPerformance => self.academic_performance,
            StressFeature::StudyLoad => self.study_load,
            StressFeature::TeacherStudentRelationship => self.teacher_student_relationship,
            StressFeature::FutureCareerConcerns => self.future_career_concerns,
            StressFeature::SocialSupport => self.social_support,
            StressFeature::PeerPressure => self.peer_pressure,
            StressFeature::ExtracurricularActivities => self.extracurricular_activities,
            StressFeature::Bullying => self.bullying,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = RangeCheck::default();
        for feature in StressFeature::ALL {
            check.check(feature.name(), self.value(feature), feature.scale());
        }
        check.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressFeature {
    AnxietyLevel,
    SelfEsteem,
    MentalHealthHistory,
    Depression,
    Headache,
    BloodPressure,
    SleepQuality,
    BreathingProblem,
    NoiseLevel,
    LivingConditions,
    Safety,
    BasicNeeds,
    AcademicPerformance,
    StudyLoad,
    TeacherStudentRelationship,
    FutureCareerConcerns,
    SocialSupport,
    PeerPressure,
    ExtracurricularActivities,
    Bullying,
}

impl StressFeature {
    pub const ALL: [StressFeature; 20] = [
        Self::AnxietyLevel,
        Self::SelfEsteem,
        Self::MentalHealthHistory,
        Self::Depression,
        Self::Headache,
        Self::BloodPressure,
        Self::SleepQuality,
        Self::BreathingProblem,
        Self::NoiseLevel,
        Self::LivingConditions,
        Self::Safety,
        Self::BasicNeeds,
        Self::AcademicPerformance,
        Self::StudyLoad,
        Self::TeacherStudentRelationship,
        Self::FutureCareerConcerns,
        Self::SocialSupport,
        Self::PeerPressure,
        Self::ExtracurricularActivities,
        Self::Bullying,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::AnxietyLevel => "anxiety_level",
            Self::SelfEsteem => "self_esteem",
            Self::MentalHealthHistory => "mental_health_history",
            Self::Depression => "depression",
            Self::Headache => "headache",
            Self::BloodPressure => "blood_pressure",
            Self::SleepQuality => "sleep_quality",
            Self::BreathingProblem => "breathing_problem",
            Self::NoiseLevel => "noise_level",
            Self::LivingConditions => "living_conditions",
            Self::Safety => "safety",
            Self::BasicNeeds => "basic_needs",
            Self::AcademicPerformance => "academic_performance",
            Self::StudyLoad => "study_load",
            Self::TeacherStudentRelationship => "teacher_student_relationship",
            Self::FutureCareerConcerns => "future_career_concerns",
            Self::SocialSupport => "social_support",
            Self::PeerPressure => "peer_pressure",
            Self::ExtracurricularActivities => "extracurricular_activities",
            Self::Bullying => "bullying",
        }
    }

    /// Native instrument scale.
    pub const fn scale(self) -> ScoreRange {
        match self {
            Self::AnxietyLevel => ScoreRange::new(0.0, 21.0),
            Self::SelfEsteem => ScoreRange::new(0.0, 30.0),
            Self::MentalHealthHistory => ScoreRange::new(0.0, 1.0),
            Self::Depression => ScoreRange::new(0.0, 27.0),
            Self::BloodPressure => ScoreRange::new(0.0, 3.0),
            _ => ScoreRange::new(0.0, 5.0),
        }
    }

    /// Higher values of these features indicate lower stress.
    pub const fn is_protective(self) -> bool {
        matches!(
            self,
            Self::SelfEsteem
                | Self::SleepQuality
                | Self::SocialSupport
                | Self::AcademicPerformance
                | Self::TeacherStudentRelationship
                | Self::ExtracurricularActivities
        )
    }

    /// Reverse-scored when building composite domain averages.
    pub const fn reversed_in_composite(self) -> bool {
        matches!(
            self,
            Self::SelfEsteem | Self::SleepQuality | Self::SocialSupport
        )
    }
}

/// The five stress sub-domains, each averaged over four survey items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StressDomain {
    #[serde(rename = "psychological_score")]
    Psychological,
    #[serde(rename = "physiological_score")]
    Physiological,
    #[serde(rename = "environmental_score")]
    Environmental,
    #[serde(rename = "academic_score")]
    Academic,
    #[serde(rename = "social_score")]
    Social,
}

impl StressDomain {
    pub const ALL: [StressDomain; 5] = [
        Self::Psychological,
        Self::Physiological,
        Self::Environmental,
        Self::Academic,
        Self::Social,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Psychological => "psychological_score",
            Self::Physiological => "physiological_score",
            Self::Environmental => "environmental_score",
            Self::Academic => "academic_score",
            Self::Social => "social_score",
        }
    }

    pub const fn features(self) -> [StressFeature; 4] {
        use StressFeature::*;
        match self {
            Self::Psychological => [AnxietyLevel, SelfEsteem, MentalHealthHistory, Depression],
            Self::Physiological => [Headache, BloodPressure, SleepQuality, BreathingProblem],
            Self::Environmental => [NoiseLevel, LivingConditions, Safety, BasicNeeds],
            Self::Academic => [
                AcademicPerformance,
                StudyLoad,
                TeacherStudentRelationship,
                FutureCareerConcerns,
            ],
            Self::Social => [
                SocialSupport,
                PeerPressure,
                ExtracurricularActivities,
                Bullying,
            ],
        }
    }
}

/// Domain averages on a 0–5 scale; higher always means more stress-associated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeScores {
    pub psychological_score: f64,
    pub physiological_score: f64,
    pub environmental_score: f64,
    pub academic_score: f64,
    pub social_score: f64,
}

impl CompositeScores {
    pub fn get(&self, domain: StressDomain) -> f64 {
        match domain {
            StressDomain::Psychological => self.psychological_score,
            StressDomain::Physiological => self.physiological_score,
            StressDomain::Environmental => self.environmental_score,
            StressDomain::Academic => self.academic_score,
            StressDomain::Social => self.social_score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StressLevel {
    NoStress,
    Eustress,
    Distress,
}

impl StressLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoStress => "No Stress",
            Self::Eustress => "Eustress",
            Self::Distress => "Distress",
        }
    }
}

impl From<StressLevel> for u8 {
    fn from(level: StressLevel) -> Self {
        match level {
            StressLevel::NoStress => 0,
            StressLevel::Eustress => 1,
            StressLevel::Distress => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stress level must be 0, 1 or 2 (got {0})")]
pub struct InvalidStressLevel(pub u8);

impl TryFrom<u8> for StressLevel {
    type Error = InvalidStressLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoStress),
            1 => Ok(Self::Eustress),
            2 => Ok(Self::Distress),
            other => Err(InvalidStressLevel(other)),
        }
    }
}

/// Direction a predictor pushes the stress estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Stress-increasing.
    Positive,
    /// Stress-reducing.
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressPredictionResult {
    pub stress_level: StressLevel,
    pub confidence: f64,
    /// Weighted, normalized stress estimate in [0, 1]. Absent from externally produced
    /// predictions, where it reads as 0.
    #[serde(default)]
    pub stress_score: f64,
    pub composite_scores: CompositeScores,
    pub top_predictors: Vec<FeatureImportance>,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<StressRiskFactor>,
    pub protective_factors: Vec<ProtectiveFactor>,
}
