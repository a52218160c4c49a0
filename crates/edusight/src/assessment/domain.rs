use serde::{Deserialize, Serialize};

use crate::validation::{RangeCheck, ScoreRange, ValidationError};

const LIKERT: ScoreRange = ScoreRange::new(1.0, 5.0);
const PERCENT: ScoreRange = ScoreRange::new(0.0, 100.0);
const GPA: ScoreRange = ScoreRange::new(0.0, 4.0);
const RATE: ScoreRange = ScoreRange::new(0.0, 1.0);
const BMI: ScoreRange = ScoreRange::new(10.0, 40.0);
const SHARE: ScoreRange = ScoreRange::new(0.0, f64::MAX);

/// Curriculum standard a student is enrolled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Framework {
    Ib,
    Igcse,
    Icse,
    Cbse,
}

impl Framework {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ib => "IB",
            Self::Igcse => "IGCSE",
            Self::Icse => "ICSE",
            Self::Cbse => "CBSE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTrend {
    Improving,
    Stable,
    Declining,
}

/// Per-subject performance record, scores on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    pub subject: String,
    pub current_score: f64,
    #[serde(default)]
    pub history: Vec<f64>,
    pub trend: ScoreTrend,
    pub difficulty: f64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicAssessment {
    pub framework: Framework,
    pub subjects: Vec<SubjectScore>,
    pub gpa: f64,
    pub attendance_rate: f64,
    pub behavioral_rating: f64,
    pub teacher_feedback: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CognitiveProfile {
    pub attention: f64,
    pub memory: f64,
    pub processing_speed: f64,
    pub logical_reasoning: f64,
    pub spatial_reasoning: f64,
    pub verbal_reasoning: f64,
    pub problem_solving: f64,
}

impl CognitiveProfile {
    pub fn dimensions(&self) -> [(&'static str, f64); 7] {
        [
            ("attention", self.attention),
            ("memory", self.memory),
            ("processing_speed", self.processing_speed),
            ("logical_reasoning", self.logical_reasoning),
            ("spatial_reasoning", self.spatial_reasoning),
            ("verbal_reasoning", self.verbal_reasoning),
            ("problem_solving", self.problem_solving),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionalIntelligence {
    pub self_awareness: f64,
    pub self_regulation: f64,
    pub empathy: f64,
    pub social_awareness: f64,
    pub relationship_management: f64,
}

impl EmotionalIntelligence {
    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        [
            ("self_awareness", self.self_awareness),
            ("self_regulation", self.self_regulation),
            ("empathy", self.empathy),
            ("social_awareness", self.social_awareness),
            ("relationship_management", self.relationship_management),
        ]
    }
}

/// Big Five trait ratings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl PersonalityTraits {
    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        [
            ("openness", self.openness),
            ("conscientiousness", self.conscientiousness),
            ("extraversion", self.extraversion),
            ("agreeableness", self.agreeableness),
            ("neuroticism", self.neuroticism),
        ]
    }
}

/// Relative preference for each learning channel. Any unit works (fractions or
/// percentages) because the balance score only looks at the shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningStyle {
    pub visual: f64,
    pub auditory: f64,
    pub kinesthetic: f64,
    pub reading_writing: f64,
}

impl LearningStyle {
    pub fn channels(&self) -> [(&'static str, f64); 4] {
        [
            ("visual", self.visual),
            ("auditory", self.auditory),
            ("kinesthetic", self.kinesthetic),
            ("reading_writing", self.reading_writing),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsychologicalAssessment {
    pub cognitive: CognitiveProfile,
    pub emotional: EmotionalIntelligence,
    pub personality: PersonalityTraits,
    pub learning_style: LearningStyle,
    pub motivation: f64,
    pub stress_level: f64,
    pub social_skills: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorSkills {
    pub fine_motor: f64,
    pub gross_motor: f64,
    pub coordination: f64,
    pub balance: f64,
    pub agility: f64,
}

impl MotorSkills {
    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        [
            ("fine_motor", self.fine_motor),
            ("gross_motor", self.gross_motor),
            ("coordination", self.coordination),
            ("balance", self.balance),
            ("agility", self.agility),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessProfile {
    pub cardiovascular_endurance: f64,
    pub muscular_strength: f64,
    pub muscular_endurance: f64,
    pub flexibility: f64,
    pub body_composition: f64,
}

impl FitnessProfile {
    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        [
            ("cardiovascular_endurance", self.cardiovascular_endurance),
            ("muscular_strength", self.muscular_strength),
            ("muscular_endurance", self.muscular_endurance),
            ("flexibility", self.flexibility),
            ("body_composition", self.body_composition),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthIndicators {
    pub bmi: f64,
    pub vision: f64,
    pub hearing: f64,
    pub posture: f64,
    pub sleep_quality: f64,
    pub nutrition: f64,
}

impl HealthIndicators {
    /// Qualitative 1–5 ratings, BMI excluded.
    pub fn ratings(&self) -> [(&'static str, f64); 5] {
        [
            ("vision", self.vision),
            ("hearing", self.hearing),
            ("posture", self.posture),
            ("sleep_quality", self.sleep_quality),
            ("nutrition", self.nutrition),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsPerformance {
    pub team_sports: f64,
    pub individual_sports: f64,
    pub sportsmanship: f64,
    pub skill_development: f64,
}

impl SportsPerformance {
    pub fn dimensions(&self) -> [(&'static str, f64); 4] {
        [
            ("team_sports", self.team_sports),
            ("individual_sports", self.individual_sports),
            ("sportsmanship", self.sportsmanship),
            ("skill_development", self.skill_development),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalAssessment {
    pub motor_skills: MotorSkills,
    pub fitness: FitnessProfile,
    pub health: HealthIndicators,
    pub sports: SportsPerformance,
}

/// Complete input record for a holistic 360° evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentDomain {
    pub academic: AcademicAssessment,
    pub psychological: PsychologicalAssessment,
    pub physical: PhysicalAssessment,
}

impl AssessmentDomain {
    /// Checks every measure against its documented scale and reports all violations at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = RangeCheck::default();

        let academic = &self.academic;
        for (index, subject) in academic.subjects.iter().enumerate() {
            let prefix = format!("academic.subjects[{index}]");
            check.check(format!("{prefix}.current_score"), subject.current_score, PERCENT);
            for (position, past) in subject.history.iter().enumerate() {
                check.check(format!("{prefix}.history[{position}]"), *past, PERCENT);
            }
            check.check(format!("{prefix}.difficulty"), subject.difficulty, LIKERT);
            check.check(format!("{prefix}.engagement"), subject.engagement, LIKERT);
        }
        check.check("academic.gpa", academic.gpa, GPA);
        check.check("academic.attendance_rate", academic.attendance_rate, RATE);
        check.check(
            "academic.behavioral_rating",
            academic.behavioral_rating,
            LIKERT,
        );
        check.check("academic.teacher_feedback", academic.teacher_feedback, LIKERT);

        let psych = &self.psychological;
        let likert_groups = [
            ("cognitive", psych.cognitive.dimensions().to_vec()),
            ("emotional", psych.emotional.dimensions().to_vec()),
            ("personality", psych.personality.dimensions().to_vec()),
        ];
        for (group, dimensions) in likert_groups {
            for (name, value) in dimensions {
                check.check(format!("psychological.{group}.{name}"), value, LIKERT);
            }
        }
        for (name, value) in psych.learning_style.channels() {
            check.check(format!("psychological.learning_style.{name}"), value, SHARE);
        }
        check.check("psychological.motivation", psych.motivation, LIKERT);
        check.check("psychological.stress_level", psych.stress_level, LIKERT);
        check.check("psychological.social_skills", psych.social_skills, LIKERT);

        let physical = &self.physical;
        let physical_groups = [
            ("motor_skills", physical.motor_skills.dimensions().to_vec()),
            ("fitness", physical.fitness.dimensions().to_vec()),
            ("health", physical.health.ratings().to_vec()),
            ("sports", physical.sports.dimensions().to_vec()),
        ];
        for (group, dimensions) in physical_groups {
            for (name, value) in dimensions {
                check.check(format!("physical.{group}.{name}"), value, LIKERT);
            }
        }
        check.check("physical.health.bmi", physical.health.bmi, BMI);

        check.finish()
    }
}
