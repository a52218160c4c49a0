use crate::assessment::domain::{
    AcademicAssessment, AssessmentDomain, CognitiveProfile, EmotionalIntelligence,
    FitnessProfile, Framework, HealthIndicators, LearningStyle, MotorSkills, PersonalityTraits,
    PhysicalAssessment, PsychologicalAssessment, ScoreTrend, SportsPerformance, SubjectScore,
};
use crate::assessment::{ScoreConfig, ScoreEngine};

pub(crate) fn subject(name: &str, score: f64) -> SubjectScore {
    SubjectScore {
        subject: name.to_string(),
        current_score: score,
        history: vec![score - 2.0, score],
        trend: ScoreTrend::Stable,
        difficulty: 3.0,
        engagement: 4.0,
    }
}

fn cognitive(level: f64) -> CognitiveProfile {
    CognitiveProfile {
        attention: level,
        memory: level,
        processing_speed: level,
        logical_reasoning: level,
        spatial_reasoning: level,
        verbal_reasoning: level,
        problem_solving: level,
    }
}

fn emotional(level: f64) -> EmotionalIntelligence {
    EmotionalIntelligence {
        self_awareness: level,
        self_regulation: level,
        empathy: level,
        social_awareness: level,
        relationship_management: level,
    }
}

pub(crate) fn even_learning_style() -> LearningStyle {
    LearningStyle {
        visual: 25.0,
        auditory: 25.0,
        kinesthetic: 25.0,
        reading_writing: 25.0,
    }
}

fn physical(level: f64, bmi: f64) -> PhysicalAssessment {
    PhysicalAssessment {
        motor_skills: MotorSkills {
            fine_motor: level,
            gross_motor: level,
            coordination: level,
            balance: level,
            agility: level,
        },
        fitness: FitnessProfile {
            cardiovascular_endurance: level,
            muscular_strength: level,
            muscular_endurance: level,
            flexibility: level,
            body_composition: level,
        },
        health: HealthIndicators {
            bmi,
            vision: level,
            hearing: level,
            posture: level,
            sleep_quality: level,
            nutrition: level,
        },
        sports: SportsPerformance {
            team_sports: level,
            individual_sports: level,
            sportsmanship: level,
            skill_development: level,
        },
    }
}

/// ICSE student scoring 77 / 83 / 81, overall 80, low risk.
pub(crate) fn well_rounded_student() -> AssessmentDomain {
    AssessmentDomain {
        academic: AcademicAssessment {
            framework: Framework::Icse,
            subjects: vec![
                subject("Mathematics", 92.0),
                subject("Science", 85.0),
                subject("English", 81.0),
                subject("History", 74.0),
            ],
            gpa: 3.6,
            attendance_rate: 0.95,
            behavioral_rating: 4.0,
            teacher_feedback: 4.0,
        },
        psychological: PsychologicalAssessment {
            cognitive: cognitive(4.0),
            emotional: emotional(4.0),
            personality: PersonalityTraits {
                openness: 4.0,
                conscientiousness: 4.0,
                extraversion: 3.0,
                agreeableness: 4.0,
                neuroticism: 2.0,
            },
            learning_style: even_learning_style(),
            motivation: 4.0,
            stress_level: 2.0,
            social_skills: 4.0,
        },
        physical: physical(4.0, 20.0),
    }
}

/// CBSE student whose every domain falls to the floor.
pub(crate) fn struggling_student() -> AssessmentDomain {
    AssessmentDomain {
        academic: AcademicAssessment {
            framework: Framework::Cbse,
            subjects: vec![
                subject("Mathematics", 40.0),
                subject("Science", 45.0),
                subject("English", 50.0),
                subject("History", 55.0),
                subject("Art", 58.0),
            ],
            gpa: 0.0,
            attendance_rate: 0.0,
            behavioral_rating: 1.0,
            teacher_feedback: 1.0,
        },
        psychological: PsychologicalAssessment {
            cognitive: cognitive(2.0),
            emotional: emotional(2.0),
            personality: PersonalityTraits {
                openness: 2.0,
                conscientiousness: 2.0,
                extraversion: 1.0,
                agreeableness: 2.0,
                neuroticism: 5.0,
            },
            learning_style: LearningStyle {
                visual: 70.0,
                auditory: 10.0,
                kinesthetic: 10.0,
                reading_writing: 10.0,
            },
            motivation: 2.0,
            stress_level: 5.0,
            social_skills: 2.0,
        },
        physical: physical(2.0, 30.0),
    }
}

pub(crate) fn engine() -> ScoreEngine {
    ScoreEngine::default()
}

/// Floor lowered to zero so the critical tier becomes reachable.
pub(crate) fn unclamped_engine() -> ScoreEngine {
    ScoreEngine::new(ScoreConfig {
        score_floor: 0.0,
        ..ScoreConfig::default()
    })
}
