use super::config::{BmiBand, ScoreConfig};
use super::domain::{
    AcademicAssessment, HealthIndicators, LearningStyle, PersonalityTraits,
    PhysicalAssessment, PsychologicalAssessment,
};
use super::{AssessmentArea, ScoreComponent};

/// 1–5 Likert ratings map onto 0–100 by a factor of 20.
const LIKERT_TO_PERCENT: f64 = 20.0;
const LIKERT_MIDPOINT: f64 = 3.0;
/// Reverse-scoring pivot for 1–5 ratings (1 becomes 5, 5 becomes 1).
const LIKERT_REVERSE: f64 = 6.0;
/// Each point of learning-style standard deviation (in percentage points) costs this much.
const STYLE_DISPERSION_PENALTY: f64 = 2.0;

pub(crate) struct DomainScores {
    pub academic: f64,
    pub psychological: f64,
    pub physical: f64,
}

impl DomainScores {
    pub fn min(&self) -> f64 {
        self.academic.min(self.psychological).min(self.physical)
    }
}

pub(crate) fn score_domains(
    academic: &AcademicAssessment,
    psychological: &PsychologicalAssessment,
    physical: &PhysicalAssessment,
    config: &ScoreConfig,
) -> (DomainScores, Vec<ScoreComponent>) {
    let mut components = Vec::new();

    let scores = DomainScores {
        academic: academic_score(academic, config, &mut components),
        psychological: psychological_score(psychological, config, &mut components),
        physical: physical_score(physical, config, &mut components),
    };

    (scores, components)
}

pub(crate) fn academic_score(
    assessment: &AcademicAssessment,
    config: &ScoreConfig,
    components: &mut Vec<ScoreComponent>,
) -> f64 {
    let weights = config.academic_weights;
    let scaling = config.frameworks.for_framework(assessment.framework);

    let subject_average = mean(assessment.subjects.iter().map(|s| s.current_score));
    let subjects = subject_average * scaling.difficulty;
    let gpa = assessment.gpa / 4.0 * 100.0;
    let attendance = assessment.attendance_rate * 100.0;
    let behavior = assessment.behavioral_rating * LIKERT_TO_PERCENT;
    let feedback = assessment.teacher_feedback * LIKERT_TO_PERCENT;

    let mut push = |factor: &str, score: f64, weight: f64| {
        components.push(ScoreComponent::new(AssessmentArea::Academic, factor, score, weight));
        score * weight
    };

    let weighted = push("subjects", subjects, weights.subjects)
        + push("gpa", gpa, weights.gpa)
        + push("attendance", attendance, weights.attendance)
        + push("behavior", behavior, weights.behavior)
        + push("teacher_feedback", feedback, weights.teacher_feedback);

    finalize(weighted * scaling.breadth, config)
}

pub(crate) fn psychological_score(
    assessment: &PsychologicalAssessment,
    config: &ScoreConfig,
    components: &mut Vec<ScoreComponent>,
) -> f64 {
    let weights = config.psychological_weights;

    let cognitive =
        mean(assessment.cognitive.dimensions().iter().map(|(_, v)| *v)) * LIKERT_TO_PERCENT;
    let emotional =
        mean(assessment.emotional.dimensions().iter().map(|(_, v)| *v)) * LIKERT_TO_PERCENT;
    let personality = personality_score(&assessment.personality);
    let learning_style = learning_style_balance(&assessment.learning_style);
    let motivation = (assessment.motivation * LIKERT_TO_PERCENT
        + (LIKERT_REVERSE - assessment.stress_level) * LIKERT_TO_PERCENT)
        / 2.0;

    let mut push = |factor: &str, score: f64, weight: f64| {
        components.push(ScoreComponent::new(
            AssessmentArea::Psychological,
            factor,
            score,
            weight,
        ));
        score * weight
    };

    let weighted = push("cognitive", cognitive, weights.cognitive)
        + push("emotional", emotional, weights.emotional)
        + push("personality", personality, weights.personality)
        + push("learning_style", learning_style, weights.learning_style)
        + push("motivation", motivation, weights.motivation);

    finalize(weighted, config)
}

pub(crate) fn physical_score(
    assessment: &PhysicalAssessment,
    config: &ScoreConfig,
    components: &mut Vec<ScoreComponent>,
) -> f64 {
    let weights = config.physical_weights;

    let motor =
        mean(assessment.motor_skills.dimensions().iter().map(|(_, v)| *v)) * LIKERT_TO_PERCENT;
    let fitness =
        mean(assessment.fitness.dimensions().iter().map(|(_, v)| *v)) * LIKERT_TO_PERCENT;
    let health = health_score(&assessment.health, &config.bmi);
    let sports = mean(assessment.sports.dimensions().iter().map(|(_, v)| *v)) * LIKERT_TO_PERCENT;

    let mut push = |factor: &str, score: f64, weight: f64| {
        components.push(ScoreComponent::new(AssessmentArea::Physical, factor, score, weight));
        score * weight
    };

    let weighted = push("motor_skills", motor, weights.motor_skills)
        + push("fitness", fitness, weights.fitness)
        + push("health", health, weights.health)
        + push("sports", sports, weights.sports);

    finalize(weighted, config)
}

pub(crate) fn overall_score(scores: &DomainScores, config: &ScoreConfig) -> f64 {
    let weights = config.overall_weights;
    let weighted = scores.academic * weights.academic
        + scores.psychological * weights.psychological
        + scores.physical * weights.physical;
    finalize(weighted, config)
}

/// Openness, conscientiousness and agreeableness count directly; extraversion rewards
/// balance around the midpoint; neuroticism is inverted.
pub(crate) fn personality_score(traits: &PersonalityTraits) -> f64 {
    let extraversion_balance =
        (5.0 - (traits.extraversion - LIKERT_MIDPOINT).abs()) * LIKERT_TO_PERCENT;
    let emotional_stability = (LIKERT_REVERSE - traits.neuroticism) * LIKERT_TO_PERCENT;

    mean(
        [
            traits.openness * LIKERT_TO_PERCENT,
            traits.conscientiousness * LIKERT_TO_PERCENT,
            traits.agreeableness * LIKERT_TO_PERCENT,
            extraversion_balance,
            emotional_stability,
        ]
        .into_iter(),
    )
}

/// 100 for an even four-way split, decreasing with the spread of channel shares.
pub(crate) fn learning_style_balance(style: &LearningStyle) -> f64 {
    let channels = style.channels().map(|(_, value)| value);
    let total: f64 = channels.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let shares = channels.map(|value| value / total * 100.0);
    let average = mean(shares.iter().copied());
    let variance = mean(shares.iter().map(|share| (share - average).powi(2)));

    (100.0 - variance.sqrt() * STYLE_DISPERSION_PENALTY).clamp(0.0, 100.0)
}

pub(crate) fn bmi_score(bmi: f64, band: &BmiBand) -> f64 {
    if (band.healthy_min..=band.healthy_max).contains(&bmi) {
        100.0
    } else {
        (100.0 - (bmi - band.ideal).abs() * band.penalty_per_unit).max(0.0)
    }
}

pub(crate) fn health_score(health: &HealthIndicators, band: &BmiBand) -> f64 {
    let bmi = bmi_score(health.bmi, band);
    mean(
        std::iter::once(bmi).chain(
            health
                .ratings()
                .into_iter()
                .map(|(_, rating)| rating * LIKERT_TO_PERCENT),
        ),
    )
}

fn finalize(score: f64, config: &ScoreConfig) -> f64 {
    config.clamp(score.round())
}

/// Empty input averages to zero rather than NaN.
pub(crate) fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
