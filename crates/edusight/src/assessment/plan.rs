use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::config::ScoreConfig;
use super::domain::{AssessmentDomain, SubjectScore};
use super::rules::DomainScores;
use super::AssessmentArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Intervention,
    Enhancement,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub domain: AssessmentArea,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub action: String,
    pub timeline: String,
    pub expected_outcome: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub weeks_from_start: u32,
    pub description: String,
}

impl Milestone {
    pub fn due_on(&self, start: NaiveDate) -> NaiveDate {
        start + Duration::weeks(i64::from(self.weeks_from_start))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentPlan {
    pub short_term: Vec<String>,
    pub medium_term: Vec<String>,
    pub long_term: Vec<String>,
    pub milestones: Vec<Milestone>,
}

pub(crate) fn recommendations(scores: &DomainScores, config: &ScoreConfig) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if scores.academic < config.support_threshold {
        recommendations.push(Recommendation {
            domain: AssessmentArea::Academic,
            priority: Priority::High,
            kind: RecommendationKind::Intervention,
            action: "Enroll in a structured tutoring program for core subjects".to_string(),
            timeline: "8-12 weeks".to_string(),
            expected_outcome: "Improve academic performance by 15-20%".to_string(),
            resources: vec![
                "Subject tutor".to_string(),
                "Practice worksheets".to_string(),
                "Online learning platform".to_string(),
            ],
        });
    }

    if scores.psychological < config.support_threshold {
        recommendations.push(Recommendation {
            domain: AssessmentArea::Psychological,
            priority: Priority::High,
            kind: RecommendationKind::Intervention,
            action: "Begin a school counseling program focused on emotional regulation"
                .to_string(),
            timeline: "6-8 weeks".to_string(),
            expected_outcome: "Strengthen coping strategies and emotional well-being"
                .to_string(),
            resources: vec![
                "School counselor".to_string(),
                "Mindfulness exercises".to_string(),
                "Parent guidance sessions".to_string(),
            ],
        });
    }

    if scores.physical < config.support_threshold {
        recommendations.push(Recommendation {
            domain: AssessmentArea::Physical,
            priority: Priority::Medium,
            kind: RecommendationKind::Intervention,
            action: "Join a structured physical activity program three times per week"
                .to_string(),
            timeline: "10-12 weeks".to_string(),
            expected_outcome: "Improve fitness and motor skills".to_string(),
            resources: vec![
                "Physical education teacher".to_string(),
                "Sports club enrollment".to_string(),
                "Home exercise plan".to_string(),
            ],
        });
    }

    // `sort_by` is stable, so equal priorities keep generation order.
    recommendations.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    recommendations
}

pub(crate) fn strengths(assessment: &AssessmentDomain, config: &ScoreConfig) -> Vec<String> {
    let mut strengths: Vec<String> = ranked_subjects(&assessment.academic.subjects, true)
        .into_iter()
        .filter(|subject| subject.current_score >= config.subject_strength_threshold)
        .take(config.highlighted_subjects)
        .map(|subject| format!("Excellence in {}", subject.subject))
        .collect();

    let cognitive = &assessment.psychological.cognitive;
    if cognitive.logical_reasoning >= 4.0 {
        strengths.push("Strong logical reasoning".to_string());
    }
    if cognitive.spatial_reasoning >= 4.0 {
        strengths.push("Strong spatial reasoning".to_string());
    }
    if cognitive.verbal_reasoning >= 4.0 {
        strengths.push("Strong verbal reasoning".to_string());
    }

    let fitness = &assessment.physical.fitness;
    if fitness.cardiovascular_endurance >= 4.0 {
        strengths.push("Excellent cardiovascular endurance".to_string());
    }
    if fitness.muscular_strength >= 4.0 {
        strengths.push("Good muscular strength".to_string());
    }
    if fitness.flexibility >= 4.0 {
        strengths.push("Good flexibility".to_string());
    }

    strengths
}

pub(crate) fn improvement_areas(assessment: &AssessmentDomain, config: &ScoreConfig) -> Vec<String> {
    let mut areas: Vec<String> = ranked_subjects(&assessment.academic.subjects, false)
        .into_iter()
        .filter(|subject| subject.current_score < config.subject_concern_threshold)
        .take(config.highlighted_subjects)
        .map(|subject| format!("Needs support in {}", subject.subject))
        .collect();

    let psych = &assessment.psychological;
    if psych.cognitive.attention < 3.0 {
        areas.push("Attention and focus".to_string());
    }
    if psych.stress_level > 3.0 {
        areas.push("Stress management".to_string());
    }

    let health = &assessment.physical.health;
    if health.sleep_quality < 3.0 {
        areas.push("Sleep quality".to_string());
    }
    if health.nutrition < 3.0 {
        areas.push("Nutrition habits".to_string());
    }

    areas
}

pub(crate) fn development_plan(recommendations: &[Recommendation]) -> DevelopmentPlan {
    let short_term = recommendations
        .iter()
        .filter(|recommendation| recommendation.priority == Priority::High)
        .map(|recommendation| recommendation.action.clone())
        .collect();

    DevelopmentPlan {
        short_term,
        medium_term: vec![
            "Build consistent study and wellness routines".to_string(),
            "Review progress with teachers and parents each month".to_string(),
        ],
        long_term: vec![
            "Achieve balanced development across academic, psychological, and physical domains"
                .to_string(),
            "Develop self-directed learning and healthy lifestyle habits".to_string(),
        ],
        milestones: vec![Milestone {
            title: "First Assessment Review".to_string(),
            weeks_from_start: 4,
            description: "Review progress on short-term goals and adjust the plan".to_string(),
        }],
    }
}

/// Subjects ordered by current score, descending when `best_first`.
fn ranked_subjects(subjects: &[SubjectScore], best_first: bool) -> Vec<&SubjectScore> {
    let mut ranked: Vec<&SubjectScore> = subjects.iter().collect();
    ranked.sort_by(|a, b| {
        let ordering = a
            .current_score
            .partial_cmp(&b.current_score)
            .unwrap_or(std::cmp::Ordering::Equal);
        if best_first {
            ordering.reverse()
        } else {
            ordering
        }
    });
    ranked
}
