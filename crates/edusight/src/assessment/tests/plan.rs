use super::common::*;
use crate::assessment::{AssessmentArea, Priority, RecommendationKind};
use chrono::NaiveDate;

#[test]
fn every_struggling_domain_gets_a_recommendation_in_priority_order() {
    let result = engine().calculate(&struggling_student());

    let domains: Vec<AssessmentArea> = result
        .recommendations
        .iter()
        .map(|recommendation| recommendation.domain)
        .collect();
    assert_eq!(
        domains,
        vec![
            AssessmentArea::Academic,
            AssessmentArea::Psychological,
            AssessmentArea::Physical
        ]
    );
    assert!(result
        .recommendations
        .windows(2)
        .all(|pair| pair[0].priority.rank() >= pair[1].priority.rank()));
    assert!(result
        .recommendations
        .iter()
        .all(|recommendation| recommendation.kind == RecommendationKind::Intervention));
}

#[test]
fn only_domains_below_sixty_are_targeted() {
    let mut student = well_rounded_student();
    student.physical.fitness.cardiovascular_endurance = 1.0;
    student.physical.fitness.muscular_strength = 1.0;
    student.physical.fitness.muscular_endurance = 1.0;
    student.physical.fitness.flexibility = 1.0;
    student.physical.fitness.body_composition = 1.0;
    student.physical.motor_skills.agility = 1.0;
    student.physical.motor_skills.balance = 1.0;
    student.physical.motor_skills.coordination = 1.0;
    student.physical.sports.team_sports = 1.0;
    student.physical.sports.individual_sports = 1.0;

    let result = engine().calculate(&student);

    assert!(result.physical_score < 60, "physical {}", result.physical_score);
    assert_eq!(result.recommendations.len(), 1);
    let recommendation = &result.recommendations[0];
    assert_eq!(recommendation.domain, AssessmentArea::Physical);
    assert_eq!(recommendation.priority, Priority::Medium);
    assert!(result.development_plan.short_term.is_empty());
}

#[test]
fn short_term_plan_lists_high_priority_actions() {
    let result = engine().calculate(&struggling_student());
    let plan = &result.development_plan;

    assert_eq!(plan.short_term.len(), 2);
    assert_eq!(plan.short_term[0], result.recommendations[0].action);
    assert_eq!(plan.short_term[1], result.recommendations[1].action);
    assert!(!plan.medium_term.is_empty());
    assert!(!plan.long_term.is_empty());
}

#[test]
fn first_review_milestone_lands_four_weeks_out() {
    let result = engine().calculate(&well_rounded_student());
    let milestones = &result.development_plan.milestones;

    assert_eq!(milestones.len(), 1);
    assert_eq!(milestones[0].title, "First Assessment Review");
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
    assert_eq!(
        milestones[0].due_on(start),
        NaiveDate::from_ymd_opt(2025, 9, 29).expect("valid date")
    );
}

#[test]
fn strengths_highlight_top_subjects_and_abilities() {
    let result = engine().calculate(&well_rounded_student());

    assert_eq!(
        &result.strengths[..3],
        &[
            "Excellence in Mathematics".to_string(),
            "Excellence in Science".to_string(),
            "Excellence in English".to_string(),
        ]
    );
    assert!(result
        .strengths
        .contains(&"Strong spatial reasoning".to_string()));
    assert!(result
        .strengths
        .contains(&"Excellent cardiovascular endurance".to_string()));
    assert_eq!(result.strengths.len(), 9);
    assert!(result.improvement_areas.is_empty());
}

#[test]
fn only_three_top_subjects_are_celebrated() {
    let mut student = well_rounded_student();
    student.academic.subjects.push(subject("Geography", 99.0));
    student.academic.subjects.push(subject("Music", 95.0));

    let result = engine().calculate(&student);
    let subject_strengths: Vec<&String> = result
        .strengths
        .iter()
        .filter(|strength| strength.starts_with("Excellence in"))
        .collect();

    assert_eq!(
        subject_strengths,
        vec![
            "Excellence in Geography",
            "Excellence in Music",
            "Excellence in Mathematics"
        ]
    );
}

#[test]
fn improvement_areas_list_weakest_subjects_first() {
    let result = engine().calculate(&struggling_student());

    assert_eq!(
        result.improvement_areas,
        vec![
            "Needs support in Mathematics",
            "Needs support in Science",
            "Needs support in English",
            "Attention and focus",
            "Stress management",
            "Sleep quality",
            "Nutrition habits",
        ]
    );
    assert!(result.strengths.is_empty());
}
