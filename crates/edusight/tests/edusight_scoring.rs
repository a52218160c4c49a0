use chrono::NaiveDate;
use edusight::assessment::{AssessmentDomain, RiskLevel, ScoreConfig, ScoreEngine};
use edusight::config::EngineProfile;
use edusight::{calculate_edusight360_score, AssessmentService, AssessmentServiceError};

fn sample_assessment() -> AssessmentDomain {
    serde_json::from_str(include_str!("../data/sample_assessment.json"))
        .expect("sample assessment parses")
}

#[test]
fn sample_student_scores_low_risk() {
    let result = calculate_edusight360_score(&sample_assessment());

    assert_eq!(result.overall_score, 80);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(!result.intervention_required);
    assert!(result
        .strengths
        .iter()
        .any(|strength| strength.contains("Mathematics")));
}

#[test]
fn milestones_are_dated_from_the_assessment_day() {
    let result = calculate_edusight360_score(&sample_assessment());
    let start = NaiveDate::from_ymd_opt(2025, 8, 29).expect("valid date");

    let milestone = &result.development_plan.milestones[0];
    assert_eq!(milestone.weeks_from_start, 4);
    assert_eq!(
        milestone.due_on(start),
        NaiveDate::from_ymd_opt(2025, 9, 26).expect("valid date")
    );
}

#[test]
fn engine_profile_can_relax_the_floor() {
    let profile = EngineProfile::from_json(r#"{ "scoring": { "score_floor": 0 } }"#)
        .expect("profile parses");
    assert_eq!(profile.scoring.score_floor, 0.0);
    assert_eq!(profile.scoring.score_ceiling, ScoreConfig::default().score_ceiling);

    let engine = ScoreEngine::new(profile.scoring);
    let result = engine.calculate(&sample_assessment());
    assert_eq!(result.overall_score, 80);
}

#[test]
fn service_rejects_nonfinite_inputs() {
    let mut assessment = sample_assessment();
    assessment.physical.health.bmi = f64::INFINITY;

    let AssessmentServiceError::Validation(error) = AssessmentService::default()
        .score(&assessment)
        .expect_err("infinite bmi rejected");
    assert_eq!(error.violations.len(), 1);
    assert_eq!(error.violations[0].field, "physical.health.bmi");
}
