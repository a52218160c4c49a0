use super::common::*;
use crate::stress::{
    calculate_composite_scores, predict_stress_level, Impact, ProtectiveFactor,
    StressAnalysisEngine, StressLevel, StressModelConfig, StressRiskFactor,
};

#[test]
fn overwhelmed_student_is_distressed() {
    let prediction = engine().predict_stress_level(&overwhelmed_student());

    assert_eq!(prediction.stress_level, StressLevel::Distress);
    assert!(prediction.confidence >= 0.7);
    assert_eq!(prediction.confidence, 0.95);
    assert!((prediction.stress_score - 1.56 / 1.63).abs() < 1e-9);
    assert_eq!(prediction.risk_factors.len(), 15);
    assert!(prediction.protective_factors.is_empty());
    assert_eq!(
        prediction.recommendations[0],
        "Schedule a meeting with the school counselor within one week"
    );
    assert!(prediction.recommendations.len() <= 8);
}

#[test]
fn thriving_student_shows_no_stress() {
    let prediction = predict_stress_level(&thriving_student());

    assert_eq!(prediction.stress_level, StressLevel::NoStress);
    assert!((prediction.stress_score - 0.07 / 1.63).abs() < 1e-9);
    assert_eq!(prediction.confidence, 0.95);
    assert!(prediction.risk_factors.is_empty());
    assert_eq!(prediction.protective_factors.len(), 6);
    assert!(prediction
        .protective_factors
        .contains(&ProtectiveFactor::StrongSocialSupport));
    assert_eq!(
        prediction.recommendations,
        vec!["Maintain current healthy routines and balance"]
    );
}

#[test]
fn midpoint_survey_lands_in_eustress() {
    let prediction = predict_stress_level(&midpoint_student());

    assert_eq!(prediction.stress_level, StressLevel::Eustress);
    assert!((prediction.stress_score - 0.5).abs() < 1e-9);
    assert_eq!(prediction.risk_factors, vec![StressRiskFactor::Bullying]);
    assert_eq!(
        prediction.recommendations,
        vec![
            "Report bullying to school staff and involve parents",
            "Use weekly planning to keep workload pressure manageable",
        ]
    );
}

#[test]
fn composites_reverse_only_sleep_esteem_and_support() {
    let scores = calculate_composite_scores(&overwhelmed_student());

    assert_eq!(scores.psychological_score, 5.0);
    assert_eq!(scores.physiological_score, 5.0);
    assert_eq!(scores.environmental_score, 5.0);
    assert_eq!(scores.academic_score, 2.5);
    assert_eq!(scores.social_score, 3.75);
}

#[test]
fn composite_scores_are_idempotent() {
    let survey = midpoint_student();
    let first = calculate_composite_scores(&survey);
    let second = calculate_composite_scores(&survey);

    assert_eq!(first, second);
    assert_eq!(engine().predict_stress_level(&survey).composite_scores, first);
}

#[test]
fn top_predictors_are_ranked_and_capped() {
    let prediction = predict_stress_level(&overwhelmed_student());
    let names: Vec<&str> = prediction
        .top_predictors
        .iter()
        .map(|predictor| predictor.feature.as_str())
        .collect();

    assert_eq!(names.len(), 10);
    assert_eq!(
        &names[..4],
        &[
            "blood_pressure",
            "social_score",
            "psychological_score",
            "physiological_score",
        ]
    );
    assert!(prediction
        .top_predictors
        .windows(2)
        .all(|pair| pair[0].importance >= pair[1].importance));
    assert!(prediction
        .top_predictors
        .iter()
        .all(|predictor| predictor.impact == Impact::Positive));
}

#[test]
fn protective_predictors_are_marked_negative() {
    let prediction = predict_stress_level(&thriving_student());
    let leader = &prediction.top_predictors[0];

    assert_eq!(leader.feature, "sleep_quality");
    assert_eq!(leader.impact, Impact::Negative);
    assert!((leader.importance - 0.08).abs() < 1e-9);
}

#[test]
fn out_of_scale_answers_are_clamped_not_rejected() {
    let mut survey = thriving_student();
    survey.anxiety_level = 400.0;
    survey.self_esteem = -30.0;

    let prediction = predict_stress_level(&survey);
    assert!((0.0..=1.0).contains(&prediction.stress_score));
    assert!((0.5..=0.95).contains(&prediction.confidence));
    assert!(prediction.risk_factors.contains(&StressRiskFactor::HighAnxiety));
    assert!(survey.validate().is_err());
}

#[test]
fn custom_thresholds_shift_the_bands() {
    let config = StressModelConfig {
        distress_threshold: 0.45,
        ..StressModelConfig::default()
    };
    let engine = StressAnalysisEngine::new(config);

    let prediction = engine.predict_stress_level(&midpoint_student());
    assert_eq!(prediction.stress_level, StressLevel::Distress);
    assert_eq!(prediction.confidence, 0.5);
}

#[test]
fn stress_level_serializes_as_its_code() {
    let prediction = predict_stress_level(&overwhelmed_student());
    let json = serde_json::to_value(&prediction).expect("serializes");

    assert_eq!(json["stress_level"], 2);
    assert_eq!(json["risk_factors"][0], "high_anxiety");
    assert!(serde_json::from_value::<StressLevel>(serde_json::json!(3)).is_err());
}
