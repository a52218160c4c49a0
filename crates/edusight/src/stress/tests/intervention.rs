use super::common::*;
use crate::stress::{
    generate_intervention_plan, predict_stress_level, StressLevel, StressPredictionResult,
    StressRiskFactor, Urgency,
};

#[test]
fn distress_triggers_critical_plan_with_referral() {
    let prediction = predict_stress_level(&overwhelmed_student());
    let plan = generate_intervention_plan(&prediction);

    assert_eq!(plan.stress_level, StressLevel::Distress);
    assert_eq!(plan.urgency, Urgency::Critical);
    assert!(plan.referral_needed);
    assert_eq!(plan.follow_up_days, 7);
    assert!(plan
        .immediate_actions
        .contains(&"Open a bullying incident report".to_string()));
    assert!(plan
        .resources
        .contains(&"Anti-bullying program coordinator".to_string()));
    assert_eq!(
        plan.resources
            .iter()
            .filter(|resource| resource.as_str() == "School nurse")
            .count(),
        1
    );
}

#[test]
fn eustress_alone_is_high_urgency() {
    let prediction = predict_stress_level(&midpoint_student());
    let plan = engine().generate_intervention_plan(&prediction);

    assert_eq!(plan.urgency, Urgency::High);
    assert!(plan.referral_needed);
    assert_eq!(plan.follow_up_days, 14);
}

#[test]
fn calm_students_get_a_light_touch_plan() {
    let prediction = predict_stress_level(&thriving_student());
    let plan = generate_intervention_plan(&prediction);

    assert_eq!(plan.urgency, Urgency::Low);
    assert!(!plan.referral_needed);
    assert_eq!(plan.follow_up_days, 90);
    assert_eq!(plan.resources, vec!["School counselor".to_string()]);
}

#[test]
fn a_few_risks_without_stress_band_is_medium() {
    let mut survey = thriving_student();
    survey.sleep_quality = 1.0;
    survey.study_load = 4.0;

    let prediction = predict_stress_level(&survey);
    assert_eq!(prediction.stress_level, StressLevel::NoStress);
    assert_eq!(prediction.risk_factors.len(), 2);

    let plan = generate_intervention_plan(&prediction);
    assert_eq!(plan.urgency, Urgency::Medium);
    assert!(!plan.referral_needed);
    assert!(plan
        .short_term_goals
        .contains(&"Establish a regular sleep routine of 8-9 hours".to_string()));
}

#[test]
fn predictions_without_a_stress_score_still_plan() {
    let mut json = serde_json::to_value(predict_stress_level(&overwhelmed_student()))
        .expect("serializes");
    json.as_object_mut()
        .expect("prediction is an object")
        .remove("stress_score");

    let prediction: StressPredictionResult =
        serde_json::from_value(json).expect("stress_score is optional");
    assert_eq!(prediction.stress_score, 0.0);
    assert_eq!(prediction.stress_level, StressLevel::Distress);
    assert!(prediction.risk_factors.contains(&StressRiskFactor::Bullying));

    let plan = generate_intervention_plan(&prediction);
    assert_eq!(plan.urgency, Urgency::Critical);
}
