use crate::infra::{read_json, to_pretty_json};
use chrono::{Local, NaiveDate};
use clap::Args;
use edusight::assessment::{
    AcademicAssessment, AssessmentDomain, CognitiveProfile, EmotionalIntelligence,
    FitnessProfile, Framework, HealthIndicators, LearningStyle, MotorSkills, PersonalityTraits,
    PhysicalAssessment, PsychologicalAssessment, ScoreTrend, SportsPerformance, SubjectScore,
};
use edusight::config::{AppConfig, EngineProfile};
use edusight::error::AppError;
use edusight::router::ScoreResponse;
use edusight::stress::{
    StressAssessmentData, StressBatchSummary, StressInterventionPlan, StressPredictionResult,
    StressSurveyImporter,
};
use edusight::AssessmentService;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding an assessment record
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Assessment date used to schedule milestones (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) assessed_on: Option<NaiveDate>,
    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StressPredictArgs {
    /// JSON file holding one stress survey
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the prediction and plan as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StressBatchArgs {
    /// Survey CSV export with a student_id column
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

fn configured_service() -> Result<AssessmentService, AppError> {
    let config = AppConfig::load()?;
    Ok(AssessmentService::from_profile(&config.engines))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        assessed_on,
        json,
    } = args;

    let assessment: AssessmentDomain = read_json(&input)?;
    let assessed_on = assessed_on.unwrap_or_else(|| Local::now().date_naive());
    let result = configured_service()?.score(&assessment)?;
    let response = ScoreResponse::new(assessed_on, result);

    if json {
        println!("{}", to_pretty_json(&response)?);
    } else {
        render_score(&response);
    }
    Ok(())
}

pub(crate) fn run_stress_predict(args: StressPredictArgs) -> Result<(), AppError> {
    let StressPredictArgs { input, json } = args;

    let survey: StressAssessmentData = read_json(&input)?;
    let (prediction, plan) = configured_service()?.assess(&survey)?;

    if json {
        let payload = serde_json::json!({ "prediction": prediction, "plan": plan });
        println!("{}", to_pretty_json(&payload)?);
    } else {
        render_prediction(&prediction, &plan);
    }
    Ok(())
}

pub(crate) fn run_stress_batch(args: StressBatchArgs) -> Result<(), AppError> {
    let rows = StressSurveyImporter::from_path(&args.csv)?;
    let service = configured_service()?;

    println!("Stress survey batch: {}", args.csv.display());
    let mut predictions = Vec::with_capacity(rows.len());
    for row in &rows {
        let (prediction, plan) = service.assess(&row.data)?;
        println!(
            "- {}: {} (score {:.2}, confidence {:.0}%) | urgency {} | follow up in {} days",
            row.student_id,
            prediction.stress_level.label(),
            prediction.stress_score,
            prediction.confidence * 100.0,
            plan.urgency.label(),
            plan.follow_up_days
        );
        predictions.push((row.student_id.as_str(), prediction));
    }

    let summary = StressBatchSummary::from_predictions(
        predictions
            .iter()
            .map(|(student_id, prediction)| (*student_id, prediction)),
    );
    render_batch_summary(&summary);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = AssessmentService::from_profile(&EngineProfile::default());
    let today = Local::now().date_naive();

    println!("EduSight demo");
    let result = service.score(&demo_student())?;
    render_score(&ScoreResponse::new(today, result));

    println!();
    let (prediction, plan) = service.assess(&demo_survey())?;
    render_prediction(&prediction, &plan);
    Ok(())
}

fn render_score(response: &ScoreResponse) {
    let result = &response.result;
    println!("EduSight 360 assessment ({})", response.assessed_on);
    println!(
        "Overall {} | academic {} | psychological {} | physical {}",
        result.overall_score,
        result.academic_score,
        result.psychological_score,
        result.physical_score
    );
    println!(
        "Risk level: {} | intervention required: {} | medical referral: {}",
        result.risk_level.label(),
        yes_no(result.intervention_required),
        yes_no(result.medical_referral_needed)
    );

    if result.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for recommendation in &result.recommendations {
            println!(
                "- [{:?}] {}: {} ({})",
                recommendation.priority,
                recommendation.domain.label(),
                recommendation.action,
                recommendation.timeline
            );
        }
    }

    print_list("Strengths", &result.strengths);
    print_list("Improvement areas", &result.improvement_areas);

    println!("\nMilestones");
    for milestone in &response.milestone_schedule {
        println!("- {} due {}", milestone.title, milestone.due_on);
    }
}

fn render_prediction(prediction: &StressPredictionResult, plan: &StressInterventionPlan) {
    println!(
        "Stress level: {} (score {:.2}, confidence {:.0}%)",
        prediction.stress_level.label(),
        prediction.stress_score,
        prediction.confidence * 100.0
    );
    let composites = &prediction.composite_scores;
    println!(
        "Composites: psychological {:.2} | physiological {:.2} | environmental {:.2} | academic {:.2} | social {:.2}",
        composites.psychological_score,
        composites.physiological_score,
        composites.environmental_score,
        composites.academic_score,
        composites.social_score
    );

    println!("\nTop predictors");
    for predictor in prediction.top_predictors.iter().take(5) {
        println!(
            "- {} {:.3} ({:?})",
            predictor.feature, predictor.importance, predictor.impact
        );
    }

    let risks: Vec<String> = prediction
        .risk_factors
        .iter()
        .map(|risk| risk.label().to_string())
        .collect();
    let protective: Vec<String> = prediction
        .protective_factors
        .iter()
        .map(|factor| factor.label().to_string())
        .collect();
    print_list("Risk factors", &risks);
    print_list("Protective factors", &protective);
    print_list("Recommendations", &prediction.recommendations);

    println!(
        "\nIntervention plan: {} urgency | referral: {} | follow up in {} days",
        plan.urgency.label(),
        yes_no(plan.referral_needed),
        plan.follow_up_days
    );
    print_list("Immediate actions", &plan.immediate_actions);
    print_list("Short-term goals", &plan.short_term_goals);
    print_list("Long-term goals", &plan.long_term_goals);
    print_list("Resources", &plan.resources);
}

fn render_batch_summary(summary: &StressBatchSummary) {
    let distribution: Vec<String> = summary
        .by_level
        .iter()
        .map(|(level, count)| format!("{level} {count}"))
        .collect();
    println!(
        "\n{} students | {}",
        summary.total,
        distribution.join(" | ")
    );
    if summary.referrals.is_empty() {
        println!("Referrals: none");
    } else {
        println!("Referrals: {}", summary.referrals.join(", "));
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        println!("\n{title}: none");
        return;
    }
    println!("\n{title}");
    for item in items {
        println!("- {item}");
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn demo_subject(name: &str, score: f64, trend: ScoreTrend) -> SubjectScore {
    SubjectScore {
        subject: name.to_string(),
        current_score: score,
        history: vec![score - 4.0, score - 2.0, score],
        trend,
        difficulty: 3.0,
        engagement: 4.0,
    }
}

fn demo_student() -> AssessmentDomain {
    AssessmentDomain {
        academic: AcademicAssessment {
            framework: Framework::Igcse,
            subjects: vec![
                demo_subject("Mathematics", 88.0, ScoreTrend::Improving),
                demo_subject("Physics", 79.0, ScoreTrend::Stable),
                demo_subject("English", 72.0, ScoreTrend::Stable),
                demo_subject("Geography", 58.0, ScoreTrend::Declining),
            ],
            gpa: 3.3,
            attendance_rate: 0.92,
            behavioral_rating: 4.0,
            teacher_feedback: 3.5,
        },
        psychological: PsychologicalAssessment {
            cognitive: CognitiveProfile {
                attention: 2.5,
                memory: 4.0,
                processing_speed: 3.5,
                logical_reasoning: 4.5,
                spatial_reasoning: 3.5,
                verbal_reasoning: 4.0,
                problem_solving: 4.0,
            },
            emotional: EmotionalIntelligence {
                self_awareness: 3.5,
                self_regulation: 3.0,
                empathy: 4.0,
                social_awareness: 3.5,
                relationship_management: 3.5,
            },
            personality: PersonalityTraits {
                openness: 4.0,
                conscientiousness: 3.5,
                extraversion: 2.5,
                agreeableness: 4.0,
                neuroticism: 3.0,
            },
            learning_style: LearningStyle {
                visual: 40.0,
                auditory: 20.0,
                kinesthetic: 25.0,
                reading_writing: 15.0,
            },
            motivation: 4.0,
            stress_level: 3.5,
            social_skills: 3.5,
        },
        physical: PhysicalAssessment {
            motor_skills: MotorSkills {
                fine_motor: 4.0,
                gross_motor: 3.5,
                coordination: 3.5,
                balance: 4.0,
                agility: 3.5,
            },
            fitness: FitnessProfile {
                cardiovascular_endurance: 4.0,
                muscular_strength: 3.0,
                muscular_endurance: 3.5,
                flexibility: 4.0,
                body_composition: 3.5,
            },
            health: HealthIndicators {
                bmi: 22.4,
                vision: 4.0,
                hearing: 5.0,
                posture: 3.5,
                sleep_quality: 2.5,
                nutrition: 3.5,
            },
            sports: SportsPerformance {
                team_sports: 4.0,
                individual_sports: 3.5,
                sportsmanship: 4.5,
                skill_development: 3.5,
            },
        },
    }
}

fn demo_survey() -> StressAssessmentData {
    StressAssessmentData {
        anxiety_level: 14.0,
        self_esteem: 17.0,
        mental_health_history: 0.0,
        depression: 11.0,
        headache: 3.0,
        blood_pressure: 2.0,
        sleep_quality: 2.0,
        breathing_problem: 2.0,
        noise_level: 3.0,
        living_conditions: 2.0,
        safety: 2.0,
        basic_needs: 2.0,
        academic_performance: 3.0,
        study_load: 4.0,
        teacher_student_relationship: 3.0,
        future_career_concerns: 4.0,
        social_support: 2.0,
        peer_pressure: 3.0,
        extracurricular_activities: 2.0,
        bullying: 1.0,
    }
}
