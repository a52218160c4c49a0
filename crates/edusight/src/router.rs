use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::assessment::domain::AssessmentDomain;
use crate::assessment::EduSight360Result;
use crate::service::{AssessmentService, AssessmentServiceError};
use crate::stress::{StressAssessmentData, StressInterventionPlan, StressPredictionResult};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub assessment: AssessmentDomain,
    /// Anchor for milestone dates; today when omitted.
    #[serde(default)]
    pub assessed_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ScheduledMilestone {
    pub title: String,
    pub due_on: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub assessed_on: NaiveDate,
    pub result: EduSight360Result,
    pub milestone_schedule: Vec<ScheduledMilestone>,
}

impl ScoreResponse {
    pub fn new(assessed_on: NaiveDate, result: EduSight360Result) -> Self {
        let milestone_schedule = result
            .development_plan
            .milestones
            .iter()
            .map(|milestone| ScheduledMilestone {
                title: milestone.title.clone(),
                due_on: milestone.due_on(assessed_on),
            })
            .collect();

        Self {
            assessed_on,
            result,
            milestone_schedule,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StressAssessmentResponse {
    pub prediction: StressPredictionResult,
    pub plan: StressInterventionPlan,
}

/// Router builder exposing the scoring and stress endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/edusight/score", post(score_handler))
        .route("/api/v1/stress/composite", post(composite_handler))
        .route("/api/v1/stress/predict", post(predict_handler))
        .route(
            "/api/v1/stress/intervention-plan",
            post(intervention_plan_handler),
        )
        .route("/api/v1/stress/assessment", post(stress_assessment_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let assessed_on = request
        .assessed_on
        .unwrap_or_else(|| Local::now().date_naive());
    match service.score(&request.assessment) {
        Ok(result) => {
            let body = ScoreResponse::new(assessed_on, result);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => rejection(error),
    }
}

pub(crate) async fn composite_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(survey): axum::Json<StressAssessmentData>,
) -> Response {
    match service.composite(&survey) {
        Ok(scores) => (StatusCode::OK, axum::Json(scores)).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(survey): axum::Json<StressAssessmentData>,
) -> Response {
    match service.predict(&survey) {
        Ok(prediction) => (StatusCode::OK, axum::Json(prediction)).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn intervention_plan_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(prediction): axum::Json<StressPredictionResult>,
) -> Response {
    let plan = service.intervention_plan(&prediction);
    (StatusCode::OK, axum::Json(plan)).into_response()
}

pub(crate) async fn stress_assessment_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(survey): axum::Json<StressAssessmentData>,
) -> Response {
    match service.assess(&survey) {
        Ok((prediction, plan)) => {
            let body = StressAssessmentResponse { prediction, plan };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => rejection(error),
    }
}

fn rejection(error: AssessmentServiceError) -> Response {
    match error {
        AssessmentServiceError::Validation(error) => {
            let payload = json!({
                "error": error.to_string(),
                "violations": error.violations,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
