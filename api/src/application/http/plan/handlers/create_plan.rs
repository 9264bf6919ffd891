use axum::extract::State;
use ferrisfit_core::domain::plan::{entities::PlanReport, ports::PlanService};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::http::{
    plan::validators::CreatePlanRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreatePlanResponse {
    pub data: PlanReport,
}

#[utoipa::path(
    post,
    path = "",
    tag = "plan",
    summary = "Show my plan",
    description = "Builds the full health plan for a profile: BMI, goal, meal plan, exercises and the projected progress timeline.",
    responses(
        (status = 200, body = CreatePlanResponse)
    ),
    request_body = CreatePlanRequest
)]
pub async fn create_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreatePlanRequest>,
) -> Result<Response<CreatePlanResponse>, ApiError> {
    let report = state.service.build_plan(payload.into())?;
    info!(goal = %report.bmi.goal, category = %report.bmi.category, "plan generated");

    Ok(Response::OK(CreatePlanResponse { data: report }))
}
