use axum::extract::State;
use ferrisfit_core::domain::{
    plan::{ports::PlanService, value_objects::ProjectProgressInput},
    progress::entities::ProgressProjection,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plan::validators::ProjectProgressRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProjectProgressResponse {
    pub data: ProgressProjection,
}

#[utoipa::path(
    post,
    path = "/projection",
    tag = "plan",
    summary = "Project weight progress",
    description = "Estimates the days needed to reach the target weight at a fixed 500 kcal daily deficit and returns a linear trajectory for charting.",
    responses(
        (status = 200, body = ProjectProgressResponse)
    ),
    request_body = ProjectProgressRequest
)]
pub async fn project_progress(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProjectProgressRequest>,
) -> Result<Response<ProjectProgressResponse>, ApiError> {
    let projection = state.service.project_progress(ProjectProgressInput {
        weight_kg: payload.weight_kg,
        target_weight_kg: payload.target_weight_kg,
    })?;

    Ok(Response::OK(ProjectProgressResponse { data: projection }))
}
