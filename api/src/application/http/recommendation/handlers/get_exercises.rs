use axum::extract::{Query, State};
use ferrisfit_core::domain::plan::ports::PlanService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recommendation::validators::ExerciseParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetExercisesResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/exercises",
    tag = "recommendation",
    summary = "Get exercise suggestions",
    params(ExerciseParams),
    responses(
        (status = 200, body = GetExercisesResponse)
    ),
)]
pub async fn get_exercises(
    State(state): State<AppState>,
    Query(params): Query<ExerciseParams>,
) -> Result<Response<GetExercisesResponse>, ApiError> {
    Ok(Response::OK(GetExercisesResponse {
        data: state.service.exercises(params.goal, params.gender),
    }))
}
