use axum::extract::{Query, State};
use ferrisfit_core::domain::{plan::ports::PlanService, recommendation::entities::MealPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recommendation::validators::MealPlanParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealPlanResponse {
    pub data: MealPlan,
}

#[utoipa::path(
    get,
    path = "/meals",
    tag = "recommendation",
    summary = "Get meal plan",
    description = "Returns the four-meal plan for a goal and diet, adjusted for gender.",
    params(MealPlanParams),
    responses(
        (status = 200, body = GetMealPlanResponse)
    ),
)]
pub async fn get_meal_plan(
    State(state): State<AppState>,
    Query(params): Query<MealPlanParams>,
) -> Result<Response<GetMealPlanResponse>, ApiError> {
    let plan = state
        .service
        .meal_plan(params.goal, params.diet, params.gender);

    Ok(Response::OK(GetMealPlanResponse { data: plan }))
}
