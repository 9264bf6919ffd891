use axum::extract::State;
use ferrisfit_core::domain::{
    anthropometry::entities::Height,
    plan::{
        ports::PlanService,
        value_objects::{AssessBmiInput, BmiAssessment},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plan::validators::AssessBmiRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AssessBmiResponse {
    pub data: BmiAssessment,
}

#[utoipa::path(
    post,
    path = "/bmi",
    tag = "plan",
    summary = "Assess BMI",
    description = "Computes the body-mass index, its category and the derived goal.",
    responses(
        (status = 200, body = AssessBmiResponse)
    ),
    request_body = AssessBmiRequest
)]
pub async fn assess_bmi(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AssessBmiRequest>,
) -> Result<Response<AssessBmiResponse>, ApiError> {
    let height = Height::new(payload.feet, payload.inches)?;

    let assessment = state.service.assess_bmi(AssessBmiInput {
        height,
        weight_kg: payload.weight_kg,
    })?;

    Ok(Response::OK(AssessBmiResponse { data: assessment }))
}
