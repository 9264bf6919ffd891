use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plan::validators::ConvertHeightRequest,
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConvertHeightResponse {
    pub height_cm: f64,
}

#[utoipa::path(
    post,
    path = "/height",
    tag = "plan",
    summary = "Convert height",
    description = "Converts a height given in feet and inches into centimeters.",
    responses(
        (status = 200, body = ConvertHeightResponse)
    ),
    request_body = ConvertHeightRequest
)]
pub async fn convert_height(
    ValidateJson(payload): ValidateJson<ConvertHeightRequest>,
) -> Result<Response<ConvertHeightResponse>, ApiError> {
    Ok(Response::OK(ConvertHeightResponse {
        height_cm: payload.height().to_cm(),
    }))
}
