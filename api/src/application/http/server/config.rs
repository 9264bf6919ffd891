use axum::extract::State;
use ferrisfit_core::domain::{
    chat::policies::{MAX_IMAGE_SIZE, SUPPORTED_IMAGE_TYPES},
    progress::{DAILY_CALORIE_DEFICIT, KCAL_PER_KG},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub app_version: String,
    pub gemini_model: String,
    pub daily_calorie_deficit: f64,
    pub kcal_per_kg: f64,
    pub max_image_size: usize,
    pub supported_image_types: Vec<String>,
}

/// Public, non-secret settings the client needs to render its widgets.
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<Response<ConfigResponse>, ApiError> {
    Ok(Response::OK(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        gemini_model: state.args.llm.gemini_model.clone(),
        daily_calorie_deficit: DAILY_CALORIE_DEFICIT,
        kcal_per_kg: KCAL_PER_KG,
        max_image_size: MAX_IMAGE_SIZE,
        supported_image_types: SUPPORTED_IMAGE_TYPES
            .iter()
            .map(|t| t.to_string())
            .collect(),
    }))
}
