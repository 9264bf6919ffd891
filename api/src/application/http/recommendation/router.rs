use super::handlers::{
    get_exercises::{__path_get_exercises, get_exercises},
    get_meal_plan::{__path_get_meal_plan, get_meal_plan},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_meal_plan, get_exercises))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recommendations/meals", state.args.server.root_path),
            get(get_meal_plan),
        )
        .route(
            &format!("{}/recommendations/exercises", state.args.server.root_path),
            get(get_exercises),
        )
}
