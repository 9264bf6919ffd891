use super::handlers::{
    assess_bmi::{__path_assess_bmi, assess_bmi},
    convert_height::{__path_convert_height, convert_height},
    create_plan::{__path_create_plan, create_plan},
    project_progress::{__path_project_progress, project_progress},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_plan, assess_bmi, convert_height, project_progress))]
pub struct PlanApiDoc;

pub fn plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/plans", state.args.server.root_path),
            post(create_plan),
        )
        .route(
            &format!("{}/plans/bmi", state.args.server.root_path),
            post(assess_bmi),
        )
        .route(
            &format!("{}/plans/height", state.args.server.root_path),
            post(convert_height),
        )
        .route(
            &format!("{}/plans/projection", state.args.server.root_path),
            post(project_progress),
        )
}
