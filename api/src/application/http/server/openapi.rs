use crate::application::http::{
    chat::router::ChatApiDoc, health::HealthApiDoc, plan::router::PlanApiDoc,
    recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FerrisFit API"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/plans", api = PlanApiDoc),
        (path = "/recommendations", api = RecommendationApiDoc),
        (path = "/chat/sessions", api = ChatApiDoc),
    )
)]
pub struct ApiDoc;
