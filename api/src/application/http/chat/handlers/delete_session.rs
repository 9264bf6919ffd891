use axum::extract::{Path, State};
use ferrisfit_core::domain::chat::ports::ChatService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{session_id}",
    tag = "chat",
    summary = "Clear chat session",
    params(
        ("session_id" = Uuid, Path, description = "Chat session ID"),
    ),
    responses(
        (status = 204, description = "Session removed")
    ),
)]
pub async fn delete_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state.service.clear_session(session_id).await?;

    Ok(Response::NoContent)
}
