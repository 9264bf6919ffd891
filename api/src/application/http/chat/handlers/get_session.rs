use axum::extract::{Path, State};
use ferrisfit_core::domain::chat::ports::ChatService;
use uuid::Uuid;

use crate::application::http::{
    chat::handlers::create_session::ChatSessionResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "chat",
    summary = "Get chat session",
    description = "Returns the session with its full message history in order.",
    params(
        ("session_id" = Uuid, Path, description = "Chat session ID"),
    ),
    responses(
        (status = 200, body = ChatSessionResponse)
    ),
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ChatSessionResponse>, ApiError> {
    let session = state.service.get_session(session_id).await?;

    Ok(Response::OK(ChatSessionResponse { data: session }))
}
