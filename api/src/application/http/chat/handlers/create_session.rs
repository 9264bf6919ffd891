use axum::extract::State;
use ferrisfit_core::domain::chat::{entities::ChatSession, ports::ChatService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatSessionResponse {
    pub data: ChatSession,
}

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Start chat session",
    description = "Creates an empty conversation with the health assistant. History lives in memory only.",
    responses(
        (status = 201, body = ChatSessionResponse)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Response<ChatSessionResponse>, ApiError> {
    let session = state.service.create_session().await?;

    Ok(Response::Created(ChatSessionResponse { data: session }))
}
