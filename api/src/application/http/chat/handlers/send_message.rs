use axum::extract::{Path, State};
use ferrisfit_core::domain::chat::{
    entities::ChatTurn,
    ports::ChatService,
    value_objects::{ChatInput, SendMessageInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    chat::validators::SendMessageRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatTurnResponse {
    pub data: ChatTurn,
}

#[utoipa::path(
    post,
    path = "/{session_id}/messages",
    tag = "chat",
    summary = "Ask the health assistant",
    description = "Sends a text question to the assistant. When the model cannot be reached the reply is an assistant message flagged as failed.",
    params(
        ("session_id" = Uuid, Path, description = "Chat session ID"),
    ),
    responses(
        (status = 200, body = ChatTurnResponse)
    ),
    request_body = SendMessageRequest
)]
pub async fn send_message(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendMessageRequest>,
) -> Result<Response<ChatTurnResponse>, ApiError> {
    let turn = state
        .service
        .send_message(SendMessageInput {
            session_id,
            input: ChatInput::text(payload.text),
        })
        .await?;

    Ok(Response::OK(ChatTurnResponse { data: turn }))
}
