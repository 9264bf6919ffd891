use axum::extract::{Multipart, Path, State};
use ferrisfit_core::domain::chat::{
    entities::ChatImage,
    policies::MAX_IMAGE_SIZE,
    ports::ChatService,
    value_objects::{ChatInput, SendMessageInput},
};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    chat::{
        handlers::send_message::ChatTurnResponse,
        validators::{ImageCaption, SendImageMessageForm},
    },
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/{session_id}/messages/image",
    tag = "chat",
    summary = "Analyze a food or exercise picture",
    description = "Uploads a jpg/png picture, with an optional question, for the assistant to analyze.",
    params(
        ("session_id" = Uuid, Path, description = "Chat session ID"),
    ),
    request_body(content = SendImageMessageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = ChatTurnResponse)
    ),
)]
pub async fn send_image_message(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ChatTurnResponse>, ApiError> {
    let mut text: Option<String> = None;
    let mut image: Option<ChatImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "text" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read text: {}", e)))?;
                text = Some(value);
            }
            "image" => {
                let mime_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .ok_or_else(|| {
                        ApiError::BadRequest("Missing content type on image field".to_string())
                    })?;

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some(ChatImage {
                    mime_type,
                    data: data.to_vec(),
                });
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let caption = ImageCaption { text };
    caption.validate()?;

    let turn = state
        .service
        .send_message(SendMessageInput {
            session_id,
            input: ChatInput {
                text: caption.text,
                image: Some(image),
            },
        })
        .await?;

    Ok(Response::OK(ChatTurnResponse { data: turn }))
}
