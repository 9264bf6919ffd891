use super::handlers::{
    create_session::{__path_create_session, create_session},
    delete_session::{__path_delete_session, delete_session},
    get_session::{__path_get_session, get_session},
    send_image_message::{__path_send_image_message, send_image_message},
    send_message::{__path_send_message, send_message},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use ferrisfit_core::domain::chat::policies::MAX_IMAGE_SIZE;
use utoipa::OpenApi;

/// Room for the multipart framing and the optional text field.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    create_session,
    get_session,
    delete_session,
    send_message,
    send_image_message
))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/chat/sessions", state.args.server.root_path),
            post(create_session),
        )
        .route(
            &format!("{}/chat/sessions/{{session_id}}", state.args.server.root_path),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!(
                "{}/chat/sessions/{{session_id}}/messages",
                state.args.server.root_path
            ),
            post(send_message),
        )
        .route(
            &format!(
                "{}/chat/sessions/{{session_id}}/messages/image",
                state.args.server.root_path
            ),
            post(send_image_message),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD))
}
