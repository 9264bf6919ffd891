use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SendMessageRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "text must be between 1 and 5000 characters"
    ))]
    pub text: String,
}

/// Optional question sent with an uploaded image.
#[derive(Debug, Validate)]
pub struct ImageCaption {
    #[validate(length(max = 5000, message = "text must be at most 5000 characters"))]
    pub text: Option<String>,
}

/// Multipart form accepted by the image message endpoint (documentation only).
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct SendImageMessageForm {
    /// jpg, jpeg or png picture of a meal or an exercise
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Optional question sent along with the picture
    pub text: Option<String>,
}
