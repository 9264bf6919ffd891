use crate::domain::common::entities::app_errors::CoreError;

pub const SUPPORTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

pub fn ensure_supported_image(mime_type: &str, size: usize) -> Result<(), CoreError> {
    let normalized = mime_type.trim().to_ascii_lowercase();

    if !SUPPORTED_IMAGE_TYPES.contains(&normalized.as_str()) {
        return Err(CoreError::UnsupportedMediaType(format!(
            "{mime_type} (expected one of jpg, jpeg, png)"
        )));
    }

    if size == 0 {
        return Err(CoreError::InvalidInput("image is empty".to_string()));
    }

    if size > MAX_IMAGE_SIZE {
        return Err(CoreError::InvalidInput(format!(
            "image too large, max size is {MAX_IMAGE_SIZE} bytes"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_jpeg_and_png() {
        assert!(ensure_supported_image("image/jpeg", 10).is_ok());
        assert!(ensure_supported_image("IMAGE/PNG", 10).is_ok());
        assert!(ensure_supported_image("image/jpg", 10).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(matches!(
            ensure_supported_image("image/gif", 10),
            Err(CoreError::UnsupportedMediaType(_))
        ));
        assert!(ensure_supported_image("application/pdf", 10).is_err());
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(ensure_supported_image("image/png", 0).is_err());
        assert!(ensure_supported_image("image/png", MAX_IMAGE_SIZE + 1).is_err());
    }
}
