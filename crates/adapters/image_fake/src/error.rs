//! Image classifier error types.

use catpoint_domain::error::CatpointError;

/// Errors specific to the fake classifier.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The camera delivered a frame without any data.
    #[error("image is empty")]
    EmptyImage,
}

impl From<ImageError> for CatpointError {
    fn from(err: ImageError) -> Self {
        Self::Classifier(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_empty_image_error() {
        assert_eq!(ImageError::EmptyImage.to_string(), "image is empty");
    }

    #[test]
    fn should_convert_into_classifier_error() {
        let err: CatpointError = ImageError::EmptyImage.into();
        assert!(matches!(err, CatpointError::Classifier(_)));
    }
}
