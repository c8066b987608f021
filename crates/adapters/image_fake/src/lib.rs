//! # catpoint-adapter-image-fake
//!
//! Fake implementation of the `ImageClassifier` port, used for demos and
//! tests until a real cat detector is wired in.
//!
//! | Mode | Behaviour |
//! |------|-----------|
//! | `random` | draws a confidence in `[0, 100)` and reports a cat when it reaches the threshold |
//! | `always_cat` | every image contains a cat |
//! | `never_cat` | no image contains a cat |
//!
//! Empty images are rejected in every mode.
//!
//! ## Dependency rule
//!
//! Depends on `catpoint-app` (port traits) and `catpoint-domain` only.

mod config;
mod error;

pub use config::{ClassifierConfig, ClassifierMode};
pub use error::ImageError;

use std::future::Future;

use catpoint_app::ports::ImageClassifier;
use catpoint_domain::error::CatpointError;
use catpoint_domain::image::Image;

/// Classifier answering according to its [`ClassifierMode`].
#[derive(Debug, Clone, Default)]
pub struct FakeImageClassifier {
    mode: ClassifierMode,
}

impl FakeImageClassifier {
    #[must_use]
    pub fn new(config: &ClassifierConfig) -> Self {
        Self { mode: config.mode }
    }

    #[must_use]
    pub fn mode(&self) -> ClassifierMode {
        self.mode
    }

    fn classify(&self, image: &Image, confidence_threshold: f32) -> Result<bool, ImageError> {
        if image.is_empty() {
            return Err(ImageError::EmptyImage);
        }
        let cat = match self.mode {
            ClassifierMode::AlwaysCat => true,
            ClassifierMode::NeverCat => false,
            ClassifierMode::Random => {
                let confidence = rand::random::<f32>() * 100.0;
                tracing::trace!(confidence, confidence_threshold, "random cat confidence");
                confidence >= confidence_threshold
            }
        };
        Ok(cat)
    }
}

impl ImageClassifier for FakeImageClassifier {
    fn image_contains_cat(
        &self,
        image: &Image,
        confidence_threshold: f32,
    ) -> impl Future<Output = Result<bool, CatpointError>> + Send {
        let result = self
            .classify(image, confidence_threshold)
            .map_err(CatpointError::from);
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(mode: ClassifierMode) -> FakeImageClassifier {
        FakeImageClassifier::new(&ClassifierConfig { mode })
    }

    #[tokio::test]
    async fn should_always_report_cat_in_always_cat_mode() {
        let c = classifier(ClassifierMode::AlwaysCat);
        assert!(c.image_contains_cat(&Image::new(vec![1]), 99.0).await.unwrap());
    }

    #[tokio::test]
    async fn should_never_report_cat_in_never_cat_mode() {
        let c = classifier(ClassifierMode::NeverCat);
        assert!(!c.image_contains_cat(&Image::new(vec![1]), 0.0).await.unwrap());
    }

    #[tokio::test]
    async fn should_reject_empty_image() {
        let c = classifier(ClassifierMode::AlwaysCat);
        let result = c.image_contains_cat(&Image::default(), 50.0).await;
        assert!(matches!(result, Err(CatpointError::Classifier(_))));
    }

    #[tokio::test]
    async fn should_honour_threshold_bounds_in_random_mode() {
        let c = classifier(ClassifierMode::Random);
        let image = Image::new(vec![7; 8]);
        for _ in 0..32 {
            assert!(c.image_contains_cat(&image, 0.0).await.unwrap());
            assert!(!c.image_contains_cat(&image, 100.0).await.unwrap());
        }
    }

    #[test]
    fn should_default_to_random_mode() {
        assert_eq!(FakeImageClassifier::default().mode(), ClassifierMode::Random);
    }
}
