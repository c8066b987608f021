//! Image classifier port — cat detection on camera frames.

use std::future::Future;

use catpoint_domain::error::CatpointError;
use catpoint_domain::image::Image;

/// Decides whether an image depicts a cat.
pub trait ImageClassifier {
    /// Return `true` when the image contains a cat with a confidence of at
    /// least `confidence_threshold` (a percentage in `0.0..=100.0`).
    fn image_contains_cat(
        &self,
        image: &Image,
        confidence_threshold: f32,
    ) -> impl Future<Output = Result<bool, CatpointError>> + Send;
}

impl<T: ImageClassifier + Send + Sync> ImageClassifier for std::sync::Arc<T> {
    fn image_contains_cat(
        &self,
        image: &Image,
        confidence_threshold: f32,
    ) -> impl Future<Output = Result<bool, CatpointError>> + Send {
        (**self).image_contains_cat(image, confidence_threshold)
    }
}
