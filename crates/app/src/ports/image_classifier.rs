//! Image classifier port — decides whether a camera frame shows a cat.

use std::future::Future;

use catpoint_domain::error::CatpointError;
use catpoint_domain::image::Image;

/// Backend that recognises cats in images.
pub trait ImageClassifier {
    /// Return `true` when the image contains a cat with a confidence of at
    /// least `confidence_threshold` percent.
    ///
    /// Failures are reported as [`CatpointError::Classifier`] and are passed
    /// through to the caller untouched.
    fn classify(
        &self,
        image: &Image,
        confidence_threshold: f32,
    ) -> impl Future<Output = Result<bool, CatpointError>> + Send;
}

impl<T: ImageClassifier + Send + Sync> ImageClassifier for std::sync::Arc<T> {
    fn classify(
        &self,
        image: &Image,
        confidence_threshold: f32,
    ) -> impl Future<Output = Result<bool, CatpointError>> + Send {
        (**self).classify(image, confidence_threshold)
    }
}
