//! Classifier-specific error type wrapping reqwest errors.

use catpoint_domain::error::CatpointError;

/// Errors raised while talking to the label-detection service.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The request could not be sent, or the body could not be decoded.
    #[error("classifier request failed")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("classifier answered HTTP {0}")]
    Status(u16),
}

impl From<ClassifierError> for CatpointError {
    fn from(err: ClassifierError) -> Self {
        Self::Classifier(Box::new(err))
    }
}
