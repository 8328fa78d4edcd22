//! Runtime selection of the image classifier backend.

use catpoint_adapter_classifier_http::{ClassifierError, HttpClassifierConfig, HttpImageClassifier};
use catpoint_adapter_classifier_virtual::VirtualCatClassifier;
use catpoint_app::ports::ImageClassifier;
use catpoint_domain::error::CatpointError;
use catpoint_domain::image::Image;

use crate::config::{ClassifierConfig, ClassifierKind};

/// The configured classifier backend.
pub enum Classifier {
    Virtual(VirtualCatClassifier),
    Http(HttpImageClassifier),
}

impl Classifier {
    /// Build the backend named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError`] if the HTTP client cannot be created.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        match config.kind {
            ClassifierKind::Virtual => Ok(Self::Virtual(
                config
                    .seed
                    .map_or_else(VirtualCatClassifier::default, VirtualCatClassifier::seeded),
            )),
            ClassifierKind::Http => {
                let endpoint = config.endpoint.clone().unwrap_or_default();
                let mut http_config = HttpClassifierConfig::new(endpoint);
                http_config.timeout = config.timeout();
                Ok(Self::Http(HttpImageClassifier::new(http_config)?))
            }
        }
    }
}

impl ImageClassifier for Classifier {
    async fn classify(
        &self,
        image: &Image,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError> {
        match self {
            Self::Virtual(inner) => inner.classify(image, confidence_threshold).await,
            Self::Http(inner) => inner.classify(image, confidence_threshold).await,
        }
    }
}
