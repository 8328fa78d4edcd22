//! Label-detection client implementing [`ImageClassifier`].

use std::future::Future;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use catpoint_app::ports::ImageClassifier;
use catpoint_domain::error::CatpointError;
use catpoint_domain::image::Image;

use crate::error::ClassifierError;

const CAT_LABEL: &str = "cat";

/// Connection settings for the label-detection service.
#[derive(Debug, Clone)]
pub struct HttpClassifierConfig {
    /// Full URL images are POSTed to.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpClassifierConfig {
    /// Settings for `endpoint` with a 10 second timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// A single label found in an image.
#[derive(Debug, Deserialize)]
struct Label {
    name: String,
    confidence: f32,
}

/// Raw response body from the label-detection endpoint.
#[derive(Debug, Deserialize)]
struct DetectLabelsResponse {
    #[serde(default)]
    labels: Vec<Label>,
}

impl DetectLabelsResponse {
    fn contains_cat(&self, confidence_threshold: f32) -> bool {
        self.labels.iter().any(|label| {
            label.name.eq_ignore_ascii_case(CAT_LABEL) && label.confidence >= confidence_threshold
        })
    }
}

/// Classifier asking a remote service for image labels.
pub struct HttpImageClassifier {
    config: HttpClassifierConfig,
    client: reqwest::Client,
}

impl HttpImageClassifier {
    /// Create a classifier for the given service.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Request`] if the HTTP client cannot be built.
    pub fn new(config: HttpClassifierConfig) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    async fn handle_response(
        response: reqwest::Response,
        confidence_threshold: f32,
    ) -> Result<bool, ClassifierError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Status(status.as_u16()));
        }

        let body: DetectLabelsResponse = response.json().await?;
        tracing::debug!(labels = body.labels.len(), "labels detected");
        Ok(body.contains_cat(confidence_threshold))
    }
}

impl ImageClassifier for HttpImageClassifier {
    fn classify(
        &self,
        image: &Image,
        confidence_threshold: f32,
    ) -> impl Future<Output = Result<bool, CatpointError>> + Send {
        let request = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image.as_bytes().to_vec());

        async move {
            let response = request.send().await.map_err(ClassifierError::from)?;
            let detected = Self::handle_response(response, confidence_threshold).await?;
            Ok(detected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_bytes, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn classifier_for(server: &MockServer) -> HttpImageClassifier {
        HttpImageClassifier::new(HttpClassifierConfig::new(format!(
            "{}/detect",
            server.uri()
        )))
        .unwrap()
    }

    async fn respond_with(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn should_detect_cat_above_threshold() {
        let server = MockServer::start().await;
        respond_with(
            &server,
            serde_json::json!({"labels": [{"name": "Cat", "confidence": 97.5}]}),
        )
        .await;

        let classifier = classifier_for(&server);
        let detected = classifier
            .classify(&Image::new(vec![1, 2, 3]), 50.0)
            .await
            .unwrap();

        assert!(detected);
    }

    #[tokio::test]
    async fn should_not_detect_cat_below_threshold() {
        let server = MockServer::start().await;
        respond_with(
            &server,
            serde_json::json!({"labels": [{"name": "cat", "confidence": 42.0}]}),
        )
        .await;

        let classifier = classifier_for(&server);
        let detected = classifier.classify(&Image::default(), 50.0).await.unwrap();

        assert!(!detected);
    }

    #[tokio::test]
    async fn should_not_detect_cat_among_other_labels() {
        let server = MockServer::start().await;
        respond_with(
            &server,
            serde_json::json!({"labels": [
                {"name": "Dog", "confidence": 99.0},
                {"name": "Sofa", "confidence": 80.0}
            ]}),
        )
        .await;

        let classifier = classifier_for(&server);
        let detected = classifier.classify(&Image::default(), 50.0).await.unwrap();

        assert!(!detected);
    }

    #[tokio::test]
    async fn should_treat_missing_labels_as_no_cat() {
        let server = MockServer::start().await;
        respond_with(&server, serde_json::json!({})).await;

        let classifier = classifier_for(&server);
        let detected = classifier.classify(&Image::default(), 50.0).await.unwrap();

        assert!(!detected);
    }

    #[tokio::test]
    async fn should_send_raw_image_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .and(header("content-type", "application/octet-stream"))
            .and(body_bytes(vec![0xFF, 0xD8]))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"labels": [{"name": "Cat", "confidence": 60.0}]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let classifier = classifier_for(&server);
        let detected = classifier
            .classify(&Image::new(vec![0xFF, 0xD8]), 50.0)
            .await
            .unwrap();

        assert!(detected);
    }

    #[tokio::test]
    async fn should_return_classifier_error_on_server_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let classifier = classifier_for(&server);
        let result = classifier.classify(&Image::default(), 50.0).await;

        match result {
            Err(CatpointError::Classifier(source)) => {
                assert_eq!(source.to_string(), "classifier answered HTTP 503");
            }
            other => panic!("expected classifier error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_return_classifier_error_on_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let classifier = classifier_for(&server);
        let result = classifier.classify(&Image::default(), 50.0).await;

        assert!(matches!(result, Err(CatpointError::Classifier(_))));
    }
}
