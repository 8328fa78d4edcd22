//! # catpoint-adapter-classifier-virtual
//!
//! Virtual/demo image classifier for testing and demonstration purposes.
//!
//! It never looks at the pixels: every call draws a confidence score in
//! `[0, 100)` and reports a cat when the score reaches the requested
//! threshold. Seed it for reproducible runs.
//!
//! ## Dependency rule
//!
//! Depends on `catpoint-app` (port traits) and `catpoint-domain` only.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use catpoint_app::ports::ImageClassifier;
use catpoint_domain::error::CatpointError;
use catpoint_domain::image::Image;

/// Classifier that makes up its confidence score.
pub struct VirtualCatClassifier {
    rng: Mutex<StdRng>,
}

impl Default for VirtualCatClassifier {
    fn default() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl VirtualCatClassifier {
    /// Create a classifier whose scores are reproducible for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn next_confidence(&self) -> f32 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0.0..100.0)
    }
}

impl ImageClassifier for VirtualCatClassifier {
    fn classify(
        &self,
        image: &Image,
        confidence_threshold: f32,
    ) -> impl Future<Output = Result<bool, CatpointError>> + Send {
        let confidence = self.next_confidence();
        let detected = confidence >= confidence_threshold;
        tracing::debug!(
            bytes = image.len(),
            confidence,
            detected,
            "virtual classification"
        );
        async move { Ok(detected) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(classifier: &VirtualCatClassifier, threshold: f32, times: usize) -> Vec<bool> {
        let image = Image::new(vec![0u8; 16]);
        let mut results = Vec::with_capacity(times);
        for _ in 0..times {
            results.push(classifier.classify(&image, threshold).await.unwrap());
        }
        results
    }

    #[tokio::test]
    async fn should_repeat_results_for_same_seed() {
        let a = run(&VirtualCatClassifier::seeded(7), 50.0, 32).await;
        let b = run(&VirtualCatClassifier::seeded(7), 50.0, 32).await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn should_always_detect_with_zero_threshold() {
        let results = run(&VirtualCatClassifier::seeded(1), 0.0, 32).await;
        assert!(results.iter().all(|detected| *detected));
    }

    #[tokio::test]
    async fn should_never_detect_above_maximum_confidence() {
        let results = run(&VirtualCatClassifier::default(), 100.0, 32).await;
        assert!(results.iter().all(|detected| !*detected));
    }

    #[tokio::test]
    async fn should_report_both_outcomes_at_default_threshold() {
        let results = run(&VirtualCatClassifier::seeded(42), 50.0, 200).await;
        assert!(results.contains(&true));
        assert!(results.contains(&false));
    }
}
