//! # catpoint-adapter-classifier-http
//!
//! Image classifier backed by a remote label-detection service.
//!
//! The image bytes are POSTed as `application/octet-stream` to the configured
//! endpoint, which answers with the labels it found:
//!
//! ```json
//! { "labels": [ { "name": "Cat", "confidence": 97.1 }, { "name": "Sofa", "confidence": 61.0 } ] }
//! ```
//!
//! The image contains a cat when a label named `cat` (case-insensitive) has a
//! confidence of at least the requested threshold.
//!
//! ## Dependency rule
//!
//! Depends on `catpoint-app` (port traits) and `catpoint-domain` only.

mod client;
mod error;

pub use client::{HttpClassifierConfig, HttpImageClassifier};
pub use error::ClassifierError;
