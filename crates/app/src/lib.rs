//! # catpoint-app
//!
//! Application layer — the alarm rules and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SecurityRepository`: arming status, alarm status and the sensor set
//!   - `ImageClassifier`: "does this image contain a cat?"
//!   - `EventPublisher`: status-change notifications
//! - Define the **driving/inbound** use-case struct:
//!   - `SecurityService`: sensor activation, arming, image processing
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Re-read every piece of state through the ports; nothing is cached here
//!
//! ## Dependency rule
//! Depends on `catpoint-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
