//! # catpoint-domain
//!
//! Pure domain model for the catpoint home security controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Sensors** (door, window and motion detectors with an active flag)
//! - Define the **Arming status** (disarmed, armed home, armed away)
//! - Define the **Alarm status** (no alarm, pending, sounding) and its severity order
//! - Define the opaque **Image** payload handed to classifiers
//! - Define **Events** (status-change notifications)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod image;
pub mod sensor;
pub mod status;
