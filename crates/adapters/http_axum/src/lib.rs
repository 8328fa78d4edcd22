//! # catpoint-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** for programmatic access
//!   (`/api/status`, `/api/arming`, `/api/sensors`, `/api/images`)
//! - Map HTTP requests into security service calls (driving adapter)
//! - Map service results and errors into HTTP responses
//! - Serialise every service call behind one lock, so each request runs its
//!   read-decide-write cycle alone
//!
//! ## Dependency rule
//! Depends on `catpoint-app` (for port traits and services) and `catpoint-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
