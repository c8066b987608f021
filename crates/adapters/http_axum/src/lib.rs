//! # catpoint-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the control panel and camera feed
//!   (`/api/status`, `/api/sensors`, `/api/images`)
//! - Stream alarm and sensor changes as **server-sent events**
//!   (`/api/events/stream`)
//! - Map HTTP requests into security service calls (driving adapter)
//! - Map service results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `catpoint-app` (for port traits and the service) and
//! `catpoint-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
