//! # catpoint-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SecurityRepository` — sensors, arming status, alarm status
//!   - `ImageClassifier` — "does this image contain a cat?"
//!   - `StatusListener` — alarm and sensor change notifications
//! - Define the **driving/inbound** use-case: `SecurityService`
//! - Provide **in-process infrastructure** (status event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `catpoint-domain` only (plus `tokio::sync`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
