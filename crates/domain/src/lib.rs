//! # catpoint-domain
//!
//! Pure domain model for the catpoint home security system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Sensors** (named, typed door/window/motion flags)
//! - Define the **Arming** and **Alarm** statuses
//! - Define **Images** handed to the cat classifier
//! - Define **Status events** (alarm and sensor change records)
//! - Contain the alarm **transition rules** as pure functions
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
pub mod rules;
pub mod sensor;
pub mod status;
