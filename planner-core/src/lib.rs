//! Core types for the planner admin console.
//!
//! This crate provides the types shared between the CLI and its API client:
//! - `Event`, `Guest` and `Rsvp` records as the upstream API returns them
//! - `EventDraft` for building and validating new events before submission
//! - `protocol` module for the API's response envelope

pub mod draft;
pub mod error;
pub mod event;
pub mod protocol;

pub use draft::{EventDraft, NewEvent};
pub use error::{PlannerError, PlannerResult};
pub use event::{Event, Guest, Rsvp};
