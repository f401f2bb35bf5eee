//! Library surface of the planner admin console.
//!
//! The binary wires these together; integration tests drive [`store::App`]
//! directly against a stub API.

pub mod client;
pub mod config;
pub mod render;
pub mod store;
