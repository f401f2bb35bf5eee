//! Response envelope for the planner API.
//!
//! Every endpoint wraps its payload in a `data` field, whether the payload
//! is a single record or a collection.

use serde::{Deserialize, Serialize};

/// Wrapper matching the API's `{"data": ...}` response shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwrap the payload.
    pub fn into_inner(self) -> T {
        self.data
    }
}
