//! Authenticated identity context.

use serde::{Deserialize, Serialize};

/// The authenticated user context scoping all stored data.
///
/// Resolved by an external collaborator (tag scan or URL token) before any
/// core call; immutable once established.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable external id, e.g. the text written on the physical tag.
    /// Embedded in storage keys, so it must not contain `:`.
    pub id: String,
    /// Human-readable name shown by the presentation layer.
    pub display_name: String,
}

impl Identity {
    /// Creates an identity from externally resolved values.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}
