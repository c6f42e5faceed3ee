//! Script-layer error types.
//!
//! Expected outcomes (a name that matches nothing, a capability that is not
//! present, a downcast to the wrong behaviour) are `Option`s, not errors.

use bridge_component::Entity;

/// Errors that can occur in the script layer.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// A log level outside `0..=2` arrived across the boundary.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(i32),

    /// A checked bind was attempted against a handle that no longer resolves.
    #[error("{0} does not resolve to a live entity")]
    StaleHandle(Entity),
}
