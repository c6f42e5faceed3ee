//! Scene error types.

use bridge_component::Entity;

/// Errors raised by scene loading and checked entity access.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    /// The handle does not resolve to a live entity.
    #[error("{0} does not resolve to a live entity")]
    StaleHandle(Entity),
}
