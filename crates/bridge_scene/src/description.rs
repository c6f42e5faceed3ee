//! JSON scene descriptions.
//!
//! ```json
//! {
//!   "name": "Sandbox",
//!   "entities": [
//!     { "name": "Camera", "camera": { "primary": true } },
//!     { "name": "Player", "transform": { "translation": { "x": 1.0, "y": 0.0, "z": 0.0 } },
//!       "sprite_renderer": { "texture_path": "assets/player.png" } }
//!   ]
//! }
//! ```

use std::path::Path;

use bridge_component::{CameraData, SpriteRendererData, TextData};
use bridge_math::Transform;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// A whole scene as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entities: Vec<EntityDescription>,
}

/// One entity. Tag and transform are always present; the rest are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescription {
    pub name: String,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_renderer: Option<SpriteRendererData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextData>,
}

impl SceneDescription {
    /// Parse a description from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a description file.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] or [`SceneError::Json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
