//! Engine-owned component records.
//!
//! These are the values a host stores per entity and hands across the
//! boundary one field at a time. Defaults match what a freshly added component
//! looks like in the engine; all records deserialise with missing fields
//! falling back to those defaults.

use bridge_math::Vector4;
use serde::{Deserialize, Serialize};

/// Name of an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagData {
    pub tag: String,
}

/// Sprite tint, texture and tiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteRendererData {
    /// RGBA tint.
    pub colour: Vector4,
    /// Engine-resolved texture path. Empty means the default white texture.
    pub texture_path: String,
    pub tiling_factor: f32,
}

impl Default for SpriteRendererData {
    fn default() -> Self {
        Self {
            colour: Vector4::ONE,
            texture_path: String::new(),
            tiling_factor: 1.0,
        }
    }
}

/// How a camera projects the scene.
#[repr(u32)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionType {
    Perspective = 0,
    #[default]
    Orthographic = 1,
}

impl TryFrom<u32> for ProjectionType {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, u32> {
        match value {
            0 => Ok(ProjectionType::Perspective),
            1 => Ok(ProjectionType::Orthographic),
            other => Err(other),
        }
    }
}

/// Camera parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraData {
    /// Whether this is the camera the scene renders through.
    pub primary: bool,
    pub projection: ProjectionType,
    /// Vertical field of view in radians.
    pub perspective_fov: f32,
    pub perspective_near: f32,
    pub perspective_far: f32,
    pub orthographic_size: f32,
    pub orthographic_near: f32,
    pub orthographic_far: f32,
    pub fixed_aspect_ratio: bool,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            primary: true,
            projection: ProjectionType::Orthographic,
            perspective_fov: 45f32.to_radians(),
            perspective_near: 0.01,
            perspective_far: 1000.0,
            orthographic_size: 10.0,
            orthographic_near: -1.0,
            orthographic_far: 1.0,
            fixed_aspect_ratio: false,
        }
    }
}

/// Rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextData {
    pub text: String,
    pub colour: Vector4,
    pub kerning: f32,
    pub line_spacing: f32,
}

impl Default for TextData {
    fn default() -> Self {
        Self {
            text: String::new(),
            colour: Vector4::ONE,
            kerning: 0.0,
            line_spacing: 0.0,
        }
    }
}
