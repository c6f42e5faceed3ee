//! The boundary call surface a host engine exposes to scripts.
//!
//! [`EngineHost`] is the only way script code touches engine state. Every
//! method is a synchronous, non-reentrant round trip. Inputs are passed by
//! value; multi-field outputs ([`Vector3`], [`Vector4`]) are written through
//! `&mut` out-parameters so the value's fixed layout is the contract.
//!
//! Methods take `&self`: the host owns its state and decides how to guard it.
//! Component getters and setters do **not** validate the handle. Calling them
//! with a handle that no longer resolves is a contract violation whose outcome
//! is whatever the host does.

use bridge_component::{ComponentTypeId, Entity, ProjectionType};
use bridge_math::{Vector3, Vector4};

use crate::error::ScriptError;

/// Severity of a script log message, as encoded across the boundary.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info = 0,
    Warning = 1,
    Error = 2,
}

impl TryFrom<i32> for LogLevel {
    type Error = ScriptError;

    fn try_from(value: i32) -> Result<Self, ScriptError> {
        match value {
            0 => Ok(LogLevel::Info),
            1 => Ok(LogLevel::Warning),
            2 => Ok(LogLevel::Error),
            other => Err(ScriptError::InvalidLogLevel(other)),
        }
    }
}

/// A keyboard key, numbered like GLFW key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const SPACE: Self = Self(32);
    pub const A: Self = Self(65);
    pub const D: Self = Self(68);
    pub const E: Self = Self(69);
    pub const Q: Self = Self(81);
    pub const S: Self = Self(83);
    pub const W: Self = Self(87);
    pub const ESCAPE: Self = Self(256);
    pub const RIGHT: Self = Self(262);
    pub const LEFT: Self = Self(263);
    pub const DOWN: Self = Self(264);
    pub const UP: Self = Self(265);
    pub const LEFT_SHIFT: Self = Self(340);
    pub const LEFT_CONTROL: Self = Self(341);
}

/// A mouse button, numbered like GLFW mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseButton(pub u16);

impl MouseButton {
    pub const LEFT: Self = Self(0);
    pub const RIGHT: Self = Self(1);
    pub const MIDDLE: Self = Self(2);
}

/// Calls a script may make into the engine.
pub trait EngineHost {
    // -- Debug --

    /// Forward a script log message to the engine's log sink.
    fn log(&self, level: LogLevel, message: &str);

    // -- Entity --

    /// Returns `true` if `entity` currently resolves to a live object.
    fn entity_exists(&self, entity: Entity) -> bool;

    /// Returns `true` if `entity` carries the capability named by `component`.
    fn entity_has_component(&self, entity: Entity, component: ComponentTypeId) -> bool;

    /// Add the capability to `entity`. Adding one that already exists is a
    /// no-op.
    fn entity_add_component(&self, entity: Entity, component: ComponentTypeId);

    /// Look an entity up by name. Returns [`Entity::INVALID`] when no entity
    /// has that name.
    fn entity_find_by_name(&self, name: &str) -> Entity;

    // -- TagComponent --

    fn tag_get(&self, entity: Entity) -> String;
    fn tag_set(&self, entity: Entity, tag: &str);

    // -- TransformComponent --

    fn transform_get_translation(&self, entity: Entity, out: &mut Vector3);
    fn transform_set_translation(&self, entity: Entity, translation: Vector3);
    fn transform_get_rotation(&self, entity: Entity, out: &mut Vector3);
    fn transform_set_rotation(&self, entity: Entity, rotation: Vector3);
    fn transform_get_scale(&self, entity: Entity, out: &mut Vector3);
    fn transform_set_scale(&self, entity: Entity, scale: Vector3);

    // -- SpriteRendererComponent --

    fn sprite_renderer_get_colour(&self, entity: Entity, out: &mut Vector4);
    fn sprite_renderer_set_colour(&self, entity: Entity, colour: Vector4);
    fn sprite_renderer_get_texture_path(&self, entity: Entity) -> String;
    /// An empty path restores the engine's default texture.
    fn sprite_renderer_set_texture_path(&self, entity: Entity, path: &str);
    fn sprite_renderer_get_tiling_factor(&self, entity: Entity) -> f32;
    fn sprite_renderer_set_tiling_factor(&self, entity: Entity, tiling_factor: f32);

    // -- CameraComponent --

    fn camera_is_primary(&self, entity: Entity) -> bool;
    fn camera_set_primary(&self, entity: Entity, primary: bool);
    fn camera_get_projection_type(&self, entity: Entity) -> ProjectionType;
    fn camera_set_projection_type(&self, entity: Entity, projection: ProjectionType);
    fn camera_get_perspective_vertical_fov(&self, entity: Entity) -> f32;
    fn camera_set_perspective_vertical_fov(&self, entity: Entity, value: f32);
    fn camera_get_perspective_near(&self, entity: Entity) -> f32;
    fn camera_set_perspective_near(&self, entity: Entity, value: f32);
    fn camera_get_perspective_far(&self, entity: Entity) -> f32;
    fn camera_set_perspective_far(&self, entity: Entity, value: f32);
    fn camera_get_orthographic_size(&self, entity: Entity) -> f32;
    fn camera_set_orthographic_size(&self, entity: Entity, value: f32);
    fn camera_get_orthographic_near(&self, entity: Entity) -> f32;
    fn camera_set_orthographic_near(&self, entity: Entity, value: f32);
    fn camera_get_orthographic_far(&self, entity: Entity) -> f32;
    fn camera_set_orthographic_far(&self, entity: Entity, value: f32);
    fn camera_is_fixed_aspect_ratio(&self, entity: Entity) -> bool;
    fn camera_set_fixed_aspect_ratio(&self, entity: Entity, value: bool);

    // -- TextComponent --

    fn text_get_string(&self, entity: Entity) -> String;
    fn text_set_string(&self, entity: Entity, text: &str);
    fn text_get_colour(&self, entity: Entity, out: &mut Vector4);
    fn text_set_colour(&self, entity: Entity, colour: Vector4);
    fn text_get_kerning(&self, entity: Entity) -> f32;
    fn text_set_kerning(&self, entity: Entity, kerning: f32);
    fn text_get_line_spacing(&self, entity: Entity) -> f32;
    fn text_set_line_spacing(&self, entity: Entity, line_spacing: f32);

    // -- Input --

    fn input_is_key_down(&self, key: KeyCode) -> bool;
    fn input_is_mouse_button_pressed(&self, button: MouseButton) -> bool;
    fn input_get_mouse_x(&self) -> f32;
    fn input_get_mouse_y(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_wire_value() {
        assert_eq!(LogLevel::try_from(0).unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::try_from(1).unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::try_from(2).unwrap(), LogLevel::Error);
    }

    #[test]
    fn test_log_level_rejects_unknown_value() {
        let err = LogLevel::try_from(3).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidLogLevel(3)));
    }

    #[test]
    fn test_log_level_wire_value() {
        assert_eq!(LogLevel::Warning as i32, 1);
    }
}
