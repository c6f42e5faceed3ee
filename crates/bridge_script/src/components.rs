//! Component proxies.
//!
//! A proxy binds one capability to one entity handle and translates typed
//! getters/setters into boundary calls. Proxies are `Copy` views: they hold
//! no component state, cache nothing between calls and are rebuilt on every
//! lookup. Each getter is exactly one boundary call; each setter is exactly
//! one fire-and-forget boundary call.

use bridge_component::{CapabilityKind, Entity, ProjectionType};
use bridge_math::{Vector3, Vector4};
use bytemuck::Zeroable;

use crate::host::EngineHost;

/// A typed view of one capability on one entity.
pub trait ComponentProxy<'h>: Copy {
    /// The capability this proxy reads and writes.
    const KIND: CapabilityKind;

    /// Bind a view to `entity`. Performs no boundary call.
    fn bind(entity: Entity, host: &'h dyn EngineHost) -> Self;

    /// The entity this view is bound to.
    fn entity(&self) -> Entity;
}

macro_rules! component_proxy {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $name<'h> {
            entity: Entity,
            host: &'h dyn EngineHost,
        }

        impl<'h> ComponentProxy<'h> for $name<'h> {
            const KIND: CapabilityKind = CapabilityKind::$kind;

            fn bind(entity: Entity, host: &'h dyn EngineHost) -> Self {
                Self { entity, host }
            }

            fn entity(&self) -> Entity {
                self.entity
            }
        }

        impl std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("entity", &self.entity)
                    .finish()
            }
        }
    };
}

component_proxy!(
    /// The entity's name.
    TagComponent => Tag
);
component_proxy!(
    /// Translation, rotation and scale.
    TransformComponent => Transform
);
component_proxy!(
    /// Sprite tint, texture and tiling.
    SpriteRendererComponent => SpriteRenderer
);
component_proxy!(
    /// Camera projection parameters.
    CameraComponent => Camera
);
component_proxy!(
    /// Rendered text.
    TextComponent => Text
);

impl TagComponent<'_> {
    #[must_use]
    pub fn tag(&self) -> String {
        self.host.tag_get(self.entity)
    }

    pub fn set_tag(&self, tag: &str) {
        self.host.tag_set(self.entity, tag);
    }
}

impl TransformComponent<'_> {
    #[must_use]
    pub fn translation(&self) -> Vector3 {
        let mut out = Vector3::zeroed();
        self.host.transform_get_translation(self.entity, &mut out);
        out
    }

    pub fn set_translation(&self, translation: Vector3) {
        self.host.transform_set_translation(self.entity, translation);
    }

    /// Euler angles in radians.
    #[must_use]
    pub fn rotation(&self) -> Vector3 {
        let mut out = Vector3::zeroed();
        self.host.transform_get_rotation(self.entity, &mut out);
        out
    }

    pub fn set_rotation(&self, rotation: Vector3) {
        self.host.transform_set_rotation(self.entity, rotation);
    }

    #[must_use]
    pub fn scale(&self) -> Vector3 {
        let mut out = Vector3::zeroed();
        self.host.transform_get_scale(self.entity, &mut out);
        out
    }

    pub fn set_scale(&self, scale: Vector3) {
        self.host.transform_set_scale(self.entity, scale);
    }
}

impl SpriteRendererComponent<'_> {
    #[must_use]
    pub fn colour(&self) -> Vector4 {
        let mut out = Vector4::zeroed();
        self.host.sprite_renderer_get_colour(self.entity, &mut out);
        out
    }

    pub fn set_colour(&self, colour: Vector4) {
        self.host.sprite_renderer_set_colour(self.entity, colour);
    }

    /// The texture path, or an empty string for the default texture.
    #[must_use]
    pub fn texture_path(&self) -> String {
        self.host.sprite_renderer_get_texture_path(self.entity)
    }

    /// Set the texture path. The path is resolved by the engine; an empty path
    /// restores the default texture.
    pub fn set_texture_path(&self, path: &str) {
        self.host.sprite_renderer_set_texture_path(self.entity, path);
    }

    #[must_use]
    pub fn tiling_factor(&self) -> f32 {
        self.host.sprite_renderer_get_tiling_factor(self.entity)
    }

    pub fn set_tiling_factor(&self, tiling_factor: f32) {
        self.host
            .sprite_renderer_set_tiling_factor(self.entity, tiling_factor);
    }
}

impl CameraComponent<'_> {
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.host.camera_is_primary(self.entity)
    }

    pub fn set_primary(&self, primary: bool) {
        self.host.camera_set_primary(self.entity, primary);
    }

    #[must_use]
    pub fn projection(&self) -> ProjectionType {
        self.host.camera_get_projection_type(self.entity)
    }

    pub fn set_projection(&self, projection: ProjectionType) {
        self.host.camera_set_projection_type(self.entity, projection);
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn perspective_vertical_fov(&self) -> f32 {
        self.host.camera_get_perspective_vertical_fov(self.entity)
    }

    pub fn set_perspective_vertical_fov(&self, value: f32) {
        self.host
            .camera_set_perspective_vertical_fov(self.entity, value);
    }

    #[must_use]
    pub fn perspective_near(&self) -> f32 {
        self.host.camera_get_perspective_near(self.entity)
    }

    pub fn set_perspective_near(&self, value: f32) {
        self.host.camera_set_perspective_near(self.entity, value);
    }

    #[must_use]
    pub fn perspective_far(&self) -> f32 {
        self.host.camera_get_perspective_far(self.entity)
    }

    pub fn set_perspective_far(&self, value: f32) {
        self.host.camera_set_perspective_far(self.entity, value);
    }

    #[must_use]
    pub fn orthographic_size(&self) -> f32 {
        self.host.camera_get_orthographic_size(self.entity)
    }

    pub fn set_orthographic_size(&self, value: f32) {
        self.host.camera_set_orthographic_size(self.entity, value);
    }

    #[must_use]
    pub fn orthographic_near(&self) -> f32 {
        self.host.camera_get_orthographic_near(self.entity)
    }

    pub fn set_orthographic_near(&self, value: f32) {
        self.host.camera_set_orthographic_near(self.entity, value);
    }

    #[must_use]
    pub fn orthographic_far(&self) -> f32 {
        self.host.camera_get_orthographic_far(self.entity)
    }

    pub fn set_orthographic_far(&self, value: f32) {
        self.host.camera_set_orthographic_far(self.entity, value);
    }

    #[must_use]
    pub fn is_fixed_aspect_ratio(&self) -> bool {
        self.host.camera_is_fixed_aspect_ratio(self.entity)
    }

    pub fn set_fixed_aspect_ratio(&self, value: bool) {
        self.host.camera_set_fixed_aspect_ratio(self.entity, value);
    }
}

impl TextComponent<'_> {
    #[must_use]
    pub fn text(&self) -> String {
        self.host.text_get_string(self.entity)
    }

    pub fn set_text(&self, text: &str) {
        self.host.text_set_string(self.entity, text);
    }

    #[must_use]
    pub fn colour(&self) -> Vector4 {
        let mut out = Vector4::zeroed();
        self.host.text_get_colour(self.entity, &mut out);
        out
    }

    pub fn set_colour(&self, colour: Vector4) {
        self.host.text_set_colour(self.entity, colour);
    }

    #[must_use]
    pub fn kerning(&self) -> f32 {
        self.host.text_get_kerning(self.entity)
    }

    pub fn set_kerning(&self, kerning: f32) {
        self.host.text_set_kerning(self.entity, kerning);
    }

    #[must_use]
    pub fn line_spacing(&self) -> f32 {
        self.host.text_get_line_spacing(self.entity)
    }

    pub fn set_line_spacing(&self, line_spacing: f32) {
        self.host.text_set_line_spacing(self.entity, line_spacing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    #[test]
    fn test_bind_makes_no_boundary_call() {
        let host = RecordingHost::new();
        let transform = TransformComponent::bind(Entity::from_raw(3), &host);
        assert_eq!(transform.entity(), Entity::from_raw(3));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_getter_is_one_call_without_caching() {
        let host = RecordingHost::new();
        let transform = TransformComponent::bind(Entity::from_raw(3), &host);

        host.set_vector3(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.translation(), Vector3::new(1.0, 2.0, 3.0));
        host.set_vector3(Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(transform.translation(), Vector3::new(4.0, 5.0, 6.0));

        assert_eq!(
            host.calls(),
            vec![
                "transform_get_translation(3)",
                "transform_get_translation(3)"
            ]
        );
    }

    #[test]
    fn test_setter_is_one_call() {
        let host = RecordingHost::new();
        let sprite = SpriteRendererComponent::bind(Entity::from_raw(9), &host);
        sprite.set_tiling_factor(2.5);
        sprite.set_colour(Vector4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(
            host.calls(),
            vec![
                "sprite_renderer_set_tiling_factor(9, 2.5)",
                "sprite_renderer_set_colour(9, 1, 0, 0, 1)"
            ]
        );
    }

    #[test]
    fn test_proxy_kinds() {
        assert_eq!(TagComponent::KIND, CapabilityKind::Tag);
        assert_eq!(CameraComponent::KIND, CapabilityKind::Camera);
        assert_eq!(TextComponent::KIND, CapabilityKind::Text);
    }

    #[test]
    fn test_camera_dispatch_targets_bound_entity() {
        let host = RecordingHost::new();
        let camera = CameraComponent::bind(Entity::from_raw(5), &host);
        camera.set_projection(ProjectionType::Perspective);
        camera.set_orthographic_size(4.0);
        assert_eq!(
            host.calls(),
            vec![
                "camera_set_projection_type(5, Perspective)",
                "camera_set_orthographic_size(5, 4)"
            ]
        );
    }
}
