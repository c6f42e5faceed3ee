//! A recording [`EngineHost`] for unit tests.
//!
//! Every boundary call is appended to a log. Getters answer from a small set
//! of canned values; capabilities and names are kept in plain maps.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use bridge_component::{ComponentTypeId, Entity, ProjectionType};
use bridge_math::{Vector3, Vector4};

use crate::host::{EngineHost, KeyCode, LogLevel, MouseButton};

#[derive(Default)]
pub(crate) struct RecordingHost {
    calls: RefCell<Vec<String>>,
    live: RefCell<HashSet<Entity>>,
    components: RefCell<HashSet<(Entity, ComponentTypeId)>>,
    names: RefCell<HashMap<String, Entity>>,
    keys: RefCell<HashSet<KeyCode>>,
    vector3: Cell<Vector3>,
    logs: RefCell<Vec<(LogLevel, String)>>,
}

impl RecordingHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn spawn(&self, id: u64, name: &str) -> Entity {
        let entity = Entity::from_raw(id);
        self.live.borrow_mut().insert(entity);
        self.names.borrow_mut().insert(name.to_string(), entity);
        entity
    }

    pub(crate) fn despawn(&self, entity: Entity) {
        self.live.borrow_mut().remove(&entity);
    }

    pub(crate) fn give(&self, entity: Entity, component: ComponentTypeId) {
        self.components.borrow_mut().insert((entity, component));
    }

    pub(crate) fn press(&self, key: KeyCode) {
        self.keys.borrow_mut().insert(key);
    }

    pub(crate) fn set_vector3(&self, value: Vector3) {
        self.vector3.set(value);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn logs(&self) -> Vec<(LogLevel, String)> {
        self.logs.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl EngineHost for RecordingHost {
    fn log(&self, level: LogLevel, message: &str) {
        self.logs.borrow_mut().push((level, message.to_string()));
    }

    fn entity_exists(&self, entity: Entity) -> bool {
        self.record(format!("entity_exists({})", entity.id()));
        self.live.borrow().contains(&entity)
    }

    fn entity_has_component(&self, entity: Entity, component: ComponentTypeId) -> bool {
        self.record(format!("entity_has_component({})", entity.id()));
        self.components.borrow().contains(&(entity, component))
    }

    fn entity_add_component(&self, entity: Entity, component: ComponentTypeId) {
        self.record(format!("entity_add_component({})", entity.id()));
        self.components.borrow_mut().insert((entity, component));
    }

    fn entity_find_by_name(&self, name: &str) -> Entity {
        self.record(format!("entity_find_by_name({name})"));
        self.names
            .borrow()
            .get(name)
            .copied()
            .unwrap_or(Entity::INVALID)
    }

    fn tag_get(&self, entity: Entity) -> String {
        self.record(format!("tag_get({})", entity.id()));
        self.names
            .borrow()
            .iter()
            .find(|(_, e)| **e == entity)
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    }

    fn tag_set(&self, entity: Entity, tag: &str) {
        self.record(format!("tag_set({}, {tag})", entity.id()));
    }

    fn transform_get_translation(&self, entity: Entity, out: &mut Vector3) {
        self.record(format!("transform_get_translation({})", entity.id()));
        *out = self.vector3.get();
    }

    fn transform_set_translation(&self, entity: Entity, translation: Vector3) {
        self.record(format!(
            "transform_set_translation({}, {translation})",
            entity.id()
        ));
    }

    fn transform_get_rotation(&self, entity: Entity, out: &mut Vector3) {
        self.record(format!("transform_get_rotation({})", entity.id()));
        *out = self.vector3.get();
    }

    fn transform_set_rotation(&self, entity: Entity, rotation: Vector3) {
        self.record(format!("transform_set_rotation({}, {rotation})", entity.id()));
    }

    fn transform_get_scale(&self, entity: Entity, out: &mut Vector3) {
        self.record(format!("transform_get_scale({})", entity.id()));
        *out = self.vector3.get();
    }

    fn transform_set_scale(&self, entity: Entity, scale: Vector3) {
        self.record(format!("transform_set_scale({}, {scale})", entity.id()));
    }

    fn sprite_renderer_get_colour(&self, entity: Entity, out: &mut Vector4) {
        self.record(format!("sprite_renderer_get_colour({})", entity.id()));
        *out = Vector4::ONE;
    }

    fn sprite_renderer_set_colour(&self, entity: Entity, colour: Vector4) {
        self.record(format!(
            "sprite_renderer_set_colour({}, {colour})",
            entity.id()
        ));
    }

    fn sprite_renderer_get_texture_path(&self, entity: Entity) -> String {
        self.record(format!("sprite_renderer_get_texture_path({})", entity.id()));
        String::new()
    }

    fn sprite_renderer_set_texture_path(&self, entity: Entity, path: &str) {
        self.record(format!(
            "sprite_renderer_set_texture_path({}, {path})",
            entity.id()
        ));
    }

    fn sprite_renderer_get_tiling_factor(&self, entity: Entity) -> f32 {
        self.record(format!("sprite_renderer_get_tiling_factor({})", entity.id()));
        1.0
    }

    fn sprite_renderer_set_tiling_factor(&self, entity: Entity, tiling_factor: f32) {
        self.record(format!(
            "sprite_renderer_set_tiling_factor({}, {tiling_factor})",
            entity.id()
        ));
    }

    fn camera_is_primary(&self, entity: Entity) -> bool {
        self.record(format!("camera_is_primary({})", entity.id()));
        true
    }

    fn camera_set_primary(&self, entity: Entity, primary: bool) {
        self.record(format!("camera_set_primary({}, {primary})", entity.id()));
    }

    fn camera_get_projection_type(&self, entity: Entity) -> ProjectionType {
        self.record(format!("camera_get_projection_type({})", entity.id()));
        ProjectionType::Orthographic
    }

    fn camera_set_projection_type(&self, entity: Entity, projection: ProjectionType) {
        self.record(format!(
            "camera_set_projection_type({}, {projection:?})",
            entity.id()
        ));
    }

    fn camera_get_perspective_vertical_fov(&self, entity: Entity) -> f32 {
        self.record(format!("camera_get_perspective_vertical_fov({})", entity.id()));
        0.0
    }

    fn camera_set_perspective_vertical_fov(&self, entity: Entity, value: f32) {
        self.record(format!(
            "camera_set_perspective_vertical_fov({}, {value})",
            entity.id()
        ));
    }

    fn camera_get_perspective_near(&self, entity: Entity) -> f32 {
        self.record(format!("camera_get_perspective_near({})", entity.id()));
        0.0
    }

    fn camera_set_perspective_near(&self, entity: Entity, value: f32) {
        self.record(format!("camera_set_perspective_near({}, {value})", entity.id()));
    }

    fn camera_get_perspective_far(&self, entity: Entity) -> f32 {
        self.record(format!("camera_get_perspective_far({})", entity.id()));
        0.0
    }

    fn camera_set_perspective_far(&self, entity: Entity, value: f32) {
        self.record(format!("camera_set_perspective_far({}, {value})", entity.id()));
    }

    fn camera_get_orthographic_size(&self, entity: Entity) -> f32 {
        self.record(format!("camera_get_orthographic_size({})", entity.id()));
        0.0
    }

    fn camera_set_orthographic_size(&self, entity: Entity, value: f32) {
        self.record(format!(
            "camera_set_orthographic_size({}, {value})",
            entity.id()
        ));
    }

    fn camera_get_orthographic_near(&self, entity: Entity) -> f32 {
        self.record(format!("camera_get_orthographic_near({})", entity.id()));
        0.0
    }

    fn camera_set_orthographic_near(&self, entity: Entity, value: f32) {
        self.record(format!(
            "camera_set_orthographic_near({}, {value})",
            entity.id()
        ));
    }

    fn camera_get_orthographic_far(&self, entity: Entity) -> f32 {
        self.record(format!("camera_get_orthographic_far({})", entity.id()));
        0.0
    }

    fn camera_set_orthographic_far(&self, entity: Entity, value: f32) {
        self.record(format!("camera_set_orthographic_far({}, {value})", entity.id()));
    }

    fn camera_is_fixed_aspect_ratio(&self, entity: Entity) -> bool {
        self.record(format!("camera_is_fixed_aspect_ratio({})", entity.id()));
        false
    }

    fn camera_set_fixed_aspect_ratio(&self, entity: Entity, value: bool) {
        self.record(format!(
            "camera_set_fixed_aspect_ratio({}, {value})",
            entity.id()
        ));
    }

    fn text_get_string(&self, entity: Entity) -> String {
        self.record(format!("text_get_string({})", entity.id()));
        String::new()
    }

    fn text_set_string(&self, entity: Entity, text: &str) {
        self.record(format!("text_set_string({}, {text})", entity.id()));
    }

    fn text_get_colour(&self, entity: Entity, out: &mut Vector4) {
        self.record(format!("text_get_colour({})", entity.id()));
        *out = Vector4::ONE;
    }

    fn text_set_colour(&self, entity: Entity, colour: Vector4) {
        self.record(format!("text_set_colour({}, {colour})", entity.id()));
    }

    fn text_get_kerning(&self, entity: Entity) -> f32 {
        self.record(format!("text_get_kerning({})", entity.id()));
        0.0
    }

    fn text_set_kerning(&self, entity: Entity, kerning: f32) {
        self.record(format!("text_set_kerning({}, {kerning})", entity.id()));
    }

    fn text_get_line_spacing(&self, entity: Entity) -> f32 {
        self.record(format!("text_get_line_spacing({})", entity.id()));
        0.0
    }

    fn text_set_line_spacing(&self, entity: Entity, line_spacing: f32) {
        self.record(format!(
            "text_set_line_spacing({}, {line_spacing})",
            entity.id()
        ));
    }

    fn input_is_key_down(&self, key: KeyCode) -> bool {
        self.keys.borrow().contains(&key)
    }

    fn input_is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        button == MouseButton::LEFT
    }

    fn input_get_mouse_x(&self) -> f32 {
        12.0
    }

    fn input_get_mouse_y(&self) -> f32 {
        34.0
    }
}
