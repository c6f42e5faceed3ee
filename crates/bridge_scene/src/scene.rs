//! The in-memory reference engine.
//!
//! [`Scene`] owns every entity record and answers the boundary calls of
//! [`EngineHost`]. State sits behind `RefCell`s so that scripts can hold a
//! shared `&dyn EngineHost` while mutating components through it.
//!
//! A component getter or setter against a handle that no longer resolves is
//! a contract violation and panics with the handle in the message. Use
//! [`Scene::try_entity`] for a checked lookup.

use std::cell::{RefCell, RefMut};
use std::collections::BTreeMap;
use std::path::Path;

use bridge_component::{
    CameraData, CapabilityKind, ComponentTypeId, Entity, EntityAllocator, HandleState,
    ProjectionType, SpriteRendererData, TextData,
};
use bridge_math::{Transform, Vector3, Vector4};
use bridge_script::{EngineHost, KeyCode, LogLevel, MouseButton};
use tracing::{debug, error, info, warn};

use crate::description::{EntityDescription, SceneDescription};
use crate::error::SceneError;
use crate::input::InputState;
use crate::record::EntityRecord;

#[track_caller]
fn stale(entity: Entity, state: HandleState) -> ! {
    panic!("{entity} does not resolve to a live entity ({state})")
}

#[track_caller]
fn missing(entity: Entity, kind: CapabilityKind) -> ! {
    panic!("{entity} has no {}", kind.name())
}

/// A named collection of entities plus input state.
#[derive(Debug)]
pub struct Scene {
    name: String,
    allocator: RefCell<EntityAllocator>,
    entities: RefCell<BTreeMap<Entity, EntityRecord>>,
    input: RefCell<InputState>,
}

macro_rules! component_access {
    ($read:ident, $write:ident, $field:ident, $ty:ty, $kind:expr) => {
        #[track_caller]
        fn $read<R>(&self, entity: Entity, f: impl FnOnce(&$ty) -> R) -> R {
            self.read(entity, |record| match &record.$field {
                Some(component) => f(component),
                None => missing(entity, $kind),
            })
        }

        #[track_caller]
        fn $write(&self, entity: Entity, f: impl FnOnce(&mut $ty)) {
            self.write(entity, |record| match &mut record.$field {
                Some(component) => f(component),
                None => missing(entity, $kind),
            })
        }
    };
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allocator: RefCell::new(EntityAllocator::new()),
            entities: RefCell::new(BTreeMap::new()),
            input: RefCell::new(InputState::default()),
        }
    }

    /// Build a scene from a description. Entities are created in order.
    #[must_use]
    pub fn from_description(description: &SceneDescription) -> Self {
        let scene = Self::new(description.name.clone());
        for entity in &description.entities {
            let mut record = EntityRecord::new(entity.name.clone());
            record.transform = Some(entity.transform);
            record.sprite_renderer = entity.sprite_renderer.clone();
            record.camera = entity.camera.clone();
            record.text = entity.text.clone();
            scene.insert(record);
        }
        info!(
            scene = %scene.name,
            entities = scene.len(),
            "scene loaded"
        );
        scene
    }

    /// Read a JSON description from `path` and build a scene from it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] or [`SceneError::Json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let description = SceneDescription::load(path)?;
        Ok(Self::from_description(&description))
    }

    /// Snapshot the scene as a description.
    #[must_use]
    pub fn to_description(&self) -> SceneDescription {
        let entities = self
            .entities
            .borrow()
            .values()
            .map(|record| EntityDescription {
                name: record.name().to_string(),
                transform: record.transform.unwrap_or_default(),
                sprite_renderer: record.sprite_renderer.clone(),
                camera: record.camera.clone(),
                text: record.text.clone(),
            })
            .collect();
        SceneDescription {
            name: self.name.clone(),
            entities,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create an entity with a tag and an identity transform.
    pub fn create_entity(&self, name: impl Into<String>) -> Entity {
        let entity = self.insert(EntityRecord::new(name));
        debug!(%entity, "entity created");
        entity
    }

    /// Destroy an entity. Its handle is never reissued.
    ///
    /// Returns `true` if the entity existed.
    pub fn destroy_entity(&self, entity: Entity) -> bool {
        if !self.allocator.borrow_mut().release(entity) {
            debug!(%entity, state = %self.handle_state(entity), "destroy ignored");
            return false;
        }
        self.entities.borrow_mut().remove(&entity);
        debug!(%entity, "entity destroyed");
        true
    }

    /// Whether `entity` is live, destroyed, or was never issued here.
    #[must_use]
    pub fn handle_state(&self, entity: Entity) -> HandleState {
        self.allocator.borrow().state(entity)
    }

    /// A copy of the entity's record, or an error if the handle is stale.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::StaleHandle`] if `entity` does not resolve.
    pub fn try_entity(&self, entity: Entity) -> Result<EntityRecord, SceneError> {
        self.entities
            .borrow()
            .get(&entity)
            .cloned()
            .ok_or(SceneError::StaleHandle(entity))
    }

    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.borrow().contains_key(&entity)
    }

    /// Live entities in handle order.
    #[must_use]
    pub fn entities(&self) -> Vec<Entity> {
        self.entities.borrow().keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.borrow().is_empty()
    }

    /// Mutable access to the input state, for the platform layer.
    ///
    /// # Panics
    ///
    /// Panics if called while a script is reading input.
    pub fn input(&self) -> RefMut<'_, InputState> {
        self.input.borrow_mut()
    }

    fn insert(&self, record: EntityRecord) -> Entity {
        let entity = self.allocator.borrow_mut().allocate();
        self.entities.borrow_mut().insert(entity, record);
        entity
    }

    #[track_caller]
    fn read<R>(&self, entity: Entity, f: impl FnOnce(&EntityRecord) -> R) -> R {
        match self.entities.borrow().get(&entity) {
            Some(record) => f(record),
            None => stale(entity, self.handle_state(entity)),
        }
    }

    #[track_caller]
    fn write(&self, entity: Entity, f: impl FnOnce(&mut EntityRecord)) {
        match self.entities.borrow_mut().get_mut(&entity) {
            Some(record) => f(record),
            None => stale(entity, self.handle_state(entity)),
        }
    }

    component_access!(transform, transform_mut, transform, Transform, CapabilityKind::Transform);
    component_access!(
        sprite,
        sprite_mut,
        sprite_renderer,
        SpriteRendererData,
        CapabilityKind::SpriteRenderer
    );
    component_access!(camera, camera_mut, camera, CameraData, CapabilityKind::Camera);
    component_access!(text, text_mut, text, TextData, CapabilityKind::Text);
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl EngineHost for Scene {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => info!(target: "script", "{message}"),
            LogLevel::Warning => warn!(target: "script", "{message}"),
            LogLevel::Error => error!(target: "script", "{message}"),
        }
    }

    fn entity_exists(&self, entity: Entity) -> bool {
        self.contains(entity)
    }

    fn entity_has_component(&self, entity: Entity, component: ComponentTypeId) -> bool {
        let Some(kind) = CapabilityKind::from_type_id(component) else {
            warn!(%entity, %component, "unknown component type id");
            return false;
        };
        self.entities
            .borrow()
            .get(&entity)
            .is_some_and(|record| record.has(kind))
    }

    fn entity_add_component(&self, entity: Entity, component: ComponentTypeId) {
        let Some(kind) = CapabilityKind::from_type_id(component) else {
            warn!(%entity, %component, "unknown component type id");
            return;
        };
        self.write(entity, |record| {
            if record.add(kind) {
                debug!(%entity, component = kind.name(), "component added");
            }
        });
    }

    fn entity_find_by_name(&self, name: &str) -> Entity {
        self.entities
            .borrow()
            .iter()
            .find(|(_, record)| record.name() == name)
            .map_or(Entity::INVALID, |(entity, _)| *entity)
    }

    fn tag_get(&self, entity: Entity) -> String {
        self.read(entity, |record| record.tag.tag.clone())
    }

    fn tag_set(&self, entity: Entity, tag: &str) {
        self.write(entity, |record| record.tag.tag = tag.to_string());
    }

    fn transform_get_translation(&self, entity: Entity, out: &mut Vector3) {
        *out = self.transform(entity, |t| t.translation);
    }

    fn transform_set_translation(&self, entity: Entity, translation: Vector3) {
        self.transform_mut(entity, |t| t.translation = translation);
    }

    fn transform_get_rotation(&self, entity: Entity, out: &mut Vector3) {
        *out = self.transform(entity, |t| t.rotation);
    }

    fn transform_set_rotation(&self, entity: Entity, rotation: Vector3) {
        self.transform_mut(entity, |t| t.rotation = rotation);
    }

    fn transform_get_scale(&self, entity: Entity, out: &mut Vector3) {
        *out = self.transform(entity, |t| t.scale);
    }

    fn transform_set_scale(&self, entity: Entity, scale: Vector3) {
        self.transform_mut(entity, |t| t.scale = scale);
    }

    fn sprite_renderer_get_colour(&self, entity: Entity, out: &mut Vector4) {
        *out = self.sprite(entity, |s| s.colour);
    }

    fn sprite_renderer_set_colour(&self, entity: Entity, colour: Vector4) {
        self.sprite_mut(entity, |s| s.colour = colour);
    }

    fn sprite_renderer_get_texture_path(&self, entity: Entity) -> String {
        self.sprite(entity, |s| s.texture_path.clone())
    }

    fn sprite_renderer_set_texture_path(&self, entity: Entity, path: &str) {
        if path.is_empty() {
            debug!(%entity, "sprite texture reset to default");
        }
        self.sprite_mut(entity, |s| s.texture_path = path.to_string());
    }

    fn sprite_renderer_get_tiling_factor(&self, entity: Entity) -> f32 {
        self.sprite(entity, |s| s.tiling_factor)
    }

    fn sprite_renderer_set_tiling_factor(&self, entity: Entity, tiling_factor: f32) {
        self.sprite_mut(entity, |s| s.tiling_factor = tiling_factor);
    }

    fn camera_is_primary(&self, entity: Entity) -> bool {
        self.camera(entity, |c| c.primary)
    }

    fn camera_set_primary(&self, entity: Entity, primary: bool) {
        self.camera_mut(entity, |c| c.primary = primary);
    }

    fn camera_get_projection_type(&self, entity: Entity) -> ProjectionType {
        self.camera(entity, |c| c.projection)
    }

    fn camera_set_projection_type(&self, entity: Entity, projection: ProjectionType) {
        self.camera_mut(entity, |c| c.projection = projection);
    }

    fn camera_get_perspective_vertical_fov(&self, entity: Entity) -> f32 {
        self.camera(entity, |c| c.perspective_fov)
    }

    fn camera_set_perspective_vertical_fov(&self, entity: Entity, value: f32) {
        self.camera_mut(entity, |c| c.perspective_fov = value);
    }

    fn camera_get_perspective_near(&self, entity: Entity) -> f32 {
        self.camera(entity, |c| c.perspective_near)
    }

    fn camera_set_perspective_near(&self, entity: Entity, value: f32) {
        self.camera_mut(entity, |c| c.perspective_near = value);
    }

    fn camera_get_perspective_far(&self, entity: Entity) -> f32 {
        self.camera(entity, |c| c.perspective_far)
    }

    fn camera_set_perspective_far(&self, entity: Entity, value: f32) {
        self.camera_mut(entity, |c| c.perspective_far = value);
    }

    fn camera_get_orthographic_size(&self, entity: Entity) -> f32 {
        self.camera(entity, |c| c.orthographic_size)
    }

    fn camera_set_orthographic_size(&self, entity: Entity, value: f32) {
        self.camera_mut(entity, |c| c.orthographic_size = value);
    }

    fn camera_get_orthographic_near(&self, entity: Entity) -> f32 {
        self.camera(entity, |c| c.orthographic_near)
    }

    fn camera_set_orthographic_near(&self, entity: Entity, value: f32) {
        self.camera_mut(entity, |c| c.orthographic_near = value);
    }

    fn camera_get_orthographic_far(&self, entity: Entity) -> f32 {
        self.camera(entity, |c| c.orthographic_far)
    }

    fn camera_set_orthographic_far(&self, entity: Entity, value: f32) {
        self.camera_mut(entity, |c| c.orthographic_far = value);
    }

    fn camera_is_fixed_aspect_ratio(&self, entity: Entity) -> bool {
        self.camera(entity, |c| c.fixed_aspect_ratio)
    }

    fn camera_set_fixed_aspect_ratio(&self, entity: Entity, value: bool) {
        self.camera_mut(entity, |c| c.fixed_aspect_ratio = value);
    }

    fn text_get_string(&self, entity: Entity) -> String {
        self.text(entity, |t| t.text.clone())
    }

    fn text_set_string(&self, entity: Entity, text: &str) {
        self.text_mut(entity, |t| t.text = text.to_string());
    }

    fn text_get_colour(&self, entity: Entity, out: &mut Vector4) {
        *out = self.text(entity, |t| t.colour);
    }

    fn text_set_colour(&self, entity: Entity, colour: Vector4) {
        self.text_mut(entity, |t| t.colour = colour);
    }

    fn text_get_kerning(&self, entity: Entity) -> f32 {
        self.text(entity, |t| t.kerning)
    }

    fn text_set_kerning(&self, entity: Entity, kerning: f32) {
        self.text_mut(entity, |t| t.kerning = kerning);
    }

    fn text_get_line_spacing(&self, entity: Entity) -> f32 {
        self.text(entity, |t| t.line_spacing)
    }

    fn text_set_line_spacing(&self, entity: Entity, line_spacing: f32) {
        self.text_mut(entity, |t| t.line_spacing = line_spacing);
    }

    fn input_is_key_down(&self, key: KeyCode) -> bool {
        self.input.borrow().is_key_down(key)
    }

    fn input_is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.input.borrow().is_button_pressed(button)
    }

    fn input_get_mouse_x(&self) -> f32 {
        self.input.borrow().mouse_position().0
    }

    fn input_get_mouse_y(&self) -> f32 {
        self.input.borrow().mouse_position().1
    }
}
