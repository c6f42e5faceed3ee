//! The script-facing entity handle.
//!
//! An [`EntityProxy`] is a handle plus the host it resolves against. It has no
//! state of its own beyond "bound to handle H": names, components and
//! transforms all live in the engine and are fetched on every access.

use bridge_component::Entity;
use bridge_math::Vector3;
use tracing::debug;

use crate::behaviour::{BehaviourRegistry, Downcast};
use crate::components::{ComponentProxy, TransformComponent};
use crate::config::ScriptConfig;
use crate::error::ScriptError;
use crate::host::EngineHost;

/// A script-side view of one engine entity.
#[derive(Clone, Copy)]
pub struct EntityProxy<'h> {
    entity: Entity,
    host: &'h dyn EngineHost,
    validate: bool,
}

impl<'h> EntityProxy<'h> {
    /// Bind a proxy to `entity` without checking that it is alive.
    #[must_use]
    pub fn bind(entity: Entity, host: &'h dyn EngineHost) -> Self {
        Self {
            entity,
            host,
            validate: false,
        }
    }

    /// Bind a proxy to `entity`, first checking that it is alive.
    ///
    /// The returned proxy also checks liveness whenever it hands out a
    /// component proxy or resolves another entity by name.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::StaleHandle`] if the handle is the zero sentinel
    /// or no longer resolves.
    pub fn bind_checked(entity: Entity, host: &'h dyn EngineHost) -> Result<Self, ScriptError> {
        if !entity.is_valid() || !host.entity_exists(entity) {
            return Err(ScriptError::StaleHandle(entity));
        }
        Ok(Self {
            entity,
            host,
            validate: true,
        })
    }

    /// Bind according to `config`: checked when handle validation is on.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::StaleHandle`] when validating and the handle
    /// does not resolve.
    pub fn bind_with(
        entity: Entity,
        host: &'h dyn EngineHost,
        config: &ScriptConfig,
    ) -> Result<Self, ScriptError> {
        if config.validate_handles {
            Self::bind_checked(entity, host)
        } else {
            Ok(Self::bind(entity, host))
        }
    }

    /// The raw handle.
    #[must_use]
    pub fn id(&self) -> Entity {
        self.entity
    }

    /// The host this proxy dispatches to.
    #[must_use]
    pub fn host(&self) -> &'h dyn EngineHost {
        self.host
    }

    /// Returns `true` if the handle currently resolves to a live entity.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.entity.is_valid() && self.host.entity_exists(self.entity)
    }

    fn passes_validation(&self) -> bool {
        if !self.validate || self.host.entity_exists(self.entity) {
            return true;
        }
        debug!(entity = %self.entity, "handle no longer resolves");
        false
    }

    // -- Name --

    #[must_use]
    pub fn name(&self) -> String {
        self.host.tag_get(self.entity)
    }

    pub fn set_name(&self, name: &str) {
        self.host.tag_set(self.entity, name);
    }

    // -- Transform shortcuts --

    #[must_use]
    pub fn translation(&self) -> Vector3 {
        self.transform().translation()
    }

    pub fn set_translation(&self, translation: Vector3) {
        self.transform().set_translation(translation);
    }

    #[must_use]
    pub fn rotation(&self) -> Vector3 {
        self.transform().rotation()
    }

    pub fn set_rotation(&self, rotation: Vector3) {
        self.transform().set_rotation(rotation);
    }

    #[must_use]
    pub fn scale(&self) -> Vector3 {
        self.transform().scale()
    }

    pub fn set_scale(&self, scale: Vector3) {
        self.transform().set_scale(scale);
    }

    fn transform(&self) -> TransformComponent<'h> {
        TransformComponent::bind(self.entity, self.host)
    }

    // -- Components --

    /// Returns `true` if the entity carries capability `K`.
    ///
    /// Always `false` for the zero handle, without a boundary call.
    #[must_use]
    pub fn has_component<K: ComponentProxy<'h>>(&self) -> bool {
        self.entity.is_valid() && self.host.entity_has_component(self.entity, K::KIND.type_id())
    }

    /// A fresh view of capability `K`, or `None` if the entity lacks it.
    #[must_use]
    pub fn get_component<K: ComponentProxy<'h>>(&self) -> Option<K> {
        if !self.has_component::<K>() || !self.passes_validation() {
            return None;
        }
        Some(K::bind(self.entity, self.host))
    }

    /// Add capability `K` and return a view of it.
    ///
    /// Idempotent: when the capability is already present the existing engine
    /// state is kept and a view of it is returned. `None` only for the zero
    /// handle or a handle that fails validation.
    pub fn add_component<K: ComponentProxy<'h>>(&self) -> Option<K> {
        if !self.entity.is_valid() || !self.passes_validation() {
            return None;
        }
        if !self.has_component::<K>() {
            self.host
                .entity_add_component(self.entity, K::KIND.type_id());
        }
        Some(K::bind(self.entity, self.host))
    }

    // -- Lookup --

    /// Find another entity by name. `None` when no entity has that name.
    #[must_use]
    pub fn find_entity_by_name(&self, name: &str) -> Option<EntityProxy<'h>> {
        find_entity_by_name(self.host, name, self.validate)
    }

    // -- Behaviour downcast --

    /// The behaviour attached to this entity, if it is a `T`.
    ///
    /// `None` when no behaviour is attached, when the attached behaviour is
    /// some other type, or while the behaviour's own callback is running.
    pub fn as_behaviour<'r, B, T>(&self, behaviours: &'r mut BehaviourRegistry<B>) -> Option<&'r mut T>
    where
        T: Downcast<B>,
    {
        behaviours.get_mut(self.entity).and_then(T::downcast_mut)
    }

    /// Shared-reference form of [`EntityProxy::as_behaviour`].
    #[must_use]
    pub fn as_behaviour_ref<'r, B, T>(&self, behaviours: &'r BehaviourRegistry<B>) -> Option<&'r T>
    where
        T: Downcast<B>,
    {
        behaviours.get(self.entity).and_then(T::downcast_ref)
    }
}

impl PartialEq for EntityProxy<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity
    }
}

impl Eq for EntityProxy<'_> {}

impl std::fmt::Debug for EntityProxy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityProxy")
            .field("entity", &self.entity)
            .field("validate", &self.validate)
            .finish()
    }
}

/// Resolve `name` through the host.
///
/// A zero handle from the host means "not found" and becomes `None`; callers
/// never see a zero-handle proxy from a lookup.
#[must_use]
pub fn find_entity_by_name<'h>(
    host: &'h dyn EngineHost,
    name: &str,
    validate: bool,
) -> Option<EntityProxy<'h>> {
    let entity = host.entity_find_by_name(name);
    if !entity.is_valid() {
        debug!(name, "no entity with this name");
        return None;
    }
    let proxy = EntityProxy {
        entity,
        host,
        validate,
    };
    proxy.passes_validation().then_some(proxy)
}
