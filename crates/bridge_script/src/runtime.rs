//! Drives attached behaviours through their lifecycle each frame.

use bridge_component::Entity;
use tracing::{debug, trace, warn};

use crate::behaviour::{Behaviour, BehaviourRegistry, Downcast};
use crate::config::ScriptConfig;
use crate::entity::{self, EntityProxy};
use crate::host::EngineHost;
use crate::input::Input;
use crate::log::Log;

/// What a behaviour callback can reach: its own entity, the host services,
/// and every other attached behaviour.
///
/// The behaviour whose callback is running is detached from the registry
/// for the duration of the call, so looking it up through the context
/// yields `None`; it is reachable only through `&mut self`.
pub struct ScriptContext<'a, B> {
    entity: EntityProxy<'a>,
    host: &'a dyn EngineHost,
    behaviours: &'a mut BehaviourRegistry<B>,
    config: &'a ScriptConfig,
    frame: u64,
}

impl<'a, B> ScriptContext<'a, B> {
    /// The entity this behaviour is attached to.
    #[must_use]
    pub fn entity(&self) -> EntityProxy<'a> {
        self.entity
    }

    #[must_use]
    pub fn input(&self) -> Input<'a> {
        Input::new(self.host)
    }

    #[must_use]
    pub fn log(&self) -> Log<'a> {
        Log::new(self.host)
    }

    /// Frames completed before the current one.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn find_entity_by_name(&self, name: &str) -> Option<EntityProxy<'a>> {
        entity::find_entity_by_name(self.host, name, self.config.validate_handles)
    }

    /// The behaviour attached to `entity`, if it is a `T`.
    pub fn behaviour<T: Downcast<B>>(&mut self, entity: &EntityProxy<'_>) -> Option<&mut T> {
        entity.as_behaviour(&mut *self.behaviours)
    }

    #[must_use]
    pub fn behaviour_ref<T: Downcast<B>>(&self, entity: &EntityProxy<'_>) -> Option<&T> {
        entity.as_behaviour_ref(&*self.behaviours)
    }
}

/// Owns the behaviour registry and runs `on_create` / `on_update`.
///
/// `on_create` runs once for each newly attached behaviour at the start of
/// the next [`ScriptRuntime::update`]; `on_update` then runs for every
/// attached behaviour in entity-handle order.
pub struct ScriptRuntime<B> {
    config: ScriptConfig,
    behaviours: BehaviourRegistry<B>,
    pending_create: Vec<Entity>,
    frame: u64,
}

impl<B: Behaviour> ScriptRuntime<B> {
    #[must_use]
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            config,
            behaviours: BehaviourRegistry::new(),
            pending_create: Vec::new(),
            frame: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    /// Attach `behaviour` to `entity`, replacing (and returning) any
    /// behaviour already there. The new instance gets `on_create` next frame.
    pub fn attach(&mut self, entity: Entity, behaviour: B) -> Option<B> {
        if !self.pending_create.contains(&entity) {
            self.pending_create.push(entity);
        }
        let replaced = self.behaviours.insert(entity, behaviour);
        debug!(%entity, replaced = replaced.is_some(), "behaviour attached");
        replaced
    }

    pub fn detach(&mut self, entity: Entity) -> Option<B> {
        self.pending_create.retain(|pending| *pending != entity);
        self.behaviours.remove(entity)
    }

    /// Drop behaviours whose entity no longer exists on `host`.
    pub fn retain_live(&mut self, host: &dyn EngineHost) {
        let before = self.behaviours.len();
        self.behaviours.retain(|entity| host.entity_exists(entity));
        self.pending_create
            .retain(|entity| host.entity_exists(*entity));
        let dropped = before - self.behaviours.len();
        if dropped > 0 {
            debug!(dropped, "behaviours of destroyed entities dropped");
        }
    }

    #[must_use]
    pub fn behaviours(&self) -> &BehaviourRegistry<B> {
        &self.behaviours
    }

    pub fn behaviours_mut(&mut self) -> &mut BehaviourRegistry<B> {
        &mut self.behaviours
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame: pending `on_create`s, then `on_update(ts)` for all.
    pub fn update(&mut self, host: &dyn EngineHost, ts: f32) {
        let created: Vec<Entity> = self.pending_create.drain(..).collect();
        for entity in created {
            self.run(host, entity, |behaviour, ctx| behaviour.on_create(ctx));
        }

        for entity in self.behaviours.entities() {
            self.run(host, entity, |behaviour, ctx| behaviour.on_update(ctx, ts));
        }

        trace!(frame = self.frame, ts, "script frame done");
        self.frame += 1;
    }

    fn run<F>(&mut self, host: &dyn EngineHost, entity: Entity, callback: F)
    where
        F: FnOnce(&mut B, &mut ScriptContext<'_, B>),
    {
        // Detached by an earlier callback this frame.
        let Some(mut instance) = self.behaviours.remove(entity) else {
            return;
        };

        let proxy = match EntityProxy::bind_with(entity, host, &self.config) {
            Ok(proxy) => proxy,
            Err(err) => {
                warn!(%err, "dropping behaviour of a stale entity");
                return;
            }
        };

        let mut ctx = ScriptContext {
            entity: proxy,
            host,
            behaviours: &mut self.behaviours,
            config: &self.config,
            frame: self.frame,
        };
        callback(&mut instance, &mut ctx);

        // A callback may have attached a replacement for its own entity.
        if !self.behaviours.contains(entity) {
            self.behaviours.insert(entity, instance);
        }
    }
}

impl<B: Behaviour> Default for ScriptRuntime<B> {
    fn default() -> Self {
        Self::new(ScriptConfig::default())
    }
}
