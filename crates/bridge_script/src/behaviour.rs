//! Per-entity behaviour instances.
//!
//! Scripted behaviour types are the variants of one user enum `B`. The
//! [`BehaviourRegistry`] holds at most one `B` per entity, and a "downcast" to
//! a concrete behaviour is a pattern match through [`Downcast`].
//!
//! ```rust
//! use bridge_script::{Behaviour, behaviour_variants};
//!
//! struct Player { speed: f32 }
//! struct Follow { distance: f32 }
//!
//! enum Game {
//!     Player(Player),
//!     Follow(Follow),
//! }
//!
//! impl Behaviour for Game {}
//!
//! behaviour_variants!(Game { Player(Player), Follow(Follow) });
//! ```

use std::collections::BTreeMap;

use bridge_component::Entity;

use crate::runtime::ScriptContext;

/// Lifecycle hooks of a scripted behaviour.
///
/// Implemented by the behaviour enum; each hook typically matches on the
/// variant and forwards to the concrete type.
pub trait Behaviour: Sized + 'static {
    /// Called once, on the first frame after the behaviour is attached.
    fn on_create(&mut self, ctx: &mut ScriptContext<'_, Self>) {
        let _ = ctx;
    }

    /// Called once per frame with the frame's timestep in seconds.
    fn on_update(&mut self, ctx: &mut ScriptContext<'_, Self>, ts: f32) {
        let _ = (ctx, ts);
    }
}

/// A type-checked view from the behaviour enum `B` to one of its variants.
pub trait Downcast<B>: Sized {
    fn downcast_ref(behaviour: &B) -> Option<&Self>;
    fn downcast_mut(behaviour: &mut B) -> Option<&mut Self>;
}

/// Implement [`Downcast`] for each `Variant(Type)` of a behaviour enum.
#[macro_export]
macro_rules! behaviour_variants {
    ($enum:ident { $($variant:ident($ty:ty)),+ $(,)? }) => {
        $(
            impl $crate::Downcast<$enum> for $ty {
                #[allow(unreachable_patterns)]
                fn downcast_ref(behaviour: &$enum) -> Option<&Self> {
                    match behaviour {
                        $enum::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn downcast_mut(behaviour: &mut $enum) -> Option<&mut Self> {
                    match behaviour {
                        $enum::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

/// The live behaviour instance of each entity, keyed by handle.
#[derive(Debug)]
pub struct BehaviourRegistry<B> {
    instances: BTreeMap<Entity, B>,
}

impl<B> BehaviourRegistry<B> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: BTreeMap::new(),
        }
    }

    /// Attach `behaviour` to `entity`, returning the one it replaces.
    pub fn insert(&mut self, entity: Entity, behaviour: B) -> Option<B> {
        self.instances.insert(entity, behaviour)
    }

    pub fn remove(&mut self, entity: Entity) -> Option<B> {
        self.instances.remove(&entity)
    }

    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&B> {
        self.instances.get(&entity)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut B> {
        self.instances.get_mut(&entity)
    }

    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.instances.contains_key(&entity)
    }

    /// Attached entities in handle order.
    #[must_use]
    pub fn entities(&self) -> Vec<Entity> {
        self.instances.keys().copied().collect()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(Entity) -> bool) {
        self.instances.retain(|entity, _| keep(*entity));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<B> Default for BehaviourRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Player {
        speed: f32,
    }

    #[derive(Debug, PartialEq)]
    struct Follow {
        distance: f32,
    }

    #[derive(Debug)]
    enum Game {
        Player(Player),
        Follow(Follow),
    }

    impl Behaviour for Game {}

    crate::behaviour_variants!(Game {
        Player(Player),
        Follow(Follow),
    });

    #[test]
    fn test_downcast_matches_variant() {
        let mut game = Game::Follow(Follow { distance: 8.0 });
        assert!(Player::downcast_ref(&game).is_none());
        Follow::downcast_mut(&mut game).unwrap().distance = 10.0;
        assert_eq!(
            Follow::downcast_ref(&game),
            Some(&Follow { distance: 10.0 })
        );
    }

    #[test]
    fn test_one_instance_per_entity() {
        let mut registry = BehaviourRegistry::new();
        let e = Entity::from_raw(1);
        assert!(registry.insert(e, Game::Player(Player { speed: 1.0 })).is_none());
        let replaced = registry.insert(e, Game::Player(Player { speed: 2.0 }));
        assert!(matches!(replaced, Some(Game::Player(Player { speed })) if speed == 1.0));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_entities_in_handle_order() {
        let mut registry = BehaviourRegistry::new();
        registry.insert(Entity::from_raw(5), Game::Follow(Follow { distance: 1.0 }));
        registry.insert(Entity::from_raw(2), Game::Player(Player { speed: 1.0 }));
        assert_eq!(
            registry.entities(),
            vec![Entity::from_raw(2), Entity::from_raw(5)]
        );
    }
}
