//! Entity handles and their lifecycle on the host side.
//!
//! A script only ever sees an [`Entity`] it was handed by the host. The host
//! mints handles through a [`EntityAllocator`], which also remembers which
//! handles it has retired so a stale handle can be told apart from one that
//! was never issued.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle naming one entity in the host.
///
/// `0` is [`Entity::INVALID`]: it never names an entity and every capability
/// query against it comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(pub u64);

impl Entity {
    pub const INVALID: Entity = Entity(0);

    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// `false` only for the zero sentinel. Says nothing about liveness.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Where a handle is in its lifecycle, as far as its allocator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    /// Not minted by this allocator, including the zero sentinel.
    Unissued,
    Live,
    /// Released; the value will not be handed out again.
    Destroyed,
}

impl HandleState {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            HandleState::Unissued => "unissued",
            HandleState::Live => "live",
            HandleState::Destroyed => "destroyed",
        }
    }
}

impl fmt::Display for HandleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mints entity handles for one session and tracks their release.
///
/// Handles start at 1 and only grow. A released value stays retired for the
/// life of the allocator.
#[derive(Debug)]
pub struct EntityAllocator {
    next: u64,
    released: BTreeSet<Entity>,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: 1,
            released: BTreeSet::new(),
        }
    }

    pub fn allocate(&mut self) -> Entity {
        let entity = Entity(self.next);
        self.next += 1;
        entity
    }

    /// Retire a live handle. Returns `false` for handles that were never
    /// issued or are already retired.
    pub fn release(&mut self, entity: Entity) -> bool {
        match self.state(entity) {
            HandleState::Live => self.released.insert(entity),
            HandleState::Unissued | HandleState::Destroyed => false,
        }
    }

    #[must_use]
    pub fn state(&self, entity: Entity) -> HandleState {
        if !entity.is_valid() || entity.0 >= self.next {
            HandleState::Unissued
        } else if self.released.contains(&entity) {
            HandleState::Destroyed
        } else {
            HandleState::Live
        }
    }

    /// Handles minted so far, live or not.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next - 1
    }

    #[must_use]
    pub fn live(&self) -> u64 {
        self.issued() - self.released.len() as u64
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        assert!(!Entity::INVALID.is_valid());
        assert!(Entity::from_raw(7).is_valid());
        assert_eq!(Entity::from_raw(7).to_string(), "Entity(7)");
    }

    #[test]
    fn test_handles_start_at_one() {
        let mut handles = EntityAllocator::new();
        assert_eq!(handles.allocate(), Entity(1));
        assert_eq!(handles.allocate(), Entity(2));
        assert_eq!(handles.issued(), 2);
        assert_eq!(handles.live(), 2);
    }

    #[test]
    fn test_release_retires_handle() {
        let mut handles = EntityAllocator::new();
        let a = handles.allocate();
        let b = handles.allocate();

        assert!(handles.release(a));
        assert!(!handles.release(a));
        assert_eq!(handles.state(a), HandleState::Destroyed);
        assert_eq!(handles.state(b), HandleState::Live);
        assert_eq!(handles.live(), 1);

        let c = handles.allocate();
        assert_ne!(c, a);
        assert_eq!(c, Entity(3));
    }

    #[test]
    fn test_unissued_handles() {
        let mut handles = EntityAllocator::new();
        handles.allocate();

        assert_eq!(handles.state(Entity::INVALID), HandleState::Unissued);
        assert_eq!(handles.state(Entity(2)), HandleState::Unissued);
        assert!(!handles.release(Entity(2)));
        assert!(!handles.release(Entity::INVALID));
        assert_eq!(handles.live(), 1);
    }

    #[test]
    fn test_handle_is_bare_integer_on_the_wire() {
        assert_eq!(serde_json::to_string(&Entity(999)).unwrap(), "999");
        assert_eq!(serde_json::from_str::<Entity>("12").unwrap(), Entity(12));
    }
}
