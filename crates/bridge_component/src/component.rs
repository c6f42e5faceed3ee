//! Capability kinds and their boundary identifiers.
//!
//! A component is not a stored object on the script side: it is a view keyed
//! by `(Entity, CapabilityKind)`. The set of kinds is closed and known to both
//! sides at compile time.
//!
//! ## Boundary identity
//!
//! When a capability crosses the boundary it travels as a [`ComponentTypeId`],
//! the FNV-1a 64-bit hash of the capability's name. The hash is deterministic
//! and language-neutral, so a host written in anything can compute the same
//! ID for `"SpriteRendererComponent"`.

use serde::{Deserialize, Serialize};

/// A unique identifier for a capability, derived from its string name using
/// the FNV-1a 64-bit hash algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    /// FNV-1a 64-bit offset basis.
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// FNV-1a 64-bit prime.
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Compute the [`ComponentTypeId`] for `name`.
    ///
    /// # Algorithm (FNV-1a 64-bit)
    ///
    /// ```text
    /// hash = 0xcbf29ce484222325          (offset basis)
    /// for each byte in name.as_bytes():
    ///     hash = hash XOR byte
    ///     hash = hash * 0x00000100000001b3  (prime)
    /// return hash
    /// ```
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }
}

impl std::fmt::Display for ComponentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// The closed set of capabilities an entity can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityKind {
    /// The entity's display name.
    Tag,
    /// Translation, rotation and scale.
    Transform,
    /// Tint colour, texture and tiling.
    SpriteRenderer,
    /// Projection parameters and the "primary camera" flag.
    Camera,
    /// Rendered text with colour, kerning and line spacing.
    Text,
}

impl CapabilityKind {
    /// Every capability kind, in declaration order.
    pub const ALL: [CapabilityKind; 5] = [
        CapabilityKind::Tag,
        CapabilityKind::Transform,
        CapabilityKind::SpriteRenderer,
        CapabilityKind::Camera,
        CapabilityKind::Text,
    ];

    /// The name the boundary identifier is hashed from.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CapabilityKind::Tag => "TagComponent",
            CapabilityKind::Transform => "TransformComponent",
            CapabilityKind::SpriteRenderer => "SpriteRendererComponent",
            CapabilityKind::Camera => "CameraComponent",
            CapabilityKind::Text => "TextComponent",
        }
    }

    /// The identifier this kind travels as across the boundary.
    #[must_use]
    pub const fn type_id(self) -> ComponentTypeId {
        ComponentTypeId::from_name(self.name())
    }

    /// Resolve a boundary identifier back to a kind.
    ///
    /// Returns `None` for identifiers that do not name a known capability.
    #[must_use]
    pub fn from_type_id(id: ComponentTypeId) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_id() == id)
    }
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
