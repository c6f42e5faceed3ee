//! Per-entity component storage.

use bridge_component::{CameraData, CapabilityKind, SpriteRendererData, TagData, TextData};
use bridge_math::Transform;

/// Everything the engine stores for one entity.
///
/// Every entity has a tag. The other capabilities are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    pub tag: TagData,
    pub transform: Option<Transform>,
    pub sprite_renderer: Option<SpriteRendererData>,
    pub camera: Option<CameraData>,
    pub text: Option<TextData>,
}

impl EntityRecord {
    /// A record with a tag and an identity transform.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tag: TagData { tag: name.into() },
            transform: Some(Transform::IDENTITY),
            sprite_renderer: None,
            camera: None,
            text: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.tag.tag
    }

    #[must_use]
    pub fn has(&self, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::Tag => true,
            CapabilityKind::Transform => self.transform.is_some(),
            CapabilityKind::SpriteRenderer => self.sprite_renderer.is_some(),
            CapabilityKind::Camera => self.camera.is_some(),
            CapabilityKind::Text => self.text.is_some(),
        }
    }

    /// Add `kind` with its default data. Returns `false` if it was already
    /// present, leaving the existing data untouched.
    pub fn add(&mut self, kind: CapabilityKind) -> bool {
        if self.has(kind) {
            return false;
        }
        match kind {
            CapabilityKind::Tag => {}
            CapabilityKind::Transform => self.transform = Some(Transform::IDENTITY),
            CapabilityKind::SpriteRenderer => {
                self.sprite_renderer = Some(SpriteRendererData::default());
            }
            CapabilityKind::Camera => self.camera = Some(CameraData::default()),
            CapabilityKind::Text => self.text = Some(TextData::default()),
        }
        true
    }

    /// Present capabilities in declaration order.
    #[must_use]
    pub fn capabilities(&self) -> Vec<CapabilityKind> {
        CapabilityKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.has(*kind))
            .collect()
    }
}
