//! # bridge_component
//!
//! The data model shared by both sides of the script/host boundary.
//!
//! This crate provides:
//!
//! - [`Entity`]: opaque `u64` entity handles, `0` reserved as "no entity".
//! - [`EntityAllocator`]: never-reused handles and their [`HandleState`].
//! - [`CapabilityKind`]: the closed set of component capabilities a script
//!   can query or add, each with a stable [`ComponentTypeId`].
//! - Engine-owned component records ([`TagData`], [`SpriteRendererData`],
//!   [`CameraData`], [`TextData`]) that a host stores per entity.

pub mod component;
pub mod data;
pub mod entity;

pub use component::{CapabilityKind, ComponentTypeId};
pub use data::{CameraData, ProjectionType, SpriteRendererData, TagData, TextData};
pub use entity::{Entity, EntityAllocator, HandleState};
