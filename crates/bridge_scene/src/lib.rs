//! # bridge_scene
//!
//! An in-memory engine that implements [`bridge_script::EngineHost`].
//!
//! It stores a tag, an optional transform and optional sprite, camera and
//! text components per entity, keeps polled input state, and routes script
//! log messages to `tracing` under the `script` target. Scenes can be built
//! in code or loaded from a JSON [`SceneDescription`].

pub mod description;
pub mod error;
pub mod input;
pub mod record;
pub mod scene;

pub use description::{EntityDescription, SceneDescription};
pub use error::SceneError;
pub use input::InputState;
pub use record::EntityRecord;
pub use scene::Scene;
