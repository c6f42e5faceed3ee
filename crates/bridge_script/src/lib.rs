//! # bridge_script
//!
//! The script side of the script/host boundary.
//!
//! Scripts never own engine data. They hold an [`Entity`] handle and reach
//! the engine through an [`EngineHost`] implementation; every getter and
//! setter on a proxy is exactly one host call.
//!
//! - [`EntityProxy`] wraps a handle with name, transform, capability and
//!   behaviour lookups.
//! - Component proxies ([`TagComponent`], [`TransformComponent`],
//!   [`SpriteRendererComponent`], [`CameraComponent`], [`TextComponent`])
//!   expose typed field access for one capability.
//! - [`ScriptRuntime`] runs attached [`Behaviour`]s once per frame.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bridge_script::{Behaviour, ScriptContext, TransformComponent};
//! use bridge_math::Vector3;
//!
//! struct Spin;
//!
//! impl Behaviour for Spin {
//!     fn on_update(&mut self, ctx: &mut ScriptContext<'_, Self>, ts: f32) {
//!         if let Some(transform) = ctx.entity().get_component::<TransformComponent>() {
//!             transform.set_rotation(transform.rotation() + Vector3::new(0.0, 0.0, ts));
//!         }
//!     }
//! }
//! ```

pub mod behaviour;
pub mod components;
pub mod config;
pub mod entity;
pub mod error;
pub mod host;
pub mod input;
pub mod log;
pub mod runtime;

#[cfg(test)]
mod testing;

pub use behaviour::{Behaviour, BehaviourRegistry, Downcast};
pub use bridge_component::Entity;
pub use components::{
    CameraComponent, ComponentProxy, SpriteRendererComponent, TagComponent, TextComponent,
    TransformComponent,
};
pub use config::ScriptConfig;
pub use entity::{EntityProxy, find_entity_by_name};
pub use error::ScriptError;
pub use host::{EngineHost, KeyCode, LogLevel, MouseButton};
pub use input::Input;
pub use log::Log;
pub use runtime::{ScriptContext, ScriptRuntime};
