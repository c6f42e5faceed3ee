//! # bridge_audio
//!
//! The audio module graph and its host-callable update callbacks.
//!
//! Each module type declares Input, Output and Control fields. A module that
//! does per-sample work implements [`Tickable`]; instantiating it in an
//! [`AudioSession`] exports that routine as an [`ExportedCallback`], a C-ABI
//! trampoline plus context pointer the host audio engine can store and call
//! once per sample. Modules without an update routine export a null callback.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bridge_audio::{AudioSession, ModuleRegistry, RecordingOutput, SessionConfig};
//!
//! let output = Arc::new(RecordingOutput::new(44_100, 2));
//! let mut session = AudioSession::new(
//!     SessionConfig::new("demo").with_max_samples(64),
//!     output.clone(),
//!     ModuleRegistry::with_builtin(),
//! );
//! let sine = session.instantiate("SineOscillatorModule").unwrap();
//! session.set_control(sine, "frequency", 220.0).unwrap();
//! session.run();
//! assert_eq!(output.frames().len(), 64);
//! ```

pub mod callback;
pub mod config;
pub mod error;
pub mod field;
pub mod graph;
pub mod host;
pub mod module;
pub mod modules;
pub mod registry;
pub mod session;

pub use callback::{ExportedCallback, ModuleInstance, UpdateFn};
pub use config::SessionConfig;
pub use error::AudioError;
pub use field::{Control, ControlKind, FieldDecl, FieldRole};
pub use graph::{Connection, evaluation_order};
pub use host::{AudioHost, AudioProperties, Frame, RecordingOutput};
pub use module::{Module, ModuleContext, ModuleId, Tickable};
pub use modules::{ConstantModule, OutputModule, SineOscillatorModule};
pub use registry::{ModuleConstructor, ModuleRegistry};
pub use session::AudioSession;
