//! Audio graph error types.
//!
//! A module without an update routine is not an error: its exported
//! callback is simply null.

use crate::module::ModuleId;

/// Errors raised while building or configuring an audio session.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    /// No constructor is registered under this type name.
    #[error("unknown module type: {0}")]
    UnknownModuleType(String),

    #[error("no module with id {0}")]
    UnknownModule(ModuleId),

    #[error("module {module} has no field named {field:?}")]
    UnknownField { module: ModuleId, field: String },

    /// The field exists but is not a Control.
    #[error("field {field:?} of module {module} is not a control")]
    NotAControl { module: ModuleId, field: String },

    /// A connection must run from an Output field to an Input field.
    #[error("field {field:?} of module {module} cannot be used as an {expected}")]
    FieldRole {
        module: ModuleId,
        field: String,
        expected: &'static str,
    },

    /// Wiring would make the graph cyclic.
    #[error("connection would create a cycle through module {0}")]
    Cycle(ModuleId),

    /// Wiring is fixed once the session has started ticking.
    #[error("graph is sealed after the first tick")]
    GraphSealed,
}
