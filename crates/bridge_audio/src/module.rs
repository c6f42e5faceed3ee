//! Module identity and the traits module types implement.

use std::fmt;
use std::sync::Arc;

use crate::field::{Control, FieldDecl, FieldRole};
use crate::host::{AudioHost, AudioProperties};

/// Identifies a module instance within one session.
///
/// A separate namespace from entity handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub u64);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Module({})", self.0)
    }
}

/// What a module receives at construction.
#[derive(Clone)]
pub struct ModuleContext {
    pub id: ModuleId,
    pub host: Arc<dyn AudioHost>,
}

impl ModuleContext {
    #[must_use]
    pub fn new(id: ModuleId, host: Arc<dyn AudioHost>) -> Self {
        Self { id, host }
    }

    #[must_use]
    pub fn properties(&self) -> AudioProperties {
        AudioProperties::new(self.host.clone())
    }
}

impl fmt::Debug for ModuleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleContext")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// The per-sample update routine of a module.
pub trait Tickable {
    fn on_update(&mut self);
}

/// An audio graph node.
///
/// Fields are addressed by their declared name. A module that does per-tick
/// work also implements [`Tickable`] and returns itself from
/// [`Module::as_tickable`]; the default is "no update routine".
pub trait Module: Send + 'static {
    fn type_name(&self) -> &'static str;

    fn fields(&self) -> &'static [FieldDecl];

    /// Current value of a declared field.
    fn field(&self, name: &str) -> Option<f32>;

    /// Write a declared field. Returns `false` for an unknown name.
    fn set_field(&mut self, name: &str, value: f32) -> bool;

    fn as_tickable(&mut self) -> Option<&mut (dyn Tickable + 'static)> {
        None
    }

    /// Snapshot of every Control field.
    fn controls(&self) -> Vec<Control> {
        self.fields()
            .iter()
            .filter_map(|decl| match decl.role {
                FieldRole::Control(kind) => Some(Control {
                    name: decl.name,
                    kind,
                    value: self.field(decl.name).unwrap_or_default(),
                }),
                _ => None,
            })
            .collect()
    }
}
