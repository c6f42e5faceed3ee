//! A module that holds a single tunable value and does no per-tick work.

use crate::field::{ControlKind, FieldDecl};
use crate::module::{Module, ModuleContext};

const FIELDS: &[FieldDecl] = &[
    FieldDecl::control("value", ControlKind::Knob),
    FieldDecl::output("out"),
];

/// Exposes its `value` control on the `out` output. Exports a null callback.
#[derive(Debug, Default)]
pub struct ConstantModule {
    pub value: f32,
}

impl ConstantModule {
    pub const TYPE_NAME: &'static str = "ConstantModule";

    #[must_use]
    pub fn new(_ctx: ModuleContext) -> Self {
        Self::default()
    }
}

impl Module for ConstantModule {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn fields(&self) -> &'static [FieldDecl] {
        FIELDS
    }

    fn field(&self, name: &str) -> Option<f32> {
        match name {
            "value" | "out" => Some(self.value),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: f32) -> bool {
        if name != "value" {
            return false;
        }
        self.value = value;
        true
    }
}
