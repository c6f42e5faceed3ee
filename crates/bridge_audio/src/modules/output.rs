//! The sink that forwards a stereo frame to the host.

use std::sync::Arc;

use crate::field::FieldDecl;
use crate::host::AudioHost;
use crate::module::{Module, ModuleContext, ModuleId, Tickable};

const FIELDS: &[FieldDecl] = &[
    FieldDecl::input("left_channel"),
    FieldDecl::input("right_channel"),
];

/// Writes its two input channels to the host once per tick.
pub struct OutputModule {
    id: ModuleId,
    host: Arc<dyn AudioHost>,
    pub left_channel: f32,
    pub right_channel: f32,
}

impl OutputModule {
    pub const TYPE_NAME: &'static str = "OutputModule";

    #[must_use]
    pub fn new(ctx: ModuleContext) -> Self {
        Self {
            id: ctx.id,
            host: ctx.host,
            left_channel: 0.0,
            right_channel: 0.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }
}

impl Module for OutputModule {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn fields(&self) -> &'static [FieldDecl] {
        FIELDS
    }

    fn field(&self, name: &str) -> Option<f32> {
        match name {
            "left_channel" => Some(self.left_channel),
            "right_channel" => Some(self.right_channel),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: f32) -> bool {
        match name {
            "left_channel" => self.left_channel = value,
            "right_channel" => self.right_channel = value,
            _ => return false,
        }
        true
    }

    fn as_tickable(&mut self) -> Option<&mut (dyn Tickable + 'static)> {
        Some(self)
    }
}

impl Tickable for OutputModule {
    fn on_update(&mut self) {
        self.host.write_output(self.left_channel, self.right_channel);
    }
}
