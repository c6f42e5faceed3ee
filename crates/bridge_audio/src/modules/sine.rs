//! Reference oscillator: a sine and a square wave from one phase counter.

use std::f32::consts::PI;

use crate::field::{ControlKind, FieldDecl};
use crate::host::AudioProperties;
use crate::module::{Module, ModuleContext, ModuleId, Tickable};
use crate::modules::output::OutputModule;

const FIELDS: &[FieldDecl] = &[
    FieldDecl::control("frequency", ControlKind::Slider),
    FieldDecl::output("sine"),
    FieldDecl::output("square"),
];

/// Default oscillator frequency in Hz.
pub const DEFAULT_FREQUENCY: f32 = 440.0;

/// Generates `0.5·sin(θ)` and a ±0.5 square wave, with `θ = 2π·n·f / r`.
///
/// `n` is a wrapping sample counter, `f` the `frequency` control and `r` the
/// host sample rate, queried on every tick. Each tick also forwards the sine
/// sample to both channels of an owned [`OutputModule`] and runs it.
pub struct SineOscillatorModule {
    id: ModuleId,
    properties: AudioProperties,
    phase: u32,
    output: OutputModule,
    pub frequency: f32,
    sine: f32,
    square: f32,
}

impl SineOscillatorModule {
    pub const TYPE_NAME: &'static str = "SineOscillatorModule";

    #[must_use]
    pub fn new(ctx: ModuleContext) -> Self {
        Self {
            id: ctx.id,
            properties: ctx.properties(),
            phase: 0,
            output: OutputModule::new(ctx),
            frequency: DEFAULT_FREQUENCY,
            sine: 0.0,
            square: 0.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn set_phase(&mut self, phase: u32) {
        self.phase = phase;
    }

    /// Most recent sine sample.
    #[must_use]
    pub fn sine(&self) -> f32 {
        self.sine
    }

    /// Most recent square sample.
    #[must_use]
    pub fn square(&self) -> f32 {
        self.square
    }

    #[must_use]
    pub fn output(&self) -> &OutputModule {
        &self.output
    }

    fn angle(&self) -> f32 {
        let sample_rate = self.properties.sample_rate();
        if sample_rate == 0 {
            return 0.0;
        }
        (2.0 * PI * self.phase as f32 * self.frequency) / sample_rate as f32
    }
}

impl Module for SineOscillatorModule {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn fields(&self) -> &'static [FieldDecl] {
        FIELDS
    }

    fn field(&self, name: &str) -> Option<f32> {
        match name {
            "frequency" => Some(self.frequency),
            "sine" => Some(self.sine),
            "square" => Some(self.square),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: f32) -> bool {
        match name {
            "frequency" => self.frequency = value,
            "sine" => self.sine = value,
            "square" => self.square = value,
            _ => return false,
        }
        true
    }

    fn as_tickable(&mut self) -> Option<&mut (dyn Tickable + 'static)> {
        Some(self)
    }
}

impl Tickable for SineOscillatorModule {
    fn on_update(&mut self) {
        let sin = self.angle().sin();
        self.sine = 0.5 * sin;
        self.square = 0.5 * (sin.floor() * 2.0 + 1.0);

        self.phase = self.phase.wrapping_add(1);

        self.output.left_channel = self.sine;
        self.output.right_channel = self.sine;
        self.output.on_update();
    }
}
