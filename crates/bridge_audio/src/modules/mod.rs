//! Built-in module types.

pub mod constant;
pub mod output;
pub mod sine;

pub use constant::ConstantModule;
pub use output::OutputModule;
pub use sine::SineOscillatorModule;
