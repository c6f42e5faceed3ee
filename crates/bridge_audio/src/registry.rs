//! Module registry: type names to constructors.

use std::collections::HashMap;

use crate::module::{Module, ModuleContext};
use crate::modules::{ConstantModule, OutputModule, SineOscillatorModule};

/// Builds a module of one type.
pub type ModuleConstructor = fn(ModuleContext) -> Box<dyn Module>;

/// Registry of module types that a session can instantiate by name.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    constructors: HashMap<&'static str, ModuleConstructor>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// A registry with every built-in module type.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(SineOscillatorModule::TYPE_NAME, |ctx| {
            Box::new(SineOscillatorModule::new(ctx))
        });
        registry.register(OutputModule::TYPE_NAME, |ctx| Box::new(OutputModule::new(ctx)));
        registry.register(ConstantModule::TYPE_NAME, |ctx| {
            Box::new(ConstantModule::new(ctx))
        });
        registry
    }

    /// Register a constructor. Returns `true` if it replaced an existing one.
    pub fn register(&mut self, type_name: &'static str, constructor: ModuleConstructor) -> bool {
        self.constructors.insert(type_name, constructor).is_some()
    }

    /// Construct a module of `type_name`, or `None` if it is not registered.
    #[must_use]
    pub fn create(&self, type_name: &str, ctx: ModuleContext) -> Option<Box<dyn Module>> {
        self.constructors
            .get(type_name)
            .map(|constructor| constructor(ctx))
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Registered type names, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.constructors.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
