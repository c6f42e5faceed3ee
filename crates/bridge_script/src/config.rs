//! Script layer configuration.

/// Environment variable that turns on handle validation.
pub const VALIDATE_HANDLES_ENV: &str = "BRIDGE_VALIDATE_HANDLES";

/// Configuration for the script layer.
#[derive(Debug, Clone, Default)]
pub struct ScriptConfig {
    /// Check that an entity is alive when a proxy is bound to it.
    ///
    /// The check is made once per proxy construction (component lookup, name
    /// lookup, checked bind). Getter and setter calls never check.
    pub validate_handles: bool,
}

impl ScriptConfig {
    /// Create a config with validation off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from the environment. `BRIDGE_VALIDATE_HANDLES=1` (or
    /// `true`) enables handle validation.
    #[must_use]
    pub fn from_env() -> Self {
        let validate_handles = std::env::var(VALIDATE_HANDLES_ENV)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        Self { validate_handles }
    }

    /// Override handle validation.
    #[must_use]
    pub fn with_validate_handles(mut self, validate: bool) -> Self {
        self.validate_handles = validate;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
