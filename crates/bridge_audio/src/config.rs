//! Audio session configuration.

/// Configuration for an [`AudioSession`](crate::AudioSession).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Human-readable session name, used in logs.
    pub name: String,
    /// Stop after this many sample ticks. `0` runs until stopped.
    pub max_samples: u64,
}

impl SessionConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_samples: 0,
        }
    }

    /// Bound the session to `max_samples` ticks.
    #[must_use]
    pub fn with_max_samples(mut self, max_samples: u64) -> Self {
        self.max_samples = max_samples;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new("audio")
    }
}
