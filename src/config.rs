//! Configuration for NanoDB
//!
//! Centralized configuration with sensible defaults.

use crate::protocol::IdMode;
use crate::row::FieldPolicy;

/// Default prompt printed before every read
pub const DEFAULT_PROMPT: &str = "NanoDB> ";

/// Configuration for the command loop
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Interface Configuration
    // -------------------------------------------------------------------------
    /// Prompt written (and flushed) before each line is read
    pub prompt: String,

    // -------------------------------------------------------------------------
    // Row Configuration
    // -------------------------------------------------------------------------
    /// What to do with text fields longer than their bound
    pub field_policy: FieldPolicy,

    /// How ids that are not clean integers are treated
    pub id_mode: IdMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            field_policy: FieldPolicy::Preserve,
            id_mode: IdMode::Permissive,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the prompt string
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Set the field length policy
    pub fn field_policy(mut self, policy: FieldPolicy) -> Self {
        self.config.field_policy = policy;
        self
    }

    /// Set the id conversion mode
    pub fn id_mode(mut self, mode: IdMode) -> Self {
        self.config.id_mode = mode;
        self
    }

    /// Shorthand for `id_mode(IdMode::Strict)` when `strict` is true
    pub fn strict_ids(self, strict: bool) -> Self {
        let mode = if strict {
            IdMode::Strict
        } else {
            IdMode::Permissive
        };
        self.id_mode(mode)
    }

    pub fn build(self) -> Config {
        self.config
    }
}
