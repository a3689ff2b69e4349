//! Resolver configuration.
//!
//! ```rust
//! use signal_layers::{Presence, ResolverConfig};
//!
//! let config = ResolverConfig::from_json_str(r#"{"presence": "defined"}"#).unwrap();
//! assert_eq!(config.presence, Presence::Defined);
//! assert!(!config.consume_signals);
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::Prop;

// =============================================================================
// Presence
// =============================================================================

/// When a prop counts as present for pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Presence {
    /// Forward only truthy values. `0`, `""` and `false` are dropped.
    #[default]
    Truthy,
    /// Forward any value that is not `Null`.
    Defined,
}

impl Presence {
    /// Whether `value` passes this policy.
    pub fn admits(self, value: &Prop) -> bool {
        match self {
            Self::Truthy => value.is_truthy(),
            Self::Defined => value.is_defined(),
        }
    }
}

// =============================================================================
// ResolverConfig
// =============================================================================

/// Options for a [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Default presence policy for [`Resolver::data`](crate::Resolver::data).
    pub presence: Presence,
    /// Remove a signal from the working props once it has triggered a
    /// layer write or been forwarded.
    pub consume_signals: bool,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    pub fn consume_signals(mut self, consume: bool) -> Self {
        self.consume_signals = consume;
        self
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}
