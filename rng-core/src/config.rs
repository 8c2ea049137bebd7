//! RNG configuration
//!
//! JSON-deserializable description of a generator: which counter source to
//! use, the seed, and whether the first word is drawn up front. Validation
//! happens before anything is built.

use serde::{Deserialize, Serialize};

use crate::rng::{RngError, RngManager, RngState, SplitMix64, WordSource, Xorshift64Star};

// ============================================================================
// Source Selection
// ============================================================================

/// Counter-derived sources selectable from config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Xorshift64Star,
    SplitMix64,
}

/// Word source chosen at runtime from a [`SourceKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredSource {
    Xorshift64Star(Xorshift64Star),
    SplitMix64(SplitMix64),
}

impl ConfiguredSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            ConfiguredSource::Xorshift64Star(_) => SourceKind::Xorshift64Star,
            ConfiguredSource::SplitMix64(_) => SourceKind::SplitMix64,
        }
    }
}

impl From<SourceKind> for ConfiguredSource {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Xorshift64Star => ConfiguredSource::Xorshift64Star(Xorshift64Star),
            SourceKind::SplitMix64 => ConfiguredSource::SplitMix64(SplitMix64),
        }
    }
}

impl WordSource for ConfiguredSource {
    fn next_word(&mut self, cursor: u64) -> (u64, u64) {
        match self {
            ConfiguredSource::Xorshift64Star(source) => source.next_word(cursor),
            ConfiguredSource::SplitMix64(source) => source.next_word(cursor),
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Generator configuration
///
/// # Example
/// ```
/// use bitstream_rng::config::{RngConfig, SourceKind};
///
/// let config = RngConfig::from_json(r#"{ "seed": 42, "source": "splitmix64" }"#).unwrap();
/// assert_eq!(config.source, SourceKind::SplitMix64);
/// assert!(config.primed);
///
/// let mut rng = config.build().unwrap();
/// let _ = rng.next_u64();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngConfig {
    /// Seed for the word source (must be non-zero)
    pub seed: u64,

    /// Word source algorithm
    #[serde(default)]
    pub source: SourceKind,

    /// Draw the first word on construction so the seed is not emitted
    #[serde(default = "default_primed")]
    pub primed: bool,
}

fn default_primed() -> bool {
    true
}

impl RngConfig {
    pub fn new(seed: u64, source: SourceKind) -> Self {
        Self {
            seed,
            source,
            primed: default_primed(),
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        let config: RngConfig = serde_json::from_str(json)
            .map_err(|e| RngError::InvalidConfig(format!("Config parse failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), RngError> {
        if self.seed == 0 {
            return Err(RngError::InvalidConfig("seed must be > 0".to_string()));
        }
        Ok(())
    }

    /// Build the stateful generator described by this config
    pub fn build(&self) -> Result<RngManager<ConfiguredSource>, RngError> {
        self.validate()?;

        let mut source = ConfiguredSource::from(self.source);
        let state = if self.primed {
            RngState::primed(self.seed, &mut source)?
        } else {
            RngState::new(self.seed)?
        };

        Ok(RngManager::with_source(source, state))
    }
}
