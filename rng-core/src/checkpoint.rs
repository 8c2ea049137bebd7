//! Checkpoint - Save/Load RNG State
//!
//! Serializes a generator's source kind and buffered state so a run can be
//! paused and resumed without changing the sequence it produces.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restoring a checkpoint and continuing yields exactly
//!   the draws the uninterrupted generator would have produced
//! - **Integrity**: the stored SHA-256 hash must match the stored state
//! - **Validity**: a restored state satisfies every `RngState` invariant

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::{ConfiguredSource, SourceKind};
use crate::rng::{RngError, RngManager, RngState};

/// Errors raised while saving or restoring a checkpoint
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("State hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("Invalid checkpoint state: {0}")]
    InvalidState(#[from] RngError),
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Snapshot of a configured generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RngCheckpoint {
    /// Word source algorithm
    pub source: SourceKind,

    /// Buffered state at time of snapshot (CRITICAL for determinism)
    pub state: RngState,

    /// SHA256 hash of the canonical source + state (for validation)
    pub state_hash: String,
}

impl RngCheckpoint {
    /// Capture the current source and state of `rng`
    pub fn capture(rng: &RngManager<ConfiguredSource>) -> Result<Self, CheckpointError> {
        let source = rng.source().kind();
        let state = rng.state();
        let state_hash = compute_state_hash(source, &state)?;

        Ok(Self {
            source,
            state,
            state_hash,
        })
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| {
            CheckpointError::Serialization(format!("Checkpoint serialization failed: {}", e))
        })
    }

    /// Deserialize from JSON and verify the state hash
    ///
    /// # Errors
    /// - [`CheckpointError::Serialization`] if the JSON is malformed
    /// - [`CheckpointError::InvalidState`] if the embedded state breaks an
    ///   `RngState` invariant (zero seed, more than 64 fresh bits)
    /// - [`CheckpointError::HashMismatch`] if the state was altered
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let raw: RawCheckpoint = serde_json::from_str(json).map_err(|e| {
            CheckpointError::Serialization(format!("Checkpoint parse failed: {}", e))
        })?;

        let checkpoint = Self {
            source: raw.source,
            state: RngState::from_parts(
                raw.state.seed,
                raw.state.buffer,
                raw.state.fresh_bits,
            )?,
            state_hash: raw.state_hash,
        };
        checkpoint.verify()?;
        Ok(checkpoint)
    }

    /// Check that the stored hash matches the stored state
    pub fn verify(&self) -> Result<(), CheckpointError> {
        let actual = compute_state_hash(self.source, &self.state)?;
        if actual != self.state_hash {
            return Err(CheckpointError::HashMismatch {
                expected: self.state_hash.clone(),
                actual,
            });
        }
        Ok(())
    }

    /// Rebuild the generator at the captured position
    pub fn restore(&self) -> RngManager<ConfiguredSource> {
        RngManager::with_source(ConfiguredSource::from(self.source), self.state)
    }
}

/// Checkpoint as written on disk, before the state is validated
#[derive(Deserialize)]
struct RawCheckpoint {
    source: SourceKind,
    state: RawState,
    state_hash: String,
}

#[derive(Deserialize)]
struct RawState {
    seed: u64,
    buffer: u64,
    fresh_bits: u32,
}

// ============================================================================
// State Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a source kind and state
///
/// Hashes the JSON of a `serde_json::Value`, whose object keys are kept
/// sorted, so field order never changes the hash.
pub fn compute_state_hash(source: SourceKind, state: &RngState) -> Result<String, CheckpointError> {
    let value = serde_json::json!({
        "source": source,
        "state": state,
    });

    let json = serde_json::to_string(&value).map_err(|e| {
        CheckpointError::Serialization(format!("State serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}
