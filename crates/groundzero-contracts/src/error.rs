//! Error types for the GroundZero claim-checking pipeline.
//!
//! Only boundary and configuration failures are errors. A verification
//! procedure that cannot decide a claim returns an `unsupported` verdict
//! instead, so none of these variants ever cross the Router or Aggregator.

use thiserror::Error;

/// The unified error type for GroundZero.
#[derive(Debug, Error)]
pub enum GroundZeroError {
    /// The caller supplied empty (or whitespace-only) claim text.
    ///
    /// Rejected before extraction, classification, or routing run.
    #[error("claim text must not be empty")]
    EmptyClaim,

    /// Caller-supplied structured input (a parsed claim document) could not
    /// be read or decoded.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A configuration value is missing, malformed, or out of range.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A market-data cache file could not be read or parsed.
    #[error("market data load failed: {reason}")]
    DataLoad { reason: String },

    /// A bar series violates its invariants (ordering, finite values).
    #[error("invalid bar series for '{ticker}': {reason}")]
    InvalidBarSeries { ticker: String, reason: String },

    /// A bar lookup was requested without the forward-only direction.
    ///
    /// Snapping to a bar before the event would leak information that was
    /// not available at claim time.
    #[error("look-ahead guard rejected bar lookup: {reason}")]
    LookAheadRejected { reason: String },

    /// Two verification procedures were registered under the same name.
    #[error("oracle name '{name}' is registered more than once")]
    DuplicateOracleName { name: String },

    /// A result could not be serialized for output.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

/// Convenience alias used throughout the GroundZero crates.
pub type GroundZeroResult<T> = Result<T, GroundZeroError>;
