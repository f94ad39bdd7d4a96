//! Trait seams of the claim-checking pipeline.
//!
//! - `ClaimExtractor`   turns raw text into a `StructuredClaim`
//! - `DomainClassifier` labels the claim with a domain and confidence
//! - `Oracle`           a domain-specific verification procedure
//!
//! The router and aggregator depend only on these traits, so a stub oracle
//! can be replaced by a real implementation without touching either.

use groundzero_contracts::{
    claim::{DomainClassification, StructuredClaim},
    verdict::OracleCallResult,
};

/// A verification procedure for one domain.
///
/// # Contract
///
/// `evaluate` never fails. When a claim cannot be evaluated (no data, no
/// ticker, unresolvable date) the implementation returns
/// `OracleCallResult::unsupported` with confidence 0 and a `reason`.
/// A panic inside `evaluate` is a programming error and is not caught.
///
/// Implementations are shared across concurrent checks and must not keep
/// per-claim mutable state.
pub trait Oracle: Send + Sync {
    /// Identifier written into every result this procedure produces.
    ///
    /// Must be unique among the procedures registered with one router.
    fn name(&self) -> &str;

    /// Judge `claim` and return a fully-populated result.
    fn evaluate(&self, claim: &StructuredClaim) -> OracleCallResult;
}

/// Pulls tickers, percentages, date hints and the event type out of text.
pub trait ClaimExtractor: Send + Sync {
    fn extract(&self, text: &str) -> StructuredClaim;
}

/// Assigns a domain label and a confidence in [0, 1].
pub trait DomainClassifier: Send + Sync {
    fn classify(&self, text: &str, claim: &StructuredClaim) -> DomainClassification;
}
