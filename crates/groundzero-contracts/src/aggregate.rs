//! The final, externally visible result of checking one claim.
//!
//! `AggregateResult` is what the aggregator produces. `CheckReport` wraps it
//! with an identity and timestamp so each verdict can be traced in logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    claim::{DomainClassification, StructuredClaim},
    routing::RoutingDecision,
    verdict::{OracleCallResult, Verdict},
};

/// The combined verdict for one claim.
///
/// `oracle_calls` preserves call order: the primary procedure first, the
/// fallback second when it ran. Its length is always 1 or 2 when produced
/// by the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub final_verdict: Verdict,
    /// Always within [0, 1].
    pub final_confidence: f64,
    pub oracle_calls: Vec<OracleCallResult>,
    pub routing: RoutingDecision,
    pub domain: DomainClassification,
    pub claim: StructuredClaim,
}

/// Unique identifier for one `check` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(pub uuid::Uuid);

impl CheckId {
    /// Create a new, unique check ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of the `check` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub check_id: CheckId,
    /// Wall-clock time the check completed (UTC).
    pub checked_at: DateTime<Utc>,
    pub result: AggregateResult,
}
