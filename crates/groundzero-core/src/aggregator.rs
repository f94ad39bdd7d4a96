//! Deterministic verdict aggregation.
//!
//! Verdict (first match wins, caution first):
//!
//! 1. any `likely_false`  → `likely_false`
//! 2. any `likely_true`   → `likely_true`
//! 3. otherwise           → `uncertain` (`unsupported` counts as `uncertain`)
//!
//! Confidence:
//!
//! - conflict (both polarities present) → minimum over *all* results
//! - support (one polarity present)     → mean over results of that polarity
//! - inconclusive (neither present)     → `inconclusive_confidence` (0.3)

use serde::{Deserialize, Serialize};

use groundzero_contracts::{
    aggregate::AggregateResult,
    claim::{clamp_unit, DomainClassification, StructuredClaim},
    routing::RoutingDecision,
    verdict::{OracleCallResult, Verdict},
};

/// Confidence reported when no procedure reached a decisive verdict.
pub const DEFAULT_INCONCLUSIVE_CONFIDENCE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Fixed confidence for an all-inconclusive result set.
    pub inconclusive_confidence: f64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            inconclusive_confidence: DEFAULT_INCONCLUSIVE_CONFIDENCE,
        }
    }
}

/// Which confidence rule produced the final confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationBasis {
    Conflict,
    Support,
    Inconclusive,
}

/// The verdict and confidence computed from a result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregation {
    pub verdict: Verdict,
    pub confidence: f64,
    pub basis: AggregationBasis,
}

/// Pure combiner of procedure results.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Combine `calls` into one verdict and confidence.
    ///
    /// An empty slice is treated as all-inconclusive.
    pub fn aggregate(&self, calls: &[OracleCallResult]) -> Aggregation {
        let has_false = calls.iter().any(|c| c.verdict() == Verdict::LikelyFalse);
        let has_true = calls.iter().any(|c| c.verdict() == Verdict::LikelyTrue);

        let verdict = if has_false {
            Verdict::LikelyFalse
        } else if has_true {
            Verdict::LikelyTrue
        } else {
            return Aggregation {
                verdict: Verdict::Uncertain,
                confidence: clamp_unit(self.config.inconclusive_confidence),
                basis: AggregationBasis::Inconclusive,
            };
        };

        if has_false && has_true {
            let confidence = calls
                .iter()
                .map(OracleCallResult::confidence)
                .fold(f64::INFINITY, f64::min);
            return Aggregation {
                verdict,
                confidence: clamp_unit(confidence),
                basis: AggregationBasis::Conflict,
            };
        }

        let supporting: Vec<f64> = calls
            .iter()
            .filter(|c| c.verdict() == verdict)
            .map(OracleCallResult::confidence)
            .collect();
        let mean = supporting.iter().sum::<f64>() / supporting.len() as f64;

        Aggregation {
            verdict,
            confidence: clamp_unit(mean),
            basis: AggregationBasis::Support,
        }
    }

    /// Aggregate `calls` and assemble the externally visible result.
    pub fn finalize(
        &self,
        calls: Vec<OracleCallResult>,
        routing: RoutingDecision,
        domain: DomainClassification,
        claim: StructuredClaim,
    ) -> AggregateResult {
        let Aggregation {
            verdict,
            confidence,
            ..
        } = self.aggregate(&calls);

        AggregateResult {
            final_verdict: verdict,
            final_confidence: confidence,
            oracle_calls: calls,
            routing,
            domain,
            claim,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
