//! Fixed-response verification procedures.
//!
//! The generalist and tech-release procedures are not implemented yet. They
//! answer every claim with `uncertain` at a fixed confidence so the router
//! and aggregator are exercised end-to-end.

use groundzero_contracts::{
    claim::StructuredClaim,
    verdict::{OracleCallResult, Verdict},
};

use crate::traits::Oracle;

/// Name of the generalist fallback procedure.
pub const GENERALIST_ORACLE: &str = "generalist";

/// Name of the technology-release procedure.
pub const TECH_RELEASE_ORACLE: &str = "tech_release";

/// Confidence reported by every fixed-response procedure.
pub const STUB_CONFIDENCE: f64 = 0.3;

/// An `Oracle` that always returns the same verdict.
#[derive(Debug, Clone)]
pub struct FixedResponseOracle {
    name: String,
    verdict: Verdict,
    confidence: f64,
    reason: String,
}

impl FixedResponseOracle {
    pub fn new(
        name: impl Into<String>,
        verdict: Verdict,
        confidence: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            verdict,
            confidence,
            reason: reason.into(),
        }
    }

    /// The generalist fallback: `uncertain` at 0.3.
    pub fn generalist() -> Self {
        Self::new(
            GENERALIST_ORACLE,
            Verdict::Uncertain,
            STUB_CONFIDENCE,
            "Generalist oracle not yet implemented",
        )
    }

    /// The technology-release procedure: `uncertain` at 0.3.
    pub fn tech_release() -> Self {
        Self::new(
            TECH_RELEASE_ORACLE,
            Verdict::Uncertain,
            STUB_CONFIDENCE,
            "Tech release oracle not yet implemented",
        )
    }
}

impl Oracle for FixedResponseOracle {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, _claim: &StructuredClaim) -> OracleCallResult {
        OracleCallResult::new(self.name.as_str(), self.verdict, self.confidence)
            .with_context("reason", self.reason.as_str())
    }
}

#[cfg(test)]
mod tests {
    use groundzero_contracts::{claim::StructuredClaim, verdict::Verdict};

    use super::*;

    #[test]
    fn generalist_is_uncertain_with_fixed_confidence() {
        let result = FixedResponseOracle::generalist().evaluate(&StructuredClaim::from_raw("x"));

        assert_eq!(result.oracle_name(), GENERALIST_ORACLE);
        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert_eq!(result.confidence(), STUB_CONFIDENCE);
        assert!(result.evidence().is_empty());
        assert!(result.reason().unwrap().contains("not yet implemented"));
    }

    #[test]
    fn tech_release_ignores_claim_content() {
        let oracle = FixedResponseOracle::tech_release();
        let a = oracle.evaluate(&StructuredClaim::from_raw("Apple announced a phone"));
        let b = oracle.evaluate(&StructuredClaim::from_raw("Meta launched glasses"));

        assert_eq!(a, b);
        assert_eq!(a.oracle_name(), TECH_RELEASE_ORACLE);
    }
}
