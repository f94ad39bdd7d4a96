//! The claim-checking pipeline: the entry point behind `parse`, `route` and
//! `check`.
//!
//!   text → Extract → Classify → Route (primary, maybe fallback) → Aggregate
//!
//! `ClaimParser` covers the first two steps on its own, so parse-only callers
//! need no verification procedures or market data. Empty or whitespace-only
//! text is rejected before any collaborator runs. Neither type holds
//! per-claim state, so one instance can serve concurrent checks from several
//! threads.

use chrono::Utc;
use tracing::{debug, info, warn};

use groundzero_contracts::{
    aggregate::{CheckId, CheckReport},
    claim::{DomainClassification, ParsedClaim},
    error::{GroundZeroError, GroundZeroResult},
    routing::RoutedClaim,
};

use crate::{
    aggregator::Aggregator,
    router::Router,
    traits::{ClaimExtractor, DomainClassifier},
};

/// Reject empty or whitespace-only claim text.
pub fn ensure_claim_text(text: &str) -> GroundZeroResult<()> {
    if text.trim().is_empty() {
        warn!("rejected empty claim text");
        return Err(GroundZeroError::EmptyClaim);
    }
    Ok(())
}

/// Extraction and classification, without any verification.
pub struct ClaimParser {
    extractor: Box<dyn ClaimExtractor>,
    classifier: Box<dyn DomainClassifier>,
}

impl ClaimParser {
    pub fn new(extractor: Box<dyn ClaimExtractor>, classifier: Box<dyn DomainClassifier>) -> Self {
        Self {
            extractor,
            classifier,
        }
    }

    /// Extract and classify `text`.
    ///
    /// # Errors
    ///
    /// `GroundZeroError::EmptyClaim` if `text` is empty or whitespace-only.
    pub fn parse(&self, text: &str) -> GroundZeroResult<ParsedClaim> {
        ensure_claim_text(text)?;

        let claim = self.extractor.extract(text);
        debug!(
            tickers = ?claim.tickers,
            percentages = ?claim.percentages,
            date_hint = ?claim.date_hint,
            event_type = ?claim.event_type,
            "claim extracted"
        );

        let domain = self.classifier.classify(text, &claim);
        debug!(domain = %domain.domain, confidence = domain.confidence, "claim classified");
        Ok(ParsedClaim { claim, domain })
    }
}

pub struct ClaimPipeline {
    parser: ClaimParser,
    router: Router,
    aggregator: Aggregator,
}

impl ClaimPipeline {
    pub fn new(
        extractor: Box<dyn ClaimExtractor>,
        classifier: Box<dyn DomainClassifier>,
        router: Router,
        aggregator: Aggregator,
    ) -> Self {
        Self {
            parser: ClaimParser::new(extractor, classifier),
            router,
            aggregator,
        }
    }

    /// Extract and classify `text` without running any verification.
    pub fn parse(&self, text: &str) -> GroundZeroResult<ParsedClaim> {
        self.parser.parse(text)
    }

    /// Route an already-parsed claim and return every procedure result,
    /// without aggregating them.
    ///
    /// The claim and domain are taken as given, so hand-edited `parse`
    /// output is routed without re-running extraction or classification.
    /// The domain confidence is clamped into [0, 1] first.
    pub fn route(&self, parsed: &ParsedClaim) -> RoutedClaim {
        let domain = DomainClassification::new(parsed.domain.domain.as_str(), parsed.domain.confidence);
        let (routing, results) = self.router.route(&domain, &parsed.claim);
        RoutedClaim { results, routing }
    }

    /// Run the full pipeline on `text`.
    ///
    /// Verification procedures never fail, so the only error is the empty
    /// input rejection. Everything a procedure could not decide is reported
    /// as an `unsupported` or `uncertain` verdict inside the report.
    pub fn check(&self, text: &str) -> GroundZeroResult<CheckReport> {
        let check_id = CheckId::new();
        let ParsedClaim { claim, domain } = self.parse(text)?;

        let (routing, calls) = self.router.route(&domain, &claim);
        let result = self.aggregator.finalize(calls, routing, domain, claim);

        info!(
            check_id = %check_id.0,
            domain = %result.routing.domain,
            verdict = %result.final_verdict,
            confidence = result.final_confidence,
            fallback_used = result.routing.fallback_used,
            "claim checked"
        );

        Ok(CheckReport {
            check_id,
            checked_at: Utc::now(),
            result,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
