//! # groundzero-contracts
//!
//! Shared types and error contracts for the GroundZero claim checker.
//!
//! Every crate in the workspace imports from here. No business logic lives in
//! this crate: only data definitions, constructors, and the error type.

pub mod aggregate;
pub mod claim;
pub mod error;
pub mod market;
pub mod routing;
pub mod verdict;

#[cfg(test)]
mod tests {
    use super::*;
    use aggregate::CheckId;
    use claim::{DomainClassification, StructuredClaim};
    use error::GroundZeroError;
    use routing::Domain;
    use verdict::{EvidenceItem, OracleCallResult, Stance, Verdict};

    // ── Verdict ──────────────────────────────────────────────────────────────

    #[test]
    fn verdict_serializes_as_snake_case() {
        let json = serde_json::to_string(&Verdict::LikelyFalse).unwrap();
        assert_eq!(json, "\"likely_false\"");

        let decoded: Verdict = serde_json::from_str("\"unsupported\"").unwrap();
        assert_eq!(decoded, Verdict::Unsupported);
    }

    #[test]
    fn verdict_inconclusive_covers_uncertain_and_unsupported() {
        assert!(Verdict::Uncertain.is_inconclusive());
        assert!(Verdict::Unsupported.is_inconclusive());
        assert!(!Verdict::LikelyTrue.is_inconclusive());
        assert!(!Verdict::LikelyFalse.is_inconclusive());
    }

    #[test]
    fn verdict_display_matches_wire_label() {
        assert_eq!(Verdict::LikelyTrue.to_string(), "likely_true");
        assert_eq!(Verdict::Uncertain.to_string(), "uncertain");
    }

    // ── OracleCallResult ─────────────────────────────────────────────────────

    #[test]
    fn call_result_clamps_confidence() {
        assert_eq!(OracleCallResult::new("x", Verdict::LikelyTrue, 1.7).confidence(), 1.0);
        assert_eq!(OracleCallResult::new("x", Verdict::LikelyTrue, -0.2).confidence(), 0.0);
        assert_eq!(OracleCallResult::new("x", Verdict::LikelyTrue, f64::NAN).confidence(), 0.0);
    }

    #[test]
    fn unsupported_result_has_zero_confidence_and_reason() {
        let result = OracleCallResult::unsupported("finance", "No cached price data for SOL");

        assert_eq!(result.verdict(), Verdict::Unsupported);
        assert_eq!(result.confidence(), 0.0);
        assert!(result.evidence().is_empty());
        assert_eq!(result.reason(), Some("No cached price data for SOL"));
    }

    #[test]
    fn call_result_preserves_evidence_order() {
        let result = OracleCallResult::new("finance", Verdict::LikelyTrue, 0.8)
            .with_evidence([
                EvidenceItem::metric("price_cache", "baseline_price", 100.0),
                EvidenceItem::metric("price_cache", "post_price", 108.0),
            ])
            .with_evidence([EvidenceItem::document("Wire", "ETF approved")
                .with_stance(Stance::Supports)]);

        let titles: Vec<&str> = result.evidence().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["baseline_price", "post_price", "ETF approved"]);
    }

    #[test]
    fn call_result_round_trips_through_json() {
        let original = OracleCallResult::new("finance", Verdict::LikelyTrue, 0.91)
            .with_evidence([EvidenceItem::metric("price_cache", "actual_pct", 7.99)])
            .with_context("ticker", "SOL")
            .with_context("abnormal_volume", true);

        let json = serde_json::to_string(&original).unwrap();
        let decoded: OracleCallResult = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── Claim types ──────────────────────────────────────────────────────────

    #[test]
    fn structured_claim_first_ticker_and_percentage() {
        let claim = StructuredClaim {
            tickers: vec!["SOL".to_string(), "ETH".to_string()],
            percentages: vec![8.0, 3.0],
            ..StructuredClaim::from_raw("SOL jumped 8% and ETH 3%")
        };

        assert_eq!(claim.primary_ticker(), Some("SOL"));
        assert_eq!(claim.claimed_percentage(), Some(8.0));
        assert_eq!(StructuredClaim::from_raw("x").primary_ticker(), None);
    }

    #[test]
    fn domain_classification_clamps_confidence() {
        assert_eq!(DomainClassification::new("finance", 1.4).confidence, 1.0);
        assert_eq!(DomainClassification::new("finance", -1.0).confidence, 0.0);
    }

    #[test]
    fn structured_claim_deserializes_with_missing_sequences() {
        let claim: StructuredClaim = serde_json::from_str(r#"{ "raw": "hello" }"#).unwrap();
        assert_eq!(claim.raw, "hello");
        assert!(claim.tickers.is_empty());
        assert!(claim.date_hint.is_none());
    }

    // ── Domain ───────────────────────────────────────────────────────────────

    #[test]
    fn domain_from_label_degrades_unknown_to_general() {
        assert_eq!(Domain::from_label("finance"), Domain::Finance);
        assert_eq!(Domain::from_label("TECH_RELEASE"), Domain::TechRelease);
        assert_eq!(Domain::from_label("general"), Domain::General);
        assert_eq!(Domain::from_label("sports"), Domain::General);
        assert_eq!(Domain::from_label(""), Domain::General);
    }

    // ── CheckId ──────────────────────────────────────────────────────────────

    #[test]
    fn check_id_new_produces_unique_values() {
        let unique: std::collections::HashSet<CheckId> = (0..100).map(|_| CheckId::new()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── GroundZeroError display messages ─────────────────────────────────────

    #[test]
    fn error_empty_claim_display() {
        assert_eq!(GroundZeroError::EmptyClaim.to_string(), "claim text must not be empty");
    }

    #[test]
    fn error_config_display() {
        let err = GroundZeroError::ConfigError {
            reason: "fallback_threshold out of range".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("fallback_threshold"));
    }

    #[test]
    fn error_invalid_bar_series_display() {
        let err = GroundZeroError::InvalidBarSeries {
            ticker: "SOL".to_string(),
            reason: "non-finite close".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SOL"));
        assert!(msg.contains("non-finite close"));
    }

    #[test]
    fn error_look_ahead_display() {
        let err = GroundZeroError::LookAheadRejected {
            reason: "nearest-bar lookup".to_string(),
        };
        assert!(err.to_string().contains("look-ahead guard"));
    }

    #[test]
    fn error_duplicate_oracle_display() {
        let err = GroundZeroError::DuplicateOracleName {
            name: "generalist".to_string(),
        };
        assert!(err.to_string().contains("'generalist'"));
    }
}
