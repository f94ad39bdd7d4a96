//! The price-movement verifier.
//!
//! `PriceMovementVerifier` implements the `Oracle` trait from
//! `groundzero-core`. Evaluation of one claim:
//!
//! 1. Take the first ticker and its cached bar series.
//! 2. Resolve the date hint into an event instant.
//! 3. Snap **forward** to the first bar at or after the event.
//! 4. Baseline = mean close of the `window_bars` bars before the snapped bar;
//!    post = mean close of the `window_bars` bars starting at it.
//! 5. Volume ratio = mean post volume over mean volume of the
//!    `volume_baseline_bars` bars before the snapped bar.
//! 6. Compare the actual move with the claimed percentage (`classify_move`).
//!
//! Any missing input yields `unsupported` with a `reason`; nothing here
//! returns an error.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use groundzero_contracts::{
    claim::StructuredClaim,
    market::{Bar, NewsItem},
    verdict::{EvidenceItem, OracleCallResult, Stance, Verdict},
};
use groundzero_core::traits::Oracle;

use crate::{
    bars::SnapDirection,
    cache::MarketCache,
    event_time::EventTimeResolver,
};

/// Name of the price-movement procedure.
pub const FINANCE_ORACLE: &str = "finance";

/// Source label on metric evidence.
pub const PRICE_CACHE_SOURCE: &str = "price_cache";

const NO_CLAIM_CONFIDENCE: f64 = 0.3;
const BORDERLINE_CONFIDENCE: f64 = 0.4;
const MAX_TRUE_CONFIDENCE: f64 = 0.98;
const MAX_FALSE_CONFIDENCE: f64 = 0.9;
const EXTRACT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceMovementConfig {
    /// Bars in each of the pre- and post-event windows.
    pub window_bars: usize,
    /// Bars before the event used as the volume baseline.
    pub volume_baseline_bars: usize,
    /// Volume ratio above which volume counts as abnormal.
    pub abnormal_volume_multiplier: f64,
    /// Largest |actual − claimed| (percentage points) still judged true.
    pub tolerance_pct: f64,
    /// Width of the uncertain band just past the tolerance.
    pub borderline_pct: f64,
    pub volume_confidence_boost: f64,
    pub max_news_evidence: usize,
}

impl Default for PriceMovementConfig {
    fn default() -> Self {
        Self {
            window_bars: 6,
            volume_baseline_bars: 78,
            abnormal_volume_multiplier: 2.0,
            tolerance_pct: 2.0,
            borderline_pct: 1.0,
            volume_confidence_boost: 0.05,
            max_news_evidence: 5,
        }
    }
}

/// Verdict and confidence for an actual move against a claimed one.
///
/// `actual` and `claimed` are signed percentages.
pub fn classify_move(
    actual: f64,
    claimed: Option<f64>,
    abnormal_volume: bool,
    config: &PriceMovementConfig,
) -> (Verdict, f64) {
    let Some(claimed) = claimed else {
        return (Verdict::Uncertain, NO_CLAIM_CONFIDENCE);
    };

    let tolerance = config.tolerance_pct;
    let mismatch = (actual - claimed).abs();
    let refuted = || {
        let excess = (mismatch - tolerance).max(0.0);
        (
            Verdict::LikelyFalse,
            (0.6 + 0.02 * excess).min(MAX_FALSE_CONFIDENCE),
        )
    };

    if actual * claimed < 0.0 {
        return refuted();
    }
    if mismatch <= tolerance {
        let mut confidence = 0.6 + 0.35 * (1.0 - mismatch / tolerance);
        if abnormal_volume {
            confidence += config.volume_confidence_boost;
        }
        return (Verdict::LikelyTrue, confidence.min(MAX_TRUE_CONFIDENCE));
    }
    if mismatch <= tolerance + config.borderline_pct {
        return (Verdict::Uncertain, BORDERLINE_CONFIDENCE);
    }
    refuted()
}

/// Numbers computed around one event.
#[derive(Debug, Clone, PartialEq)]
struct MoveMetrics {
    snapped_at: DateTime<Utc>,
    window_end: DateTime<Utc>,
    baseline_price: f64,
    post_price: f64,
    actual_pct: f64,
    volume_ratio: Option<f64>,
    abnormal_volume: bool,
}

pub struct PriceMovementVerifier {
    cache: Arc<MarketCache>,
    resolver: EventTimeResolver,
    config: PriceMovementConfig,
}

impl PriceMovementVerifier {
    pub fn new(
        cache: Arc<MarketCache>,
        resolver: EventTimeResolver,
        config: PriceMovementConfig,
    ) -> Self {
        Self {
            cache,
            resolver,
            config,
        }
    }

    fn unsupported(&self, reason: String) -> OracleCallResult {
        debug!(%reason, "price movement claim unsupported");
        OracleCallResult::unsupported(FINANCE_ORACLE, reason)
    }

    fn measure(&self, bars: &[Bar], snap: usize) -> Result<MoveMetrics, String> {
        let n = self.config.window_bars;
        if n == 0 || snap < n || snap + n > bars.len() {
            return Err(format!(
                "Insufficient bars around event: need {n} before and {n} from the event bar"
            ));
        }

        let pre = &bars[snap - n..snap];
        let post = &bars[snap..snap + n];
        let baseline_price = mean(pre.iter().map(|b| b.close));
        let post_price = mean(post.iter().map(|b| b.close));
        if baseline_price <= 0.0 {
            return Err("Baseline price is not positive".to_string());
        }

        let history = &bars[snap.saturating_sub(self.config.volume_baseline_bars)..snap];
        let history_volume = mean(history.iter().map(|b| b.volume));
        let post_volume = mean(post.iter().map(|b| b.volume));
        let volume_ratio = (history_volume > 0.0).then(|| post_volume / history_volume);
        let abnormal_volume =
            volume_ratio.is_some_and(|r| r > self.config.abnormal_volume_multiplier);

        Ok(MoveMetrics {
            snapped_at: bars[snap].timestamp,
            window_end: post[n - 1].timestamp,
            baseline_price,
            post_price,
            actual_pct: (post_price - baseline_price) / baseline_price * 100.0,
            volume_ratio,
            abnormal_volume,
        })
    }

    fn news_evidence(&self, ticker: &str, until: DateTime<Utc>, verdict: Verdict) -> Vec<EvidenceItem> {
        let stance = news_stance(verdict);
        self.cache
            .news(ticker)
            .iter()
            .filter(|item| item.timestamp.is_some_and(|t| t <= until))
            .take(self.config.max_news_evidence)
            .map(|item| news_item_evidence(item, stance))
            .collect()
    }
}

impl Oracle for PriceMovementVerifier {
    fn name(&self) -> &str {
        FINANCE_ORACLE
    }

    fn evaluate(&self, claim: &StructuredClaim) -> OracleCallResult {
        let Some(ticker) = claim.primary_ticker() else {
            return self.unsupported("No ticker identified in claim".to_string());
        };
        let Some(series) = self.cache.series(ticker) else {
            return self.unsupported(format!("No cached price data for {ticker}"));
        };
        let Some(hint) = claim.date_hint.as_deref() else {
            return self.unsupported(format!("No date hint to place the {ticker} event"));
        };
        let Some(event_at) = self.resolver.resolve(hint) else {
            return self.unsupported(format!("Could not resolve event time from '{hint}'"));
        };

        let snap = match series.snap(event_at, SnapDirection::Forward) {
            Ok(Some(idx)) => idx,
            Ok(None) => {
                return self.unsupported(format!("No {ticker} bar at or after {}", event_at.to_rfc3339()))
            }
            Err(e) => return self.unsupported(e.to_string()),
        };
        let metrics = match self.measure(series.bars(), snap) {
            Ok(m) => m,
            Err(reason) => return self.unsupported(reason),
        };

        let claimed = claim.claimed_percentage();
        let (verdict, confidence) =
            classify_move(metrics.actual_pct, claimed, metrics.abnormal_volume, &self.config);

        debug!(
            ticker,
            event_at = %event_at,
            snapped_at = %metrics.snapped_at,
            actual_pct = metrics.actual_pct,
            claimed_pct = ?claimed,
            volume_ratio = ?metrics.volume_ratio,
            %verdict,
            confidence,
            "price movement evaluated"
        );

        let mut evidence = vec![
            EvidenceItem::metric(PRICE_CACHE_SOURCE, "baseline_price", metrics.baseline_price),
            EvidenceItem::metric(PRICE_CACHE_SOURCE, "post_event_price", metrics.post_price),
            EvidenceItem::metric(PRICE_CACHE_SOURCE, "actual_change_pct", metrics.actual_pct),
        ];
        if let Some(c) = claimed {
            evidence.push(EvidenceItem::metric(PRICE_CACHE_SOURCE, "claimed_change_pct", c));
        }
        if let Some(r) = metrics.volume_ratio {
            evidence.push(EvidenceItem::metric(PRICE_CACHE_SOURCE, "volume_ratio", r));
        }
        evidence.extend(self.news_evidence(ticker, metrics.window_end, verdict));

        OracleCallResult::new(FINANCE_ORACLE, verdict, confidence)
            .with_evidence(evidence)
            .with_context("ticker", ticker)
            .with_context("event_timestamp", event_at.to_rfc3339())
            .with_context("snapped_bar_timestamp", metrics.snapped_at.to_rfc3339())
            .with_context("window_bars", self.config.window_bars)
            .with_context("baseline_price", metrics.baseline_price)
            .with_context("post_event_price", metrics.post_price)
            .with_context("actual_change_pct", metrics.actual_pct)
            .with_context("claimed_change_pct", claimed)
            .with_context("volume_ratio", metrics.volume_ratio)
            .with_context("abnormal_volume", metrics.abnormal_volume)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// News around the event sides with the price verdict; inconclusive
/// verdicts leave it unmarked.
fn news_stance(verdict: Verdict) -> Option<Stance> {
    match verdict {
        Verdict::LikelyTrue => Some(Stance::Supports),
        Verdict::LikelyFalse => Some(Stance::Refutes),
        Verdict::Uncertain | Verdict::Unsupported => None,
    }
}

fn news_item_evidence(item: &NewsItem, stance: Option<Stance>) -> EvidenceItem {
    let mut evidence = EvidenceItem::document(item.source.as_str(), item.title.as_str());
    if let Some(stance) = stance {
        evidence = evidence.with_stance(stance);
    }
    if let Some(url) = &item.url {
        evidence = evidence.with_url(url.as_str());
    }
    if let Some(at) = item.timestamp {
        evidence = evidence.with_published_at(at);
    }
    if let Some(content) = item.content.as_deref().filter(|c| !c.is_empty()) {
        evidence = evidence.with_extract(content.chars().take(EXTRACT_CHARS).collect::<String>());
    }
    evidence
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    use groundzero_contracts::{
        claim::StructuredClaim,
        market::{Bar, NewsItem},
        verdict::Verdict,
    };
    use groundzero_core::traits::Oracle;

    use super::*;
    use crate::{
        bars::BarSeries,
        event_time::{local_to_utc, parse_session_open, parse_utc_offset, EventTimeResolver, FixedClock},
    };

    // ── Fixtures ─────────────────────────────────────────────────────────────

    /// Eight sessions of 5-minute bars from 09:00 New York time starting
    /// Monday 2024-01-15. On the last day the price jumps 8% at 09:30 with
    /// ten times the usual volume.
    fn etf_approval_series() -> BarSeries {
        let offset = parse_utc_offset("-05:00").unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let mut bars = Vec::new();
        for day in 0..8i64 {
            for minute in (0..390i64).step_by(5) {
                let local = start + Duration::days(day) + Duration::minutes(minute);
                let at = local_to_utc(&offset, local).unwrap();
                let m = minute as f64;
                let bar = if day == 7 && minute >= 30 {
                    Bar::new(at, 108.0 + (m - 30.0) * 0.01, 1_000_000.0 + m * 10_000.0)
                } else {
                    Bar::new(at, 100.0 + m * 0.01, 100_000.0 + m * 100.0)
                };
                bars.push(bar);
            }
        }
        BarSeries::new("SOL", bars).unwrap()
    }

    /// 15:00 New York time on the day of the jump.
    fn afternoon_of_jump() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 22, 20, 0, 0).unwrap()
    }

    fn verifier_with(cache: MarketCache) -> PriceMovementVerifier {
        let resolver = EventTimeResolver::new(
            parse_utc_offset("-05:00").unwrap(),
            parse_session_open("09:30").unwrap(),
            Arc::new(FixedClock(afternoon_of_jump())),
        );
        PriceMovementVerifier::new(Arc::new(cache), resolver, PriceMovementConfig::default())
    }

    fn verifier() -> PriceMovementVerifier {
        verifier_with(MarketCache::new().with_series(etf_approval_series()))
    }

    fn claim(ticker: &str, pct: Option<f64>, hint: Option<&str>) -> StructuredClaim {
        StructuredClaim {
            tickers: vec![ticker.to_string()],
            percentages: pct.into_iter().collect(),
            date_hint: hint.map(str::to_string),
            event_type: Some("price_movement".to_string()),
            ..StructuredClaim::from_raw(format!("{ticker} moved"))
        }
    }

    fn context_f64(result: &OracleCallResult, key: &str) -> f64 {
        result.domain_context()[key].as_f64().unwrap()
    }

    // ── Verdicts on the jump ─────────────────────────────────────────────────

    #[test]
    fn matching_claim_with_volume_spike_is_likely_true() {
        let result = verifier().evaluate(&claim("SOL", Some(8.0), Some("this morning")));

        assert_eq!(result.oracle_name(), FINANCE_ORACLE);
        assert_eq!(result.verdict(), Verdict::LikelyTrue);
        assert!((result.confidence() - 0.98).abs() < 1e-9, "capped after volume boost");
        assert!((context_f64(&result, "baseline_price") - 100.125).abs() < 1e-9);
        assert!((context_f64(&result, "post_event_price") - 108.125).abs() < 1e-9);
        assert!((context_f64(&result, "actual_change_pct") - 7.990012).abs() < 1e-6);
        assert_eq!(result.domain_context()["abnormal_volume"], true);
        assert!(context_f64(&result, "volume_ratio") > 2.0);
    }

    #[test]
    fn evidence_carries_every_metric() {
        let result = verifier().evaluate(&claim("SOL", Some(8.0), Some("this morning")));
        let titles: Vec<&str> = result.evidence().iter().map(|e| e.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "baseline_price",
                "post_event_price",
                "actual_change_pct",
                "claimed_change_pct",
                "volume_ratio"
            ]
        );
        assert!(result.evidence().iter().all(|e| e.source == PRICE_CACHE_SOURCE));
        assert_eq!(result.evidence()[3].value, Some(8.0));
    }

    #[test]
    fn opposite_direction_is_likely_false() {
        let result = verifier().evaluate(&claim("SOL", Some(-8.0), Some("this morning")));

        assert_eq!(result.verdict(), Verdict::LikelyFalse);
        assert!(result.confidence() >= 0.6 && result.confidence() <= 0.9);
    }

    #[test]
    fn borderline_mismatch_is_uncertain() {
        // |7.99 - 10.5| = 2.51, inside the band (2, 3].
        let result = verifier().evaluate(&claim("SOL", Some(10.5), Some("this morning")));

        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert_eq!(result.confidence(), 0.4);
    }

    #[test]
    fn large_mismatch_is_likely_false() {
        // |7.99 - 11.5| = 3.51, past tolerance plus band.
        let result = verifier().evaluate(&claim("SOL", Some(11.5), Some("this morning")));

        assert_eq!(result.verdict(), Verdict::LikelyFalse);
        assert!((result.confidence() - (0.6 + 0.02 * (11.5 - 7.990012 - 2.0))).abs() < 1e-5);
    }

    #[test]
    fn missing_claimed_percentage_is_uncertain() {
        let result = verifier().evaluate(&claim("SOL", None, Some("this morning")));

        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert_eq!(result.confidence(), 0.3);
        assert!(result.domain_context()["claimed_change_pct"].is_null());
    }

    // ── Forward-only snapping ────────────────────────────────────────────────

    #[test]
    fn event_between_bars_snaps_to_the_later_bar() {
        // 09:32 lies between the 09:30 and 09:35 bars. The 09:30 bar would
        // give a window matching the claim more closely; it must not be used.
        let result = verifier().evaluate(&claim("SOL", Some(8.0), Some("2024-01-22T09:32:00-05:00")));
        let expected = Utc.with_ymd_and_hms(2024, 1, 22, 14, 35, 0).unwrap().to_rfc3339();

        assert_eq!(result.domain_context()["snapped_bar_timestamp"], expected.as_str());
        // The pre-window now contains the 09:30 jump bar.
        assert!(context_f64(&result, "baseline_price") > 100.125);
    }

    // ── Unsupported paths ────────────────────────────────────────────────────

    #[test]
    fn no_ticker_is_unsupported() {
        let mut c = claim("SOL", Some(8.0), Some("today"));
        c.tickers.clear();
        let result = verifier().evaluate(&c);

        assert_eq!(result.verdict(), Verdict::Unsupported);
        assert_eq!(result.confidence(), 0.0);
        assert_eq!(result.reason(), Some("No ticker identified in claim"));
    }

    #[test]
    fn no_cached_series_is_unsupported() {
        let result = verifier().evaluate(&claim("AAPL", Some(8.0), Some("today")));

        assert_eq!(result.verdict(), Verdict::Unsupported);
        assert_eq!(result.reason(), Some("No cached price data for AAPL"));
        assert!(result.evidence().is_empty());
    }

    #[test]
    fn missing_or_unresolvable_hint_is_unsupported() {
        for hint in [None, Some("last month")] {
            let result = verifier().evaluate(&claim("SOL", Some(8.0), hint));
            assert_eq!(result.verdict(), Verdict::Unsupported, "{hint:?}");
            assert!(result.reason().is_some());
        }
    }

    #[test]
    fn event_after_last_bar_is_unsupported() {
        let result = verifier().evaluate(&claim("SOL", Some(8.0), Some("2024-02-01")));

        assert_eq!(result.verdict(), Verdict::Unsupported);
        assert!(result.reason().unwrap().contains("at or after"));
    }

    #[test]
    fn too_few_bars_before_event_is_unsupported() {
        // The first session starts at 09:00; an event at 09:10 has 2 bars before it.
        let result = verifier().evaluate(&claim("SOL", Some(1.0), Some("2024-01-15T09:10:00-05:00")));

        assert_eq!(result.verdict(), Verdict::Unsupported);
        assert!(result.reason().unwrap().starts_with("Insufficient bars"));
    }

    #[test]
    fn zero_baseline_price_is_unsupported() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 22, 14, 0, 0).unwrap();
        let bars = (0..4)
            .map(|i| {
                let close = if i < 2 { 0.0 } else { 5.0 };
                Bar::new(t0 + Duration::minutes(5 * i), close, 1.0)
            })
            .collect();
        let series = BarSeries::new("ZERO", bars).unwrap();
        let mut v = verifier_with(MarketCache::new().with_series(series));
        v.config.window_bars = 2;

        let result = v.evaluate(&claim("ZERO", Some(5.0), Some("2024-01-22T14:10:00Z")));

        assert_eq!(result.verdict(), Verdict::Unsupported);
        assert!(result.reason().unwrap().contains("Baseline"));
    }

    #[test]
    fn zero_volume_history_has_no_ratio_and_is_never_abnormal() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 22, 14, 0, 0).unwrap();
        let bars = (0..12)
            .map(|i| {
                let (close, volume) = if i < 6 { (100.0, 0.0) } else { (108.0, 10.0) };
                Bar::new(t0 + Duration::minutes(5 * i), close, volume)
            })
            .collect();
        let series = BarSeries::new("THIN", bars).unwrap();
        let v = verifier_with(MarketCache::new().with_series(series));

        let result = v.evaluate(&claim("THIN", Some(8.0), Some("2024-01-22T14:30:00Z")));

        assert_eq!(result.verdict(), Verdict::LikelyTrue);
        assert!((result.confidence() - 0.95).abs() < 1e-9, "no volume boost");
        assert!(result.domain_context()["volume_ratio"].is_null());
        assert_eq!(result.domain_context()["abnormal_volume"], serde_json::json!(false));
        assert!(result.evidence().iter().all(|e| e.title != "volume_ratio"));
    }

    // ── News evidence ────────────────────────────────────────────────────────

    #[test]
    fn news_published_after_the_post_window_is_excluded() {
        let at = |h: u32, m: u32| Utc.with_ymd_and_hms(2024, 1, 22, h, m, 0).unwrap();
        let item = |title: &str, ts| NewsItem {
            title: title.to_string(),
            timestamp: ts,
            source: "Financial News".to_string(),
            url: Some("https://example.com/sol".to_string()),
            content: Some("x".repeat(500)),
        };
        let news = vec![
            item("SOL ETF Approved by SEC", Some(at(14, 30))),
            item("Market Reacts to SOL News", Some(at(14, 45))),
            item("Afternoon recap", Some(at(17, 0))),
            item("Undated rumour", None),
        ];
        let cache = MarketCache::new()
            .with_series(etf_approval_series())
            .with_news("SOL", news);

        let result = verifier_with(cache).evaluate(&claim("SOL", Some(8.0), Some("this morning")));
        let docs: Vec<_> = result.evidence().iter().filter(|e| e.value.is_none()).collect();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].title, "SOL ETF Approved by SEC");
        assert_eq!(docs[0].extract.as_ref().unwrap().chars().count(), 200);
        assert_eq!(docs[1].published_at, Some(at(14, 45)));
        assert!(docs.iter().all(|d| d.stance == Some(Stance::Supports)));
        assert_eq!(result.verdict(), Verdict::LikelyTrue, "news never changes the verdict");
    }

    #[test]
    fn news_stance_follows_the_price_verdict() {
        let at = Utc.with_ymd_and_hms(2024, 1, 22, 14, 30, 0).unwrap();
        let news = vec![NewsItem {
            title: "SOL ETF Approved by SEC".to_string(),
            timestamp: Some(at),
            source: "Financial News".to_string(),
            url: None,
            content: None,
        }];
        let cache = MarketCache::new()
            .with_series(etf_approval_series())
            .with_news("SOL", news);
        let v = verifier_with(cache);
        let stance_for = |pct: Option<f64>| {
            let result = v.evaluate(&claim("SOL", pct, Some("this morning")));
            let doc = result.evidence().iter().find(|e| e.value.is_none()).cloned().unwrap();
            (result.verdict(), doc.stance)
        };

        assert_eq!(stance_for(Some(-8.0)), (Verdict::LikelyFalse, Some(Stance::Refutes)));
        assert_eq!(stance_for(None), (Verdict::Uncertain, None));
    }

    // ── classify_move ────────────────────────────────────────────────────────

    #[test]
    fn exact_match_without_volume_gets_full_closeness_score() {
        let (verdict, confidence) = classify_move(5.0, Some(5.0), false, &PriceMovementConfig::default());
        assert_eq!(verdict, Verdict::LikelyTrue);
        assert!((confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn tolerance_edge_is_still_true() {
        let (verdict, confidence) = classify_move(5.0, Some(7.0), false, &PriceMovementConfig::default());
        assert_eq!(verdict, Verdict::LikelyTrue);
        assert!((confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn small_sign_disagreement_is_false_at_floor_confidence() {
        let (verdict, confidence) = classify_move(-0.5, Some(0.5), false, &PriceMovementConfig::default());
        assert_eq!(verdict, Verdict::LikelyFalse);
        assert!((confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn false_confidence_is_capped() {
        let (verdict, confidence) = classify_move(0.5, Some(90.0), false, &PriceMovementConfig::default());
        assert_eq!(verdict, Verdict::LikelyFalse);
        assert_eq!(confidence, 0.9);
    }
}
