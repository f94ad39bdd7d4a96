//! Verdicts, evidence, and the per-procedure call result.
//!
//! An `OracleCallResult` is produced exactly once per verification-procedure
//! invocation. Its fields are private so that a result cannot be altered
//! after it leaves the procedure that built it.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::claim::clamp_unit;

/// The judgement a verification procedure (or the aggregator) reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelyTrue,
    LikelyFalse,
    Uncertain,
    /// The procedure could not evaluate the claim (missing data).
    ///
    /// Aggregation treats this exactly like `Uncertain`; it is never read as
    /// evidence of falsity.
    Unsupported,
}

impl Verdict {
    /// True for `Uncertain` and `Unsupported`.
    pub fn is_inconclusive(self) -> bool {
        matches!(self, Verdict::Uncertain | Verdict::Unsupported)
    }

    /// The wire label, e.g. `likely_true`.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::LikelyTrue => "likely_true",
            Verdict::LikelyFalse => "likely_false",
            Verdict::Uncertain => "uncertain",
            Verdict::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a piece of document evidence relates to the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Supports,
    Refutes,
    Unrelated,
}

/// One structured note backing a verdict.
///
/// Metric evidence carries `value` (e.g. a computed percentage move);
/// document evidence carries `url`, `published_at` and `extract`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Where the evidence came from (e.g. "price_cache", "Financial News").
    pub source: String,
    /// Short label for the evidence (metric name or headline).
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stance: Option<Stance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
}

impl EvidenceItem {
    /// A computed metric, e.g. `metric("price_cache", "baseline_price", 100.1)`.
    pub fn metric(source: impl Into<String>, title: impl Into<String>, value: f64) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            value: Some(value),
            url: None,
            published_at: None,
            stance: None,
            extract: None,
        }
    }

    /// A document (news item, filing, post) with no metric attached.
    pub fn document(source: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            value: None,
            url: None,
            published_at: None,
            stance: None,
            extract: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = Some(stance);
        self
    }

    pub fn with_extract(mut self, extract: impl Into<String>) -> Self {
        self.extract = Some(extract.into());
        self
    }
}

/// The immutable result of one verification-procedure invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleCallResult {
    oracle_name: String,
    verdict: Verdict,
    confidence: f64,
    #[serde(default)]
    evidence: Vec<EvidenceItem>,
    #[serde(default)]
    domain_context: BTreeMap<String, Value>,
}

impl OracleCallResult {
    /// Start a result. `confidence` is clamped into [0, 1].
    pub fn new(oracle_name: impl Into<String>, verdict: Verdict, confidence: f64) -> Self {
        Self {
            oracle_name: oracle_name.into(),
            verdict,
            confidence: clamp_unit(confidence),
            evidence: Vec::new(),
            domain_context: BTreeMap::new(),
        }
    }

    /// The `unsupported` result every procedure returns when it cannot
    /// evaluate a claim: confidence 0 and a `reason` in the context.
    pub fn unsupported(oracle_name: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason: String = reason.into();
        Self::new(oracle_name, Verdict::Unsupported, 0.0).with_context("reason", reason)
    }

    /// Append evidence items, preserving order.
    pub fn with_evidence(mut self, items: impl IntoIterator<Item = EvidenceItem>) -> Self {
        self.evidence.extend(items);
        self
    }

    /// Attach one diagnostic key/value to the domain context.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.domain_context.insert(key.into(), value.into());
        self
    }

    pub fn oracle_name(&self) -> &str {
        &self.oracle_name
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn evidence(&self) -> &[EvidenceItem] {
        &self.evidence
    }

    pub fn domain_context(&self) -> &BTreeMap<String, Value> {
        &self.domain_context
    }

    /// Shortcut for the `reason` context entry, if it is a string.
    pub fn reason(&self) -> Option<&str> {
        self.domain_context.get("reason").and_then(Value::as_str)
    }
}
