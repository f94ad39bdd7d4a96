//! Claim inputs produced by the extraction and classification collaborators.
//!
//! The core only reads these types. They are shaped to match what the
//! heuristics crate produces and what the `parse` operation returns.

use serde::{Deserialize, Serialize};

/// Event-type label for claims about an asset's price moving.
pub const EVENT_PRICE_MOVEMENT: &str = "price_movement";

/// Event-type label for claims about a product or technology release.
pub const EVENT_TECH_RELEASE: &str = "tech_release";

/// Structured fields pulled out of raw claim text.
///
/// Every sequence preserves the order in which items appeared in the text;
/// verification procedures that need a single value take the first one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredClaim {
    /// The original claim text, untouched.
    pub raw: String,
    /// Ticker symbols (e.g. "AAPL", "SOL"), deduplicated, in order of appearance.
    #[serde(default)]
    pub tickers: Vec<String>,
    /// Known company names found in the text.
    #[serde(default)]
    pub companies: Vec<String>,
    /// Percentages, signed by the direction of the claimed move.
    #[serde(default)]
    pub percentages: Vec<f64>,
    /// Free-text date hint such as "today" or "this morning".
    #[serde(default)]
    pub date_hint: Option<String>,
    /// Event-type label such as `price_movement`.
    #[serde(default)]
    pub event_type: Option<String>,
}

impl StructuredClaim {
    /// A claim with only the raw text set.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// The first extracted ticker, if any.
    pub fn primary_ticker(&self) -> Option<&str> {
        self.tickers.first().map(String::as_str)
    }

    /// The first extracted percentage, if any.
    pub fn claimed_percentage(&self) -> Option<f64> {
        self.percentages.first().copied()
    }
}

/// A domain label paired with the classifier's confidence in it.
///
/// The label is free-form (`finance`, `tech_release`, `general`, or anything
/// else); the router resolves unknown labels to the generalist procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainClassification {
    pub domain: String,
    /// Always within [0, 1].
    pub confidence: f64,
}

impl DomainClassification {
    /// Build a classification, clamping `confidence` into [0, 1].
    ///
    /// A NaN confidence becomes 0.
    pub fn new(domain: impl Into<String>, confidence: f64) -> Self {
        Self {
            domain: domain.into(),
            confidence: clamp_unit(confidence),
        }
    }
}

/// Output of the parse-only operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedClaim {
    pub claim: StructuredClaim,
    pub domain: DomainClassification,
}

/// Clamp a score into [0, 1], mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
