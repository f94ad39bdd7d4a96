//! Keyword-scoring domain classification.
//!
//! Each domain accumulates a score from keywords in the text and from the
//! structured fields already extracted. The best-scoring domain wins and its
//! confidence is `best / (total + 1)`, so a single weak signal stays below
//! the routing threshold. With no signal at all the claim is `general`.

use tracing::debug;

use groundzero_contracts::{
    claim::{DomainClassification, StructuredClaim, EVENT_PRICE_MOVEMENT, EVENT_TECH_RELEASE},
    routing::Domain,
};
use groundzero_core::traits::DomainClassifier;

use crate::extractor::lower_words;

const FINANCE_KEYWORDS: &[&str] = &[
    "stock", "stocks", "market", "markets", "price", "prices", "trading", "traded", "volume",
    "shares", "share", "crypto", "cryptocurrency", "bitcoin", "earnings", "etf", "investors",
    "rally", "index", "nasdaq", "ticker",
];

const TECH_KEYWORDS: &[&str] = &[
    "announce", "announces", "announced", "release", "releases", "released", "launch",
    "launches", "launched", "introduce", "introduces", "introduced", "unveil", "unveils",
    "unveiled", "product", "products", "software", "update", "feature", "features", "iphone",
    "app", "device", "chip", "model",
];

const EVENT_WEIGHT: f64 = 2.0;
const TICKER_WEIGHT: f64 = 2.0;
const FIELD_WEIGHT: f64 = 1.0;
const NO_SIGNAL_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordDomainClassifier;

impl KeywordDomainClassifier {
    pub fn new() -> Self {
        Self
    }

    fn scores(text: &str, claim: &StructuredClaim) -> (f64, f64) {
        let words = lower_words(text);
        let count = |vocab: &[&str]| words.iter().filter(|w| vocab.contains(&w.as_str())).count() as f64;

        let mut finance = count(FINANCE_KEYWORDS);
        let mut tech = count(TECH_KEYWORDS);

        if !claim.tickers.is_empty() {
            finance += TICKER_WEIGHT;
        }
        if !claim.percentages.is_empty() {
            finance += FIELD_WEIGHT;
        }
        if !claim.companies.is_empty() {
            tech += FIELD_WEIGHT;
        }
        match claim.event_type.as_deref() {
            Some(EVENT_PRICE_MOVEMENT) => finance += EVENT_WEIGHT,
            Some(EVENT_TECH_RELEASE) => tech += EVENT_WEIGHT,
            _ => {}
        }

        (finance, tech)
    }
}

impl DomainClassifier for KeywordDomainClassifier {
    fn classify(&self, text: &str, claim: &StructuredClaim) -> DomainClassification {
        let (finance, tech) = Self::scores(text, claim);
        debug!(finance, tech, "domain scores");

        if finance == 0.0 && tech == 0.0 {
            return DomainClassification::new(Domain::General.as_str(), NO_SIGNAL_CONFIDENCE);
        }

        // Ties go to finance.
        let (domain, best) = if finance >= tech {
            (Domain::Finance, finance)
        } else {
            (Domain::TechRelease, tech)
        };

        DomainClassification::new(domain.as_str(), best / (finance + tech + 1.0))
    }
}
