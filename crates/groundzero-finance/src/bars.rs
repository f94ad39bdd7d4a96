//! Ordered, read-only bar series with a forward-only lookup.

use chrono::{DateTime, Utc};

use groundzero_contracts::{
    error::{GroundZeroError, GroundZeroResult},
    market::Bar,
};

/// Direction in which a timestamp may be snapped to a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDirection {
    /// The first bar at or after the instant.
    Forward,
    /// The closest bar on either side. Never accepted: it can pick a bar
    /// from before the event.
    Nearest,
}

/// Bars for one ticker, sorted by timestamp and validated at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    ticker: String,
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Build a series, sorting `bars` by timestamp.
    ///
    /// # Errors
    ///
    /// `InvalidBarSeries` if any close or volume is non-finite or negative,
    /// or if two bars share a timestamp.
    pub fn new(ticker: impl Into<String>, mut bars: Vec<Bar>) -> GroundZeroResult<Self> {
        let ticker = ticker.into();

        if let Some(bad) = bars.iter().find(|b| !valid_amount(b.close) || !valid_amount(b.volume)) {
            return Err(GroundZeroError::InvalidBarSeries {
                ticker,
                reason: format!("bar at {} has a non-finite or negative value", bad.timestamp),
            });
        }

        bars.sort_by_key(|b| b.timestamp);

        if let Some(pair) = bars.windows(2).find(|w| w[0].timestamp == w[1].timestamp) {
            return Err(GroundZeroError::InvalidBarSeries {
                ticker,
                reason: format!("duplicate bar timestamp {}", pair[0].timestamp),
            });
        }

        Ok(Self { ticker, bars })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Index of the bar `at` snaps to, or `None` if no bar qualifies.
    ///
    /// # Errors
    ///
    /// `LookAheadRejected` for any direction other than `Forward`.
    pub fn snap(&self, at: DateTime<Utc>, direction: SnapDirection) -> GroundZeroResult<Option<usize>> {
        match direction {
            SnapDirection::Forward => {
                let idx = self.bars.partition_point(|b| b.timestamp < at);
                Ok((idx < self.bars.len()).then_some(idx))
            }
            SnapDirection::Nearest => Err(GroundZeroError::LookAheadRejected {
                reason: format!("'{}' lookups must snap forward, not to the nearest bar", self.ticker),
            }),
        }
    }
}

fn valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
