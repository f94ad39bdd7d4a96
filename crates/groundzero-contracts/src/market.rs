//! Cached market data records.
//!
//! These are the shapes the data-cache collaborator provides. The finance
//! crate loads them from disk and wraps bars in an ordered, read-only series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical price bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    /// Closing price of the bar.
    pub close: f64,
    /// Traded volume during the bar.
    pub volume: f64,
}

impl Bar {
    pub fn new(timestamp: DateTime<Utc>, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            close,
            volume,
        }
    }
}

/// A cached news item about a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default = "NewsItem::default_title")]
    pub title: String,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default = "NewsItem::default_source")]
    pub source: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Body text; older caches call this `description`.
    #[serde(default, alias = "description")]
    pub content: Option<String>,
}

impl NewsItem {
    fn default_title() -> String {
        "News item".to_string()
    }

    fn default_source() -> String {
        "Unknown".to_string()
    }
}
