//! The read-only market-data cache.
//!
//! Loaded once from a directory and never mutated afterwards, so a single
//! `Arc<MarketCache>` can be read by any number of concurrent checks.
//!
//! Recognised files (ticker taken from the file stem, upper-cased):
//!
//! - `<TICKER>.json`      array of `{timestamp, close | price, volume}`
//! - `<TICKER>.csv`       header naming `timestamp`, `close` or `price`, `volume`
//! - `<TICKER>_news.json` array of `{title, timestamp, source, url, content}`
//!
//! Timestamps are RFC 3339, or naive ISO-8601 read in the market offset.
//!
//! CSV files are split on bare commas. Quoted fields and embedded commas are
//! not supported; a quoted value fails to parse and the load is rejected.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use groundzero_contracts::{
    error::{GroundZeroError, GroundZeroResult},
    market::{Bar, NewsItem},
};

use crate::{
    bars::BarSeries,
    event_time::{local_to_utc, parse_session_open, parse_utc_offset},
};

const NEWS_SUFFIX: &str = "_news";

/// Where the cache lives and how its wall-clock times are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    pub cache_dir: PathBuf,
    /// Fixed market offset, `±HH:MM`.
    pub utc_offset: String,
    /// Local session open, `HH:MM`.
    pub session_open: String,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("data/prices"),
            utc_offset: "-05:00".to_string(),
            session_open: "09:30".to_string(),
        }
    }
}

impl MarketDataConfig {
    pub fn offset(&self) -> GroundZeroResult<FixedOffset> {
        parse_utc_offset(&self.utc_offset)
    }

    pub fn session_open(&self) -> GroundZeroResult<NaiveTime> {
        parse_session_open(&self.session_open)
    }

    /// Load the cache described by this configuration.
    pub fn load(&self) -> GroundZeroResult<MarketCache> {
        MarketCache::from_dir(&self.cache_dir, &self.offset()?)
    }
}

#[derive(Debug, Deserialize)]
struct RawBar {
    timestamp: String,
    #[serde(alias = "price")]
    close: f64,
    volume: f64,
}

#[derive(Debug, Deserialize)]
struct RawNews {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, alias = "description")]
    content: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MarketCache {
    series: HashMap<String, BarSeries>,
    news: HashMap<String, Vec<NewsItem>>,
}

impl MarketCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series, keyed by its ticker.
    pub fn with_series(mut self, series: BarSeries) -> Self {
        self.series.insert(series.ticker().to_ascii_uppercase(), series);
        self
    }

    /// Add news items for `ticker`.
    pub fn with_news(mut self, ticker: &str, items: Vec<NewsItem>) -> Self {
        self.news.insert(ticker.to_ascii_uppercase(), items);
        self
    }

    /// Load every recognised file in `dir`.
    ///
    /// A missing directory yields an empty cache. Unrecognised files are
    /// skipped.
    ///
    /// # Errors
    ///
    /// `DataLoad` if a recognised file cannot be read or parsed, or if a
    /// ticker has both a JSON and a CSV series. `InvalidBarSeries` if the
    /// loaded bars violate series invariants.
    pub fn from_dir(dir: &Path, offset: &FixedOffset) -> GroundZeroResult<Self> {
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "market data directory not found; cache is empty");
            return Ok(Self::new());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| load_error(dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        let mut cache = Self::new();
        for path in paths {
            let (Some(stem), Some(ext)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|s| s.to_str()),
            ) else {
                warn!(file = %path.display(), "skipping unrecognised cache file");
                continue;
            };

            match (ext.to_ascii_lowercase().as_str(), stem.strip_suffix(NEWS_SUFFIX)) {
                ("json", Some(ticker)) => {
                    let items = load_news_json(&path, offset)?;
                    debug!(ticker, items = items.len(), "loaded cached news");
                    cache.news.insert(ticker.to_ascii_uppercase(), items);
                }
                ("json", None) => cache.insert_loaded(stem, load_bars_json(&path, offset)?, &path)?,
                ("csv", None) => cache.insert_loaded(stem, load_bars_csv(&path, offset)?, &path)?,
                _ => warn!(file = %path.display(), "skipping unrecognised cache file"),
            }
        }

        Ok(cache)
    }

    fn insert_loaded(&mut self, stem: &str, bars: Vec<Bar>, path: &Path) -> GroundZeroResult<()> {
        let ticker = stem.to_ascii_uppercase();
        if self.series.contains_key(&ticker) {
            return Err(GroundZeroError::DataLoad {
                reason: format!("{}: a second price series for {ticker}", path.display()),
            });
        }
        let series = BarSeries::new(ticker.clone(), bars)?;
        info!(ticker = %ticker, bars = series.len(), "loaded cached price series");
        self.series.insert(ticker, series);
        Ok(())
    }

    pub fn series(&self, ticker: &str) -> Option<&BarSeries> {
        self.series.get(&ticker.to_ascii_uppercase())
    }

    /// Cached news for `ticker`; empty when none was loaded.
    pub fn news(&self, ticker: &str) -> &[NewsItem] {
        self.news
            .get(&ticker.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tickers with a price series, sorted.
    pub fn tickers(&self) -> Vec<&str> {
        let mut tickers: Vec<&str> = self.series.keys().map(String::as_str).collect();
        tickers.sort_unstable();
        tickers
    }
}

/// Parse an RFC 3339 or naive ISO-8601 timestamp.
pub fn parse_timestamp(raw: &str, offset: &FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| local_to_utc(offset, naive))
}

fn load_error(path: &Path, err: impl std::fmt::Display) -> GroundZeroError {
    GroundZeroError::DataLoad {
        reason: format!("{}: {err}", path.display()),
    }
}

fn bar_timestamp(raw: &str, offset: &FixedOffset, path: &Path) -> GroundZeroResult<DateTime<Utc>> {
    parse_timestamp(raw, offset)
        .ok_or_else(|| load_error(path, format!("unparseable timestamp '{raw}'")))
}

fn load_bars_json(path: &Path, offset: &FixedOffset) -> GroundZeroResult<Vec<Bar>> {
    let text = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    let raw: Vec<RawBar> = serde_json::from_str(&text).map_err(|e| load_error(path, e))?;

    raw.into_iter()
        .map(|r| Ok(Bar::new(bar_timestamp(&r.timestamp, offset, path)?, r.close, r.volume)))
        .collect()
}

fn load_bars_csv(path: &Path, offset: &FixedOffset) -> GroundZeroResult<Vec<Bar>> {
    let text = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header: Vec<String> = lines
        .next()
        .ok_or_else(|| load_error(path, "empty file"))?
        .split(',')
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();
    let column = |names: &[&str]| {
        header
            .iter()
            .position(|h| names.contains(&h.as_str()))
            .ok_or_else(|| load_error(path, format!("missing column {}", names.join("|"))))
    };
    let ts_col = column(&["timestamp"])?;
    let close_col = column(&["close", "price"])?;
    let volume_col = column(&["volume"])?;

    lines
        .enumerate()
        .map(|(i, line)| {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let field = |col: usize| {
                fields
                    .get(col)
                    .copied()
                    .ok_or_else(|| load_error(path, format!("row {} is short", i + 2)))
            };
            let number = |col: usize| -> GroundZeroResult<f64> {
                let raw = field(col)?;
                raw.parse()
                    .map_err(|_| load_error(path, format!("row {}: '{raw}' is not a number", i + 2)))
            };
            Ok(Bar::new(
                bar_timestamp(field(ts_col)?, offset, path)?,
                number(close_col)?,
                number(volume_col)?,
            ))
        })
        .collect()
}

fn load_news_json(path: &Path, offset: &FixedOffset) -> GroundZeroResult<Vec<NewsItem>> {
    let text = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    let raw: Vec<RawNews> = serde_json::from_str(&text).map_err(|e| load_error(path, e))?;

    Ok(raw
        .into_iter()
        .map(|r| NewsItem {
            title: r.title.unwrap_or_else(|| "News item".to_string()),
            timestamp: r.timestamp.as_deref().and_then(|t| parse_timestamp(t, offset)),
            source: r.source.unwrap_or_else(|| "Unknown".to_string()),
            url: r.url,
            content: r.content,
        })
        .collect())
}
