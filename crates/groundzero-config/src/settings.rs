//! The top-level configuration document.
//!
//! Every section is optional; missing sections and keys take their defaults.
//!
//! ```toml
//! [router]
//! fallback_threshold = 0.6
//! fallback_on_unsupported = false
//!
//! [aggregator]
//! inconclusive_confidence = 0.3
//!
//! [price_movement]
//! window_bars = 6
//! volume_baseline_bars = 78
//! abnormal_volume_multiplier = 2.0
//! tolerance_pct = 2.0
//! borderline_pct = 1.0
//! volume_confidence_boost = 0.05
//! max_news_evidence = 5
//!
//! [market_data]
//! cache_dir = "data/prices"
//! utc_offset = "-05:00"
//! session_open = "09:30"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use groundzero_contracts::error::{GroundZeroError, GroundZeroResult};
use groundzero_core::{AggregatorConfig, RouterConfig};
use groundzero_finance::{MarketDataConfig, PriceMovementConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundZeroConfig {
    pub router: RouterConfig,
    pub aggregator: AggregatorConfig,
    pub price_movement: PriceMovementConfig,
    pub market_data: MarketDataConfig,
}

impl GroundZeroConfig {
    /// Parse and validate a TOML document.
    ///
    /// Returns `GroundZeroError::ConfigError` if the TOML is malformed, does
    /// not match the schema, or holds an out-of-range value.
    pub fn from_toml_str(s: &str) -> GroundZeroResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| GroundZeroError::ConfigError {
            reason: format!("failed to parse configuration TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as configuration.
    pub fn from_file(path: &Path) -> GroundZeroResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GroundZeroError::ConfigError {
            reason: format!("failed to read configuration file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> GroundZeroResult<String> {
        toml::to_string_pretty(self).map_err(|e| GroundZeroError::Serialization {
            reason: e.to_string(),
        })
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> GroundZeroResult<()> {
        unit_interval("router.fallback_threshold", self.router.fallback_threshold)?;
        unit_interval(
            "aggregator.inconclusive_confidence",
            self.aggregator.inconclusive_confidence,
        )?;

        let pm = &self.price_movement;
        if pm.window_bars == 0 {
            return Err(invalid("price_movement.window_bars must be at least 1"));
        }
        if pm.volume_baseline_bars < pm.window_bars {
            return Err(invalid(
                "price_movement.volume_baseline_bars must be at least window_bars",
            ));
        }
        positive("price_movement.abnormal_volume_multiplier", pm.abnormal_volume_multiplier)?;
        positive("price_movement.tolerance_pct", pm.tolerance_pct)?;
        if !(pm.borderline_pct.is_finite() && pm.borderline_pct >= 0.0) {
            return Err(invalid("price_movement.borderline_pct must be zero or more"));
        }
        unit_interval("price_movement.volume_confidence_boost", pm.volume_confidence_boost)?;

        self.market_data.offset()?;
        self.market_data.session_open()?;
        Ok(())
    }
}

fn invalid(reason: &str) -> GroundZeroError {
    GroundZeroError::ConfigError {
        reason: reason.to_string(),
    }
}

fn unit_interval(key: &str, value: f64) -> GroundZeroResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GroundZeroError::ConfigError {
            reason: format!("{key} must be within [0, 1], got {value}"),
        })
    }
}

fn positive(key: &str, value: f64) -> GroundZeroResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GroundZeroError::ConfigError {
            reason: format!("{key} must be positive, got {value}"),
        })
    }
}
