//! # groundzero-finance
//!
//! The price-movement verification procedure for GroundZero.
//!
//! - `BarSeries`             sorted, validated bars with a forward-only lookup
//! - `MarketCache`           read-only price and news cache loaded from disk
//! - `EventTimeResolver`     date hint → absolute instant, with an injected `Clock`
//! - `PriceMovementVerifier` the `Oracle` that judges price-movement claims

pub mod bars;
pub mod cache;
pub mod event_time;
pub mod verifier;

pub use bars::{BarSeries, SnapDirection};
pub use cache::{MarketCache, MarketDataConfig};
pub use event_time::{Clock, EventTimeResolver, FixedClock, SystemClock};
pub use verifier::{PriceMovementConfig, PriceMovementVerifier, FINANCE_ORACLE};
