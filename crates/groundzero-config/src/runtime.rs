//! Assembly of a ready-to-use `ClaimPipeline` (or a parse-only
//! `ClaimParser`) from configuration.

use std::sync::Arc;

use tracing::info;

use groundzero_contracts::error::GroundZeroResult;
use groundzero_core::{Aggregator, ClaimParser, ClaimPipeline, FixedResponseOracle, OracleRegistry, Router};
use groundzero_finance::{Clock, EventTimeResolver, MarketCache, PriceMovementVerifier};
use groundzero_heuristics::{HeuristicClaimExtractor, KeywordDomainClassifier};

use crate::settings::GroundZeroConfig;

/// The extraction and classification stages alone. Touches no market data.
pub fn build_parser() -> ClaimParser {
    ClaimParser::new(
        Box::new(HeuristicClaimExtractor::new()),
        Box::new(KeywordDomainClassifier::new()),
    )
}

/// Load the market cache named by `config` and assemble the pipeline.
pub fn build_pipeline(config: &GroundZeroConfig, clock: Arc<dyn Clock>) -> GroundZeroResult<ClaimPipeline> {
    let cache = config.market_data.load()?;
    assemble(config, Arc::new(cache), clock)
}

/// Assemble the pipeline around an already-loaded cache.
pub fn assemble(
    config: &GroundZeroConfig,
    cache: Arc<MarketCache>,
    clock: Arc<dyn Clock>,
) -> GroundZeroResult<ClaimPipeline> {
    config.validate()?;

    let resolver = EventTimeResolver::new(
        config.market_data.offset()?,
        config.market_data.session_open()?,
        clock,
    );
    info!(
        tickers = ?cache.tickers(),
        fallback_threshold = config.router.fallback_threshold,
        "assembling claim pipeline"
    );

    let finance = PriceMovementVerifier::new(cache, resolver, config.price_movement.clone());
    let registry = OracleRegistry::new(
        Box::new(finance),
        Box::new(FixedResponseOracle::tech_release()),
        Box::new(FixedResponseOracle::generalist()),
    )?;

    Ok(ClaimPipeline::new(
        Box::new(HeuristicClaimExtractor::new()),
        Box::new(KeywordDomainClassifier::new()),
        Router::new(registry, config.router),
        Aggregator::new(config.aggregator),
    ))
}
