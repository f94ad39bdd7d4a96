//! # groundzero-core
//!
//! The deterministic routing and aggregation core of GroundZero.
//!
//! This crate provides:
//! - The collaborator traits (`Oracle`, `ClaimExtractor`, `DomainClassifier`)
//! - The `Router` that picks a primary procedure and decides on fallback
//! - The `Aggregator` that combines procedure results into one verdict
//! - The `ClaimParser` behind parse-only requests
//! - The `ClaimPipeline` that wires everything together behind `parse`,
//!   `route` and `check`
//! - Fixed-response procedures for domains without a real implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use groundzero_core::{ClaimPipeline, Router, OracleRegistry, Aggregator};
//! ```

pub mod aggregator;
pub mod pipeline;
pub mod router;
pub mod stub;
pub mod traits;

pub use aggregator::{Aggregator, AggregatorConfig};
pub use pipeline::{ensure_claim_text, ClaimParser, ClaimPipeline};
pub use router::{OracleRegistry, Router, RouterConfig};
pub use stub::FixedResponseOracle;
