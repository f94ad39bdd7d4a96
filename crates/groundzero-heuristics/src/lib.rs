//! # groundzero-heuristics
//!
//! Deterministic stand-ins for the extraction and classification
//! collaborators: `HeuristicClaimExtractor` and `KeywordDomainClassifier`.
//! Both implement the traits in `groundzero-core::traits` and can be
//! swapped for model-backed implementations without touching the core.

pub mod classifier;
pub mod extractor;

pub use classifier::KeywordDomainClassifier;
pub use extractor::HeuristicClaimExtractor;
