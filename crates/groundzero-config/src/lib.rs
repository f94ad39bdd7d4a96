//! # groundzero-config
//!
//! TOML configuration for the GroundZero claim checker, and the assembly of
//! a `ClaimPipeline` from it.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::{path::Path, sync::Arc};
//! use groundzero_config::{build_pipeline, GroundZeroConfig};
//! use groundzero_finance::SystemClock;
//!
//! let config = GroundZeroConfig::from_file(Path::new("config/groundzero.toml"))?;
//! let pipeline = build_pipeline(&config, Arc::new(SystemClock))?;
//! let report = pipeline.check("SOL jumped 8% after ETF approval this morning")?;
//! ```

pub mod runtime;
pub mod settings;

pub use runtime::{assemble, build_parser, build_pipeline};
pub use settings::GroundZeroConfig;

// ── Tests ─────────────────────────────────────────────────────────────────────
