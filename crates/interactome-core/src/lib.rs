#![forbid(unsafe_code)]
//! interactome-core library.
//!
//! Data model, error taxonomy, adaptive evidence filter, and configuration
//! for the interaction-network analysis pipeline.
//!
//! # Conventions
//!
//! - **Errors**: library seams return typed errors ([`error::CoreError`]);
//!   orchestration code uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod filter;
pub mod model;

pub use config::AnalysisConfig;
pub use error::{CoreError, ErrorCode};
pub use filter::{FilterOutcome, select_threshold};
pub use model::{ColumnSchema, Interaction, RecordPolicy};
