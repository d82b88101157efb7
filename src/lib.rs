//! # Review Lens
//!
//! Aggregation pipeline for customer review analytics. Loads a flat CSV log
//! of review events plus a precomputed summary table, optionally scopes both
//! to one customer, and derives the tables an analyst dashboard consumes:
//!
//! - score trend over time
//! - per-month sentiment counts
//! - suggestion frequency
//! - rating distribution split by sentiment
//! - sentiment × suggestion cross-tabulation
//! - the filtered summary table
//!
//! Every derivation is a pure function of the loaded collections and the
//! selected customer; nothing is cached between runs.

pub mod analyzer;
pub mod config;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod render;

pub use loader::RecordStore;
pub use model::{CustomerSelector, LoadError, Review, Sentiment};
pub use pipeline::{AnalysisReport, Pipeline};
