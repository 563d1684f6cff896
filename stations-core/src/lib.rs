//! Core library for the `stations` CLI.
//!
//! This crate defines:
//! - Shared domain models (station summaries and full records)
//! - Abstraction over station data sources, with the static mock table
//! - Status and UV index classification for the display layer
//! - The three-state fetch holder the views render from
//! - Configuration for presentation preferences
//!
//! It is used by `stations-cli`, but can also be reused by other binaries or services.

pub mod classify;
pub mod config;
pub mod fetch;
pub mod model;
pub mod source;

pub use classify::{StatusCategory, UvBand, status_category};
pub use config::{Config, OutputFormat};
pub use fetch::FetchState;
pub use model::{Coordinates, StationDetail, StationStatus, StationSummary};
pub use source::{MockStationSource, SourceError, StationSource};
