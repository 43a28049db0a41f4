//! # Skyra Analytics
//!
//! This crate provides the ranking logic behind the "Top Performing Assets"
//! section of the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of external systems.
//!   It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Ranking and partitioning are stateless functions. They take
//!   already-fetched asset data as input and produce ordered output. This makes them highly
//!   reliable and easy to test.
//!
//! ## Public API
//!
//! - `select_top_assets`: stable top-N ranking by one-year return.
//! - `partition_rows` / `DisplayRows`: the fixed two-row display split.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod ranking;

// Re-export the key components to create a clean, public-facing API.
pub use error::AnalyticsError;
pub use ranking::{partition_rows, select_top_assets, DisplayRows};
