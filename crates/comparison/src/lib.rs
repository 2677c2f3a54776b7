//! # Usage Comparison Engine
//!
//! This crate computes how a single developer's usage of a framework's
//! command surface measures against the framework-wide aggregate baseline.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0); fetching
//!   the two datasets and rendering the report belong to the callers on
//!   either side of it.
//! - **Stateless Calculation:** The `ComparisonEngine` is a stateless
//!   calculator. It takes the two usage datasets as input and produces a
//!   `ComparisonReport` as output. This makes it safe to invoke concurrently
//!   and easy to test.
//!
//! ## Public API
//!
//! - `ComparisonEngine`: The main struct that contains the comparison logic.
//! - `ComparisonReport`: The standardized struct that holds the derived metrics.
//! - `ComparisonError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ComparisonEngine;
pub use error::ComparisonError;
pub use report::ComparisonReport;
