//! Trigen Domain Layer
//!
//! This crate contains the core test-case generation logic for Trigen.
//! It has zero external dependencies and defines the fundamental concepts
//! and pure functions that the CLI layer builds upon.
//!
//! ## Key Concepts
//!
//! - **Range**: an integer (min, max) input dimension
//! - **Strategy**: how boundary points are derived and paired (BVA,
//!   Robustness, Worst Case, Worst Case Robustness)
//! - **PointSet**: the sorted, deduplicated boundary values for one range,
//!   plus its nominal (midpoint) value
//! - **TestCase**: an identified (width, height) pair
//! - **TestPlan**: both point sets and the full paired case list
//!
//! ## Architecture
//!
//! Every function in this crate is total and deterministic: no I/O, no
//! clocks, no error paths. Formatting, timestamps, and file export live in
//! the CLI crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod pairing;
pub mod plan;
pub mod points;
pub mod range;
pub mod strategy;
pub mod testcase;

// Re-exports for convenience
pub use pairing::pair;
pub use plan::TestPlan;
pub use points::PointSet;
pub use range::Range;
pub use strategy::Strategy;
pub use testcase::TestCase;
