//! # u-concentration
//!
//! Inequality and concentration metrics over raw `f64` samples.
//!
//! This crate answers "how evenly is something spread across participants?"
//! for stake, voting power, trading volume, or any other non-negative
//! amount. It knows nothing about the domain the numbers come from.
//!
//! ## Modules
//!
//! - [`inequality`] — Gini coefficient
//! - [`concentration`] — Herfindahl–Hirschman Index, liveness coefficient
//! - [`dispersion`] — Coefficient of variation
//! - [`summary`] — All metrics at once, with serde-friendly config/output
//! - [`input`] — Parsing textual samples into `f64`
//! - [`stats`] — Compensated summation and sorted copies
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every metric borrows its input and never reorders it
//! - **Explicit edge cases**: empty and zero-total inputs have defined results
//! - **Property-based testing**: metric invariants verified via proptest

pub mod concentration;
pub mod dispersion;
pub mod error;
pub mod inequality;
pub mod input;
pub mod stats;
pub mod summary;

pub use concentration::{hhi, liveness_coefficient};
pub use dispersion::coefficient_of_variation;
pub use error::MetricsError;
pub use inequality::gini;
pub use summary::{summarize, Summary, SummaryConfig};
