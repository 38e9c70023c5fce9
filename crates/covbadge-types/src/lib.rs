//! Stable DTOs and schema IDs used across the covbadge workspace.
//!
//! This crate is intentionally boring:
//! - data types for the coverage summary artifact
//! - stable schema identifier strings

#![forbid(unsafe_code)]

pub mod summary;

pub use summary::{CoverageSummary, MetricTotals, SummaryTotals, SCHEMA_SUMMARY_V1};
