//! Input adapters: read and leniently parse coverage summary files.
//!
//! This crate is allowed to do filesystem IO. Structure is extracted
//! leniently: layers that are missing or not objects collapse to `None` and
//! fail later at badge-build time, not at decode time. Only invalid JSON is
//! an error here.

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::Utf8Path;
use covbadge_types::{CoverageSummary, MetricTotals, SummaryTotals};
use serde_json::Value;

/// Read and parse the coverage summary at `path`.
pub fn load_summary(path: &Utf8Path) -> anyhow::Result<CoverageSummary> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    parse_summary(&text).with_context(|| format!("parse {}", path))
}

/// Parse coverage summary JSON text.
pub fn parse_summary(text: &str) -> anyhow::Result<CoverageSummary> {
    let doc: Value = serde_json::from_str(text).context("parse summary JSON")?;
    Ok(summary_from_value(&doc))
}

fn summary_from_value(doc: &Value) -> CoverageSummary {
    let total = doc
        .get("total")
        .and_then(Value::as_object)
        .map(|total| SummaryTotals {
            statements: metric_from_value(total.get("statements")),
            lines: metric_from_value(total.get("lines")),
            functions: metric_from_value(total.get("functions")),
            branches: metric_from_value(total.get("branches")),
        });
    CoverageSummary { total }
}

fn metric_from_value(value: Option<&Value>) -> Option<MetricTotals> {
    let metric = value?.as_object()?;
    Some(MetricTotals {
        total: metric.get("total").and_then(Value::as_u64).unwrap_or(0),
        covered: metric.get("covered").and_then(Value::as_u64).unwrap_or(0),
        skipped: metric.get("skipped").and_then(Value::as_u64).unwrap_or(0),
        // A statements block without a numeric pct renders as NaN and
        // classifies red downstream.
        pct: metric.get("pct").and_then(Value::as_f64).unwrap_or(f64::NAN),
    })
}

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a coverage summary.
    ///
    /// Returns `Ok(...)` on valid JSON, `Err(...)` otherwise. **Never
    /// panics** on any input.
    pub fn parse_summary(text: &str) -> anyhow::Result<()> {
        let _ = super::parse_summary(text)?;
        Ok(())
    }
}
