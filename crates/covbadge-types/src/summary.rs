use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for coverage summaries.
pub const SCHEMA_SUMMARY_V1: &str = "covbadge.summary.v1";

/// Per-metric aggregate counts as emitted by coverage tooling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricTotals {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub covered: u64,
    #[serde(default)]
    pub skipped: u64,
    /// Covered fraction in percent, 0 to 100.
    pub pct: f64,
}

/// The `total` block of a coverage summary.
///
/// Each metric is independently optional so a structurally wrong summary
/// still parses and surfaces at badge-build time instead of decode time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryTotals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statements: Option<MetricTotals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<MetricTotals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<MetricTotals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<MetricTotals>,
}

/// A coverage summary document.
///
/// Only the `total` aggregate matters to the badge; per-file entries are
/// ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoverageSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<SummaryTotals>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_summary_deserializes() {
        let text = r#"{
            "total": {
                "statements": { "total": 40, "covered": 38, "skipped": 0, "pct": 95 },
                "lines": { "total": 36, "covered": 34, "skipped": 0, "pct": 94.44 },
                "functions": { "total": 10, "covered": 10, "skipped": 0, "pct": 100 },
                "branches": { "total": 8, "covered": 6, "skipped": 0, "pct": 75 }
            }
        }"#;

        let summary: CoverageSummary = serde_json::from_str(text).expect("deserialize summary");
        let statements = summary
            .total
            .as_ref()
            .and_then(|t| t.statements.as_ref())
            .expect("statements totals");
        assert_eq!(statements.pct, 95.0);
        assert_eq!(statements.covered, 38);
    }

    #[test]
    fn missing_layers_default_to_none() {
        let summary: CoverageSummary = serde_json::from_str("{}").expect("deserialize empty");
        assert!(summary.total.is_none());

        let summary: CoverageSummary =
            serde_json::from_str(r#"{"total": {}}"#).expect("deserialize bare total");
        let total = summary.total.expect("total block");
        assert!(total.statements.is_none());
        assert!(total.lines.is_none());
    }
}
