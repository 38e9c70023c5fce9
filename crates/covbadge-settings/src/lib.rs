//! Config parsing and run-plan resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{BadgeTable, CovbadgeConfigV1, SCHEMA_CONFIG_V1};
pub use resolve::{resolve_plan, Overrides, RunPlan, DEFAULT_OUTPUT_PATH, DEFAULT_REPORT_PATH};

/// Parse `covbadge.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CovbadgeConfigV1> {
    let cfg: CovbadgeConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
