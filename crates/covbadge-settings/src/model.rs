use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for `covbadge.toml`.
pub const SCHEMA_CONFIG_V1: &str = "covbadge.config.v1";

/// `covbadge.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CovbadgeConfigV1 {
    /// Optional schema string for tooling (`covbadge.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Where to read the coverage summary from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,

    /// Where to write the fetched badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    /// Base URL of the badge-rendering service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_host: Option<String>,

    /// Badge styling options, all optional.
    #[serde(default)]
    pub badge: BadgeTable,
}

/// The `[badge]` table: styling forwarded to the badge service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BadgeTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_width: Option<u32>,

    /// Badge style understood by the service (`flat`, `plastic`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_seconds: Option<u32>,

    /// Hyperlink targets for the badge halves (at most two).
    #[serde(default)]
    pub link: Vec<String>,
}
