use crate::model::CovbadgeConfigV1;
use camino::Utf8PathBuf;
use covbadge_domain::{BadgeLink, BadgeOptions, DEFAULT_BADGE_HOST};

pub const DEFAULT_REPORT_PATH: &str = "./coverage/coverage-summary.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./coverage/badge.svg";

/// CLI overrides. Any set field wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub report_path: Option<Utf8PathBuf>,
    pub output_path: Option<Utf8PathBuf>,
    pub badge_host: Option<String>,
    pub label_color: Option<String>,
    pub logo: Option<String>,
    pub logo_color: Option<String>,
    pub logo_width: Option<u32>,
    pub style: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub cache_seconds: Option<u32>,
    pub link: Vec<String>,
}

/// Effective settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunPlan {
    pub report_path: Utf8PathBuf,
    pub output_path: Utf8PathBuf,
    pub badge_host: String,
    pub options: BadgeOptions,
}

/// Merge config and overrides into the effective plan.
///
/// Precedence: CLI override > config file > built-in default.
pub fn resolve_plan(cfg: CovbadgeConfigV1, overrides: Overrides) -> anyhow::Result<RunPlan> {
    let report_path = overrides
        .report_path
        .or_else(|| cfg.report_path.clone().map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_REPORT_PATH));

    let output_path = overrides
        .output_path
        .or_else(|| cfg.output_path.clone().map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_PATH));

    let badge_host = overrides
        .badge_host
        .or_else(|| cfg.badge_host.clone())
        .unwrap_or_else(|| DEFAULT_BADGE_HOST.to_string());

    let links = if overrides.link.is_empty() {
        cfg.badge.link.clone()
    } else {
        overrides.link
    };
    let link = resolve_links(links)?;

    let badge = cfg.badge;
    let options = BadgeOptions {
        label_color: overrides.label_color.or(badge.label_color),
        logo: overrides.logo.or(badge.logo),
        logo_color: overrides.logo_color.or(badge.logo_color),
        logo_width: overrides.logo_width.or(badge.logo_width),
        style: overrides.style.or(badge.style),
        prefix: overrides.prefix.or(badge.prefix),
        suffix: overrides.suffix.or(badge.suffix),
        cache_seconds: overrides.cache_seconds.or(badge.cache_seconds),
        link,
    };

    Ok(RunPlan {
        report_path,
        output_path,
        badge_host,
        options,
    })
}

/// A badge has two clickable halves, so at most two links make sense.
fn resolve_links(mut links: Vec<String>) -> anyhow::Result<Option<BadgeLink>> {
    match links.len() {
        0 => Ok(None),
        1 => Ok(Some(BadgeLink::One(links.remove(0)))),
        2 => Ok(Some(BadgeLink::Many(links))),
        n => anyhow::bail!("at most two badge links are supported (left and right), got {n}"),
    }
}
