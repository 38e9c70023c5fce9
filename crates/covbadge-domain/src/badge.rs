use crate::color::color_for;
use crate::encode::encode_component;
use crate::options::{BadgeLink, BadgeOptions};
use covbadge_types::CoverageSummary;
use thiserror::Error;

/// Default badge-rendering service.
pub const DEFAULT_BADGE_HOST: &str = "https://img.shields.io";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BadgeError {
    /// The summary lacks the `total.statements` block the badge is built from.
    #[error("malformed coverage report")]
    MalformedReport,
}

/// Build the badge URL against the default badge host.
pub fn badge_url(summary: &CoverageSummary, options: &BadgeOptions) -> Result<String, BadgeError> {
    badge_url_at(DEFAULT_BADGE_HOST, summary, options)
}

/// Build the badge URL against an explicit badge host.
///
/// Fails before any IO when the summary has no `total.statements` block.
/// Query parameter order and component encoding are a wire contract with the
/// badge service; do not reorder.
pub fn badge_url_at(
    host: &str,
    summary: &CoverageSummary,
    options: &BadgeOptions,
) -> Result<String, BadgeError> {
    let statements = summary
        .total
        .as_ref()
        .and_then(|t| t.statements.as_ref())
        .ok_or(BadgeError::MalformedReport)?;

    let color = color_for(statements.pct);
    let mut url = format!(
        "{host}/badge/Coverage-{}%25-{}.svg",
        statements.pct,
        color.token()
    );

    let params = query_params(options);
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }

    Ok(url)
}

fn query_params(options: &BadgeOptions) -> Vec<String> {
    let mut params = Vec::new();
    push_text(&mut params, "labelColor", options.label_color.as_deref());
    push_text(&mut params, "logo", options.logo.as_deref());
    push_text(&mut params, "logoColor", options.logo_color.as_deref());
    push_number(&mut params, "logoWidth", options.logo_width);
    push_text(&mut params, "style", options.style.as_deref());
    push_text(&mut params, "prefix", options.prefix.as_deref());
    push_text(&mut params, "suffix", options.suffix.as_deref());
    push_number(&mut params, "cacheSeconds", options.cache_seconds);
    match &options.link {
        Some(BadgeLink::One(target)) => push_text(&mut params, "link", Some(target)),
        Some(BadgeLink::Many(targets)) => {
            for target in targets {
                push_text(&mut params, "link", Some(target));
            }
        }
        None => {}
    }
    params
}

/// Empty text counts as absent.
fn push_text(params: &mut Vec<String>, key: &str, value: Option<&str>) {
    if let Some(value) = value
        && !value.is_empty()
    {
        params.push(format!("{key}={}", encode_component(value)));
    }
}

/// Zero counts as absent.
fn push_number(params: &mut Vec<String>, key: &str, value: Option<u32>) {
    if let Some(value) = value
        && value != 0
    {
        params.push(format!("{key}={value}"));
    }
}
