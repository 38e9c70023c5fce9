//! The `generate` use case: build the badge URL, fetch it, write the file.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use covbadge_settings::Overrides;

/// Input for the generate use case.
#[derive(Clone, Debug)]
pub struct GenerateInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the generate use case.
#[derive(Clone, Debug)]
pub struct GenerateOutput {
    /// Where the badge file was written.
    pub output_path: Utf8PathBuf,
    /// The URL that was fetched.
    pub badge_url: String,
}

/// Run the generate use case: parse config, read the summary, build the URL,
/// fetch the badge, write it out.
pub fn run_generate(input: GenerateInput<'_>) -> anyhow::Result<GenerateOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        covbadge_settings::CovbadgeConfigV1::default()
    } else {
        covbadge_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let plan = covbadge_settings::resolve_plan(cfg, input.overrides.clone())
        .context("resolve config")?;

    let summary =
        covbadge_report::load_summary(&plan.report_path).context("load coverage summary")?;

    // Build the URL before touching the network so a malformed summary
    // fails without a request.
    let badge_url = covbadge_domain::badge_url_at(&plan.badge_host, &summary, &plan.options)
        .context("build badge URL")?;

    let badge = covbadge_fetch::fetch_badge(&badge_url).context("fetch badge")?;

    write_badge_file(&plan.output_path, &badge).context("write badge")?;

    Ok(GenerateOutput {
        output_path: plan.output_path,
        badge_url,
    })
}

fn write_badge_file(path: &Utf8Path, contents: &str) -> anyhow::Result<()> {
    // `parent()` of a bare filename is `Some("")`, which must not be created.
    if let Some(dir) = path.parent().filter(|dir| !dir.as_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("create directory: {dir}"))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write badge: {path}"))?;
    Ok(())
}
