//! CLI entry point for covbadge.
//!
//! This module is intentionally thin: it handles argument parsing, config
//! loading, and exit codes. The generate pipeline lives in `covbadge-app`.

use camino::Utf8PathBuf;
use clap::Parser;
use covbadge_app::{GenerateInput, run_generate};
use covbadge_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "covbadge",
    version,
    about = "Generate a coverage badge from a coverage summary"
)]
struct Cli {
    /// Path to the coverage summary JSON.
    #[arg(long)]
    report_path: Option<Utf8PathBuf>,

    /// Where to write the badge SVG.
    #[arg(long)]
    output_path: Option<Utf8PathBuf>,

    /// Path to covbadge config TOML.
    #[arg(long, default_value = "covbadge.toml")]
    config: Utf8PathBuf,

    /// Badge service base URL.
    #[arg(long)]
    badge_host: Option<String>,

    /// Background color of the badge label.
    #[arg(long)]
    label_color: Option<String>,

    /// Logo slug or data URL to embed in the badge.
    #[arg(long)]
    logo: Option<String>,

    /// Color of the embedded logo.
    #[arg(long)]
    logo_color: Option<String>,

    /// Horizontal space reserved for the logo, in pixels.
    #[arg(long)]
    logo_width: Option<u32>,

    /// Badge style (e.g. flat, flat-square, for-the-badge).
    #[arg(long)]
    style: Option<String>,

    /// Text prepended to the coverage label.
    #[arg(long)]
    prefix: Option<String>,

    /// Text appended to the coverage label.
    #[arg(long)]
    suffix: Option<String>,

    /// HTTP cache lifetime the badge service should advertise.
    #[arg(long)]
    cache_seconds: Option<u32>,

    /// Click-through link; repeat for left and right halves (max two).
    #[arg(long)]
    link: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // Load config if present; missing file is allowed (defaults apply).
    let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let overrides = Overrides {
        report_path: cli.report_path,
        output_path: cli.output_path,
        badge_host: cli.badge_host,
        label_color: cli.label_color,
        logo: cli.logo,
        logo_color: cli.logo_color,
        logo_width: cli.logo_width,
        style: cli.style,
        prefix: cli.prefix,
        suffix: cli.suffix,
        cache_seconds: cli.cache_seconds,
        link: cli.link,
    };

    let input = GenerateInput {
        config_text: &config_text,
        overrides,
    };

    match run_generate(input) {
        Ok(output) => {
            println!("Wrote coverage badge to: {}", output.output_path);
        }
        Err(err) => {
            eprintln!("covbadge error: {err:#}");
            std::process::exit(1);
        }
    }
}
