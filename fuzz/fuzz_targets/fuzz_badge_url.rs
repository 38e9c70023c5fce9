//! Fuzz target for badge URL construction.
//!
//! Goal: URL building should **never panic** on any combination of
//! coverage percentage and badge options. A missing statements block is an
//! error, not a crash.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_badge_url
//! ```

#![no_main]

use arbitrary::Arbitrary;
use covbadge_domain::{BadgeLink, BadgeOptions, badge_url};
use covbadge_types::{CoverageSummary, MetricTotals, SummaryTotals};
use libfuzzer_sys::fuzz_target;

/// Structured input for URL fuzzing.
/// Using Arbitrary allows libFuzzer to generate more meaningful test cases.
#[derive(Arbitrary, Debug)]
struct UrlInput {
    pct: f64,
    label_color: Option<String>,
    logo: Option<String>,
    logo_color: Option<String>,
    logo_width: Option<u32>,
    style: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
    cache_seconds: Option<u32>,
    links: Vec<String>,
}

fuzz_target!(|input: UrlInput| {
    // Limit input size to avoid OOM and keep fuzzing fast
    if input.links.len() > 8 || input.links.iter().any(|l| l.len() > 512) {
        return;
    }

    let summary = CoverageSummary {
        total: Some(SummaryTotals {
            statements: Some(MetricTotals {
                total: 0,
                covered: 0,
                skipped: 0,
                pct: input.pct,
            }),
            lines: None,
            functions: None,
            branches: None,
        }),
    };

    let link = match input.links.len() {
        0 => None,
        1 => Some(BadgeLink::One(input.links.into_iter().next().unwrap())),
        _ => Some(BadgeLink::Many(input.links)),
    };

    let options = BadgeOptions {
        label_color: input.label_color,
        logo: input.logo,
        logo_color: input.logo_color,
        logo_width: input.logo_width,
        style: input.style,
        prefix: input.prefix,
        suffix: input.suffix,
        cache_seconds: input.cache_seconds,
        link,
    };

    // Should never panic - errors are fine
    let _ = badge_url(&summary, &options);
});
