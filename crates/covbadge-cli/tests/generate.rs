//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains a coverage-summary.json. The
//! badge service is replaced by a loopback stub so tests can assert the
//! exact request target the CLI produced.

use assert_cmd::Command;
use covbadge_test_util::StubBadgeServer;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the covbadge binary.
#[allow(deprecated)]
fn covbadge_cmd() -> Command {
    Command::cargo_bin("covbadge").expect("covbadge binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("covbadge-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn summary_path(fixture_name: &str) -> PathBuf {
    fixtures_dir().join(fixture_name).join("coverage-summary.json")
}

#[test]
fn generate_writes_the_badge_file() {
    let server = StubBadgeServer::serve(200, "OK", "<svg>badge</svg>");
    let temp = TempDir::new().expect("create temp dir");
    let badge_path = temp.path().join("badge.svg");

    covbadge_cmd()
        .arg("--report-path")
        .arg(summary_path("standard"))
        .arg("--output-path")
        .arg(&badge_path)
        .arg("--badge-host")
        .arg(server.base_url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote coverage badge to:"));

    let written = std::fs::read_to_string(&badge_path).expect("read badge file");
    assert_eq!(written, "<svg>badge</svg>");
    assert_eq!(
        server.into_request_target(),
        "/badge/Coverage-95%25-97c40f.svg"
    );
}

#[test]
fn perfect_coverage_gets_the_bright_green_badge() {
    let server = StubBadgeServer::serve(200, "OK", "<svg>perfect</svg>");
    let temp = TempDir::new().expect("create temp dir");

    covbadge_cmd()
        .arg("--report-path")
        .arg(summary_path("perfect"))
        .arg("--output-path")
        .arg(temp.path().join("badge.svg"))
        .arg("--badge-host")
        .arg(server.base_url())
        .assert()
        .success();

    assert_eq!(
        server.into_request_target(),
        "/badge/Coverage-100%25-49c31a.svg"
    );
}

#[test]
fn low_coverage_gets_the_red_badge() {
    let server = StubBadgeServer::serve(200, "OK", "<svg>low</svg>");
    let temp = TempDir::new().expect("create temp dir");

    covbadge_cmd()
        .arg("--report-path")
        .arg(summary_path("low"))
        .arg("--output-path")
        .arg(temp.path().join("badge.svg"))
        .arg("--badge-host")
        .arg(server.base_url())
        .assert()
        .success();

    assert_eq!(
        server.into_request_target(),
        "/badge/Coverage-42.5%25-ce0000.svg"
    );
}

#[test]
fn style_flags_become_query_parameters() {
    let server = StubBadgeServer::serve(200, "OK", "<svg>styled</svg>");
    let temp = TempDir::new().expect("create temp dir");

    covbadge_cmd()
        .arg("--report-path")
        .arg(summary_path("standard"))
        .arg("--output-path")
        .arg(temp.path().join("badge.svg"))
        .arg("--badge-host")
        .arg(server.base_url())
        .arg("--style")
        .arg("flat-square")
        .arg("--suffix")
        .arg(" (test)")
        .arg("--link")
        .arg("https://example.com/coverage")
        .assert()
        .success();

    assert_eq!(
        server.into_request_target(),
        "/badge/Coverage-95%25-97c40f.svg?style=flat-square&suffix=%20(test)&link=https%3A%2F%2Fexample.com%2Fcoverage"
    );
}

#[test]
fn config_file_in_the_working_directory_is_picked_up() {
    let server = StubBadgeServer::serve(200, "OK", "<svg>from config</svg>");
    let temp = TempDir::new().expect("create temp dir");

    let config_text = format!(
        r#"
schema = "covbadge.config.v1"
report_path = "{report}"
output_path = "badge.svg"
badge_host = "{host}"

[badge]
style = "for-the-badge"
"#,
        report = summary_path("standard").display(),
        host = server.base_url(),
    );
    std::fs::write(temp.path().join("covbadge.toml"), config_text).expect("write config");

    covbadge_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote coverage badge to: badge.svg"));

    let written = std::fs::read_to_string(temp.path().join("badge.svg")).expect("read badge file");
    assert_eq!(written, "<svg>from config</svg>");
    assert_eq!(
        server.into_request_target(),
        "/badge/Coverage-95%25-97c40f.svg?style=for-the-badge"
    );
}

#[test]
fn malformed_summary_reports_a_clear_error() {
    covbadge_cmd()
        .arg("--report-path")
        .arg(summary_path("malformed"))
        .arg("--badge-host")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("malformed coverage report"));
}

#[test]
fn missing_summary_reports_the_load_step() {
    covbadge_cmd()
        .arg("--report-path")
        .arg(fixtures_dir().join("does-not-exist.json"))
        .arg("--badge-host")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("load coverage summary"));
}

#[test]
fn upstream_error_status_fails_the_run() {
    let server = StubBadgeServer::serve(404, "Not Found", "gone");
    let temp = TempDir::new().expect("create temp dir");

    covbadge_cmd()
        .arg("--report-path")
        .arg(summary_path("standard"))
        .arg("--output-path")
        .arg(temp.path().join("badge.svg"))
        .arg("--badge-host")
        .arg(server.base_url())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("404: Not Found"));

    assert!(!temp.path().join("badge.svg").exists());
}

#[test]
fn three_links_are_rejected_before_any_request() {
    covbadge_cmd()
        .arg("--report-path")
        .arg(summary_path("standard"))
        .arg("--badge-host")
        .arg("http://127.0.0.1:1")
        .arg("--link")
        .arg("https://a.com")
        .arg("--link")
        .arg("https://b.com")
        .arg("--link")
        .arg("https://c.com")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at most two badge links"));
}
