//! Integration tests for the `brandly` CLI binary.
//!
//! Argument parsing, help, completions, and config commands run offline.
//! Catalogue commands run against a wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `brandly` binary with env isolation.
///
/// Clears all `BRANDLY_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn brandly_cmd_in(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("brandly");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("BRANDLY_PROFILE")
        .env_remove("BRANDLY_BASE_URL")
        .env_remove("BRANDLY_OUTPUT")
        .env_remove("BRANDLY_TIMEOUT")
        .env_remove("BRANDLY_INSECURE");
    cmd
}

fn brandly_cmd() -> assert_cmd::Command {
    brandly_cmd_in(std::path::Path::new("/tmp/brandly-cli-test-nonexistent"))
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn acme() -> serde_json::Value {
    json!({
        "id": "1",
        "name": "Acme",
        "logo": "https://cdn.example.test/acme.png",
        "description": "Anvils, rockets and other fine products",
        "category": "Hardware",
        "followers": "12.5K",
        "campaigns": "8",
        "rating": "4.8",
        "recentCampaign": { "title": "Road Runner", "description": "Beep beep" }
    })
}

fn globex() -> serde_json::Value {
    json!({
        "id": "2",
        "name": "Globex",
        "logo": "https://cdn.example.test/globex.png",
        "description": "Worldwide domination, responsibly",
        "category": "Energy",
        "followers": "3K",
        "campaigns": "2",
        "rating": "4.1"
    })
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = brandly_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    brandly_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("brand catalogue")
            .and(predicate::str::contains("brands"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version_flag() {
    brandly_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brandly"));
}

#[test]
fn test_brands_subcommands_exist() {
    brandly_cmd()
        .args(["brands", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list").and(predicate::str::contains("get")));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_zsh() {
    brandly_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_bash() {
    brandly_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_output_format() {
    let output = brandly_cmd()
        .args(["--output", "invalid", "brands", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_unknown_profile_exits_with_config_code() {
    brandly_cmd()
        .args(["--profile", "nope", "brands", "list"])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_invalid_base_url_is_usage_error() {
    brandly_cmd()
        .args(["--base-url", "not a url", "brands", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("base_url"));
}

#[test]
fn test_numeric_policy_rejects_id_before_request() {
    // Port 9 is never contacted: the id fails validation first.
    brandly_cmd()
        .args([
            "--base-url",
            "http://127.0.0.1:9/api/v1",
            "--id-policy",
            "numeric",
            "brands",
            "get",
            "acme",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("acme"));
}

#[test]
fn test_unreachable_server_exits_with_connection_code() {
    brandly_cmd()
        .args(["--base-url", "http://127.0.0.1:9/api/v1", "brands", "list"])
        .assert()
        .code(7);
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_show_no_config() {
    // Missing config file renders the built-in defaults.
    brandly_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mockapi.io"));
}

#[test]
fn test_config_init_then_refuse_overwrite() {
    let home = tempfile::tempdir().unwrap();

    brandly_cmd_in(home.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("brandly").join("config.toml").exists());

    brandly_cmd_in(home.path())
        .args(["config", "init"])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("--force"));

    brandly_cmd_in(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_has_no_profile_switching_subcommands() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("brandly");
    std::fs::create_dir_all(&dir).unwrap();
    let broken = "[profiles.staging\nbase_url = 1\n";
    std::fs::write(dir.join("config.toml"), broken).unwrap();

    let removed: [&[&str]; 2] = [&["config", "use", "default"], &["config", "profiles"]];
    for args in removed {
        brandly_cmd_in(home.path())
            .args(args)
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty());
    }
    assert_eq!(
        std::fs::read_to_string(dir.join("config.toml")).unwrap(),
        broken
    );
}

#[test]
fn test_broken_config_warns_and_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("brandly");
    std::fs::create_dir_all(&dir).unwrap();
    let broken = "default_profile = \"staging\"\n[profiles.staging\n";
    std::fs::write(dir.join("config.toml"), broken).unwrap();

    brandly_cmd_in(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mockapi.io"))
        .stderr(predicate::str::contains("using built-in defaults"))
        .stderr(predicate::str::contains("config.toml"));
    assert_eq!(
        std::fs::read_to_string(dir.join("config.toml")).unwrap(),
        broken
    );
}

#[test]
fn test_config_path_points_into_config_home() {
    let home = tempfile::tempdir().unwrap();
    brandly_cmd_in(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── Generated docs ──────────────────────────────────────────────────

fn generated(rel: &str) -> String {
    let path = std::path::Path::new(env!("OUT_DIR")).join(rel);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn test_man_page_documents_exit_status_and_environment() {
    let page = generated("man/brandly.1");
    assert!(page.contains(".SH \"EXIT STATUS\""));
    for code in ["0", "1", "2", "4", "7", "8", "9"] {
        assert!(page.contains(&format!(".TP\n\\fB{code}\\fR\n")), "exit code {code}");
    }
    assert!(page.contains("BRANDLY_BASE_URL"));
    assert!(page.contains("brandly/config.toml"));

    let get = generated("man/brandly-brands-get.1");
    assert!(!get.contains("EXIT STATUS"));
}

#[test]
fn test_generated_bash_completions_match_the_command() {
    let output = brandly_cmd()
        .args(["completions", "bash"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        generated("completions/brandly.bash")
    );
}

// ── Catalogue commands ──────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_brands_list_plain_preserves_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([acme(), globex()])))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = brandly_cmd();
    cmd.args([
        "--base-url",
        &format!("{}/api/v1", server.uri()),
        "-o",
        "plain",
        "brands",
        "list",
    ]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n2\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_brands_list_table_shows_columns() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([acme()])))
        .mount(&server)
        .await;

    let mut cmd = brandly_cmd();
    cmd.args([
        "--base-url",
        &format!("{}/api/v1", server.uri()),
        "brands",
        "list",
    ]);
    let output = run(cmd).await;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    for needle in ["ID", "Name", "Followers", "Acme", "12.5K"] {
        assert!(stdout.contains(needle), "missing {needle}:\n{stdout}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_brands_get_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(acme()))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = brandly_cmd();
    cmd.args([
        "--base-url",
        &format!("{}/api/v1", server.uri()),
        "-o",
        "json",
        "brands",
        "get",
        "1",
    ]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["name"], "Acme");
    assert_eq!(body["recentCampaign"]["title"], "Road Runner");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_brands_get_missing_exits_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("\"Not found\""))
        .mount(&server)
        .await;

    let mut cmd = brandly_cmd();
    cmd.args([
        "--base-url",
        &format!("{}/api/v1", server.uri()),
        "brands",
        "get",
        "42",
    ]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("42"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_body_exits_with_protocol_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let mut cmd = brandly_cmd();
    cmd.args([
        "--base-url",
        &format!("{}/api/v1", server.uri()),
        "brands",
        "list",
    ]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(8), "{}", combined_output(&output));
}
