//! End-to-end checks of the binary's startup behavior.
//!
//! These never reach the network: the base URL points at a closed local port,
//! so any accidental request would surface as a network-stage failure rather
//! than the expected one.

use tempfile::TempDir;

fn newswire_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("nyt_newswire");
    cmd.env_remove("NY_API_KEY")
        .env_remove("URL_BASE")
        .env_remove("NEWSWIRE_STORAGE_DIR")
        .env("BASE_URL", "http://127.0.0.1:9")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_missing_api_key_fails_at_config_stage() {
    let dir = TempDir::new().unwrap();

    let output = newswire_cmd()
        .arg("--storage-dir")
        .arg(dir.path())
        .args(["content", "--source", "nyt", "--section", "arts"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config stage failed"), "stderr: {stderr}");
    assert!(stderr.contains("NY_API_KEY"), "stderr: {stderr}");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_blank_api_key_is_missing() {
    let output = newswire_cmd()
        .env("NY_API_KEY", "  ")
        .arg("sections")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config stage failed"));
}

#[test]
fn test_missing_storage_dir_fails_at_disk_stage() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("raw");

    let output = newswire_cmd()
        .env("NY_API_KEY", "k")
        .arg("--storage-dir")
        .arg(&missing)
        .args(["popular", "viewed", "--period", "7"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("disk stage failed"), "stderr: {stderr}");
    assert!(!missing.exists());
}

#[test]
fn test_dry_run_prints_redacted_url_and_target() {
    let dir = TempDir::new().unwrap();

    let output = newswire_cmd()
        .env("NY_API_KEY", "very-secret")
        .arg("--storage-dir")
        .arg(dir.path())
        .args(["popular", "shared", "--period", "30", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    let url = lines.next().unwrap();
    let target = lines.next().unwrap();

    assert!(url.starts_with("http://127.0.0.1:9/svc/mostpopular/v2/shared/30.json?api-key="));
    assert!(!stdout.contains("very-secret"));
    assert!(target.contains("mostpopular-"));
    assert!(target.ends_with("-shared_30.json"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
