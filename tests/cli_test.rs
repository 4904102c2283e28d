// tests/cli_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn devscripts(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_devscripts"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute devscripts")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(&["--help"], dir.path());

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("devscripts"));
    assert!(text.contains("manifest"));
}

#[test]
fn test_version_from_describe_override() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(
        &["version", "--describe", "v1.2.0-5-gabcdef1"],
        dir.path(),
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "v1.2.0.post5\n");
}

#[test]
fn test_version_warns_but_succeeds_on_odd_tag() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(&["version", "--describe", "nightly-rc"], dir.path());

    assert!(output.status.success());
    assert_eq!(stdout(&output), "nightly.postrc\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARNING"));
}

#[test]
fn test_version_outside_repository_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(&["version", "--backend", "git2"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"));
}

#[test]
fn test_unknown_backend_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(&["version", "--backend", "svn"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_describe_shows_parts() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(
        &["describe", "--describe", "v0.5.5-26-g23701cf0"],
        dir.path(),
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("v0.5.5"));
    assert!(text.contains("26"));
    assert!(text.contains("23701cf0"));
    assert!(text.contains("v0.5.5.post26"));
}

#[test]
fn test_describe_count_without_hash_matches_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(&["describe", "--describe", "v1.0.0-3"], dir.path());

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("tag:     v1.0.0\n"), "unexpected output: {}", text);
    assert!(text.contains("commits: 3\n"), "unexpected output: {}", text);
    assert!(!text.contains("exact tag"), "unexpected output: {}", text);
    assert!(text.contains("v1.0.0.post3"));
}

#[test]
fn test_describe_oversized_count_shown_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(
        &["describe", "--describe", "v1.0.0-99999999999999999999-gabc1234"],
        dir.path(),
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("commits: 99999999999999999999\n"));
    assert!(!text.contains("exact tag"));
}

#[test]
fn test_usage_error_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(&["no-such-command"], dir.path());
    assert_eq!(output.status.code(), Some(1));

    let output = devscripts(&["--version"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("devscripts"));
}

#[test]
fn test_scripts_listing() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("scripts")).unwrap();
    fs::write(dir.path().join("scripts/b-format"), "#!/bin/sh\n").unwrap();
    fs::write(dir.path().join("scripts/a-check"), "#!/bin/sh\n").unwrap();

    let output = devscripts(&["scripts"], dir.path());

    assert!(output.status.success());
    assert_eq!(stdout(&output), "scripts/a-check\nscripts/b-format\n");
}

#[test]
fn test_manifest_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("bin")).unwrap();
    fs::write(dir.path().join("bin/deploy"), "#!/bin/sh\n").unwrap();
    fs::write(
        dir.path().join("devscripts.toml"),
        "[package]\nname = \"team-tools\"\n\n[scripts]\npattern = \"bin/*\"\n",
    )
    .unwrap();

    let output = devscripts(
        &["manifest", "--describe", "v3.0.0-1-gaaaaaaa"],
        dir.path(),
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("name = \"team-tools\""));
    assert!(text.contains("version = \"v3.0.0.post1\""));
    assert!(text.contains("bin/deploy"));
}

#[test]
fn test_manifest_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = devscripts(
        &["manifest", "--describe", "v1.0.0", "--output", "manifest.toml"],
        dir.path(),
    );

    assert!(output.status.success());
    let written = fs::read_to_string(dir.path().join("manifest.toml")).unwrap();
    assert!(written.contains("version = \"v1.0.0\""));
    assert!(written.contains("scripts = []"));
}
