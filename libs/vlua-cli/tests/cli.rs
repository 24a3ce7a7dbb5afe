use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_NONCE: AtomicU64 = AtomicU64::new(0);

fn vlua_bin() -> PathBuf {
    if let Some(path) = option_env!("CARGO_BIN_EXE_vlua") {
        return PathBuf::from(path);
    }

    let mut exe = std::env::current_exe().expect("test executable path should be known");
    exe.pop();
    if exe.file_name().and_then(|name| name.to_str()) == Some("deps") {
        exe.pop();
    }
    exe.join("vlua")
}

fn temp_path(prefix: &str, extension: &str) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should move forward")
        .as_nanos();
    let counter = TEMP_NONCE.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("{prefix}-{timestamp}-{counter}.{extension}"))
}

/// Write `source` to a temp file, run vlua on it with `args`, clean up.
fn run_on_source(prefix: &str, source: &str, args: &[&str]) -> Output {
    let path = temp_path(prefix, "lua");
    std::fs::write(&path, source).expect("temp source write should succeed");

    let output = Command::new(vlua_bin())
        .arg(&path)
        .args(args)
        .output()
        .expect("vlua should execute");

    let _ = std::fs::remove_file(path);
    output
}

#[test]
fn vlua_prints_text_to_stdout() {
    let output = run_on_source("vlua-cli-text", "local x = 1 + 2\n", &["-f", "text"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "local x = 1 + 2\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn vlua_defaults_to_html() {
    let output = run_on_source("vlua-cli-html", "for i = 1, 10 do end", &[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(r#"<div class="chunk">"#), "got: {stdout}");
    assert!(stdout.contains(r#"<div class="for-num">"#));
}

#[test]
fn vlua_writes_standalone_document_to_output_file() {
    let out_path = temp_path("vlua-cli-out", "html");
    let out_arg = out_path.to_string_lossy().into_owned();
    let output = run_on_source(
        "vlua-cli-file",
        "print('hi')",
        &["--standalone", "--output-file", &out_arg],
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(&out_path).expect("output file should exist");
    let _ = std::fs::remove_file(out_path);
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("&#39;hi&#39;"));
}

#[test]
fn vlua_honors_indent_width() {
    let output = run_on_source("vlua-cli-indent", "do x() end", &["-f", "text", "--indent", "2"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "do\n  x()\nend\n");
}

#[test]
fn vlua_reports_parse_errors() {
    let output = run_on_source("vlua-cli-bad", "local x = = 1", &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: "), "got: {stderr}");
    assert!(stderr.contains("line 1, column 11"), "got: {stderr}");
}

#[test]
fn vlua_reports_missing_file() {
    let missing = temp_path("vlua-cli-missing", "lua");
    let output = Command::new(vlua_bin())
        .arg(&missing)
        .output()
        .expect("vlua should execute");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Reading"), "got: {stderr}");
}

#[test]
fn vlua_rejects_bad_arguments() {
    let cases: [&[&str]; 3] = [&[], &["--frobnicate"], &["-f", "pdf", "x.lua"]];
    for args in cases {
        let output = Command::new(vlua_bin())
            .args(args)
            .output()
            .expect("vlua should execute");

        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: "));
    }
}

#[test]
fn vlua_prints_help() {
    let output = Command::new(vlua_bin())
        .arg("--help")
        .output()
        .expect("vlua should execute");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: vlua"));
}
