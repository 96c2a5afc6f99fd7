//! Binary tests: run `img-classify` in a scratch directory and check what the
//! command-line layer adds on top of the library (flag overrides, config
//! lookup, exit status, files written).

use img_classify::config::Config;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run the binary with `dir` as its working directory, so `./config.toml`
/// lookup only sees what the test put there.
fn run(dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_img-classify");
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run img-classify")
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// A document with one classifiable and one too-small element.
fn scratch_with_document() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_json(
        &tmp.path().join("doc.json"),
        &json!([
            {"naturalWidth": 800, "naturalHeight": 600},
            {"naturalWidth": 250, "naturalHeight": 250}
        ]),
    );
    tmp
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

#[test]
fn legacy_flag_overrides_config_absent_policy() {
    let tmp = scratch_with_document();
    fs::write(
        tmp.path().join("config.toml"),
        "[classes]\nabsent = \"skip\"\n",
    )
    .unwrap();

    let out = run(tmp.path(), &["apply", "doc.json", "-o", "skip.json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = read_json(&tmp.path().join("skip.json"));
    assert_eq!(doc[0]["classList"], json!(["img-landscape", "img-medium"]));
    assert!(doc[1].get("classList").is_none());

    let out = run(
        tmp.path(),
        &["apply", "doc.json", "--legacy", "-o", "legacy.json"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = read_json(&tmp.path().join("legacy.json"));
    assert_eq!(doc[0]["classList"], json!(["img-landscape", "img-medium"]));
    assert_eq!(doc[1]["classList"], json!(["img-undefined"]));
}

#[test]
fn apply_without_output_writes_document_to_stdout() {
    let tmp = scratch_with_document();

    let out = run(tmp.path(), &["apply", "doc.json"]);
    assert!(out.status.success());
    let doc: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc[0]["classList"], json!(["img-landscape", "img-medium"]));
    // Summary goes to stderr, not into the document
    assert!(String::from_utf8_lossy(&out.stderr).contains("Applied classes to 1 of 2"));
}

#[test]
fn non_array_document_fails_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    write_json(&tmp.path().join("doc.json"), &json!({"a": 1}));

    let out = run(tmp.path(), &["apply", "doc.json", "-o", "out.json"]);
    assert!(!out.status.success());
    assert!(!out.stderr.is_empty());
    assert!(!tmp.path().join("out.json").exists());
    assert_eq!(read_json(&tmp.path().join("doc.json")), json!({"a": 1}));
}

// ---------------------------------------------------------------------------
// --config
// ---------------------------------------------------------------------------

#[test]
fn explicit_missing_config_is_an_error() {
    let tmp = scratch_with_document();

    let out = run(
        tmp.path(),
        &["--config", "missing.toml", "apply", "doc.json", "-o", "out.json"],
    );
    assert!(!out.status.success());
    assert!(!tmp.path().join("out.json").exists());
}

#[test]
fn absent_default_config_uses_stock_defaults() {
    let tmp = scratch_with_document();
    assert!(!tmp.path().join("config.toml").exists());

    let out = run(tmp.path(), &["apply", "doc.json", "-o", "out.json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = read_json(&tmp.path().join("out.json"));
    assert_eq!(doc[0]["classList"], json!(["img-landscape", "img-medium"]));
}

#[test]
fn explicit_config_changes_prefix() {
    let tmp = scratch_with_document();
    fs::write(tmp.path().join("custom.toml"), "[classes]\nprefix = \"pic-\"\n").unwrap();

    let out = run(
        tmp.path(),
        &["--config", "custom.toml", "apply", "doc.json", "-o", "out.json"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = read_json(&tmp.path().join("out.json"));
    assert_eq!(doc[0]["classList"], json!(["pic-landscape", "pic-medium"]));
}

// ---------------------------------------------------------------------------
// gen-config
// ---------------------------------------------------------------------------

#[test]
fn gen_config_parses_back_to_defaults() {
    let tmp = TempDir::new().unwrap();

    let out = run(tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let config: Config = toml::from_str(&text).unwrap();
    assert_eq!(config, Config::default());
}
