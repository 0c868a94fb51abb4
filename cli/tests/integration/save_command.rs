//! Integration tests for `modelpack save`.
//!
//! Every test saves into its own `TempDir` and points `MODELPACK_CONFIG` at
//! a file inside it.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn modelpack(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("modelpack"));
    cmd.env("NO_COLOR", "1")
        .env("MODELPACK_CONFIG", tmp.path().join("config.yaml"))
        .env_remove("MODELPACK_LOG")
        .current_dir(tmp.path());
    cmd
}

/// Write `service.yaml` for `name` with the given `env:` block.
fn write_manifest(tmp: &TempDir, name: &str, env_block: &str) -> PathBuf {
    let path = tmp.path().join("service.yaml");
    let body = format!(
        "apiVersion: modelpack.dev/v1\nkind: ModelService\nmetadata:\n  name: {name}\n  version: '1'\nenv:\n{env_block}"
    );
    std::fs::write(&path, body).unwrap();
    path
}

fn save(tmp: &TempDir, manifest: &Path) -> PathBuf {
    let out = tmp.path().join("out");
    modelpack(tmp)
        .arg("save")
        .arg(manifest)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();
    out
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).unwrap().permissions().mode() & 0o111 == 0o111
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

#[test]
fn test_save_single_dependency() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(&tmp, "single", "  pip_dependencies: numpy\n");
    let out = save(&tmp, &manifest);
    let req = std::fs::read_to_string(out.join("single/1/requirements.txt")).unwrap();
    assert_eq!(req, "numpy");
    assert!(!out.join("single/1/setup.sh").exists());
}

#[test]
fn test_save_dependency_list_writes_one_line_each() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(
        &tmp,
        "trio",
        "  pip_dependencies: [numpy, pandas, torch]\n",
    );
    let out = save(&tmp, &manifest);
    let req = std::fs::read_to_string(out.join("trio/1/requirements.txt")).unwrap();
    let mut lines: Vec<&str> = req.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, ["numpy", "pandas", "torch"]);
}

#[test]
fn test_save_setup_script_from_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("setup_script.sh"), "ls").unwrap();
    let manifest = write_manifest(&tmp, "from-file", "  setup_sh: setup_script.sh\n");
    let out = save(&tmp, &manifest);
    let script = out.join("from-file/1/setup.sh");
    assert_eq!(std::fs::read_to_string(&script).unwrap(), "ls");
    assert!(is_executable(&script));
}

#[test]
fn test_save_setup_script_literal_text() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(&tmp, "literal", "  setup_sh: ls\n");
    let out = save(&tmp, &manifest);
    let script = out.join("literal/1/setup.sh");
    assert_eq!(std::fs::read_to_string(&script).unwrap(), "ls");
    assert!(is_executable(&script));
    assert!(!out.join("literal/1/requirements.txt").exists());
}

#[test]
fn test_save_prints_bundle_path() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(&tmp, "printed", "  pip_dependencies: numpy\n");
    modelpack(&tmp)
        .arg("save")
        .arg(&manifest)
        .args(["--output", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("printed"))
        .stdout(predicate::str::contains("requirements.txt"));
}

#[test]
fn test_save_uses_configured_output_dir() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(&tmp, "configured", "  pip_dependencies: numpy\n");
    let target = tmp.path().join("bundles");
    modelpack(&tmp)
        .args(["config", "set", "save.output_dir"])
        .arg(&target)
        .assert()
        .success();
    modelpack(&tmp).arg("save").arg(&manifest).assert().success();
    assert!(target.join("configured/1/requirements.txt").is_file());
}

#[test]
fn test_save_twice_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(&tmp, "twice", "  pip_dependencies: numpy\n");
    save(&tmp, &manifest);
    modelpack(&tmp)
        .arg("save")
        .arg(&manifest)
        .args(["--output", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_save_json_output() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(&tmp, "jsonsvc", "  pip_dependencies: [numpy]\n  setup_sh: ls\n");
    let output = modelpack(&tmp)
        .args(["--json", "save"])
        .arg(&manifest)
        .args(["--output", "out", "--version", "2.0"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["record"]["service"]["version"], "2.0");
    assert_eq!(v["record"]["artifacts"].as_array().map(Vec::len), Some(2));
    assert!(v["bundle_dir"].as_str().unwrap().ends_with("2.0"));
}

#[test]
fn test_save_missing_manifest_json_error() {
    let tmp = TempDir::new().unwrap();
    let output = modelpack(&tmp)
        .args(["--json", "save", "nope.yaml"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "MANIFEST_NOT_FOUND");
}

#[test]
fn test_save_explicit_missing_path_is_configuration_error() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(&tmp, "missing", "  setup_sh:\n    path: absent.sh\n");
    let output = modelpack(&tmp)
        .args(["--json", "save"])
        .arg(&manifest)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["code"], "CONFIGURATION_ERROR");
}
