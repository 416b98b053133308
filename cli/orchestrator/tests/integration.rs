// create temp dir with an ABI and a config file and run abisig commands
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

const FOO_ABI: &str = r#"[
    {"type": "constructor", "inputs": [], "stateMutability": "nonpayable"},
    {"type": "function", "name": "addFoobar", "outputs": [], "stateMutability": "nonpayable",
     "inputs": [{"internalType": "uint256", "name": "n", "type": "uint256"},
                {"internalType": "bool", "name": "b", "type": "bool"}]},
    {"type": "function", "name": "getFoobar", "inputs": [], "stateMutability": "view",
     "outputs": [{"internalType": "uint256", "name": "n", "type": "uint256"}]},
    {"type": "event", "name": "Added", "anonymous": false,
     "inputs": [{"indexed": true, "name": "by", "type": "address"}]}
]"#;

/// Write the fixture ABI and a config file pointing at it
fn setup(dir: &Path, extra_config: &str) -> (PathBuf, PathBuf) {
    let abi_path = dir.join("foo.abi.json");
    std::fs::write(&abi_path, FOO_ABI).unwrap();
    let config_path = dir.join("config.toml");
    std::fs::write(&config_path, extra_config).unwrap();
    (abi_path, config_path)
}

fn abisig(config_path: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("abisig"));
    cmd.arg("--config").arg(config_path);
    cmd
}

#[test]
fn signatures_lists_every_descriptor() {
    let tmp = tempdir().unwrap();
    let (abi_path, config_path) = setup(tmp.path(), "");
    abisig(&config_path)
        .args(["signatures", "--input"])
        .arg(&abi_path)
        .assert()
        .success()
        .stdout("()\naddFoobar(uint256,bool)\ngetFoobar()\nAdded(address)\n");
}

#[test]
fn signatures_uses_configured_input_and_filters() {
    let tmp = tempdir().unwrap();
    let abi_path = tmp.path().join("foo.abi.json");
    let config = format!(
        "[input]\nabi_path = {:?}\n\n[output]\ncallables_only = true\n",
        abi_path.to_str().unwrap()
    );
    let (_, config_path) = setup(tmp.path(), &config);
    abisig(&config_path)
        .arg("signatures")
        .assert()
        .success()
        .stdout(predicate::str::contains("addFoobar(uint256,bool)"))
        .stdout(predicate::str::contains("Added(").not());
}

#[test]
fn signatures_json_output() {
    let tmp = tempdir().unwrap();
    let (abi_path, config_path) = setup(tmp.path(), "");
    let output = abisig(&config_path)
        .args(["signatures", "--format", "json", "--input"])
        .arg(&abi_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[1]["signature"], "addFoobar(uint256,bool)");
    assert_eq!(value[3]["callable"], false);
}

#[test]
fn signatures_without_input_fails() {
    let tmp = tempdir().unwrap();
    let (_, config_path) = setup(tmp.path(), "");
    abisig(&config_path)
        .arg("signatures")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No ABI input"));
}

#[test]
fn malformed_abi_reports_entry() {
    let tmp = tempdir().unwrap();
    let (_, config_path) = setup(tmp.path(), "");
    let bad = tmp.path().join("bad.json");
    std::fs::write(&bad, r#"[{"type": "function", "name": "f", "inputs": [{"name": "x"}]}]"#)
        .unwrap();
    abisig(&config_path)
        .args(["signatures", "--input"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("index 0"));
}

#[test]
fn split_prints_name_and_types() {
    let tmp = tempdir().unwrap();
    let (_, config_path) = setup(tmp.path(), "");
    abisig(&config_path)
        .args(["split", "transfer(address,uint256)"])
        .assert()
        .success()
        .stdout("name: transfer\ntypes: address,uint256\n");
}

#[test]
fn lookup_by_name_and_missing() {
    let tmp = tempdir().unwrap();
    let (abi_path, config_path) = setup(tmp.path(), "");
    abisig(&config_path)
        .args(["lookup", "getFoobar", "--input"])
        .arg(&abi_path)
        .assert()
        .success()
        .stdout("getFoobar()\n");
    abisig(&config_path)
        .args(["lookup", "approve", "--input"])
        .arg(&abi_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no descriptor matches 'approve'"));
}

#[test]
fn init_config_writes_file() {
    let tmp = tempdir().unwrap();
    let (_, config_path) = setup(tmp.path(), "");
    let out = tmp.path().join("generated").join("config.toml");
    abisig(&config_path).args(["init-config", "--path"]).arg(&out).assert().success();
    assert!(out.exists(), "expected config at {:?}", out);
    abisig(&config_path)
        .args(["init-config", "--path"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_config_file_fails() {
    let tmp = tempdir().unwrap();
    abisig(&tmp.path().join("nope.toml"))
        .args(["split", "f()"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn signatures_callables_only_flag() {
    let tmp = tempdir().unwrap();
    let (abi_path, config_path) = setup(tmp.path(), "");
    abisig(&config_path)
        .args(["signatures", "--callables-only", "--input"])
        .arg(&abi_path)
        .assert()
        .success()
        .stdout("()\naddFoobar(uint256,bool)\ngetFoobar()\n");
}

#[test]
fn lookup_exact_signature() {
    let tmp = tempdir().unwrap();
    let (abi_path, config_path) = setup(tmp.path(), "");
    abisig(&config_path)
        .args(["lookup", "addFoobar(uint256,bool)", "--input"])
        .arg(&abi_path)
        .assert()
        .success()
        .stdout("addFoobar(uint256,bool)\n");
    // A full signature never falls back to its bare name
    abisig(&config_path)
        .args(["lookup", "addFoobar(uint256)", "--input"])
        .arg(&abi_path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no descriptor matches 'addFoobar(uint256)'"));
}

/// Config logging at `level` into `log_path`
fn logging_config(level: &str, log_path: &Path) -> String {
    format!("[logging]\nlevel = {:?}\nfile = {:?}\n", level, log_path.to_str().unwrap())
}

#[test]
fn log_level_flag_overrides_config() {
    let tmp = tempdir().unwrap();
    let log_path = tmp.path().join("abisig.log");
    let (abi_path, config_path) = setup(tmp.path(), &logging_config("error", &log_path));

    abisig(&config_path)
        .env_remove("RUST_LOG")
        .args(["signatures", "--input"])
        .arg(&abi_path)
        .assert()
        .success();
    let quiet = std::fs::read_to_string(&log_path).unwrap();
    assert!(!quiet.contains("loaded ABI"), "log was: {}", quiet);

    abisig(&config_path)
        .env_remove("RUST_LOG")
        .args(["--log-level", "debug", "signatures", "--input"])
        .arg(&abi_path)
        .assert()
        .success();
    let verbose = std::fs::read_to_string(&log_path).unwrap();
    assert!(verbose.contains("starting abisig"), "log was: {}", verbose);
    assert!(verbose.contains("loaded ABI"), "log was: {}", verbose);
}

#[test]
fn rust_log_overrides_configured_level() {
    let tmp = tempdir().unwrap();
    let log_path = tmp.path().join("abisig.log");
    let (abi_path, config_path) = setup(tmp.path(), &logging_config("error", &log_path));

    abisig(&config_path)
        .env("RUST_LOG", "debug")
        .args(["signatures", "--input"])
        .arg(&abi_path)
        .assert()
        .success();
    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("loaded ABI"), "log was: {}", log);
}

#[test]
fn invalid_log_level_fails() {
    let tmp = tempdir().unwrap();
    let (_, config_path) = setup(tmp.path(), "");
    abisig(&config_path)
        .env_remove("RUST_LOG")
        .args(["--log-level", "registry=loud", "split", "f()"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid log filter 'registry=loud'"));
}
