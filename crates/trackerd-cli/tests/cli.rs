use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::{Value, json};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("trackerd"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn golden_uplink(case: &str) -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join(case)
        .join("uplink.json")
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_lists_uplink_commands() {
    cmd()
        .arg("uplink")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("decode").and(contains("batch")));
}

#[test]
fn decode_hex_status_uplink() {
    let assert = cmd()
        .args(["uplink", "decode", "--fport", "7", "0c8040"])
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(
        value,
        json!({
            "data": {
                "Alarm": false,
                "BatP": 33,
                "BatV": 3.2,
                "LED_Status": "OFF",
                "Mode": 1
            }
        })
    );
}

#[test]
fn decode_base64_device_info() {
    let assert = cmd()
        .args(["uplink", "decode", "--fport", "5", "--base64", "EwFHAf8OEQ=="])
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value["data"]["Sensor_Mode"], "TrackerD");
    assert_eq!(value["data"]["Firmware_Version"], "1.4.7");
    assert_eq!(value["data"]["Sub_Band"], "NULL");
}

#[test]
fn unknown_fport_is_not_a_failure() {
    let assert = cmd()
        .args(["uplink", "decode", "--fport", "99", "0102"])
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value, json!({ "data": { "error": "Unknown fPort" } }));
}

#[test]
fn strict_fails_on_unknown_fport() {
    cmd()
        .args(["uplink", "decode", "--fport", "99", "0102", "--strict"])
        .assert()
        .failure()
        .stderr(contains("could not be decoded").and(contains("hint:")));
}

#[test]
fn strict_fails_on_short_payload() {
    cmd()
        .args(["uplink", "decode", "--fport", "6", "0102", "--strict"])
        .assert()
        .failure()
        .stdout(contains("payload too short for beacon"));
}

#[test]
fn invalid_hex_shows_error_and_hint() {
    cmd()
        .args(["uplink", "decode", "--fport", "7", "0c80z"])
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn pretty_and_compact_conflict() {
    cmd()
        .args(["uplink", "decode", "--fport", "7", "0c8040", "--pretty", "--compact"])
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn batch_writes_output_file() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("uplinks.json");
    let output = temp.path().join("out").join("decoded.json");
    fs::write(
        &input,
        r#"[{"fPort":7,"bytes":[12,128,64]},{"fPort":99,"bytes":[1]},{"fPort":10,"bytes":[]}]"#,
    )
    .expect("write input");

    cmd()
        .args(["uplink", "batch"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("OK:"));

    let decoded: Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read output")).expect("json");
    let entries = decoded.as_array().expect("array output");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["data"]["Mode"], 1);
    assert_eq!(entries[1]["data"]["error"], "Unknown fPort");
    assert_eq!(
        entries[2]["errors"][0],
        "payload too short for mac scan: need 24 bytes, got 0"
    );
}

#[test]
fn batch_accepts_single_golden_uplink() {
    let assert = cmd()
        .args(["uplink", "batch"])
        .arg(golden_uplink("beacon"))
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value[0]["data"]["MAJOR"], 10001);
    assert_eq!(value[0]["data"]["UUID"], "fda50693a4e24fb1afcfc6eb07647825");
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("decoded.json");

    cmd()
        .args(["uplink", "batch"])
        .arg(golden_uplink("status"))
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn batch_missing_input_shows_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.json");

    cmd()
        .args(["uplink", "batch"])
        .arg(missing)
        .assert()
        .failure()
        .stderr(contains("input file not found").and(contains("hint:")));
}

#[test]
fn batch_glob_with_multiple_matches_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    fs::write(temp.path().join("a.json"), "[]").expect("write a");
    fs::write(temp.path().join("b.json"), "[]").expect("write b");

    cmd()
        .args(["uplink", "batch"])
        .arg(temp.path().join("*.json"))
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn batch_rejects_invalid_json() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("bad.json");
    fs::write(&input, r#"{"bytes":"nope"}"#).expect("write input");

    cmd()
        .args(["uplink", "batch"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("invalid uplink JSON"));
}
