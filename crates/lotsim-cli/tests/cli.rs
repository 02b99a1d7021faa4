//! CLI command integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lotsim_cmd() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("lotsim").unwrap();
    cmd
}

const L_EXACT: &str =
    "28948022309329048855892746252171976963317496166410141009864396001978282409984";

#[test]
fn list_shows_every_parameter() {
    lotsim_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("N_TERM"))
        .stdout(predicate::str::contains("F_MIN"))
        .stdout(predicate::str::contains("ERC20DRK"))
        .stdout(predicate::str::contains(L_EXACT));
}

#[test]
fn show_l_prints_exact_expansion() {
    lotsim_cmd()
        .args(["show", "L"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name:  L"))
        .stdout(predicate::str::contains(L_EXACT));
}

#[test]
fn show_controller_tag_names_variant() {
    lotsim_cmd()
        .args(["show", "CONTROLLER_TYPE_TAKAHASHI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("value: 1"))
        .stdout(predicate::str::contains("variant: takahashi"));
}

#[test]
fn show_unknown_name_fails() {
    lotsim_cmd()
        .args(["show", "NO_SUCH_PARAM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown parameter"));
}

#[test]
fn check_passes_on_shipped_table() {
    lotsim_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 11 parameters"));
}

#[test]
fn export_json_round_trips() {
    let output = lotsim_cmd()
        .args(["export", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let params = parsed["params"].as_array().unwrap();
    assert_eq!(params.len(), 11);

    let n_term = params
        .iter()
        .find(|p| p["name"] == "N_TERM")
        .expect("N_TERM present");
    assert_eq!(n_term["value"], 2);

    let f_max = params
        .iter()
        .find(|p| p["name"] == "F_MAX")
        .expect("F_MAX present");
    assert_eq!(f_max["value"], 0.99);
}

#[test]
fn export_toml_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("params.toml");

    lotsim_cmd()
        .args(["export", "--format", "toml", "--out"])
        .arg(&path)
        .assert()
        .success();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: toml::Value = text.parse().unwrap();
    let params = parsed["params"].as_array().unwrap();
    assert_eq!(params.len(), 11);
    assert!(text.contains("ERC20DRK"));
}
