//! End-to-end CLI tests: scripts in, documents out.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn script_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp script");
    file.write_all(contents.as_bytes()).expect("write script");
    file
}

fn wiregrid() -> Command {
    Command::cargo_bin("wiregrid-cli").expect("binary builds")
}

#[test]
fn run_prints_committed_wires() {
    let script = script_file(
        "add battery\n\
         add resistor\n\
         move 1 100 300\n\
         move 2 400 100\n\
         port 1 right\n\
         port 2 left\n",
    );

    wiregrid()
        .arg("run")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes (2):"))
        .stdout(predicate::str::contains("Wires (1):"))
        .stdout(predicate::str::contains("1.Right -> 2.Left [auto]"));
}

#[test]
fn json_output_is_machine_readable() {
    let script = script_file(
        "add battery\n\
         add resistor\n\
         port 1 right\n\
         click 300 100\n\
         port 2 left\n",
    );

    let output = wiregrid()
        .arg("run")
        .arg(script.path())
        .arg("--format")
        .arg("json")
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let document: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON document");
    assert_eq!(document["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(document["wires"].as_array().unwrap().len(), 1);
    assert_eq!(document["wires"][0]["manual"], true);
    assert_eq!(document["wires"][0]["path"][1]["x"], 300);
}

#[test]
fn dangling_draft_appears_in_output() {
    let script = script_file(
        "add battery\n\
         port 1 right\n\
         pointer 400 200\n",
    );

    wiregrid()
        .arg("run")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft: from 1.Right"));
}

#[test]
fn bad_script_reports_line_and_fails() {
    let script = script_file("add battery\nwobble 3\n");

    wiregrid()
        .arg("run")
        .arg(script.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_file_exits_with_io_error() {
    wiregrid()
        .arg("run")
        .arg("no/such/script.txt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn kinds_lists_the_component_table() {
    wiregrid()
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("resistor"))
        .stdout(predicate::str::contains("ground"))
        .stdout(predicate::str::contains("Ω"));
}
