// CLI integration tests for the module calling convention.
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_ansible-echo");
    Command::new(exe)
}

fn parse_json_line(output: &Output) -> Value {
    let text = std::str::from_utf8(&output.stdout).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one line: {text:?}");
    serde_json::from_str(lines[0]).expect("valid json")
}

fn write_args(dir: &Path, args: Value) -> String {
    let path = dir.join("args.json");
    fs::write(&path, serde_json::to_vec(&args).expect("encode")).expect("write args");
    path.to_str().expect("utf8 path").to_string()
}

#[test]
fn valid_args_succeed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_args(
        temp.path(),
        json!({
            "msg": "hello",
            "state": "present",
            "_ansible_module_name": "ansible-echo",
            "_ansible_verbosity": 0
        }),
    );

    let output = cmd().arg(&path).output().expect("run");
    assert_eq!(output.status.code(), Some(0));
    let value = parse_json_line(&output);
    assert_eq!(value["changed"], json!(true));
    assert_eq!(value["failed"], json!(false));
    assert_eq!(value["stdout"], json!("hello"));
    assert_eq!(
        value["invocation"]["module_args"],
        json!({"msg": "hello", "state": "present"})
    );
}

#[test]
fn no_argument_exit_code() {
    let output = cmd().output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value = parse_json_line(&output);
    assert_eq!(value["failed"], json!(true));
    assert_eq!(value["msg"], json!("No argument file provided"));
}

#[test]
fn extra_argument_exit_code() {
    let output = cmd().args(["a.json", "b.json"]).output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value = parse_json_line(&output);
    assert_eq!(value["msg"], json!("No argument file provided"));
}

#[test]
fn missing_file_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("nope.json");

    let output = cmd().arg(&path).output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value = parse_json_line(&output);
    let msg = value["msg"].as_str().expect("msg");
    assert!(
        msg.starts_with("Could not read configuration file: "),
        "{msg}"
    );
}

#[test]
fn malformed_json_fails_through_envelope() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("args.json");
    fs::write(&path, b"{not json").expect("write");

    let output = cmd().arg(&path).output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value = parse_json_line(&output);
    assert!(
        value["msg"]
            .as_str()
            .unwrap()
            .starts_with("argument file is not valid JSON")
    );
}

#[test]
fn requested_failure_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_args(temp.path(), json!({"fail": "True"}));

    let output = cmd().arg(&path).output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value = parse_json_line(&output);
    assert_eq!(value["failed"], json!(true));
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_args(temp.path(), json!({"msg": "x", "_ansible_verbosity": 3}));

    let output = cmd()
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(0));
    parse_json_line(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("echo module invoked"));
}

#[test]
fn captured_stderr_has_no_color_codes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_args(temp.path(), json!({"msg": "x", "_ansible_verbosity": 2}));

    let output = cmd()
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("echo module invoked"));
    assert!(!stderr.contains('\u{1b}'), "{stderr:?}");
}

#[test]
fn decode_failure_is_logged_to_stderr() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("args.json");
    fs::write(&path, b"{not json").expect("write");

    let output = cmd()
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    parse_json_line(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not decode module arguments"));
}

#[test]
fn read_failure_is_logged_to_stderr() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("nope.json");

    let output = cmd()
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    parse_json_line(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not read argument file"));
}
