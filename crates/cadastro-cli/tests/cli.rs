use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const FORM: &str = "Cliente\nMaria Fernanda Souza\nmaria.souza@example.com\n(11) 98888-7777\nCEP\n01311-000\n";

fn cadastro() -> Command {
    Command::cargo_bin("cadastro").unwrap()
}

#[test]
fn test_parse_stdin() {
    cadastro()
        .args(["parse", "--no-postal", "--no-company"])
        .write_stdin(FORM)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"Maria Fernanda Souza""#))
        .stdout(predicate::str::contains(r#""phone":"11988887777""#))
        .stdout(predicate::str::contains(r#""cep":"01311-000""#));
}

#[test]
fn test_parse_file_to_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("form.txt");
    let output = dir.path().join("form.json");
    std::fs::write(&input, FORM).unwrap();

    cadastro()
        .arg("parse")
        .arg(&input)
        .args(["--no-postal", "--no-company", "--pretty", "--output"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["email"], "maria.souza@example.com");
    assert!(json.get("address").is_none());
}

#[test]
fn test_parse_missing_file() {
    cadastro()
        .args(["parse", "does-not-exist.txt", "--no-postal", "--no-company"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_parse_rejects_binary_input() {
    cadastro()
        .args(["parse", "-", "--no-postal", "--no-company"])
        .write_stdin(vec![0xffu8, 0xfe, 0x00, 0x80])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn test_parse_debug_prints_traces() {
    cadastro()
        .args(["parse", "--debug", "--no-postal", "--no-company"])
        .write_stdin(FORM)
        .assert()
        .success()
        .stderr(predicate::str::contains("Name candidate"));

    cadastro()
        .args(["parse", "--no-postal", "--no-company"])
        .write_stdin(FORM)
        .assert()
        .success()
        .stderr(predicate::str::contains("Name candidate").not());
}

#[test]
fn test_config_init_and_show() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    cadastro()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();

    cadastro()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cadastro()
        .arg("-c")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brasilapi.com.br/api/cep/v2"));
}

#[test]
fn test_config_file_disables_lookups() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"extraction": {"auto_fetch_postal": false, "auto_fetch_company": false}}"#,
    )
    .unwrap();

    cadastro()
        .arg("--config")
        .arg(&path)
        .arg("parse")
        .write_stdin(FORM)
        .assert()
        .success()
        .stdout(predicate::str::contains("Maria Fernanda Souza"))
        .stdout(predicate::str::contains("address").not());
}
