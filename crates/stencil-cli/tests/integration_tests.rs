//! Integration tests for the `stencil` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"{
    "project_name": "demo",
    "backend": { "framework": "flask", "dependencies": ["flask"] },
    "database": { "type": "sqlite", "schema": "CREATE TABLE users (id INTEGER);\n" }
}"#;

const TEMPLATES: &str = r#"{
    "backend": { "flask": "from flask import Flask\napp = Flask('{project_name}')\n" },
    "frontend": { "react": "// {project_name}\n" },
    "database": {}
}"#;

/// A temp dir holding `config.json` and `templates.json`.
fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), CONFIG).unwrap();
    fs::write(temp.path().join("templates.json"), TEMPLATES).unwrap();
    temp
}

/// The binary, isolated from the user's configuration and `.env`.
fn stencil(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stencil"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_mentions_subcommands() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_creates_the_demo_project() {
    let temp = workspace();

    stencil(temp.path())
        .args(["new", "config.json", "templates.json", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backend/app.py"))
        .stdout(predicate::str::contains("no frontend framework configured"));

    let root = temp.path().join("out/demo");
    assert_eq!(
        fs::read_to_string(root.join("backend/app.py")).unwrap(),
        "from flask import Flask\napp = Flask('demo')\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("database/schema.sql")).unwrap(),
        "CREATE TABLE users (id INTEGER);\n"
    );
    assert!(!root.join("frontend").exists());
    assert!(
        fs::read_to_string(root.join("install_dependencies.sh"))
            .unwrap()
            .contains("pip install flask\n")
    );
}

#[test]
fn new_defaults_to_current_directory() {
    let temp = workspace();

    stencil(temp.path())
        .args(["new", "config.json", "templates.json"])
        .assert()
        .success();

    assert!(temp.path().join("demo/backend/app.py").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = workspace();

    stencil(temp.path())
        .args(["new", "config.json", "templates.json", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("pip install flask"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn json_summary_is_parseable() {
    let temp = workspace();

    let assert = stencil(temp.path())
        .args([
            "--output-format",
            "json",
            "new",
            "config.json",
            "templates.json",
        ])
        .assert()
        .success();

    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["created"].as_array().unwrap().len(), 2);
    assert_eq!(summary["warnings"][0]["section"], "frontend");
    assert_eq!(summary["warnings"][0]["reason"]["kind"], "missing");
}

#[test]
fn missing_config_exits_3() {
    let temp = workspace();

    stencil(temp.path())
        .args(["new", "nope.json", "templates.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn malformed_registry_exits_2() {
    let temp = workspace();
    fs::write(temp.path().join("templates.json"), "{ broken").unwrap();

    stencil(temp.path())
        .args(["new", "config.json", "templates.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("template registry"));
}

#[test]
fn path_like_project_name_exits_2() {
    let temp = workspace();
    fs::write(
        temp.path().join("config.json"),
        r#"{ "project_name": "../escape" }"#,
    )
    .unwrap();

    stencil(temp.path())
        .args(["new", "config.json", "templates.json"])
        .assert()
        .code(2);

    assert!(!temp.path().parent().unwrap().join("escape").exists());
}

#[test]
fn missing_templates_argument_exits_2() {
    let temp = workspace();

    stencil(temp.path())
        .args(["new", "config.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("defaults.templates"));
}

#[test]
fn templates_default_comes_from_config_file() {
    let temp = workspace();
    fs::write(
        temp.path().join("stencil.toml"),
        "[defaults]\ntemplates = \"templates.json\"\noutput_dir = \"generated\"\n",
    )
    .unwrap();

    stencil(temp.path())
        .args(["-c", "stencil.toml", "new", "config.json"])
        .assert()
        .success();

    assert!(temp.path().join("generated/demo/backend/app.py").exists());
}

#[test]
fn environment_overrides_output_dir() {
    let temp = workspace();

    stencil(temp.path())
        .env("STENCIL_DEFAULTS__OUTPUT_DIR", "from-env")
        .args(["new", "config.json", "templates.json"])
        .assert()
        .success();

    assert!(temp.path().join("from-env/demo").is_dir());
}

#[test]
fn missing_explicit_config_exits_4() {
    let temp = workspace();

    stencil(temp.path())
        .args(["-c", "absent.toml", "new", "config.json", "templates.json"])
        .assert()
        .code(4);
}

#[test]
fn list_shows_registry_names() {
    let temp = workspace();

    stencil(temp.path())
        .args(["list", "templates.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flask"))
        .stdout(predicate::str::contains("react"));

    stencil(temp.path())
        .args(["list", "templates.json", "--category", "frontend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("react"))
        .stdout(predicate::str::contains("flask").not());
}

#[test]
fn init_local_writes_config_once() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(temp.path().join(".stencil.toml").exists());

    stencil(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stencil"));
}
