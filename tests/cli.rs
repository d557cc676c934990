//! # 命令行退出码测试
//!
//! 以子进程运行 `javafmt`，确认宿主看到的退出码与输出。

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn javafmt(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_javafmt"))
        .args(args)
        .arg("--project-dir")
        .arg(dir)
        .arg("--report")
        .arg(dir.join("build/report.txt"))
        .current_dir(dir)
        .env_remove("JAVAFMT_CONFIG")
        .output()
        .unwrap()
}

fn module(content: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src/main/java");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("App.java"), content).unwrap();
    dir
}

#[test]
fn test_violation_exits_non_zero() {
    let dir = module("class App {\n\tint x;\n}\n");

    let output = javafmt(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Java code is not formatted correctly"));
    assert!(stderr.contains("report.txt"));
    assert!(dir.path().join("build/report.txt").is_file());
}

#[test]
fn test_clean_check_exits_zero() {
    let dir = module("class App {\n    int x;\n}\n");

    let output = javafmt(dir.path(), &["check"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Java code is formatted correctly."));
}

#[test]
fn test_format_then_check_exits_zero() {
    let dir = module("class App {\n\tint x;  \n}\n");

    assert!(javafmt(dir.path(), &["format"]).status.success());
    assert!(javafmt(dir.path(), &["check"]).status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("src/main/java/App.java")).unwrap(),
        "class App {\n    int x;\n}\n"
    );
}

#[test]
fn test_invalid_encoding_exits_non_zero() {
    let dir = module("class App {}\n");

    let output = javafmt(dir.path(), &["check", "--encoding", "klingon"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported encoding"));
}
