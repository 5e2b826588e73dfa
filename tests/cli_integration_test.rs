//! Runs the compiled binary and checks its output.

mod common;

use common::data_path;
use serde_json::Value;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn wsmrank(args: &[&str], dir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wsmrank"))
        .args(args)
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute wsmrank")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("wsmrank exited with {}", output.status);
    }
}

#[test]
fn test_rank_sample_as_json() {
    let dir = TempDir::new().unwrap();
    let output = wsmrank(&["rank", "--sample", "--format", "json"], &dir);
    assert_success(&output);

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert_eq!(json["metadata"]["method"], "weighted_sum_model");
    assert_eq!(
        json["recommended"]["record"]["name"],
        "Pemandian Alam Sembabe"
    );
    assert_eq!(json["ranking"].as_array().unwrap().len(), 10);
    assert_eq!(json["summary"]["record_count"], 10);
}

#[test]
fn test_rank_file_with_weights_and_top() {
    let dir = TempDir::new().unwrap();
    let data = data_path("sample_destinations.csv");
    let output = wsmrank(
        &[
            "rank",
            data.to_str().unwrap(),
            "--weights",
            "30,25,20,25",
            "--top",
            "3",
            "--format",
            "json",
        ],
        &dir,
    );
    assert_success(&output);

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let ranking = json["ranking"].as_array().unwrap();
    assert_eq!(ranking.len(), 3);
    assert_eq!(ranking[0]["rank"], 1);
    assert_eq!(ranking[2]["rank"], 3);
}

#[test]
fn test_rank_rejects_weights_not_totalling_hundred() {
    let dir = TempDir::new().unwrap();
    let output = wsmrank(&["rank", "--sample", "--weights", "40,40,40,40"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid weights"), "stderr: {stderr}");
}

#[test]
fn test_rank_plain_terminal_report() {
    let dir = TempDir::new().unwrap();
    let output = wsmrank(&["rank", "--sample", "--plain"], &dir);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Best destination: Pemandian Alam Sembabe"));
    assert!(stdout.contains("Score:    0.950"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_rank_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.md");
    let output = wsmrank(
        &[
            "rank",
            "--sample",
            "--format",
            "markdown",
            "--output",
            report.to_str().unwrap(),
        ],
        &dir,
    );
    assert_success(&output);

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("# Destination Recommendation"));
    assert!(content.contains("**Pemandian Alam Sembabe**"));
}

#[test]
fn test_config_supplies_default_format() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".wsmrank.toml"),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let output = wsmrank(&["rank", "--sample"], &dir);
    assert_success(&output);
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ranking"][0]["rank"], 1);
}

#[test]
fn test_template_to_stdout() {
    let dir = TempDir::new().unwrap();
    let output = wsmrank(&["template", "--output", "-"], &dir);
    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Destinasi,Jarak (km),Biaya (ribu Rp),Fasilitas (1-5),Rating (1-5)\n"
    );
}

#[test]
fn test_template_default_file_name() {
    let dir = TempDir::new().unwrap();
    let output = wsmrank(&["template"], &dir);
    assert_success(&output);
    assert!(dir.path().join("template_destinasi.csv").exists());
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    assert_success(&wsmrank(&["init"], &dir));
    assert!(dir.path().join(".wsmrank.toml").exists());

    let second = wsmrank(&["init"], &dir);
    assert!(!second.status.success());
    assert_success(&wsmrank(&["init", "--force"], &dir));
}

#[test]
fn test_wizard_reads_commands_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_wsmrank"))
        .args(["wizard", "--plain"])
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn wsmrank");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"sample\ncontinue\ncompute\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[step 1/3"));
    assert!(stdout.contains("Best destination: Pemandian Alam Sembabe"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_rank_fails_when_report_cannot_be_written() {
    let dir = TempDir::new().unwrap();
    for format in ["markdown", "json", "terminal"] {
        let output = wsmrank(
            &["rank", "--sample", "--format", format, "--output", "/dev/full"],
            &dir,
        );
        assert!(!output.status.success(), "{format} report exited 0");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to write report"), "stderr: {stderr}");
    }
}
