use std::process::{Command, Output};

fn vitts(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vitts"))
        .args(args)
        .output()
        .expect("run vitts")
}

fn vitts_b64(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vitts-b64"))
        .args(args)
        .output()
        .expect("run vitts-b64")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn one_argument_prints_usage_and_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_vitts"))
        .arg("Xin chào")
        .current_dir(dir.path())
        .output()
        .expect("run vitts");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage:"));
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[test]
fn three_arguments_fail_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("out.mp3");
    let output = vitts(&["Xin chào", target.to_str().unwrap(), "extra"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage:"));
    assert!(!target.exists());
}

#[test]
fn no_arguments_fail_for_encoded_variant() {
    let output = vitts_b64(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage: vitts-b64"));
}

#[test]
fn invalid_base64_fails_before_synthesis() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("out.mp3");
    let output = vitts_b64(&["not-valid-base64!!", target.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error decoding input:"));
    assert!(output.stdout.is_empty());
    assert!(!target.exists());
}

#[test]
fn blank_text_is_rejected_without_network() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("out.mp3");
    let output = vitts(&["   ", target.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim_end(), "Error generating audio: No text to speak");
    assert!(!target.exists());
}

#[test]
fn unsupported_language_is_an_argument_error() {
    let output = vitts(&["--lang", "klingon", "Xin chào", "out.mp3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Language not supported: klingon"));
}

#[test]
fn help_succeeds_on_stdout() {
    let output = vitts(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--lang"));
}
