use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use std::process::Command;

fn should_run() -> bool {
    std::env::var("VITTS_E2E").map(|v| v == "1").unwrap_or(false)
}

fn assert_audio_file(path: &Path) {
    let data = std::fs::read(path).expect("read audio");
    assert!(data.len() > 100, "audio file suspiciously small");
}

#[test]
fn cli_speaks_literal_text() {
    if !should_run() {
        eprintln!("Skipping E2E test; set VITTS_E2E=1 to enable.");
        return;
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("xin_chao.mp3");
    let output = Command::new(env!("CARGO_BIN_EXE_vitts"))
        .args(["Xin chào", target.to_str().unwrap()])
        .output()
        .expect("run vitts");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(target.to_str().unwrap()));
    assert_audio_file(&target);
}

#[test]
fn cli_speaks_encoded_long_text() {
    if !should_run() {
        eprintln!("Skipping E2E test; set VITTS_E2E=1 to enable.");
        return;
    }

    let text = "Hôm nay trời đẹp, chúng ta cùng nhau đi dạo quanh hồ. ".repeat(5);
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("long.mp3");
    let output = Command::new(env!("CARGO_BIN_EXE_vitts-b64"))
        .args([STANDARD.encode(text.as_bytes()).as_str(), target.to_str().unwrap()])
        .output()
        .expect("run vitts-b64");

    assert!(output.status.success());
    assert_audio_file(&target);
    assert!(!dir.path().join("long.mp3.part").exists());
}
