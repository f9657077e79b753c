use image::{Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};

fn appicons(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appicons"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch appicons")
}

#[test]
fn missing_source_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("missing.png");
    let out = dir.path().join("out");
    let output = appicons(&[src.as_path(), Path::new("--out"), out.as_path()]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("error: source image not found: {}", src.display())),
        "stderr was: {}",
        stderr
    );
    assert!(!out.exists());
}

#[test]
fn successful_run_reports_progress() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("logo.png");
    RgbaImage::from_pixel(64, 64, Rgba([0, 128, 255, 255])).save(&src).unwrap();
    let out = dir.path().join("out");
    let output = appicons(&[src.as_path(), Path::new("--out"), out.as_path()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[+] Generating iOS AppIcon.appiconset"), "{}", stdout);
    assert!(stdout.contains("[+] Generating Android adaptive icons"), "{}", stdout);
    assert!(stdout.contains("15 icons written"), "{}", stdout);
    assert!(stdout.contains(&format!("Example input used: {}", src.display())), "{}", stdout);
    assert!(out.join("AppIcon.appiconset/Contents.json").is_file());
}
