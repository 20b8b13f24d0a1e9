use std::io::Write;
use std::process::{Command, Stdio};

fn ocrpipe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ocrpipe"))
}

#[test]
fn test_missing_arguments_print_usage_and_fail() {
    let output = ocrpipe().output().expect("Failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "expected usage text, got: {stderr}");
}

#[test]
fn test_extra_arguments_are_rejected() {
    let output = ocrpipe()
        .args(["first.png", "second.png"])
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
}

#[test]
fn test_missing_image_reports_decode_failure_without_prompting() {
    let output = ocrpipe()
        .arg("no-such-image.png")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("input image"),
        "expected a decode diagnostic, got: {stdout}"
    );
    // Failure short-circuits the run: no output file is ever requested
    assert!(!stdout.contains("Enter output file name"));
}

#[test]
fn test_undecodable_file_reports_decode_failure() {
    let mut file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(b"not an image at all").unwrap();

    let output = ocrpipe()
        .arg(file.path())
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("input image"));
    assert!(!stdout.contains("Enter output file name"));
}
