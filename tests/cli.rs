use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;

fn mk_favicon(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mk-favicon"))
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .unwrap()
}

#[test]
fn no_argument_uses_default_source() {
    let output = mk_favicon(&[]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "Using image: /mnt/data/Minimalist_favicon_design_featuring_a_single_styli.png"
    ));
}

#[test]
fn missing_image_reports_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.png");

    let output = mk_favicon(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("The provided image file was not found. Aborting."));
}

#[test]
fn corrupt_image_reports_decode_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.png");
    fs::write(&path, b"not an image at all").unwrap();

    let output = mk_favicon(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not open the image"));
    assert!(!stderr.contains("not found"));
}

#[test]
fn rejects_extra_arguments() {
    let output = mk_favicon(&["a.png", "b.png"]);

    assert!(!output.status.success());
}
