//! Tests for the `pathpack` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

fn pathpack() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pathpack"))
}

#[test]
fn test_file_input_uses_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("matHome.svg");
    fs::write(&input, r#"<svg><path d="M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z"/></svg>"#).unwrap();

    let output = pathpack().arg(&input).arg("--types").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "export const matHome = 'M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z'\n\
         export declare const matHome: string;\n"
    );
}

#[test]
fn test_stdin_with_name_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.txt");

    let mut child = pathpack()
        .args(["-", "--name", "dot", "--output"])
        .arg(&out_path)
        .stdin(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"<svg viewBox="0 0 16 16"><circle cx="8" cy="8" r="2"/></svg>"#)
        .unwrap();
    assert!(child.wait().unwrap().success());

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        "export const dot = 'M8 8 m-2,0 a2,2 0 1,0 4,0 a2,2 0 1,0 -4,0|0 0 16 16'\n"
    );
}

#[test]
fn test_stdin_requires_name() {
    let output = pathpack().stdin(Stdio::null()).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_unknown_tag_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("label.svg");
    fs::write(&input, r#"<svg><text>A</text></svg>"#).unwrap();

    let output = pathpack().arg(&input).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UnknownTagType"), "{stderr}");
}
