//! Runs the built `theodorus` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

const REFERENCE_SVG: &str = include_str!("../../theodorus-svg/tests/fixtures/sqrt.svg");

fn theodorus(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_theodorus"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to spawn theodorus")
}

#[test]
fn render_defaults_reproduce_reference_figure() {
    let dir = tempfile::tempdir().unwrap();
    let output = theodorus(dir.path(), &["render"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let written = std::fs::read_to_string(dir.path().join("sqrt.svg")).unwrap();
    assert_eq!(written, REFERENCE_SVG);
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("theodorus.toml"),
        "[spiral]\nsteps = 4\ncanvas_size = 100.0\n",
    )
    .unwrap();

    let output = theodorus(dir.path(), &["render", "-o", "small.svg"]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(dir.path().join("small.svg")).unwrap();
    assert!(written.starts_with("<svg height=\"100\" width=\"100\""));
    assert_eq!(written.matches("<polygon ").count(), 4);
}

#[test]
fn frames_level_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let output = theodorus(
        dir.path(),
        &[
            "frames", "--steps", "13", "--triangle-scale", "28.75", "--offset-y", "0", "--level",
            "13",
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("<polygon ").count(), 13);
    assert!(stdout.contains(r#"from="0 115 115" to="360 115 115" dur="10s""#));
}

#[test]
fn invalid_canvas_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = theodorus(dir.path(), &["render", "--canvas-size", "-5"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("canvas_size"));
    assert!(!dir.path().join("sqrt.svg").exists());
}
