//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run the modv binary in `dir`, feeding `input` on a piped stdin.
///
/// The binary refuses a terminal stdin, so every invocation here goes
/// through a pipe, exactly like `go mod graph | modv ...`.
pub fn run_modv_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_modv"))
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn modv binary");

    child
        .stdin
        .as_mut()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("Failed to write input");

    child
        .wait_with_output()
        .expect("Failed to wait for modv binary")
}
