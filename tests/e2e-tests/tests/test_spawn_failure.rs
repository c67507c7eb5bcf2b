//! A child that cannot be launched must produce a diagnostic and the
//! reserved internal exit code, without hanging.

use e2e_tests::get_sigwrap_path;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

#[test]
fn test_missing_child_program() {
    let mut child = Command::new(get_sigwrap_path())
        .arg("/nonexistent/sigwrap-e2e-missing-program")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sigwrap");

    let status = child
        .wait_timeout(Duration::from_secs(10))
        .expect("Failed to wait")
        .expect("sigwrap did not exit after spawn failure");

    let mut stderr = String::new();
    use std::io::Read;
    child
        .stderr
        .take()
        .expect("stderr not captured")
        .read_to_string(&mut stderr)
        .expect("Failed to read stderr");

    assert_eq!(status.code(), Some(255));
    assert!(
        stderr.contains("sigwrap: child:"),
        "diagnostic missing from stderr: {stderr:?}"
    );
}
