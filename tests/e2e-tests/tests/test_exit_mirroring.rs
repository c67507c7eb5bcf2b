//! The supervisor's exit code must equal the child's own exit code for any
//! normal exit, clean or not.

use e2e_tests::Supervised;
use std::time::Duration;

const EXIT_TIMEOUT: Duration = Duration::from_secs(10);

#[test]
fn test_mirrors_clean_exit() {
    let run = Supervised::launch("clean-exit", &["--run-duration", "1", "--exit-code", "0"]);
    assert_eq!(run.wait_for_exit(EXIT_TIMEOUT), 0);
}

#[test]
fn test_mirrors_nonzero_exit() {
    let run = Supervised::launch("nonzero-exit", &["--run-duration", "1", "--exit-code", "3"]);
    assert_eq!(run.wait_for_exit(EXIT_TIMEOUT), 3);
}

#[test]
fn test_mirrors_high_exit_code() {
    let run = Supervised::launch("high-exit", &["--run-duration", "1", "--exit-code", "254"]);
    assert_eq!(run.wait_for_exit(EXIT_TIMEOUT), 254);
}
