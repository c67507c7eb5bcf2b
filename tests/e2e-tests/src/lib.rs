// E2E test framework for the sigwrap supervisor


pub use harness::Supervised;

use std::env;
use std::path::PathBuf;

/// Get the path to the sigwrap binary
pub fn get_sigwrap_path() -> PathBuf {
    sibling_binary("sigwrap")
}

/// Get the path to the testexe binary
pub fn get_testexe_path() -> PathBuf {
    sibling_binary("testexe")
}

fn sibling_binary(name: &str) -> PathBuf {
    let mut path = env::current_exe()
        .expect("Failed to get current exe path")
        .parent()
        .expect("Failed to get parent dir")
        .to_path_buf();

    // If we're in deps/, go up one level
    if path.ends_with("deps") {
        path.pop();
    }

    path.push(name);

    if !path.exists() {
        panic!(
            "Binary not found at: {} (build the workspace first)",
            path.display()
        );
    }

    path
}

/// Create a unique scratch directory for one test
pub fn create_test_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("sigwrap-e2e-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create test dir");
    dir
}
