//! Test utilities & fixtures.
//! Provides access to the small table files under `tests/test-data-int`.

use std::path::{Path, PathBuf};

use reelslots::slots::Symbol;

/// Return the path to the static integration test fixture directory.
#[allow(dead_code)]
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test-data-int")
}

/// Path to one fixture file as a string, the way config files refer to tables.
#[allow(dead_code)] // not every test binary loads fixtures
pub fn fixture(name: &str) -> String {
    fixture_root().join(name).to_string_lossy().to_string()
}

/// A payline from three labels.
#[allow(dead_code)]
pub fn spin(labels: [&str; 3]) -> [Symbol; 3] {
    labels.map(Symbol::from)
}
