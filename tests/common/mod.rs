//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `embedded_index`: the bundled certitude index, decoded
//! - `workspace`: an empty temporary directory for on-disk loading tests

use docsearch_index::SymbolIndex;
use rstest::fixture;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The eight variants of `ValidationResult`, in declaration order.
#[allow(dead_code)] // Used by some integration test crates only
pub const VALIDATION_RESULT_VARIANTS: [&str; 8] = [
    "Trusted",
    "NotTrusted",
    "MalformedCertificateInChain",
    "UnableToBuildTrustStore",
    "ErrorDuringValidation",
    "MissingFunctionality",
    "UserAuthenticationRequired",
    "MalformedHostname",
];

/// A temporary directory that is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes a file relative to the workspace root and returns its full path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }
}

/// Wraps record JSON bodies into a complete search index script.
#[allow(dead_code)]
pub fn script_with(records: &[(&str, &str)]) -> String {
    let mut script = String::from("var searchIndex = {};\n");
    for (key, record) in records {
        writeln!(script, "searchIndex['{}'] = {};", key, record).unwrap();
    }
    script.push_str("initSearch(searchIndex);\n");
    script
}

#[fixture]
pub fn embedded_index() -> SymbolIndex {
    docsearch_index::logging::init();
    docsearch_index::embedded().expect("bundled index must decode")
}

#[allow(dead_code)]
#[fixture]
pub fn workspace() -> TempWorkspace {
    TempWorkspace::new()
}
