//! Common test utilities for mdstitch integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary documentation tree for integration tests
#[allow(dead_code)]
pub struct TestDocs {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the tree root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDocs {
    /// Create a new test tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the tree, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the tree
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the tree
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}
