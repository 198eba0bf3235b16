#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the colorpoint binary.
#[macro_export]
macro_rules! colorpoint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("colorpoint"))
    };
}

/// A temporary working directory for running the binary against config files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.colorpoint.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".colorpoint.toml", content);
    }
}

/// A config that allows two extra colors.
pub const EXTRA_COLORS_CONFIG: &str = r#"
version = "1"

[palette]
extra = ["teal", "rojo"]
"#;
