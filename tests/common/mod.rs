//! Common test utilities for tsgen CLI tests.
//!
//! Every run happens in a fresh temp directory with an isolated HOME so the
//! operator's own configuration never leaks into a test.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// The six files every generated project contains
pub const EXPECTED_FILES: [&str; 6] = [
    ".dockerignore",
    ".gitignore",
    "Dockerfile",
    "package.json",
    "src/index.ts",
    "tsconfig.json",
];

/// Bundled files, as named inside an assets directory
pub const BUNDLED: [(&str, &[u8]); 6] = [
    ("index.ts", include_bytes!("../../files/index.ts")),
    ("typescript.json", include_bytes!("../../files/typescript.json")),
    ("package.template", include_bytes!("../../files/package.template")),
    ("Dockerfile", include_bytes!("../../files/Dockerfile")),
    ("gitignore", include_bytes!("../../files/gitignore")),
    ("dockerignore", include_bytes!("../../files/dockerignore")),
];

/// Result of running the tsgen binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated working directory plus home directory
pub struct TestEnv {
    pub work: TempDir,
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work: tempfile::tempdir().expect("Failed to create work dir"),
            home: tempfile::tempdir().expect("Failed to create home dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work.path().join(relative)
    }

    /// Run tsgen from the work directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tsgen"));
        cmd.current_dir(self.work.path())
            .args(args)
            .stdin(Stdio::null())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("TSGEN_ASSETS_DIR")
            .env_remove("TSGEN_DEFAULT_PROJECT_NAME")
            .env_remove("TSGEN_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute tsgen"))
    }

    /// Write a complete assets directory, leaving out the named files
    pub fn write_assets(&self, dir: &str, omit: &[&str]) -> PathBuf {
        let root = self.path(dir);
        std::fs::create_dir_all(&root).expect("Failed to create assets dir");
        for (name, contents) in BUNDLED {
            if !omit.contains(&name) {
                std::fs::write(root.join(name), contents).expect("Failed to write asset");
            }
        }
        root
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// All files below `root`, relative and with `/` separators
pub fn list_files(root: &Path) -> BTreeSet<String> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeSet<String>) {
        for entry in std::fs::read_dir(dir).expect("Failed to read dir") {
            let path = entry.expect("Failed to read entry").path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                let parts: Vec<String> = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().to_string())
                    .collect();
                out.insert(parts.join("/"));
            }
        }
    }

    let mut out = BTreeSet::new();
    walk(root, root, &mut out);
    out
}
