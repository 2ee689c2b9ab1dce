//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// A scratch home directory so the binary never reads the real `~/.keel`.
pub struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp home"),
        }
    }

    /// Sandbox whose `~/.keel/config.toml` holds `content`.
    pub fn with_config(content: &str) -> Self {
        let sandbox = Self::new();
        let dir = sandbox.home().join(".keel");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), content).expect("write config");
        sandbox
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Run the `keel` binary with `args`, isolated from the caller's environment.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_keel"))
            .args(args)
            .env("HOME", self.home())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("spawn keel")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
