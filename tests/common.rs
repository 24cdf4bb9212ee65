#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn ub() -> Command {
    cargo_bin_cmd!("userbook")
}

/// Scratch directory holding the test database and an (absent) config file,
/// so the user's own ~/.userbook is never read.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn db_path(&self) -> String {
        self.dir.path().join("users.db").to_string_lossy().to_string()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("userbook.conf")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command preconfigured with `--db` and `--config` for this sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = ub();
        cmd.arg("--db")
            .arg(self.db_path())
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}

/// Console input for one user, in prompt order.
pub fn user_input(first: &str, last: &str, birthday: &str, email: &str, password: &str) -> String {
    format!("{first}\n{last}\n{birthday}\n{email}\n{password}\n")
}

pub fn ada() -> String {
    user_input("Ada", "Lovelace", "10/12/1815", "ada@x.com", "pw1")
}

pub fn alan() -> String {
    user_input("Alan", "Turing", "23/6/1912", "alan@x.com", "pw2")
}
