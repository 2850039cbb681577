//! Test environment builder for isolated manifest-split runs.
//!
//! `TestEnv` lays out a small source tree in a temp directory, with fake
//! `ninja` and `ckati_stamp_dump` scripts, and runs the binary from its root.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Tree with the default fixtures and working fake tools.
    #[cfg(unix)]
    pub fn new() -> Self {
        let env = Self::bare();
        env.write("default.xml", MANIFEST);
        env.write("repo-list.txt", REPO_LIST);
        env.write("out/target/product/phone/module-info.json", MODULE_INFO);
        env.write("out/combined-acme_phone.ninja", "");
        env.write("out/.kati_stamp-acme_phone", "");
        env.write("device/acme/phone/device.mk", "PRODUCT_NAME := acme_phone\n");
        env.write("device/acme/phone/Android.mk", "");
        env.write_tool("tools/ninja", FAKE_NINJA);
        env.write_tool(STAMP_DUMP_PATH, FAKE_STAMP_DUMP);
        env
    }

    /// Empty tree.
    pub fn bare() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_manifest-split")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write an executable script.
    #[cfg(unix)]
    pub fn write_tool(&self, relative: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write(relative, script);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Arguments for a typical split of `foo` using explicit paths.
    pub fn split_args(&self) -> Vec<String> {
        [
            "foo",
            "--manifest",
            "default.xml",
            "--split-manifest",
            "split.xml",
            "--repo-list",
            "repo-list.txt",
            "--module-info",
            "out/target/product/phone/module-info.json",
            "--ninja-build",
            "out/combined-acme_phone.ninja",
            "--kati-stamp",
            "out/.kati_stamp-acme_phone",
            "--ninja-binary",
            "tools/ninja",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with a clean build environment plus `env_vars`.
    pub fn run_with_env<S: AsRef<str>>(&self, args: &[S], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args.iter().map(AsRef::as_ref))
            .env_remove("ANDROID_BUILD_TOP")
            .env_remove("TARGET_PRODUCT")
            .env_remove("ANDROID_PRODUCT_OUT")
            .env_remove("MANIFEST_SPLIT_NINJA")
            .env_remove("MANIFEST_SPLIT_STAMP_DUMP")
            .env_remove("RUST_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute manifest-split");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// `<project>` lines of the written split manifest, trimmed.
    pub fn split_projects(&self, relative: &str) -> Vec<String> {
        self.read(relative)
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with("<project "))
            .map(str::to_string)
            .collect()
    }

    pub fn root_str(&self) -> String {
        path_str(self.root.path())
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
