//! Shared testing harness for `stencil` integration tests.

use assert_cmd::Command;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::FakeTools;

pub(crate) const TEMPLATE_NAME: &str = "example-go-cli";

/// GIF header followed by the template token, as an image might embed it.
pub(crate) fn logo_bytes() -> Vec<u8> {
    let mut bytes = b"GIF89a\x01\x00\x01\x00\x80\xff\x00".to_vec();
    bytes.extend_from_slice(TEMPLATE_NAME.as_bytes());
    bytes.extend_from_slice(&[0x00, 0xc3, 0x28, 0x3b]);
    bytes
}

/// Isolated projects directory holding a git-backed template and fake tools.
pub(crate) struct TestContext {
    root: TempDir,
    projects: PathBuf,
    tools: FakeTools,
}

impl TestContext {
    /// Create a projects root containing a committed `example-go-cli` template.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let base = fs::canonicalize(root.path()).expect("Failed to canonicalize temp dir");
        let projects = base.join("projects");
        fs::create_dir_all(&projects).expect("Failed to create projects directory");
        let tools = FakeTools::install(&base.join("tools"));

        let ctx = Self { root, projects, tools };
        ctx.write_template_file("README.md", b"example-go-cli is great\n");
        ctx.write_template_file(
            "go.mod",
            b"module go.bbkane.com/example-go-cli\n\ngo 1.22\n",
        );
        ctx.write_template_file(
            "main.go",
            b"package main\n\n// example-go-cli entrypoint\nfunc main() {}\n",
        );
        ctx.write_template_file("logo.gif", &logo_bytes());
        ctx.write_template_file("rename.py", b"#!/usr/bin/env python3\n");
        ctx.write_template_file("diff_file.py", b"#!/usr/bin/env python3\n");
        ctx.write_template_file(".gitignore", b"/dist\n");

        ctx.git(&ctx.template(), &["init", "--initial-branch=main"]);
        ctx.git(&ctx.template(), &["add", "."]);
        ctx.git(&ctx.template(), &["commit", "-m", "template"]);
        ctx
    }

    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn projects(&self) -> &Path {
        &self.projects
    }

    pub(crate) fn template(&self) -> PathBuf {
        self.projects.join(TEMPLATE_NAME)
    }

    pub(crate) fn project(&self, name: &str) -> PathBuf {
        self.projects.join(name)
    }

    pub(crate) fn tools(&self) -> &FakeTools {
        &self.tools
    }

    pub(crate) fn write_template_file(&self, relative: &str, content: &[u8]) {
        let path = self.template().join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create template dirs");
        fs::write(path, content).expect("Failed to write template file");
    }

    /// Write a file into a sibling project, creating the project directory.
    pub(crate) fn write_sibling_file(&self, project: &str, name: &str, content: &str) {
        let dir = self.project(project);
        fs::create_dir_all(&dir).expect("Failed to create sibling project");
        fs::write(dir.join(name), content).expect("Failed to write sibling file");
    }

    /// Write a config file outside the template and return its path.
    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("stencil.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Run git with a fixed identity, asserting success; returns stdout.
    pub(crate) fn git(&self, dir: &Path, args: &[&str]) -> String {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .envs(self.git_env())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Build a command for invoking `stencil` from inside the template.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.template())
    }

    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("stencil").expect("Failed to locate stencil binary");
        cmd.current_dir(dir.as_ref()).envs(self.git_env()).env("PATH", self.path_with_fakes());
        cmd.env_remove("RUST_LOG").env_remove("FAKE_GH_FAIL");
        cmd
    }

    fn git_env(&self) -> Vec<(&'static str, OsString)> {
        vec![
            ("HOME", self.home().as_os_str().to_owned()),
            ("GIT_CONFIG_NOSYSTEM", "1".into()),
            ("GIT_AUTHOR_NAME", "Test User".into()),
            ("GIT_AUTHOR_EMAIL", "test@example.com".into()),
            ("GIT_COMMITTER_NAME", "Test User".into()),
            ("GIT_COMMITTER_EMAIL", "test@example.com".into()),
        ]
    }

    fn path_with_fakes(&self) -> OsString {
        let mut paths = vec![self.tools.bin_dir.clone()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to build PATH")
    }
}
