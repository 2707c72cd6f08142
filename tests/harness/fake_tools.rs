use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Stand-ins for `gh` and `delta` that record their arguments.
pub(crate) struct FakeTools {
    pub bin_dir: PathBuf,
    pub gh_log: PathBuf,
    pub delta_log: PathBuf,
    /// Bare repository the fake `gh repo create` wires up as `origin`.
    pub remote: PathBuf,
}

impl FakeTools {
    pub(crate) fn install(root: &Path) -> Self {
        let bin_dir = root.join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin dir");
        let gh_log = root.join("gh.log");
        let delta_log = root.join("delta.log");
        let remote = root.join("remote.git");

        let output = std::process::Command::new("git")
            .args(["init", "--bare"])
            .arg(&remote)
            .output()
            .expect("Failed to init bare remote");
        assert!(output.status.success(), "git init --bare failed");

        let gh = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"

if [ -n "$FAKE_GH_FAIL" ]; then
    echo "gh: simulated failure" >&2
    exit "$FAKE_GH_FAIL"
fi

if [ "$1" = "repo" ] && [ "$2" = "create" ]; then
    git remote add origin "{remote}" || exit 1
    echo "https://github.com/owner/$3"
fi

exit 0
"#,
            log = gh_log.display(),
            remote = remote.display()
        );
        write_script(&bin_dir.join("gh"), &gh);

        // delta exits 1 when the inputs differ.
        let delta = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
echo "changes between $1 and $2"
exit 1
"#,
            log = delta_log.display()
        );
        write_script(&bin_dir.join("delta"), &delta);

        Self { bin_dir, gh_log, delta_log, remote }
    }

    pub(crate) fn gh_calls(&self) -> Vec<String> {
        read_lines(&self.gh_log)
    }

    pub(crate) fn delta_calls(&self) -> Vec<String> {
        read_lines(&self.delta_log)
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake tool script");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap_or_default().lines().map(str::to_string).collect()
}
