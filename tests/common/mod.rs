//! Shared testing utilities for sanity-provision CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a studio at `work/studio`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(work_dir.join("studio")).expect("Failed to create studio directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin directory");

        Self { root, work_dir, bin_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn studio_dir(&self) -> PathBuf {
        self.work_dir.join("studio")
    }

    pub fn config_path(&self) -> PathBuf {
        self.studio_dir().join("sanity.json")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write sanity.json");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read sanity.json")
    }

    pub fn read_work_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    /// Log file that fake commands append their invocations to.
    pub fn command_log(&self) -> PathBuf {
        self.root.path().join("commands.log")
    }

    pub fn logged_commands(&self) -> Vec<String> {
        fs::read_to_string(self.command_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Install a fake executable that logs its arguments and exits with `code`
    /// when its arguments start with `fail_prefix`.
    #[cfg(unix)]
    pub fn fake_command(&self, name: &str, fail_prefix: Option<(&str, i32)>) {
        use std::os::unix::fs::PermissionsExt;

        let failure = match fail_prefix {
            Some((prefix, code)) => {
                format!("case \"$*\" in \"{}\"*) exit {} ;; esac\n", prefix, code)
            }
            None => String::new(),
        };
        let script = format!(
            "#!/bin/sh\necho \"{} $* token=${{SANITY_AUTH_TOKEN:-}}\" >> \"{}\"\n{}exit 0\n",
            name,
            self.command_log().display(),
            failure
        );
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write fake command");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake command executable");
    }

    /// Build a command for invoking the compiled binary within the work directory.
    ///
    /// The environment is cleared of Sanity variables so the host cannot leak values.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sanity-provision")
            .expect("Failed to locate sanity-provision binary");
        cmd.current_dir(&self.work_dir)
            .env_clear()
            .env("PATH", self.path_var())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join("xdg"))
            .env("GATSBY_CLOUD", "true");
        cmd
    }

    fn path_var(&self) -> String {
        let mut path = self.bin_dir.display().to_string();
        if let Some(system) = std::env::var_os("PATH") {
            path.push(':');
            path.push_str(&system.to_string_lossy());
        }
        path
    }
}
