use std::process::Command;

use crate::domain::AppError;
use crate::ports::{CommandRunner, CommandSpec};

/// Runs commands as child processes with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, stage: &str, spec: &CommandSpec) -> Result<(), AppError> {
        let failure = |details: String| AppError::ChildProcess {
            stage: stage.to_string(),
            command: spec.to_string(),
            details,
        };

        // Resolves `.cmd` shims on Windows (npm, npx).
        let program = which::which(&spec.program)
            .map_err(|e| failure(format!("'{}' not found on PATH: {}", spec.program, e)))?;

        tracing::debug!(?spec, program = %program.display(), "spawning child process");

        let status = Command::new(&program)
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .envs(spec.env.iter().cloned())
            .status()
            .map_err(|e| failure(format!("failed to spawn: {}", e)))?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(failure(details));
        }

        Ok(())
    }
}
