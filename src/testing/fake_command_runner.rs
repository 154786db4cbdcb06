use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{CommandRunner, CommandSpec};

/// Records invocations and optionally fails one program with an exit status.
#[derive(Default)]
pub struct FakeCommandRunner {
    pub invocations: RefCell<Vec<(String, CommandSpec)>>,
    failing: Option<(String, Vec<String>, i32)>,
}

#[allow(dead_code)]
impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any invocation of `program` whose args start with `args_prefix`.
    pub fn failing_on(mut self, program: &str, args_prefix: &[&str], code: i32) -> Self {
        self.failing = Some((
            program.to_string(),
            args_prefix.iter().map(|arg| arg.to_string()).collect(),
            code,
        ));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.invocations.borrow().iter().map(|(_, spec)| spec.to_string()).collect()
    }

    pub fn stages(&self) -> Vec<String> {
        self.invocations.borrow().iter().map(|(stage, _)| stage.clone()).collect()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, stage: &str, spec: &CommandSpec) -> Result<(), AppError> {
        self.invocations.borrow_mut().push((stage.to_string(), spec.clone()));

        if let Some((program, prefix, code)) = &self.failing {
            if &spec.program == program && spec.args.starts_with(prefix) {
                return Err(AppError::ChildProcess {
                    stage: stage.to_string(),
                    command: spec.to_string(),
                    details: format!("exited with status {}", code),
                });
            }
        }
        Ok(())
    }
}
