use crate::ports::{CommandRunner, Environment, ProjectApi, Prompter};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: Environment, C: CommandRunner, A: ProjectApi, P: Prompter> {
    environment: E,
    runner: C,
    api: A,
    prompter: P,
}

impl<E: Environment, C: CommandRunner, A: ProjectApi, P: Prompter> AppContext<E, C, A, P> {
    /// Create a new application context.
    pub fn new(environment: E, runner: C, api: A, prompter: P) -> Self {
        Self { environment, runner, api, prompter }
    }

    /// Get a reference to the process environment.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &C {
        &self.runner
    }

    /// Get a reference to the project API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Get a reference to the interactive prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}
