mod command_runner;
mod environment;
mod project_api;
mod prompter;

pub use command_runner::{CommandRunner, CommandSpec};
pub use environment::Environment;
pub use project_api::{CreatedProject, ProjectApi};
pub use prompter::Prompter;
