pub mod fake_command_runner;
pub mod fake_project_api;
pub mod map_environment;
pub mod scripted_prompter;

#[allow(unused_imports)]
pub use fake_command_runner::FakeCommandRunner;
#[allow(unused_imports)]
pub use fake_project_api::{ApiCall, FakeProjectApi};
#[allow(unused_imports)]
pub use map_environment::MapEnvironment;
#[allow(unused_imports)]
pub use scripted_prompter::{Asked, ScriptedPrompter};
