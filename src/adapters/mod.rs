pub mod command_process;
pub mod dialoguer_prompter;
pub mod global_login;
pub mod process_environment;
pub mod sanity_api_http;

pub use command_process::ProcessCommandRunner;
pub use dialoguer_prompter::DialoguerPrompter;
pub use process_environment::ProcessEnvironment;
pub use sanity_api_http::HttpSanityApi;
