//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::adapters::{DialoguerPrompter, HttpSanityApi, ProcessCommandRunner, ProcessEnvironment};
use crate::app::AppContext;
use crate::app::commands::{env_export, provision};
use crate::domain::SanityApiConfig;

pub use crate::app::commands::env_export::{EnvExportOptions, EnvExportOutcome};
pub use crate::app::commands::provision::{ProvisionOptions, ProvisionOutcome};
pub use crate::app::commands::resolve::FlagSource;
pub use crate::app::commands::sequencer::{ProjectResolution, Stage};
pub use crate::domain::AppError;

type ProcessContext =
    AppContext<ProcessEnvironment, ProcessCommandRunner, HttpSanityApi, DialoguerPrompter>;

/// Create an `AppContext` wired to the real process, network, and terminal.
fn create_context() -> Result<ProcessContext, AppError> {
    let environment = ProcessEnvironment;
    let api = HttpSanityApi::new(&SanityApiConfig::from_env(&environment)?)?;
    Ok(AppContext::new(environment, ProcessCommandRunner, api, DialoguerPrompter))
}

/// Provision the studio: resolve settings, create or reuse the project, write config,
/// then install, deploy, and import.
pub fn provision(options: ProvisionOptions) -> Result<ProvisionOutcome, AppError> {
    let ctx = create_context()?;
    provision::execute(&ctx, options)
}

/// Write `.env.development` and `.env.production` in the current directory.
pub fn export_env(options: EnvExportOptions) -> Result<EnvExportOutcome, AppError> {
    env_export::execute(&ProcessEnvironment, options)
}
