//! Env export command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, EnvExportOptions};
use crate::domain::AppError;

#[derive(Args)]
pub struct EnvArgs {
    /// Studio config file, or the studio directory containing sanity.json
    #[arg(long, value_name = "PATH")]
    sanity_config_path: Option<PathBuf>,
    /// Token to export (defaults to SANITY_TOKEN, then your `sanity login` session)
    #[arg(long)]
    token: Option<String>,
    /// Project ID to export (defaults to SANITY_PROJECT_ID, then sanity.json)
    #[arg(long)]
    project_id: Option<String>,
    /// Dataset to export (defaults to SANITY_DATASET, then sanity.json)
    #[arg(long)]
    dataset: Option<String>,
}

pub fn run_env(args: EnvArgs) -> Result<(), AppError> {
    api::export_env(EnvExportOptions {
        config_path: args.sanity_config_path,
        token: args.token,
        project_id: args.project_id,
        dataset: args.dataset,
    })?;

    println!(
        "✅ Sanity environment variables written to `.env.development` and `.env.production`"
    );
    Ok(())
}
