//! Provision command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, FlagSource, ProjectResolution, ProvisionOptions};
use crate::app::commands::provision::DEFAULT_PACKAGE_MANAGER;
use crate::domain::AppError;

#[derive(Args)]
pub struct ProvisionArgs {
    /// Studio directory containing sanity.json (relative to INIT_CWD)
    #[arg(long, visible_alias = "sanity-config-path", value_name = "DIR")]
    sanity_studio_path: Option<PathBuf>,
    /// Content export to import into the dataset (relative to the current directory)
    #[arg(long, value_name = "PATH")]
    sanity_content_path: Option<PathBuf>,
    /// Existing project ID to reuse
    #[arg(long)]
    project_id: Option<String>,
    /// Display name for a newly created project
    #[arg(long)]
    name: Option<String>,
    /// Dataset name (defaults to "production")
    #[arg(long)]
    dataset: Option<String>,
    /// Editor token used for project creation and dataset import
    #[arg(long)]
    token: Option<String>,
    /// Deploy token used for the GraphQL deploy
    #[arg(long)]
    deploy_token: Option<String>,
    /// Package manager used to install studio dependencies
    #[arg(long, default_value = DEFAULT_PACKAGE_MANAGER, value_name = "BIN")]
    package_manager: String,
    /// Skip installing studio dependencies
    #[arg(long)]
    skip_install: bool,
    /// Skip deploying the GraphQL API
    #[arg(long)]
    skip_deploy: bool,
}

impl From<ProvisionArgs> for ProvisionOptions {
    fn from(args: ProvisionArgs) -> Self {
        ProvisionOptions {
            studio_path: args.sanity_studio_path,
            content_path: args.sanity_content_path,
            flags: FlagSource {
                token: args.token,
                deploy_token: args.deploy_token,
                project_id: args.project_id,
                display_name: args.name,
                dataset: args.dataset,
            },
            package_manager: args.package_manager,
            skip_install: args.skip_install,
            skip_deploy: args.skip_deploy,
        }
    }
}

pub fn run_provision(args: ProvisionArgs) -> Result<(), AppError> {
    let outcome = api::provision(args.into())?;

    match &outcome.project {
        ProjectResolution::Created(id) => println!("✅ Provisioned new project {}", id),
        ProjectResolution::Reused(id) => println!("✅ Provisioned project {}", id),
    }
    println!("  Dataset: {}", outcome.dataset);
    if outcome.changed_fields.is_empty() {
        println!("  {} already up to date", outcome.config_path.display());
    } else {
        let fields: Vec<String> = outcome.changed_fields.iter().map(ToString::to_string).collect();
        println!("  Updated {} ({})", outcome.config_path.display(), fields.join(", "));
    }
    if outcome.env_file_appended {
        println!("  Appended new values to .env");
    }
    for stage in &outcome.stages {
        println!("  • {}", stage);
    }
    Ok(())
}
