//! Ordered provisioning stages with fail-fast semantics.

use std::fmt;

use crate::domain::{AppError, Field, Resolved, ResolvedSettings, Source, StagePlan};
use crate::ports::{CommandRunner, CommandSpec, ProjectApi};

/// Variable the vendor CLI reads its credential from.
pub const AUTH_TOKEN_ENV: &str = "SANITY_AUTH_TOKEN";

/// Vendor CLI launcher and its leading argument.
const VENDOR_CLI: (&str, &str) = ("npx", "sanity");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CreateProject,
    Install,
    Deploy,
    Import,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::CreateProject => "create project",
            Stage::Install => "install dependencies",
            Stage::Deploy => "deploy GraphQL API",
            Stage::Import => "import dataset",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of the create-or-reuse stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectResolution {
    Reused(String),
    Created(String),
}

impl ProjectResolution {
    pub fn id(&self) -> &str {
        match self {
            ProjectResolution::Reused(id) | ProjectResolution::Created(id) => id,
        }
    }
}

fn required<'a>(settings: &'a ResolvedSettings, field: Field) -> Result<&'a str, AppError> {
    settings.get(field).map(|resolved| resolved.value.as_str()).ok_or_else(|| field.missing())
}

/// Reuse the known project or create one (plus its dataset) and record its ID in `settings`.
pub fn ensure_project(
    api: &(impl ProjectApi + ?Sized),
    settings: &mut ResolvedSettings,
) -> Result<ProjectResolution, AppError> {
    if let Some(project) = &settings.project_id {
        tracing::info!(project_id = %project.value, source = %project.source, "reusing project");
        return Ok(ProjectResolution::Reused(project.value.clone()));
    }

    let token = required(settings, Field::EditorToken)?;
    let display_name = required(settings, Field::DisplayName)?;
    let dataset = settings.dataset.value.as_str();

    println!("Creating Sanity project '{}'...", display_name);
    let project = api.create_project(token, display_name)?;
    tracing::info!(project_id = %project.id, "created project");
    api.create_dataset(token, &project.id, dataset)?;
    tracing::info!(project_id = %project.id, dataset, "created dataset");

    settings.project_id = Some(Resolved::new(project.id.clone(), Source::Created));
    Ok(ProjectResolution::Created(project.id))
}

/// Build the command stages `plan` asks for, checking each stage's credential.
pub fn command_stages(
    settings: &ResolvedSettings,
    plan: &StagePlan,
    package_manager: &str,
) -> Result<Vec<(Stage, CommandSpec)>, AppError> {
    let studio = &settings.studio_dir;
    let dataset = settings.dataset.value.as_str();
    let (launcher, cli) = VENDOR_CLI;
    let mut stages = Vec::new();

    if plan.install {
        stages.push((Stage::Install, CommandSpec::new(package_manager, ["install"], studio)));
    }

    if plan.deploy {
        let token = required(settings, Field::DeployToken)?;
        let args = [cli, "graphql", "deploy", "--dataset", dataset, "--force"];
        let spec = CommandSpec::new(launcher, args, studio).with_env(AUTH_TOKEN_ENV, token);
        stages.push((Stage::Deploy, spec));
    }

    if plan.import {
        let token = required(settings, Field::EditorToken)?;
        let content = settings
            .content_path
            .as_ref()
            .ok_or_else(|| AppError::missing("content path", "pass --sanity-content-path <PATH>"))?;
        let content = content.to_str().ok_or_else(|| {
            AppError::config_error(format!(
                "Content path is not valid UTF-8: {}",
                content.display()
            ))
        })?;
        let args = [cli, "dataset", "import", content, dataset];
        let spec = CommandSpec::new(launcher, args, studio).with_env(AUTH_TOKEN_ENV, token);
        stages.push((Stage::Import, spec));
    }

    Ok(stages)
}

/// Run stages strictly in order, stopping at the first failure.
pub fn run_stages(
    runner: &(impl CommandRunner + ?Sized),
    stages: &[(Stage, CommandSpec)],
) -> Result<Vec<Stage>, AppError> {
    let mut completed = Vec::new();
    for (stage, spec) in stages {
        println!("▶ {} ({})", capitalize(stage.name()), spec);
        tracing::info!(%stage, command = %spec, "running stage");
        runner.run(stage.name(), spec)?;
        completed.push(*stage);
    }
    Ok(completed)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
