//! Resolved provisioning settings and the fields they are built from.

use std::fmt;
use std::path::PathBuf;

use crate::domain::AppError;

/// Built-in dataset name used when no other source provides one.
pub const DEFAULT_DATASET: &str = "production";

/// A setting resolved from the ranked configuration sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EditorToken,
    DeployToken,
    ProjectId,
    DisplayName,
    Dataset,
}

impl Field {
    /// Command-line flag carrying this field.
    pub fn flag(&self) -> &'static str {
        match self {
            Field::EditorToken => "--token",
            Field::DeployToken => "--deploy-token",
            Field::ProjectId => "--project-id",
            Field::DisplayName => "--name",
            Field::Dataset => "--dataset",
        }
    }

    /// Environment variables carrying this field, highest priority first.
    pub fn env_keys(&self) -> &'static [&'static str] {
        match self {
            Field::EditorToken => &["SANITY_EDITOR_TOKEN", "SANITY_TOKEN"],
            Field::DeployToken => &["SANITY_DEPLOY_TOKEN"],
            Field::ProjectId => &["SANITY_PROJECT_ID"],
            Field::DisplayName => &["SANITY_PROJECT_NAME"],
            Field::Dataset => &["SANITY_DATASET", "SANITY_PROJECT_DATASET"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::EditorToken => "editor token",
            Field::DeployToken => "deploy token",
            Field::ProjectId => "project ID",
            Field::DisplayName => "project name",
            Field::Dataset => "dataset name",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Field::EditorToken | Field::DeployToken)
    }

    /// Hint listing every way to supply this field.
    pub fn hint(&self) -> String {
        let envs = self.env_keys().join(" or ");
        format!("pass {} or set {}", self.flag(), envs)
    }

    pub fn missing(&self) -> AppError {
        AppError::missing(self.label(), self.hint())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Flag,
    Environment,
    Prompt,
    ConfigFile,
    GlobalLogin,
    Default,
    /// Returned by the remote API when a project was created.
    Created,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::Flag => "flag",
            Source::Environment => "environment",
            Source::Prompt => "prompt",
            Source::ConfigFile => "config file",
            Source::GlobalLogin => "global login",
            Source::Default => "default",
            Source::Created => "created",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: Source,
}

impl Resolved {
    pub fn new(value: impl Into<String>, source: Source) -> Self {
        Self { value: value.into(), source }
    }
}

/// Which optional stages a run performs. Project creation is implied by a missing project ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagePlan {
    pub install: bool,
    pub deploy: bool,
    pub import: bool,
}

impl StagePlan {
    /// Whether `field` must be resolved before the run can start.
    pub fn needs(&self, field: Field, project_known: bool) -> bool {
        match field {
            Field::ProjectId | Field::Dataset => true,
            Field::DisplayName => !project_known,
            Field::EditorToken => !project_known || self.import,
            Field::DeployToken => self.deploy,
        }
    }
}

/// Final value of every setting for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub studio_dir: PathBuf,
    pub content_path: Option<PathBuf>,
    pub editor_token: Option<Resolved>,
    pub deploy_token: Option<Resolved>,
    pub project_id: Option<Resolved>,
    pub display_name: Option<Resolved>,
    pub dataset: Resolved,
}

impl ResolvedSettings {
    pub fn get(&self, field: Field) -> Option<&Resolved> {
        match field {
            Field::EditorToken => self.editor_token.as_ref(),
            Field::DeployToken => self.deploy_token.as_ref(),
            Field::ProjectId => self.project_id.as_ref(),
            Field::DisplayName => self.display_name.as_ref(),
            Field::Dataset => Some(&self.dataset),
        }
    }

    /// Check that everything `plan` needs is present.
    ///
    /// A missing project ID is fine as long as a project can be created instead.
    pub fn validate(&self, plan: &StagePlan) -> Result<(), AppError> {
        let project_known = self.project_id.is_some();
        for field in [Field::DisplayName, Field::EditorToken, Field::DeployToken] {
            if plan.needs(field, project_known) && self.get(field).is_none() {
                if field == Field::DisplayName {
                    return Err(AppError::missing(
                        "project ID or project name",
                        format!(
                            "{} to reuse a project, or {} to create one",
                            Field::ProjectId.hint(),
                            Field::DisplayName.hint()
                        ),
                    ));
                }
                return Err(field.missing());
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ResolvedSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |token: &Option<Resolved>| token.as_ref().map(|t| t.source);
        f.debug_struct("ResolvedSettings")
            .field("studio_dir", &self.studio_dir)
            .field("content_path", &self.content_path)
            .field("editor_token", &redact(&self.editor_token).map(|s| format!("[REDACTED] ({s})")))
            .field("deploy_token", &redact(&self.deploy_token).map(|s| format!("[REDACTED] ({s})")))
            .field("project_id", &self.project_id)
            .field("display_name", &self.display_name)
            .field("dataset", &self.dataset)
            .finish()
    }
}
