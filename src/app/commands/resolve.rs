//! Ranked resolution of settings from flags, environment, prompts, and files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::global_login;
use crate::domain::{
    AppError, DEFAULT_DATASET, Field, ProjectConfig, Resolved, ResolvedSettings, Source,
};
use crate::ports::Environment;

/// Base directory for relative studio/config paths.
pub const INIT_CWD_ENV: &str = "INIT_CWD";

/// One candidate source of setting values.
pub trait SettingSource {
    fn kind(&self) -> Source;

    /// Value for `field`, if this source has a non-empty one.
    fn lookup(&self, field: Field) -> Option<String>;
}

/// Values passed as command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSource {
    pub token: Option<String>,
    pub deploy_token: Option<String>,
    pub project_id: Option<String>,
    pub display_name: Option<String>,
    pub dataset: Option<String>,
}

impl SettingSource for FlagSource {
    fn kind(&self) -> Source {
        Source::Flag
    }

    fn lookup(&self, field: Field) -> Option<String> {
        let value = match field {
            Field::EditorToken => &self.token,
            Field::DeployToken => &self.deploy_token,
            Field::ProjectId => &self.project_id,
            Field::DisplayName => &self.display_name,
            Field::Dataset => &self.dataset,
        };
        value.clone().filter(|v| !v.is_empty())
    }
}

/// Environment variables, checked in each field's priority order.
pub struct EnvironmentSource<'a, E: Environment + ?Sized> {
    env: &'a E,
}

impl<'a, E: Environment + ?Sized> EnvironmentSource<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self { env }
    }
}

impl<E: Environment + ?Sized> SettingSource for EnvironmentSource<'_, E> {
    fn kind(&self) -> Source {
        Source::Environment
    }

    fn lookup(&self, field: Field) -> Option<String> {
        field.env_keys().iter().find_map(|key| self.env.var(key))
    }
}

/// Answers collected by the prompt gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptAnswers {
    answers: HashMap<Field, String>,
}

impl PromptAnswers {
    pub fn insert(&mut self, field: Field, value: String) {
        if !value.is_empty() {
            self.answers.insert(field, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl SettingSource for PromptAnswers {
    fn kind(&self) -> Source {
        Source::Prompt
    }

    fn lookup(&self, field: Field) -> Option<String> {
        self.answers.get(&field).cloned()
    }
}

/// Values already stored in `sanity.json`. Tokens are never stored there.
pub struct ConfigFileSource<'a> {
    config: &'a ProjectConfig,
}

impl<'a> ConfigFileSource<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self { config }
    }
}

impl SettingSource for ConfigFileSource<'_> {
    fn kind(&self) -> Source {
        Source::ConfigFile
    }

    fn lookup(&self, field: Field) -> Option<String> {
        let value = match field {
            Field::ProjectId => self.config.project_id(),
            Field::Dataset => self.config.dataset(),
            Field::DisplayName => self.config.display_name(),
            Field::EditorToken | Field::DeployToken => None,
        };
        value.filter(|v| !v.is_empty()).map(str::to_string)
    }
}

/// The `sanity login` session token, used as an editor token of last resort.
#[derive(Debug, Clone, Default)]
pub struct GlobalLoginSource {
    token: Option<String>,
}

impl GlobalLoginSource {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn read(env: &(impl Environment + ?Sized)) -> Self {
        Self::new(global_login::read_auth_token(env))
    }
}

impl SettingSource for GlobalLoginSource {
    fn kind(&self) -> Source {
        Source::GlobalLogin
    }

    fn lookup(&self, field: Field) -> Option<String> {
        match field {
            Field::EditorToken => self.token.clone(),
            _ => None,
        }
    }
}

/// Built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

impl SettingSource for DefaultSource {
    fn kind(&self) -> Source {
        Source::Default
    }

    fn lookup(&self, field: Field) -> Option<String> {
        match field {
            Field::Dataset => Some(DEFAULT_DATASET.to_string()),
            _ => None,
        }
    }
}

/// Resolves each field from a list of sources ranked by precedence.
pub struct Resolver<'a> {
    sources: Vec<&'a dyn SettingSource>,
}

impl<'a> Resolver<'a> {
    /// `sources` are consulted in order; the first one with a value wins.
    pub fn new(sources: Vec<&'a dyn SettingSource>) -> Self {
        Self { sources }
    }

    pub fn resolve(&self, field: Field) -> Option<Resolved> {
        self.sources.iter().find_map(|source| {
            source.lookup(field).map(|value| Resolved::new(value, source.kind()))
        })
    }

    /// Build the full settings record. Only the dataset has a guaranteed value.
    pub fn resolve_settings(
        &self,
        studio_dir: PathBuf,
        content_path: Option<PathBuf>,
    ) -> Result<ResolvedSettings, AppError> {
        let resolve = |field: Field| {
            let resolved = self.resolve(field);
            if let Some(resolved) = &resolved {
                tracing::debug!(%field, source = %resolved.source, "resolved setting");
            }
            resolved
        };

        let dataset = resolve(Field::Dataset).ok_or_else(|| Field::Dataset.missing())?;
        Ok(ResolvedSettings {
            studio_dir,
            content_path,
            editor_token: resolve(Field::EditorToken),
            deploy_token: resolve(Field::DeployToken),
            project_id: resolve(Field::ProjectId),
            display_name: resolve(Field::DisplayName),
            dataset,
        })
    }
}

/// Directory that relative studio/config paths are resolved against.
pub fn invocation_dir(env: &(impl Environment + ?Sized)) -> Result<PathBuf, AppError> {
    match env.var(INIT_CWD_ENV) {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => env.current_dir(),
    }
}

/// Resolve the mandatory studio directory flag.
pub fn resolve_studio_dir(
    env: &(impl Environment + ?Sized),
    studio_path: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let studio_path = studio_path
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or_else(|| AppError::missing("studio path", "pass --sanity-studio-path <DIR>"))?;
    Ok(invocation_dir(env)?.join(studio_path))
}

/// Resolve a content path against the current working directory.
pub fn resolve_content_path(
    env: &(impl Environment + ?Sized),
    content_path: Option<&Path>,
) -> Result<Option<PathBuf>, AppError> {
    match content_path {
        Some(path) if path.as_os_str().is_empty() => {
            Err(AppError::missing("content path", "pass --sanity-content-path <PATH>"))
        }
        Some(path) => Ok(Some(env.current_dir()?.join(path))),
        None => Ok(None),
    }
}
