//! Export studio settings to `.env.development` and `.env.production`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::commands::resolve::{self, GlobalLoginSource, SettingSource};
use crate::domain::{AppError, CONFIG_FILE, DotenvExport, EXPORT_FILES, Field, ProjectConfig};
use crate::ports::Environment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvExportOptions {
    /// Studio config file, or a directory containing `sanity.json`.
    pub config_path: Option<PathBuf>,
    pub token: Option<String>,
    pub project_id: Option<String>,
    pub dataset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvExportOutcome {
    pub written: Vec<PathBuf>,
}

fn config_file(
    env: &(impl Environment + ?Sized),
    path: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let path = path
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or_else(|| AppError::missing("config path", "pass --sanity-config-path <PATH>"))?;
    let path = resolve::invocation_dir(env)?.join(path);
    Ok(if path.is_dir() { path.join(CONFIG_FILE) } else { path })
}

fn first_of(candidates: [Option<String>; 3], what: &str) -> Result<String, AppError> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .ok_or_else(|| AppError::not_found(what))
}

pub fn execute(
    env: &(impl Environment + ?Sized),
    options: EnvExportOptions,
) -> Result<EnvExportOutcome, AppError> {
    let config_path = config_file(env, options.config_path.as_deref())?;
    let config = ProjectConfig::load(&config_path)?;
    let login = GlobalLoginSource::read(env);

    let export = DotenvExport {
        token: first_of(
            [options.token, env.var("SANITY_TOKEN"), login.lookup(Field::EditorToken)],
            "Sanity token",
        )?,
        dataset: first_of(
            [options.dataset, env.var("SANITY_DATASET"), config.dataset().map(str::to_string)],
            "Sanity Studio dataset",
        )?,
        project_id: first_of(
            [
                options.project_id,
                env.var("SANITY_PROJECT_ID"),
                config.project_id().map(str::to_string),
            ],
            "Sanity Studio Project ID",
        )?,
    };

    let content = export.render();
    let cwd = env.current_dir()?;
    let mut written = Vec::new();
    for name in EXPORT_FILES {
        let path = cwd.join(name);
        fs::write(&path, &content).map_err(|e| AppError::Write {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        written.push(path);
    }

    tracing::info!(config = %config_path.display(), "exported Sanity environment");
    Ok(EnvExportOutcome { written })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MapEnvironment;

    const EXPECTED: &str = "# All environment variables will be sourced\n\
        # and made available to gatsby-config.js, gatsby-node.js, etc.\n\
        # Do NOT commit this file to source control\n\
        SANITY_TOKEN='tok'\n\
        SANITY_PROJECT_ID='proj'\n\
        SANITY_DATASET='prod'";

    fn site(config: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("studio")).unwrap();
        fs::write(dir.path().join("studio").join(CONFIG_FILE), config).unwrap();
        dir
    }

    #[test]
    fn writes_both_files_from_env_and_config() {
        let dir = site(r#"{"api": {"projectId": "proj", "dataset": "prod"}}"#);
        let env = MapEnvironment::new().with_cwd(dir.path()).with_var("SANITY_TOKEN", "tok");

        let outcome = execute(
            &env,
            EnvExportOptions { config_path: Some("studio".into()), ..EnvExportOptions::default() },
        )
        .unwrap();

        assert_eq!(outcome.written.len(), 2);
        for name in EXPORT_FILES {
            assert_eq!(fs::read_to_string(dir.path().join(name)).unwrap(), EXPECTED);
        }
    }

    #[test]
    fn accepts_a_config_file_path_and_env_overrides() {
        let dir = site(r#"{"api": {"projectId": "other", "dataset": "other"}}"#);
        let env = MapEnvironment::new()
            .with_cwd(dir.path())
            .with_var("SANITY_TOKEN", "tok")
            .with_var("SANITY_PROJECT_ID", "proj")
            .with_var("SANITY_DATASET", "prod");

        execute(
            &env,
            EnvExportOptions {
                config_path: Some("studio/sanity.json".into()),
                ..EnvExportOptions::default()
            },
        )
        .unwrap();

        assert_eq!(fs::read_to_string(dir.path().join(".env.production")).unwrap(), EXPECTED);
    }

    #[test]
    fn falls_back_to_global_login_token() {
        let dir = site(r#"{"api": {"projectId": "proj", "dataset": "prod"}}"#);
        let xdg = dir.path().join("xdg");
        fs::create_dir_all(xdg.join("sanity")).unwrap();
        fs::write(xdg.join("sanity/config.json"), r#"{"authToken": "tok"}"#).unwrap();
        let env = MapEnvironment::new()
            .with_cwd(dir.path())
            .with_var("XDG_CONFIG_HOME", xdg.to_str().unwrap());

        execute(
            &env,
            EnvExportOptions { config_path: Some("studio".into()), ..EnvExportOptions::default() },
        )
        .unwrap();

        assert_eq!(fs::read_to_string(dir.path().join(".env.development")).unwrap(), EXPECTED);
    }

    #[test]
    fn missing_token_fails_without_writing() {
        let dir = site(r#"{"api": {"projectId": "proj", "dataset": "prod"}}"#);
        let env = MapEnvironment::new().with_cwd(dir.path());

        let err = execute(
            &env,
            EnvExportOptions { config_path: Some("studio".into()), ..EnvExportOptions::default() },
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Could not find Sanity token.");
        assert!(matches!(err, AppError::MissingValue { .. }));
        assert!(!dir.path().join(".env.development").exists());
    }

    #[test]
    fn missing_dataset_is_reported() {
        let dir = site(r#"{"api": {"projectId": "proj"}}"#);
        let env = MapEnvironment::new().with_cwd(dir.path()).with_var("SANITY_TOKEN", "tok");

        let err = execute(
            &env,
            EnvExportOptions { config_path: Some("studio".into()), ..EnvExportOptions::default() },
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::MissingValue { ref what } if what == "Sanity Studio dataset"
        ));
        assert_eq!(err.to_string(), "Could not find Sanity Studio dataset.");
    }

    #[test]
    fn config_path_is_required() {
        let env = MapEnvironment::new().with_cwd("/tmp");
        let err = execute(&env, EnvExportOptions::default()).unwrap_err();
        assert!(err.to_string().contains("--sanity-config-path"));
    }
}
