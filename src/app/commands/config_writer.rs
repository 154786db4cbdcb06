//! Persisting resolved settings to `sanity.json` and an existing `.env`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::domain::{
    APPEND_FILE, AppError, ConfigField, ConfigUpdate, EnvLine, ProjectConfig, ResolvedSettings,
    RuntimeMode, Source, render_appended,
};

fn write_error(path: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::Write { path: path.display().to_string(), details: err.to_string() }
}

/// Merge `settings` into `config` and write it to `path`.
///
/// Returns the fields whose stored value changed.
pub fn persist(
    path: &Path,
    config: &mut ProjectConfig,
    settings: &ResolvedSettings,
) -> Result<Vec<ConfigField>, AppError> {
    let update = ConfigUpdate {
        project_id: settings.project_id.as_ref().map(|r| r.value.clone()),
        dataset: Some(settings.dataset.value.clone()),
        display_name: settings.display_name.as_ref().map(|r| r.value.clone()),
    };
    let changed = config.apply(&update);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    fs::write(path, config.to_pretty_json()?).map_err(|e| write_error(path, e))?;

    tracing::info!(path = %path.display(), changed = ?changed, "wrote studio config");
    Ok(changed)
}

/// Lines for values a later build step cannot already read from its environment.
pub fn env_lines(settings: &ResolvedSettings) -> Vec<EnvLine> {
    let candidates = [
        ("SANITY_PROJECT_ID", settings.project_id.as_ref()),
        ("SANITY_DATASET", Some(&settings.dataset)),
        ("SANITY_TOKEN", settings.editor_token.as_ref()),
        ("SANITY_DEPLOY_TOKEN", settings.deploy_token.as_ref()),
    ];

    candidates
        .into_iter()
        .filter_map(|(key, resolved)| {
            let resolved = resolved?;
            (resolved.source != Source::Environment).then(|| EnvLine::new(key, &resolved.value))
        })
        .collect()
}

/// Append `lines` to `<dir>/.env` if it already exists and the runtime allows it.
///
/// Entries are appended back to back with no separator and no deduplication.
/// Returns whether the file was written.
pub fn append_env_file(
    dir: &Path,
    lines: &[EnvLine],
    runtime: RuntimeMode,
) -> Result<bool, AppError> {
    let path = dir.join(APPEND_FILE);
    if !runtime.mutates_env_file() || lines.is_empty() || !path.is_file() {
        return Ok(false);
    }

    let mut file = OpenOptions::new().append(true).open(&path).map_err(|e| write_error(&path, e))?;
    file.write_all(render_appended(lines).as_bytes()).map_err(|e| write_error(&path, e))?;

    tracing::info!(path = %path.display(), entries = lines.len(), "appended to env file");
    Ok(true)
}
