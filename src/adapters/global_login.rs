//! Token lookup in the Sanity CLI's global config store.
//!
//! `sanity login` stores its session as `authToken` in
//! `$XDG_CONFIG_HOME/sanity/config.json` (falling back to `~/.config`).

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ports::Environment;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlobalConfig {
    #[serde(default)]
    auth_token: Option<String>,
}

/// Location of the global config file, if a base directory is known.
pub fn global_config_path(env: &(impl Environment + ?Sized)) -> Option<PathBuf> {
    let base = match env.var("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => env.home_dir()?.join(".config"),
    };
    Some(base.join("sanity").join("config.json"))
}

/// The stored login token. Missing or unreadable files yield `None`.
pub fn read_auth_token(env: &(impl Environment + ?Sized)) -> Option<String> {
    let path = global_config_path(env)?;
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "no global Sanity login");
            return None;
        }
    };

    match serde_json::from_str::<GlobalConfig>(&content) {
        Ok(config) => config.auth_token.filter(|token| !token.is_empty()),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring malformed global Sanity config");
            None
        }
    }
}
