//! The studio's `sanity.json` document.
//!
//! The whole document is kept so that keys this tool does not manage (`root`, `plugins`,
//! `parts`, ...) survive a rewrite in their original order.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::AppError;

/// File name of the studio configuration inside a studio directory.
pub const CONFIG_FILE: &str = "sanity.json";

/// A field of [`ProjectConfig`] managed by this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    ProjectId,
    Dataset,
    DisplayName,
}

impl ConfigField {
    fn location(&self) -> (&'static str, &'static str) {
        match self {
            ConfigField::ProjectId => ("api", "projectId"),
            ConfigField::Dataset => ("api", "dataset"),
            ConfigField::DisplayName => ("project", "name"),
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (section, key) = self.location();
        write!(f, "{}.{}", section, key)
    }
}

/// Values to merge into a [`ProjectConfig`]. `None` leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    document: Map<String, Value>,
}

impl ProjectConfig {
    /// Read and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| AppError::ConfigLoad {
            path: path.display().to_string(),
            reason: if err.kind() == ErrorKind::NotFound {
                "file not found".to_string()
            } else {
                err.to_string()
            },
        })?;

        Self::parse(&content).map_err(|reason| AppError::ConfigLoad {
            path: path.display().to_string(),
            reason,
        })
    }

    /// Parse config content. The error is a human-readable reason.
    pub fn parse(content: &str) -> Result<Self, String> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))?;
        let Value::Object(document) = value else {
            return Err("top-level value must be an object".to_string());
        };

        for section in ["api", "project"] {
            if let Some(member) = document.get(section) {
                if !member.is_object() {
                    return Err(format!("'{}' must be an object", section));
                }
            }
        }

        Ok(Self { document })
    }

    pub fn project_id(&self) -> Option<&str> {
        self.get(ConfigField::ProjectId)
    }

    pub fn dataset(&self) -> Option<&str> {
        self.get(ConfigField::Dataset)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.get(ConfigField::DisplayName)
    }

    fn get(&self, field: ConfigField) -> Option<&str> {
        let (section, key) = field.location();
        self.document.get(section)?.get(key)?.as_str()
    }

    /// Merge `update`, touching only values that differ from the current ones.
    ///
    /// Returns the fields that were actually changed.
    pub fn apply(&mut self, update: &ConfigUpdate) -> Vec<ConfigField> {
        let candidates = [
            (ConfigField::ProjectId, update.project_id.as_deref()),
            (ConfigField::Dataset, update.dataset.as_deref()),
            (ConfigField::DisplayName, update.display_name.as_deref()),
        ];

        let mut changed = Vec::new();
        for (field, value) in candidates {
            let Some(value) = value else { continue };
            if self.get(field) == Some(value) {
                continue;
            }
            self.set(field, value);
            changed.push(field);
        }
        changed
    }

    fn set(&mut self, field: ConfigField, value: &str) {
        let (section, key) = field.location();
        let entry =
            self.document.entry(section.to_string()).or_insert_with(|| Value::Object(Map::new()));
        // parse() guarantees managed sections are objects
        if let Value::Object(map) = entry {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    /// Serialize with 2-space indentation and a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        let mut out = serde_json::to_string_pretty(&self.document)
            .map_err(|e| AppError::config_error(format!("Failed to serialize config: {}", e)))?;
        out.push('\n');
        Ok(out)
    }
}
