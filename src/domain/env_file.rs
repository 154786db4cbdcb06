//! `.env` file content produced for later build steps.

use std::fmt;

/// Files written by the standalone env export.
pub const EXPORT_FILES: [&str; 2] = [".env.development", ".env.production"];

/// Name of the env file that provisioning appends to when it already exists.
pub const APPEND_FILE: &str = ".env";

const EXPORT_HEADER: [&str; 3] = [
    "# All environment variables will be sourced",
    "# and made available to gatsby-config.js, gatsby-node.js, etc.",
    "# Do NOT commit this file to source control",
];

/// A `KEY="value"` entry destined for an existing `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLine {
    pub key: String,
    pub value: String,
}

impl EnvLine {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

impl fmt::Display for EnvLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.key, self.value)
    }
}

/// Concatenate lines exactly as they are appended: no separator between entries.
pub fn render_appended(lines: &[EnvLine]) -> String {
    lines.iter().map(ToString::to_string).collect()
}

/// Content of `.env.development` / `.env.production`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvExport {
    pub token: String,
    pub project_id: String,
    pub dataset: String,
}

impl DotenvExport {
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = EXPORT_HEADER.iter().map(|line| line.to_string()).collect();
        lines.push(format!("SANITY_TOKEN='{}'", self.token));
        lines.push(format!("SANITY_PROJECT_ID='{}'", self.project_id));
        lines.push(format!("SANITY_DATASET='{}'", self.dataset));
        lines.join("\n")
    }
}
