pub mod api_config;
pub mod env_file;
pub mod error;
pub mod project_config;
pub mod runtime;
pub mod settings;

pub use api_config::SanityApiConfig;
pub use env_file::{APPEND_FILE, DotenvExport, EXPORT_FILES, EnvLine, render_appended};
pub use error::AppError;
pub use project_config::{CONFIG_FILE, ConfigField, ConfigUpdate, ProjectConfig};
pub use runtime::RuntimeMode;
pub use settings::{DEFAULT_DATASET, Field, Resolved, ResolvedSettings, Source, StagePlan};
