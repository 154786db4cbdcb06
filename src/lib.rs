//! sanity-provision: provision a Sanity studio backend for a Gatsby build pipeline.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    EnvExportOptions, EnvExportOutcome, FlagSource, ProjectResolution, ProvisionOptions,
    ProvisionOutcome, Stage, export_env, provision,
};
pub use domain::AppError;
