//! Sanity project-management API port definition.

use crate::domain::AppError;

/// Response from project creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    /// Project ID assigned by the API.
    pub id: String,
}

/// Port for remote project operations.
pub trait ProjectApi {
    /// Create a new project.
    fn create_project(&self, token: &str, display_name: &str) -> Result<CreatedProject, AppError>;

    /// Create a dataset under an existing project.
    fn create_dataset(&self, token: &str, project_id: &str, dataset: &str) -> Result<(), AppError>;
}
