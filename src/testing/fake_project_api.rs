use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{CreatedProject, ProjectApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    CreateProject { token: String, display_name: String },
    CreateDataset { token: String, project_id: String, dataset: String },
}

/// Project API that assigns a fixed ID and records every call.
pub struct FakeProjectApi {
    pub calls: RefCell<Vec<ApiCall>>,
    project_id: String,
    reject: bool,
}

#[allow(dead_code)]
impl FakeProjectApi {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self { calls: RefCell::new(Vec::new()), project_id: project_id.into(), reject: false }
    }

    pub fn rejecting() -> Self {
        Self { reject: true, ..Self::new("unused") }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }
}

impl ProjectApi for FakeProjectApi {
    fn create_project(&self, token: &str, display_name: &str) -> Result<CreatedProject, AppError> {
        self.calls.borrow_mut().push(ApiCall::CreateProject {
            token: token.to_string(),
            display_name: display_name.to_string(),
        });
        if self.reject {
            return Err(AppError::ExternalCall {
                operation: "create project".to_string(),
                details: "API error (401): Unauthorized".to_string(),
            });
        }
        Ok(CreatedProject { id: self.project_id.clone() })
    }

    fn create_dataset(&self, token: &str, project_id: &str, dataset: &str) -> Result<(), AppError> {
        self.calls.borrow_mut().push(ApiCall::CreateDataset {
            token: token.to_string(),
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
        });
        Ok(())
    }
}
