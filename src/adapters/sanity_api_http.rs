//! Sanity management API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, SanityApiConfig};
use crate::ports::{CreatedProject, ProjectApi};

/// HTTP client for the Sanity management API.
#[derive(Debug, Clone)]
pub struct HttpSanityApi {
    api_url: Url,
    client: Client,
}

impl HttpSanityApi {
    pub fn new(config: &SanityApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("API URL cannot be a base: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn send(operation: &str, request: RequestBuilder) -> Result<Response, AppError> {
        let failure = |details: String| AppError::ExternalCall {
            operation: operation.to_string(),
            details,
        };

        let response = request.send().map_err(|e| failure(format!("HTTP request failed: {}", e)))?;
        let status = response.status();
        tracing::debug!(operation, status = status.as_u16(), "Sanity API response");

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(failure(format!("API error ({}): {}", status.as_u16(), error_text.trim())))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectRequest<'a> {
    display_name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectResponse {
    id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDatasetRequest {
    acl_mode: &'static str,
}

impl ProjectApi for HttpSanityApi {
    fn create_project(&self, token: &str, display_name: &str) -> Result<CreatedProject, AppError> {
        const OPERATION: &str = "create project";

        let url = self.endpoint(&["projects"])?;
        let request =
            self.client.post(url).bearer_auth(token).json(&CreateProjectRequest { display_name });

        let response: CreateProjectResponse =
            Self::send(OPERATION, request)?.json().map_err(|e| AppError::ExternalCall {
                operation: OPERATION.to_string(),
                details: format!("Failed to parse response: {}", e),
            })?;

        Ok(CreatedProject { id: response.id })
    }

    fn create_dataset(&self, token: &str, project_id: &str, dataset: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["projects", project_id, "datasets", dataset])?;
        let body = CreateDatasetRequest { acl_mode: "public" };
        let request = self.client.put(url).bearer_auth(token).json(&body);

        Self::send("create dataset", request)?;
        Ok(())
    }
}
