//! Project endpoints.

use deck_core::Project;
use serde::Serialize;

use crate::{ApiClient, error::ApiError, http::check_response};

#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub name: String,
}

impl ApiClient {
    /// `GET /projects` — all projects visible to the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server returns a
    /// non-success status.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let resp = self.request(reqwest::Method::GET, "/projects").send().await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `POST /projects`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects the
    /// project.
    pub async fn create_project(&self, request: &NewProject) -> Result<Project, ApiError> {
        let resp = self
            .request(reqwest::Method::POST, "/projects")
            .json(request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }
}
