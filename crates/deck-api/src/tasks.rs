//! Task endpoints.
//!
//! Tasks are always addressed per project on reads (`/tasks/{project_id}`)
//! and per task on mutations (`/tasks/{task_id}/status`).

use deck_core::{Task, TaskStatus};
use serde::Serialize;

use crate::{ApiClient, error::ApiError, http::check_response};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub project_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct StatusUpdate {
    status: TaskStatus,
}

impl ApiClient {
    /// `GET /tasks/{project_id}` — all tasks for one project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server returns a
    /// non-success status.
    pub async fn tasks_by_project(&self, project_id: i64) -> Result<Vec<Task>, ApiError> {
        let resp = self
            .request(reqwest::Method::GET, &format!("/tasks/{project_id}"))
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `POST /tasks`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects the
    /// task.
    pub async fn create_task(&self, request: &NewTask) -> Result<Task, ApiError> {
        let resp = self
            .request(reqwest::Method::POST, "/tasks")
            .json(request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `PATCH /tasks/{task_id}/status`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects the
    /// transition.
    pub async fn update_task_status(
        &self,
        task_id: i64,
        status: TaskStatus,
    ) -> Result<Task, ApiError> {
        let resp = self
            .request(reqwest::Method::PATCH, &format!("/tasks/{task_id}/status"))
            .json(&StatusUpdate { status })
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_task_serializes_camel_case_and_omits_empty_description() {
        let req = NewTask {
            title: "Write spec".to_string(),
            description: None,
            project_id: 7,
        };
        let json = serde_json::to_value(&req).expect("serialize");
        assert_eq!(json["title"], "Write spec");
        assert_eq!(json["projectId"], 7);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn status_update_serializes_wire_form() {
        let json = serde_json::to_value(StatusUpdate {
            status: TaskStatus::InProgress,
        })
        .expect("serialize");
        assert_eq!(json["status"], "IN_PROGRESS");
    }

    #[test]
    fn parse_task_list() {
        let fixture = r#"[
            {
                "id": 1,
                "title": "Write spec",
                "description": "First draft",
                "status": "TODO",
                "projectId": 7,
                "assignedTo": null,
                "createdAt": "2026-08-01T09:30:00Z"
            }
        ]"#;
        let tasks: Vec<Task> = serde_json::from_str(fixture).expect("parse");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::Todo);
        assert_eq!(tasks[0].project_id, 7);
    }
}
