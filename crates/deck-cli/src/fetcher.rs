//! Bridges the query cache's fetch seam onto the API client.

use deck_api::ApiClient;
use deck_query::{Fetcher, QueryKey};
use serde_json::Value;

/// Production [`Fetcher`]: resolves each key to its API endpoint and stores
/// the response as an opaque JSON snapshot.
#[derive(Debug, Clone)]
pub struct ApiFetcher {
    api: ApiClient,
}

impl ApiFetcher {
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl Fetcher for ApiFetcher {
    async fn fetch(&self, key: QueryKey) -> anyhow::Result<Value> {
        let value = match key {
            QueryKey::Projects => serde_json::to_value(self.api.list_projects().await?)?,
            QueryKey::Tasks { project_id } => {
                serde_json::to_value(self.api.tasks_by_project(project_id).await?)?
            }
        };
        Ok(value)
    }
}
