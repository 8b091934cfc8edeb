//! ClickUp HTTP client.
//!
//! Issues sequential GET requests with the personal API key in the
//! `Authorization` header. No retries, no pagination beyond the first page.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use wsa_core::config::ClickUpSettings;
use wsa_core::workspace::model::{Folder, Space, TaskList, WorkspaceSnapshot};
use wsa_core::workspace::WorkspaceSource;
use wsa_core::{WsaError, WsaResult};

use crate::api::{
    ApiError, Entity, FoldersResponse, ListsResponse, SpacesResponse, TasksResponse, TeamsResponse,
};

/// ClickUp REST client.
#[derive(Clone)]
pub struct ClickUpClient {
    base_url: String,
    client: reqwest::Client,
}

impl ClickUpClient {
    /// Create a client for `base_url`. `None` keeps reqwest's default timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().unwrap_or_default(),
        }
    }

    /// Create a client from configuration.
    pub fn from_settings(settings: &ClickUpSettings) -> Self {
        let timeout = (settings.timeout_secs > 0).then(|| Duration::from_secs(settings.timeout_secs));
        Self::new(&settings.base_url, timeout)
    }

    /// Teams (workspaces) visible to the key.
    pub async fn teams(&self, api_key: &str) -> WsaResult<Vec<Entity>> {
        let body: TeamsResponse = self.get(api_key, "/team", &[]).await?;
        Ok(body.teams)
    }

    pub async fn spaces(&self, api_key: &str, team_id: &str) -> WsaResult<Vec<Entity>> {
        let body: SpacesResponse = self
            .get(api_key, &format!("/team/{}/space", team_id), &[("archived", "false")])
            .await?;
        Ok(body.spaces)
    }

    pub async fn folders(&self, api_key: &str, space_id: &str) -> WsaResult<Vec<Entity>> {
        let body: FoldersResponse = self
            .get(api_key, &format!("/space/{}/folder", space_id), &[("archived", "false")])
            .await?;
        Ok(body.folders)
    }

    /// Lists that sit directly under a space.
    pub async fn folderless_lists(&self, api_key: &str, space_id: &str) -> WsaResult<Vec<Entity>> {
        let body: ListsResponse = self
            .get(api_key, &format!("/space/{}/list", space_id), &[("archived", "false")])
            .await?;
        Ok(body.lists)
    }

    pub async fn folder_lists(&self, api_key: &str, folder_id: &str) -> WsaResult<Vec<Entity>> {
        let body: ListsResponse = self
            .get(api_key, &format!("/folder/{}/list", folder_id), &[("archived", "false")])
            .await?;
        Ok(body.lists)
    }

    /// First page of tasks in a list, closed tasks and subtasks included.
    pub async fn tasks(&self, api_key: &str, list_id: &str) -> WsaResult<TasksResponse> {
        self.get(
            api_key,
            &format!("/list/{}/task", list_id),
            &[("include_closed", "true"), ("subtasks", "true")],
        )
        .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        api_key: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> WsaResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "ClickUp GET");

        let response = self
            .client
            .get(&url)
            .header("Authorization", api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| WsaError::network(format!("failed to reach ClickUp: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| WsaError::network(format!("unexpected ClickUp response for {}: {}", path, e)))
    }
}

/// Map a non-2xx response to the error taxonomy.
fn map_status(status: StatusCode, body: &str) -> WsaError {
    let api_error: ApiError = serde_json::from_str(body).unwrap_or_default();
    let detail = api_error.err.clone().unwrap_or_else(|| body.trim().to_string());

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN || api_error.is_auth() {
        let detail = if detail.is_empty() { "Invalid API Key provided.".to_string() } else { detail };
        return WsaError::authentication(detail);
    }

    WsaError::network(format!("HTTP {}: {}", status, detail))
}

#[async_trait]
impl WorkspaceSource for ClickUpClient {
    async fn fetch_snapshot(&self, api_key: &str) -> WsaResult<WorkspaceSnapshot> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(WsaError::authentication("no API key supplied"));
        }

        let teams = self.teams(api_key).await?;
        if teams.is_empty() {
            return Err(WsaError::EmptyWorkspace);
        }

        let mut snapshot = WorkspaceSnapshot {
            team_ids: teams.iter().map(|t| t.id.clone()).collect(),
            ..Default::default()
        };

        for team in &teams {
            for space in self.spaces(api_key, &team.id).await? {
                for folder in self.folders(api_key, &space.id).await? {
                    for list in self.folder_lists(api_key, &folder.id).await? {
                        snapshot.lists.push(TaskList {
                            name: list.display_name(),
                            id: list.id,
                            space_id: space.id.clone(),
                            folder_id: Some(folder.id.clone()),
                        });
                    }
                    snapshot.folders.push(Folder {
                        name: folder.display_name(),
                        id: folder.id,
                        space_id: space.id.clone(),
                    });
                }

                for list in self.folderless_lists(api_key, &space.id).await? {
                    snapshot.lists.push(TaskList {
                        name: list.display_name(),
                        id: list.id,
                        space_id: space.id.clone(),
                        folder_id: None,
                    });
                }

                snapshot.spaces.push(Space {
                    name: space.display_name(),
                    id: space.id,
                    team_id: team.id.clone(),
                });
            }
        }

        for list in &snapshot.lists {
            let page = self.tasks(api_key, &list.id).await?;
            snapshot
                .tasks
                .extend(page.tasks.into_iter().map(|t| t.into_record(&list.id)));
        }

        info!(
            teams = snapshot.team_ids.len(),
            spaces = snapshot.spaces.len(),
            folders = snapshot.folders.len(),
            lists = snapshot.lists.len(),
            tasks = snapshot.tasks.len(),
            "Fetched ClickUp workspace"
        );

        Ok(snapshot)
    }
}
