//! ClickUp workspace hierarchy.
//!
//! The snapshot model and the seam through which the report pipeline
//! fetches it. `wsa-clickup` provides the HTTP implementation.

pub mod model;

use async_trait::async_trait;

use crate::error::WsaResult;
use model::WorkspaceSnapshot;

/// Something that can produce a workspace snapshot for an API key.
#[async_trait]
pub trait WorkspaceSource: Send + Sync {
    /// Fetch the full team → space → folder → list → task hierarchy.
    async fn fetch_snapshot(&self, api_key: &str) -> WsaResult<WorkspaceSnapshot>;
}
