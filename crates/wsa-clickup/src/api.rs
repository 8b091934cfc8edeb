//! ClickUp API wire types.
//!
//! Only the fields the snapshot needs are decoded. ClickUp is loose about
//! types (ids and timestamps arrive as strings or numbers, priority as an
//! object or null), so every field is decoded leniently and missing data is
//! treated as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use wsa_core::workspace::model::{is_completed_status, TaskRecord};

#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
pub struct SpacesResponse {
    #[serde(default)]
    pub spaces: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
pub struct FoldersResponse {
    #[serde(default)]
    pub folders: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
pub struct ListsResponse {
    #[serde(default)]
    pub lists: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
pub struct TasksResponse {
    #[serde(default)]
    pub tasks: Vec<ApiTask>,
}

/// Error body returned by ClickUp on failures.
#[derive(Debug, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(rename = "ECODE", default)]
    pub ecode: Option<String>,
}

impl ApiError {
    /// ClickUp reports token problems with `OAUTH_*` codes.
    pub fn is_auth(&self) -> bool {
        self.ecode.as_deref().map_or(false, |c| c.starts_with("OAUTH_"))
    }
}

/// Any named hierarchy node (team, space, folder, list).
#[derive(Debug, Deserialize)]
pub struct Entity {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Entity {
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiTask {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub status: Option<ApiStatus>,
    #[serde(default)]
    pub priority: Option<Value>,
    #[serde(default)]
    pub due_date: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub status_type: Option<String>,
}

impl ApiTask {
    /// Convert to the snapshot representation.
    pub fn into_record(self, list_id: &str) -> TaskRecord {
        let completed = self.status.as_ref().map_or(false, |s| {
            is_completed_status(s.status.as_deref(), s.status_type.as_deref())
        });

        TaskRecord {
            id: self.id,
            list_id: list_id.to_string(),
            completed,
            priority: self.priority.as_ref().and_then(priority_label),
            due_date: self.due_date.as_ref().and_then(millis),
        }
    }
}

/// Priority arrives as `{"priority": "urgent", ...}`, a bare string, or null.
fn priority_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("priority").and_then(Value::as_str).map(String::from),
        _ => None,
    }
}

/// Timestamps arrive as millisecond strings or numbers.
fn millis(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
