//! Workspace snapshot models.

use serde::{Deserialize, Serialize};

/// Status names ClickUp workspaces commonly use for finished work.
const COMPLETED_STATUS_NAMES: &[&str] = &["complete", "completed", "closed", "done"];

/// Status types ClickUp assigns to terminal statuses.
const COMPLETED_STATUS_TYPES: &[&str] = &["closed", "done"];

/// Everything fetched from ClickUp during one analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub team_ids: Vec<String>,
    pub spaces: Vec<Space>,
    pub folders: Vec<Folder>,
    pub lists: Vec<TaskList>,
    pub tasks: Vec<TaskRecord>,
}

impl WorkspaceSnapshot {
    /// The primary team identifier (the first team visible to the key).
    pub fn team_id(&self) -> Option<&str> {
        self.team_ids.first().map(String::as_str)
    }
}

/// A ClickUp space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    pub team_id: String,
    pub name: String,
}

/// A folder within a space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub space_id: String,
    pub name: String,
}

/// A list, either inside a folder or directly under a space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub space_id: String,
    pub folder_id: Option<String>,
    pub name: String,
}

/// The parts of a task the metrics care about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub list_id: String,
    pub completed: bool,
    /// Priority label as ClickUp reports it ("urgent", "high", "normal", "low").
    pub priority: Option<String>,
    /// Due date in milliseconds since the Unix epoch.
    pub due_date: Option<i64>,
}

/// Decide whether a ClickUp status marks a task as finished.
///
/// The status type is authoritative when present; the name is matched
/// case-insensitively otherwise.
pub fn is_completed_status(name: Option<&str>, status_type: Option<&str>) -> bool {
    let matches = |value: Option<&str>, set: &[&str]| {
        value.map_or(false, |v| {
            let v = v.trim().to_lowercase();
            set.iter().any(|s| *s == v)
        })
    };

    if status_type.is_some() {
        return matches(status_type, COMPLETED_STATUS_TYPES);
    }
    matches(name, COMPLETED_STATUS_NAMES)
}
