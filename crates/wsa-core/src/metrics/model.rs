//! Metrics domain models.

use serde::{Deserialize, Serialize};

/// Summary counters for one workspace snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub space_count: usize,
    pub folder_count: usize,
    pub list_count: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Ratio in `[0, 1]`; zero for an empty workspace.
    pub completion_rate: f64,
    pub overdue_tasks: usize,
    pub high_priority_tasks: usize,
}

/// A labelled value for the summary tiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTile {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl MetricsSummary {
    /// Completion rate as a percentage rounded to two decimals.
    pub fn completion_percent(&self) -> f64 {
        (self.completion_rate * 10_000.0).round() / 100.0
    }

    /// Display tiles in dashboard order.
    pub fn tiles(&self) -> Vec<MetricTile> {
        let tile = |icon: &'static str, label: &'static str, value: String| MetricTile { icon, label, value };
        vec![
            tile("📁", "Spaces", self.space_count.to_string()),
            tile("📂", "Folders", self.folder_count.to_string()),
            tile("🗂️", "Lists", self.list_count.to_string()),
            tile("📝", "Total Tasks", self.total_tasks.to_string()),
            tile("✅", "Completed Tasks", self.completed_tasks.to_string()),
            tile("📈", "Task Completion Rate", format!("{:.2}%", self.completion_percent())),
            tile("⚠️", "Overdue Tasks", self.overdue_tasks.to_string()),
            tile("🔥", "High Priority Tasks", self.high_priority_tasks.to_string()),
        ]
    }

    /// Render the summary as a markdown bullet list for prompts.
    pub fn to_markdown(&self) -> String {
        self.tiles()
            .iter()
            .map(|t| format!("- {}: {}", t.label, t.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
