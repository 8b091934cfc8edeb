//! Workspace metrics aggregation.

pub mod model;

use chrono::{DateTime, Utc};

use crate::workspace::model::WorkspaceSnapshot;
use model::MetricsSummary;

/// Priority labels counted as high priority.
pub const HIGH_PRIORITY_LABELS: &[&str] = &["urgent", "high"];

impl MetricsSummary {
    /// Fold a snapshot into summary counters. Pure: `now` is supplied by the caller.
    pub fn from_snapshot(snapshot: &WorkspaceSnapshot, now: DateTime<Utc>) -> Self {
        let now_ms = now.timestamp_millis();
        let tasks = &snapshot.tasks;

        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.completed).count();
        let overdue_tasks = tasks
            .iter()
            .filter(|t| !t.completed && t.due_date.map_or(false, |due| due < now_ms))
            .count();
        let high_priority_tasks = tasks
            .iter()
            .filter(|t| t.priority.as_deref().map_or(false, is_high_priority))
            .count();

        let completion_rate = if total_tasks == 0 {
            0.0
        } else {
            completed_tasks as f64 / total_tasks as f64
        };

        Self {
            space_count: snapshot.spaces.len(),
            folder_count: snapshot.folders.len(),
            list_count: snapshot.lists.len(),
            total_tasks,
            completed_tasks,
            completion_rate,
            overdue_tasks,
            high_priority_tasks,
        }
    }
}

/// Case-insensitive membership in [`HIGH_PRIORITY_LABELS`].
pub fn is_high_priority(label: &str) -> bool {
    let label = label.trim();
    HIGH_PRIORITY_LABELS.iter().any(|p| p.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::model::{Folder, Space, TaskList, TaskRecord};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn task(completed: bool, priority: Option<&str>, due_date: Option<i64>) -> TaskRecord {
        TaskRecord {
            id: "t".into(),
            list_id: "l".into(),
            completed,
            priority: priority.map(String::from),
            due_date,
        }
    }

    fn snapshot(tasks: Vec<TaskRecord>) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            team_ids: vec!["1".into()],
            spaces: vec![Space { id: "s1".into(), team_id: "1".into(), name: "Eng".into() }],
            folders: vec![
                Folder { id: "f1".into(), space_id: "s1".into(), name: "Q1".into() },
                Folder { id: "f2".into(), space_id: "s1".into(), name: "Q2".into() },
            ],
            lists: vec![
                TaskList { id: "l1".into(), space_id: "s1".into(), folder_id: Some("f1".into()), name: "Sprint".into() },
                TaskList { id: "l2".into(), space_id: "s1".into(), folder_id: None, name: "Inbox".into() },
            ],
            tasks,
        }
    }

    #[test]
    fn test_empty_workspace_has_zero_rate() {
        let summary = MetricsSummary::from_snapshot(&WorkspaceSnapshot::default(), now());
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.completion_rate, 0.0);
        assert!(!summary.completion_rate.is_nan());
    }

    #[test]
    fn test_six_of_ten_completed() {
        let tasks = (0..10).map(|i| task(i < 6, None, None)).collect();
        let summary = MetricsSummary::from_snapshot(&snapshot(tasks), now());
        assert_eq!(summary.total_tasks, 10);
        assert_eq!(summary.completed_tasks, 6);
        assert!((summary.completion_rate - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_structure_counts() {
        let summary = MetricsSummary::from_snapshot(&snapshot(vec![]), now());
        assert_eq!(summary.space_count, 1);
        assert_eq!(summary.folder_count, 2);
        assert_eq!(summary.list_count, 2);
    }

    #[test]
    fn test_overdue_excludes_completed_and_future() {
        let now_ms = now().timestamp_millis();
        let tasks = vec![
            task(false, None, Some(now_ms - 1)),
            task(true, None, Some(now_ms - 1_000)),
            task(false, None, Some(now_ms + 1_000)),
            task(false, None, Some(now_ms)),
            task(false, None, None),
        ];
        let summary = MetricsSummary::from_snapshot(&snapshot(tasks), now());
        assert_eq!(summary.overdue_tasks, 1);
    }

    #[test]
    fn test_high_priority_labels() {
        let tasks = vec![
            task(false, Some("urgent"), None),
            task(false, Some("HIGH"), None),
            task(false, Some("normal"), None),
            task(false, Some("low"), None),
            task(false, None, None),
        ];
        let summary = MetricsSummary::from_snapshot(&snapshot(tasks), now());
        assert_eq!(summary.high_priority_tasks, 2);
    }

    #[test]
    fn test_counts_never_exceed_total() {
        let now_ms = now().timestamp_millis();
        let mixes = [
            vec![],
            vec![task(true, Some("urgent"), Some(now_ms - 5))],
            vec![task(false, None, Some(0)), task(false, None, Some(1)), task(true, None, None)],
            (0..25).map(|i| task(i % 3 == 0, None, Some(now_ms - i))).collect(),
        ];
        for tasks in mixes {
            let summary = MetricsSummary::from_snapshot(&snapshot(tasks), now());
            assert!(summary.completed_tasks <= summary.total_tasks);
            assert!(summary.overdue_tasks <= summary.total_tasks);
            assert!((0.0..=1.0).contains(&summary.completion_rate));
        }
    }
}
