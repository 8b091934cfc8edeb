//! Report domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::model::MetricsSummary;

/// User input for one analysis run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub clickup_api_key: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub use_case: String,
}

impl AnalysisRequest {
    /// The ClickUp key, if one was actually supplied.
    pub fn clickup_key(&self) -> Option<&str> {
        non_blank(self.clickup_api_key.as_deref())
    }

    /// The company name, if one was actually supplied.
    pub fn company(&self) -> Option<&str> {
        non_blank(self.company_name.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A message shown alongside the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// An external resource link shown on every report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// Static ClickUp learning resources.
pub const RESOURCE_LINKS: &[ResourceLink] = &[
    ResourceLink { title: "ClickUp University", url: "https://university.clickup.com/" },
    ResourceLink { title: "ClickUp Help Center", url: "https://help.clickup.com/" },
    ResourceLink { title: "ClickUp Templates", url: "https://clickup.com/templates" },
    ResourceLink { title: "ClickUp Blog", url: "https://clickup.com/blog" },
    ResourceLink { title: "ClickUp API Documentation", url: "https://clickup.com/api" },
];

/// The assembled result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub metrics: Option<MetricsSummary>,
    pub profile: Option<String>,
    pub recommendations: Option<String>,
    pub notices: Vec<Notice>,
    pub resources: &'static [ResourceLink],
}

impl Report {
    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(|n| n.level == NoticeLevel::Error)
    }
}
