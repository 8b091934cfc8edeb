//! Askama templates and their view models.

use askama::Template;

use crate::markdown;
use wsa_core::metrics::model::MetricTile;
use wsa_core::report::model::{Notice, Report, ResourceLink, RESOURCE_LINKS};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub providers: Vec<String>,
    pub resources: &'static [ResourceLink],
}

#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub company: String,
    pub notices: Vec<NoticeView>,
    pub tiles: Vec<MetricTile>,
    pub profile_html: Option<String>,
    pub recommendations_html: Option<String>,
    pub resources: &'static [ResourceLink],
}

/// View model for a notice.
pub struct NoticeView {
    pub level: &'static str,
    pub message: String,
}

impl NoticeView {
    fn from_notice(notice: &Notice) -> Self {
        Self {
            level: notice.level.as_str(),
            message: notice.message.clone(),
        }
    }
}

impl IndexTemplate {
    pub fn new(providers: Vec<String>) -> Self {
        Self { providers, resources: RESOURCE_LINKS }
    }
}

impl ReportTemplate {
    pub fn from_report(report: &Report, company: Option<&str>) -> Self {
        Self {
            company: company.unwrap_or_default().to_string(),
            notices: report.notices.iter().map(NoticeView::from_notice).collect(),
            tiles: report.metrics.as_ref().map(|m| m.tiles()).unwrap_or_default(),
            profile_html: report.profile.as_deref().map(markdown::to_html),
            recommendations_html: report.recommendations.as_deref().map(markdown::to_html),
            resources: report.resources,
        }
    }
}
