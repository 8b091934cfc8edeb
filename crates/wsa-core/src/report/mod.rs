//! Report pipeline.
//!
//! One linear run: ClickUp snapshot → metrics → company profile →
//! recommendations. Every failure becomes a [`Notice`] so the rest of the
//! report still renders.

pub mod model;

use chrono::{DateTime, Utc};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::generation::{self, ProviderChain};
use crate::metrics::model::MetricsSummary;
use crate::workspace::WorkspaceSource;
use model::{AnalysisRequest, Notice, Report, RESOURCE_LINKS};

/// Shown when the run goes ahead without a ClickUp key.
pub const SKIPPED_WORKSPACE_NOTICE: &str =
    "ClickUp API Key not provided. Skipping workspace data analysis.";

/// Shown when every provider failed to produce recommendations.
pub const RECOMMENDATIONS_UNAVAILABLE: &str =
    "AI recommendations are not available because both AI services failed.";

/// Run one analysis and assemble the report.
///
/// `source` is only consulted when the request carries a ClickUp key.
pub async fn run_analysis(
    request: &AnalysisRequest,
    source: &dyn WorkspaceSource,
    chain: &ProviderChain,
    now: DateTime<Utc>,
) -> Report {
    let run_id = Uuid::new_v4();
    let span = info_span!("analysis", %run_id);

    async move {
        let mut notices = Vec::new();

        let metrics = match request.clickup_key() {
            Some(key) => match source.fetch_snapshot(key).await {
                Ok(snapshot) => {
                    let summary = MetricsSummary::from_snapshot(&snapshot, now);
                    info!(
                        team = snapshot.team_id().unwrap_or("-"),
                        tasks = summary.total_tasks,
                        "Workspace metrics computed"
                    );
                    Some(summary)
                }
                Err(e) => {
                    warn!(error = %e, "Workspace fetch failed");
                    notices.push(Notice::error(e.to_string()));
                    None
                }
            },
            None => {
                info!("No ClickUp key, skipping workspace analysis");
                notices.push(Notice::info(SKIPPED_WORKSPACE_NOTICE));
                None
            }
        };

        let profile = match request.company() {
            Some(company) => match generation::generate_profile(chain, company).await {
                Ok(text) => {
                    info!(company, "Company profile generated");
                    Some(text)
                }
                Err(e) => {
                    notices.push(Notice::error(format!("Error fetching company details: {}", e)));
                    None
                }
            },
            None => None,
        };

        let recommendations = match generation::generate_recommendations(
            chain,
            metrics.as_ref(),
            profile.as_deref(),
            &request.use_case,
        )
        .await
        {
            Ok(text) => {
                info!("Recommendations generated");
                Some(text)
            }
            Err(e) => {
                warn!(error = %e, "Recommendations unavailable");
                notices.push(Notice::error(RECOMMENDATIONS_UNAVAILABLE));
                None
            }
        };

        Report {
            run_id,
            generated_at: now,
            metrics,
            profile,
            recommendations,
            notices,
            resources: RESOURCE_LINKS,
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{WsaError, WsaResult};
    use crate::generation::mock::ScriptedProvider;
    use crate::report::model::NoticeLevel;
    use crate::workspace::model::{TaskRecord, WorkspaceSnapshot};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    enum Outcome {
        Snapshot(WorkspaceSnapshot),
        Unauthorized,
        Unreachable,
    }

    struct CountingSource {
        outcome: Outcome,
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new(outcome: Outcome) -> Self {
            Self { outcome, calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WorkspaceSource for CountingSource {
        async fn fetch_snapshot(&self, _api_key: &str) -> WsaResult<WorkspaceSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Outcome::Snapshot(s) => Ok(s.clone()),
                Outcome::Unauthorized => Err(WsaError::authentication("Invalid API Key provided.")),
                Outcome::Unreachable => Err(WsaError::network("connection refused")),
            }
        }
    }

    fn snapshot() -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            team_ids: vec!["42".into()],
            tasks: (0..4)
                .map(|i| TaskRecord { completed: i % 2 == 0, ..Default::default() })
                .collect(),
            ..Default::default()
        }
    }

    fn request(key: Option<&str>, company: Option<&str>, use_case: &str) -> AnalysisRequest {
        AnalysisRequest {
            clickup_api_key: key.map(String::from),
            company_name: company.map(String::from),
            use_case: use_case.to_string(),
        }
    }

    fn echo_chain() -> ProviderChain {
        ProviderChain::default().with(Arc::new(ScriptedProvider::echo("echo")))
    }

    #[tokio::test]
    async fn test_missing_key_never_calls_source() {
        let source = CountingSource::new(Outcome::Snapshot(snapshot()));
        let report = run_analysis(&request(None, None, "Agency work"), &source, &echo_chain(), Utc::now()).await;

        assert_eq!(source.calls(), 0);
        assert!(report.metrics.is_none());
        assert_eq!(report.notices, vec![Notice::info(SKIPPED_WORKSPACE_NOTICE)]);
        assert!(report.recommendations.unwrap().contains("Agency work"));
        assert!(!report.resources.is_empty());
    }

    #[tokio::test]
    async fn test_blank_key_counts_as_missing() {
        let source = CountingSource::new(Outcome::Snapshot(snapshot()));
        let report = run_analysis(&request(Some("   "), None, ""), &source, &echo_chain(), Utc::now()).await;

        assert_eq!(source.calls(), 0);
        assert_eq!(report.notices[0].level, NoticeLevel::Info);
    }

    #[tokio::test]
    async fn test_full_run() {
        let source = CountingSource::new(Outcome::Snapshot(snapshot()));
        let report = run_analysis(
            &request(Some("pk_1"), Some("Acme"), "Product roadmap"),
            &source,
            &echo_chain(),
            Utc::now(),
        )
        .await;

        assert_eq!(source.calls(), 1);
        let metrics = report.metrics.as_ref().unwrap();
        assert_eq!(metrics.total_tasks, 4);
        assert_eq!(metrics.completed_tasks, 2);
        assert!(report.profile.as_ref().unwrap().contains("Acme"));

        let recommendations = report.recommendations.as_ref().unwrap();
        assert!(recommendations.contains("- Total Tasks: 4"));
        assert!(recommendations.contains("company profile for Acme"));
        assert!(report.notices.is_empty());
        assert!(!report.has_errors());
    }

    #[tokio::test]
    async fn test_auth_failure_continues_with_ai_only() {
        let source = CountingSource::new(Outcome::Unauthorized);
        let report = run_analysis(&request(Some("bad"), None, "Ops"), &source, &echo_chain(), Utc::now()).await;

        assert!(report.metrics.is_none());
        assert!(report.recommendations.is_some());
        assert_eq!(report.notices.len(), 1);
        assert_eq!(report.notices[0].level, NoticeLevel::Error);
        assert!(report.notices[0].message.contains("Invalid API Key"));
    }

    #[tokio::test]
    async fn test_network_failure_is_notice() {
        let source = CountingSource::new(Outcome::Unreachable);
        let report = run_analysis(&request(Some("pk"), None, ""), &source, &echo_chain(), Utc::now()).await;

        assert!(report.has_errors());
        assert!(report.notices[0].message.contains("connection refused"));
        assert!(report.recommendations.is_some());
    }

    #[tokio::test]
    async fn test_generation_failure_keeps_partial_report() {
        let source = CountingSource::new(Outcome::Snapshot(snapshot()));
        let chain = ProviderChain::default()
            .with(Arc::new(ScriptedProvider::failing("openai")))
            .with(Arc::new(ScriptedProvider::failing("gemini")));
        let report = run_analysis(&request(Some("pk"), Some("Acme"), "x"), &source, &chain, Utc::now()).await;

        assert!(report.metrics.is_some());
        assert!(report.profile.is_none());
        assert!(report.recommendations.is_none());
        let messages: Vec<_> = report.notices.iter().map(|n| n.message.as_str()).collect();
        assert!(messages[0].starts_with("Error fetching company details"));
        assert_eq!(messages[1], RECOMMENDATIONS_UNAVAILABLE);
    }
}
