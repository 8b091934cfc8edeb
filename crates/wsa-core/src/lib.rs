//! WSA Core Library
//!
//! Domain models and business logic for the ClickUp Workspace Analysis
//! dashboard: workspace snapshots, metrics, prompt building and the
//! report pipeline shared by the web and terminal front ends.

pub mod config;
pub mod error;
pub mod generation;
pub mod metrics;
pub mod report;
pub mod workspace;

pub use config::AppConfig;
pub use error::{WsaError, WsaResult};
pub use generation::{ProviderChain, TextProvider};
pub use metrics::model::MetricsSummary;
pub use report::model::{AnalysisRequest, Notice, NoticeLevel, Report};
pub use workspace::{model::WorkspaceSnapshot, WorkspaceSource};
