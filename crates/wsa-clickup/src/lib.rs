//! # WSA ClickUp
//!
//! Authenticated client for the ClickUp REST API v2.
//!
//! Walks teams, spaces, folders, lists and tasks and produces the
//! `WorkspaceSnapshot` consumed by the metrics aggregator.

pub mod api;
pub mod client;

pub use client::ClickUpClient;
