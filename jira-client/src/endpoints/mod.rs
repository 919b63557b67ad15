//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by Jira API resource type.

pub mod users;
