//! # Jira API Client
//!
//! Typed access to the Jira REST user endpoints. Search options are validated
//! and rendered into a version-aware query string, the request is sent through
//! `reqwest`, and the JSON answer is decoded into [`User`] values.
//!
//! ```no_run
//! use jira_client::{ClientConfig, UserSearchOptions};
//!
//! # async fn run() -> jira_client::Result<()> {
//! let client = ClientConfig::builder("company.atlassian.net")
//!   .basic_auth("me@example.com", "api-token")
//!   .build()?;
//!
//! let options = UserSearchOptions::new().query("doe").max_results(5);
//! let users = client.user_search(Some(&options)).await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;
pub mod query;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use config::{ClientConfig, ClientConfigBuilder, normalize_server_url};
pub use error::{JiraError, Result};
// Re-export models
pub use models::{ApiVersion, JiraAuth, User, UserSearchOptions};
pub use query::build_user_search_query;
