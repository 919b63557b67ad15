//! # Jira User Endpoints
//!
//! Assignable user search on both REST API versions, and the current user.

use tracing::{debug, instrument};

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{ApiVersion, User, UserSearchOptions};
use crate::query::build_user_search_query;

impl JiraClient {
  /// Search assignable users through the v3 REST API.
  ///
  /// Either a search term or an account id must be set, otherwise the call
  /// fails with [`JiraError::InvalidSearchOptions`](crate::JiraError) before
  /// anything is sent.
  pub async fn user_search(&self, options: Option<&UserSearchOptions>) -> Result<Vec<User>> {
    self.search_users(ApiVersion::V3, options).await
  }

  /// Search assignable users through the legacy v2 REST API
  pub async fn user_search_v2(&self, options: Option<&UserSearchOptions>) -> Result<Vec<User>> {
    self.search_users(ApiVersion::V2, options).await
  }

  /// Search assignable users through the given API version.
  ///
  /// Users are returned in the order the server sent them.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_users(&self, version: ApiVersion, options: Option<&UserSearchOptions>) -> Result<Vec<User>> {
    let params = build_user_search_query(options, version)?;
    debug!(path = version.user_search_path(), params = params.len(), "Searching Jira users");

    let request = self.get(version.user_search_path()).query(&params);
    let users: Vec<User> = self.send_json(request).await?;

    debug!(count = users.len(), "Jira user search returned");
    Ok(users)
  }

  /// Get the user the client is authenticated as
  #[instrument(skip(self), level = "debug")]
  pub async fn get_myself(&self, version: ApiVersion) -> Result<User> {
    let request = self.get(version.myself_path());
    self.send_json(request).await
  }
}
