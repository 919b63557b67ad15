use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::{MYSELF_PATH_V2, MYSELF_PATH_V3, USER_SEARCH_PATH_V2, USER_SEARCH_PATH_V3};

/// Represents Jira authentication credentials
#[derive(Clone, PartialEq, Eq)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

impl JiraAuth {
  pub fn new(username: impl Into<String>, api_token: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      api_token: api_token.into(),
    }
  }
}

impl fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JiraAuth")
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

/// REST API family a request is sent to.
///
/// Both families expose the same user search, but the legacy one names the
/// free-text parameter `username` instead of `query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
  /// `/rest/api/3`, used by Jira Cloud
  V3,
  /// `/rest/api/2`, used by Jira Server and Data Center
  V2,
}

impl ApiVersion {
  /// Path of the assignable user search endpoint
  pub const fn user_search_path(self) -> &'static str {
    match self {
      Self::V3 => USER_SEARCH_PATH_V3,
      Self::V2 => USER_SEARCH_PATH_V2,
    }
  }

  /// Path of the current user endpoint
  pub const fn myself_path(self) -> &'static str {
    match self {
      Self::V3 => MYSELF_PATH_V3,
      Self::V2 => MYSELF_PATH_V2,
    }
  }

  /// Query parameter carrying the free-text search term
  pub const fn query_param(self) -> &'static str {
    match self {
      Self::V3 => "query",
      Self::V2 => "username",
    }
  }
}

/// Filters and paging for an assignable user search.
///
/// At least one of `query` or `account_id` must be non-empty for the search
/// to be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchOptions {
  pub query: Option<String>,
  pub account_id: Option<String>,
  pub start_at: u32,
  pub max_results: u32,
}

impl UserSearchOptions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the free-text search term
  pub fn query(mut self, query: impl Into<String>) -> Self {
    self.query = Some(query.into());
    self
  }

  /// Restrict the search to an account id
  pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
    self.account_id = Some(account_id.into());
    self
  }

  pub fn start_at(mut self, start_at: u32) -> Self {
    self.start_at = start_at;
    self
  }

  pub fn max_results(mut self, max_results: u32) -> Self {
    self.max_results = max_results;
    self
  }

  /// Whether a search term or account id is present
  pub fn has_criteria(&self) -> bool {
    non_empty(&self.query).is_some() || non_empty(&self.account_id).is_some()
  }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

/// Represents a Jira user as returned by the user endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "RawUser")]
pub struct User {
  #[serde(rename = "accountId")]
  pub account_id: String,

  /// Hidden for accounts with restricted profile visibility
  #[serde(rename = "emailAddress", skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  /// Hidden for accounts with restricted profile visibility
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(rename = "displayName")]
  pub display_name: String,

  pub active: bool,
}

/// Wire shape of a user. Server deployments send the login as `name`,
/// `username`, or both.
#[derive(Deserialize)]
struct RawUser {
  #[serde(rename = "accountId")]
  account_id: String,
  #[serde(rename = "emailAddress", default, deserialize_with = "empty_as_none")]
  email: Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  name: Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  username: Option<String>,
  #[serde(rename = "displayName", deserialize_with = "null_as_default")]
  display_name: String,
  #[serde(default, deserialize_with = "null_as_default")]
  active: bool,
}

impl From<RawUser> for User {
  fn from(raw: RawUser) -> Self {
    Self {
      account_id: raw.account_id,
      email: raw.email,
      name: raw.name.or(raw.username),
      display_name: raw.display_name,
      active: raw.active,
    }
  }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<String>::deserialize(deserializer)?;
  Ok(value.filter(|v| !v.is_empty()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_jira_auth_debug_redacts_token() {
    let auth = JiraAuth::new("test_user", "test_token");

    let debug = format!("{auth:?}");
    assert!(debug.contains("test_user"));
    assert!(!debug.contains("test_token"));
  }

  #[test]
  fn test_api_version_paths() {
    assert_eq!(ApiVersion::V3.user_search_path(), "/rest/api/3/user/assignable/search");
    assert_eq!(ApiVersion::V2.user_search_path(), "/rest/api/2/user/assignable/search");
    assert_eq!(ApiVersion::V3.query_param(), "query");
    assert_eq!(ApiVersion::V2.query_param(), "username");
  }

  #[test]
  fn test_search_options_criteria() {
    assert!(!UserSearchOptions::new().has_criteria());
    assert!(!UserSearchOptions::new().query("").account_id("").has_criteria());
    assert!(UserSearchOptions::new().query("doe").has_criteria());
    assert!(UserSearchOptions::new().account_id("a123b").has_criteria());
  }

  #[test]
  fn test_user_deserialization() {
    let json = json!({
        "accountId": "5fb82376aca10c006949f35b",
        "emailAddress": "jane@domain.tld",
        "name": "janedoe",
        "displayName": "Jane Doe",
        "active": true,
        "timeZone": "Europe/Paris"
    });

    let user: User = serde_json::from_value(json).unwrap();

    assert_eq!(user.account_id, "5fb82376aca10c006949f35b");
    assert_eq!(user.email, Some("jane@domain.tld".to_string()));
    assert_eq!(user.name, Some("janedoe".to_string()));
    assert_eq!(user.display_name, "Jane Doe");
    assert!(user.active);
  }

  #[test]
  fn test_user_deserialization_restricted_profile() {
    let json = json!({
        "accountId": "5fb82376aca10c006949f35c",
        "emailAddress": "",
        "name": null,
        "displayName": null
    });

    let user: User = serde_json::from_value(json).unwrap();

    assert_eq!(user.email, None);
    assert_eq!(user.name, None);
    assert_eq!(user.display_name, "");
    assert!(!user.active);
  }

  #[test]
  fn test_user_deserialization_username_alias() {
    let json = json!({
        "accountId": "a123b",
        "username": "jdoe",
        "displayName": "J. Doe",
        "active": true
    });

    let user: User = serde_json::from_value(json).unwrap();

    assert_eq!(user.name, Some("jdoe".to_string()));
  }

  #[test]
  fn test_user_deserialization_name_and_username() {
    let json = json!({
        "accountId": "a123b",
        "name": "janedoe",
        "username": "jdoe",
        "displayName": "Jane Doe",
        "active": true
    });

    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.name, Some("janedoe".to_string()));

    let json = json!({
        "accountId": "a123b",
        "name": "",
        "username": "jdoe",
        "displayName": "Jane Doe",
        "active": true
    });

    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.name, Some("jdoe".to_string()));
  }

  #[test]
  fn test_user_round_trip() {
    let users = vec![
      User {
        account_id: "5fb82376aca10c006949f35b".to_string(),
        email: Some("jane@domain.tld".to_string()),
        name: Some("janedoe".to_string()),
        display_name: "Jane Doe".to_string(),
        active: true,
      },
      User {
        account_id: "5fb82376aca10c006949f35c".to_string(),
        email: None,
        name: None,
        display_name: "Jon Doe".to_string(),
        active: false,
      },
    ];

    let json = serde_json::to_value(&users).unwrap();
    assert_eq!(
      json[1],
      json!({
          "accountId": "5fb82376aca10c006949f35c",
          "displayName": "Jon Doe",
          "active": false
      })
    );

    let decoded: Vec<User> = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, users);
  }

  #[test]
  fn test_user_deserialization_requires_account_id() {
    let json = json!({
        "displayName": "Nobody",
        "active": true
    });

    assert!(serde_json::from_value::<User>(json).is_err());
  }
}
