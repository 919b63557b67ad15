//! # Jira Client Errors
//!
//! Error taxonomy for the Jira client. Search option validation fails before
//! any request is sent, status and body failures are reported after the round
//! trip, and transport failures are passed through from `reqwest` untouched.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Jira REST API
#[derive(Debug, Error)]
pub enum JiraError {
  /// Neither a search term nor an account id was supplied
  #[error("Invalid search options: a query or an account id is required")]
  InvalidSearchOptions,

  /// The server answered with a non-2xx status
  #[error("Unexpected status code: {0}")]
  UnexpectedStatus(StatusCode),

  /// A 2xx body did not match the expected JSON shape
  #[error("Malformed response body: {0}")]
  MalformedResponse(#[source] serde_json::Error),

  /// Timeouts, connection failures and other transport errors
  #[error(transparent)]
  Transport(#[from] reqwest::Error),

  #[error("Invalid server URL: '{0}'")]
  InvalidServerUrl(String),

  #[error("Environment variable '{0}' not set")]
  MissingEnv(&'static str),

  #[error("Invalid timeout: '{0}' is not a whole number of seconds")]
  InvalidTimeout(String),
}

/// Result type for Jira client operations
pub type Result<T> = std::result::Result<T, JiraError>;

impl JiraError {
  /// The HTTP status carried by [`JiraError::UnexpectedStatus`], if any
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Self::UnexpectedStatus(status) => Some(*status),
      Self::Transport(err) => err.status(),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unexpected_status_message() {
    let err = JiraError::UnexpectedStatus(StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Unexpected status code: 400 Bad Request");
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
  }

  #[test]
  fn test_malformed_response_keeps_source() {
    let parse_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
    let err = JiraError::MalformedResponse(parse_err);

    assert!(err.to_string().starts_with("Malformed response body"));
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(err.status(), None);
  }

  #[test]
  fn test_invalid_search_options_has_no_status() {
    let err = JiraError::InvalidSearchOptions;
    assert!(err.to_string().contains("query or an account id"));
    assert_eq!(err.status(), None);
  }
}
