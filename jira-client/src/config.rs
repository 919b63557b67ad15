//! # Client Configuration
//!
//! Explicit configuration for [`JiraClient`]: the server URL, the per-request
//! timeout, optional basic-auth credentials and, through the builder, the HTTP
//! transport to use.

use std::time::Duration;

use reqwest::Client;
use url::{Position, Url};

use crate::client::JiraClient;
use crate::consts::{DEFAULT_TIMEOUT, ENV_JIRA_HOST, ENV_JIRA_TIMEOUT_SECS};
use crate::error::{JiraError, Result};
use crate::models::JiraAuth;

/// Connection settings for a Jira server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
  /// Base URL of the Jira instance, e.g. `https://company.atlassian.net`
  pub server: String,
  /// Applied to every request. Defaults to [`DEFAULT_TIMEOUT`].
  pub timeout: Duration,
  /// Sent as HTTP basic auth when present
  pub auth: Option<JiraAuth>,
}

impl ClientConfig {
  /// Configuration for `server` with the default timeout and no credentials
  pub fn new(server: impl Into<String>) -> Self {
    Self {
      server: server.into(),
      timeout: DEFAULT_TIMEOUT,
      auth: None,
    }
  }

  pub fn builder(server: impl Into<String>) -> ClientConfigBuilder {
    ClientConfigBuilder::new(server)
  }

  /// Read the configuration from `$JIRA_HOST` and `$JIRA_TIMEOUT_SECS`.
  ///
  /// If the host doesn't include a scheme, https:// is assumed.
  pub fn from_env() -> Result<Self> {
    let host = std::env::var(ENV_JIRA_HOST).map_err(|_| JiraError::MissingEnv(ENV_JIRA_HOST))?;
    let mut config = Self::new(normalize_server_url(&host)?);

    if let Ok(raw) = std::env::var(ENV_JIRA_TIMEOUT_SECS) {
      let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| JiraError::InvalidTimeout(raw.clone()))?;
      config.timeout = Duration::from_secs(secs);
    }

    Ok(config)
  }
}

/// Builder for [`ClientConfig`] and [`JiraClient`]
#[derive(Debug)]
pub struct ClientConfigBuilder {
  config: ClientConfig,
  http_client: Option<Client>,
}

impl ClientConfigBuilder {
  fn new(server: impl Into<String>) -> Self {
    Self {
      config: ClientConfig::new(server),
      http_client: None,
    }
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn basic_auth(mut self, username: impl Into<String>, api_token: impl Into<String>) -> Self {
    self.config.auth = Some(JiraAuth::new(username, api_token));
    self
  }

  /// Use an existing `reqwest` client instead of creating one
  pub fn http_client(mut self, client: Client) -> Self {
    self.http_client = Some(client);
    self
  }

  /// The configuration built so far, with the server URL normalized.
  ///
  /// The HTTP client set through [`Self::http_client`] is not part of
  /// [`ClientConfig`]; pass it to [`JiraClient::with_http_client`] or call
  /// [`Self::build`] instead.
  pub fn config(&self) -> Result<ClientConfig> {
    let mut config = self.config.clone();
    config.server = normalize_server_url(&config.server)?;
    Ok(config)
  }

  /// Build a client from this configuration
  pub fn build(self) -> Result<JiraClient> {
    match self.http_client {
      Some(client) => JiraClient::with_http_client(self.config, client),
      None => JiraClient::new(self.config),
    }
  }
}

/// Normalize a Jira server URL.
///
/// Assumes https:// when no scheme is given, repairs schemes missing a slash
/// ("http:/jira.example.com") and strips trailing slashes so REST paths can be
/// appended directly.
pub fn normalize_server_url(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(JiraError::InvalidServerUrl(input.to_string()));
  }

  let candidate = match trimmed.split_once(':') {
    Some((scheme, rest)) if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") => {
      format!("{}://{}", scheme.to_ascii_lowercase(), rest.trim_start_matches('/'))
    }
    _ => format!("https://{trimmed}"),
  };

  let url = Url::parse(&candidate).map_err(|_| JiraError::InvalidServerUrl(input.to_string()))?;
  if url.host_str().is_none_or(str::is_empty) {
    return Err(JiraError::InvalidServerUrl(input.to_string()));
  }

  let mut result = url[..Position::BeforePath].to_string();
  result.push_str(url.path().trim_end_matches('/'));
  Ok(result)
}
