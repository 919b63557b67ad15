use std::time::Duration;

use reqwest::{Client, RequestBuilder, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{ClientConfig, normalize_server_url};
use crate::consts::{ACCEPT, MYSELF_PATH_V2, USER_AGENT};
use crate::error::{JiraError, Result};
use crate::models::JiraAuth;

/// Represents a Jira API client
///
/// The client holds no per-call state, so a single instance can be shared
/// between concurrent callers.
#[derive(Debug, Clone)]
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: Option<JiraAuth>,
  pub(crate) timeout: Duration,
}

impl JiraClient {
  /// Create a new Jira client with its own HTTP transport
  pub fn new(config: ClientConfig) -> Result<Self> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Self::with_http_client(config, client)
  }

  /// Create a new Jira client on top of an existing `reqwest` client
  pub fn with_http_client(config: ClientConfig, client: Client) -> Result<Self> {
    let base_url = normalize_server_url(&config.server)?;
    debug!(%base_url, timeout = ?config.timeout, "Created Jira client");

    Ok(Self {
      client,
      base_url,
      auth: config.auth,
      timeout: config.timeout,
    })
  }

  /// Base URL every request path is appended to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Start a GET request for `path` with the client's headers, credentials
  /// and timeout applied
  pub(crate) fn get(&self, path: &str) -> RequestBuilder {
    let url = format!("{}{}", self.base_url, path);

    let request = self
      .client
      .get(url)
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT)
      .timeout(self.timeout);

    match &self.auth {
      Some(auth) => request.basic_auth(&auth.username, Some(&auth.api_token)),
      None => request,
    }
  }

  /// Send `request` and decode a 2xx JSON body.
  ///
  /// Non-2xx answers become [`JiraError::UnexpectedStatus`] without reading
  /// the body.
  pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
      warn!(%status, url = %response.url(), "Jira request failed");
      return Err(JiraError::UnexpectedStatus(status));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(JiraError::MalformedResponse)
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let response = self.get(MYSELF_PATH_V2).send().await?;

    Ok(response.status().is_success())
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  ClientConfig::builder(base_url).basic_auth(username, api_token).build()
}
