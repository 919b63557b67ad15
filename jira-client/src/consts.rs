//! Constants for the jira-client crate.

use std::time::Duration;

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the Jira REST API
pub const ACCEPT: &str = "application/json";

/// Request timeout used when the caller does not configure one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Environment variable storing the request timeout in whole seconds.
pub const ENV_JIRA_TIMEOUT_SECS: &str = "JIRA_TIMEOUT_SECS";

/// Assignable user search on the v3 (cloud) REST API
pub const USER_SEARCH_PATH_V3: &str = "/rest/api/3/user/assignable/search";

/// Assignable user search on the v2 (server) REST API
pub const USER_SEARCH_PATH_V2: &str = "/rest/api/2/user/assignable/search";

/// Current user on the v3 REST API
pub const MYSELF_PATH_V3: &str = "/rest/api/3/myself";

/// Current user on the v2 REST API
pub const MYSELF_PATH_V2: &str = "/rest/api/2/myself";
