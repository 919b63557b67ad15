//! # Search Query Builder
//!
//! Turns [`UserSearchOptions`] into the query parameters understood by the
//! assignable user search endpoint of a given [`ApiVersion`].

use crate::error::{JiraError, Result};
use crate::models::{ApiVersion, UserSearchOptions, non_empty};

/// Ordered query parameters, ready for `RequestBuilder::query`
pub type QueryParams = Vec<(&'static str, String)>;

/// Build the query parameters for a user search.
///
/// Empty text options are left out, while `startAt` and `maxResults` are
/// always sent. Fails with [`JiraError::InvalidSearchOptions`] when no options
/// are given or when neither a search term nor an account id is set.
pub fn build_user_search_query(options: Option<&UserSearchOptions>, version: ApiVersion) -> Result<QueryParams> {
  let options = options.ok_or(JiraError::InvalidSearchOptions)?;
  if !options.has_criteria() {
    return Err(JiraError::InvalidSearchOptions);
  }

  let mut params = QueryParams::with_capacity(4);
  if let Some(query) = non_empty(&options.query) {
    params.push((version.query_param(), query.to_string()));
  }
  if let Some(account_id) = non_empty(&options.account_id) {
    params.push(("accountId", account_id.to_string()));
  }
  params.push(("startAt", options.start_at.to_string()));
  params.push(("maxResults", options.max_results.to_string()));

  Ok(params)
}
