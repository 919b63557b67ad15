//! Helpers for tests that run against a `wiremock` server

use std::collections::BTreeMap;

use tracing_subscriber::EnvFilter;
use wiremock::Request;

/// Collect the query string of a captured request into a sorted map.
///
/// Repeated keys keep their last value, which is enough for asserting on the
/// exact parameter set of a request.
pub fn query_pairs(request: &Request) -> BTreeMap<String, String> {
  request
    .url
    .query_pairs()
    .map(|(key, value)| (key.into_owned(), value.into_owned()))
    .collect()
}

/// Install a test subscriber honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}
