//! Recorded Jira payloads used across tests

use serde_json::Value;

/// Assignable user search answer: one fully visible account and one with a
/// restricted profile (no `name`, inactive)
pub const USERS_JSON: &str = r#"[
  {
    "accountId": "5fb82376aca10c006949f35b",
    "emailAddress": "jane@domain.tld",
    "name": "janedoe",
    "displayName": "Jane Doe",
    "active": true
  },
  {
    "accountId": "5fb82376aca10c006949f35c",
    "emailAddress": "jon@domain.tld",
    "displayName": "Jon Doe",
    "active": false
  }
]"#;

/// [`USERS_JSON`] parsed into a JSON value
pub fn users_fixture() -> Value {
  serde_json::from_str(USERS_JSON).expect("Users fixture is valid JSON")
}
