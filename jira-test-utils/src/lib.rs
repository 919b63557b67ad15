//! Test utilities shared across the jira-client workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - Recorded JSON payloads for the user endpoints ([`users_fixture`])
//! - Inspection of requests captured by a `wiremock` server ([`query_pairs`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod server;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use fixtures::{USERS_JSON, users_fixture};
pub use server::{init_tracing, query_pairs};
