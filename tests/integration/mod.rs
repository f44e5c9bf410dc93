//! Integration tests
//!
//! These tests drive the real reqwest transport against a `wiremock` upstream.

pub mod http_api_tests;
pub mod upstream_client_tests;
