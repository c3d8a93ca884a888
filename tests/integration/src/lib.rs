//! Integration test support library
//!
//! Provides a spawned test server, HTTP helpers, and data fixtures for the
//! end-to-end tests under `tests/`.

pub mod fixtures;
pub mod helpers;

pub use helpers::{assert_json, assert_status, check_test_env, TestServer};
