//! Test Module
//!
//! Test suite for the portfolio chat core.
//!
//! ## Test Categories
//! - `brain_tests`: Intent routing, precedence and individual rules
//! - `session_tests`: Session lifecycle, turns, stale replies and caching against a mock backend
//! - `integration_tests`: Full workflows through the HTTP client and a mock server

pub mod brain_tests;
