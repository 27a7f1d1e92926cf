//! Shared test helpers for `marketplace-core` integration tests.
//!
//! In-memory fakes for every port so workflow tests can focus on behaviour
//! instead of transport plumbing.

pub mod ports;
