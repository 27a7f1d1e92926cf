//! # Marketplace Domain
//!
//! Business domain types for the marketplace client.
//!
//! This crate contains:
//! - Credentials, environments and the endpoint table
//! - Request/response envelopes shared by every port
//! - Validation job, publish format and package upload payloads
//! - Client configuration
//! - The domain error type and Result alias
//!
//! ## Architecture
//! - No dependencies on other marketplace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::package_name::extract_package_name;
