//! # Marketplace Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The reqwest-based HTTP client and the OAuth-signed request executor
//! - Filesystem package reading and the tokio poll timer
//! - Configuration loading from environment variables and files
//! - Tracing subscriber setup
//! - `MarketplaceClient`, which wires all of the above together
//!
//! ## Architecture
//! - Implements traits defined in `marketplace-core`
//! - Depends on `marketplace-domain` and `marketplace-core`
//! - Contains all "impure" code (network, filesystem, clocks)

pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod packages;
pub mod scheduling;
pub mod signing;

// Re-export commonly used items
pub use client::MarketplaceClient;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, SignedHttpExecutor};
pub use observability::{init_tracing, LogFormat};
pub use packages::FsPackageSource;
pub use scheduling::TokioPollTimer;
pub use signing::OAuthSigner;
