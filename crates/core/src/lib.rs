//! # Marketplace Core
//!
//! Pure business logic layer - no HTTP, filesystem or runtime code.
//!
//! This crate contains:
//! - Port interfaces (traits) for request execution, package reading and
//!   poll timing
//! - The validation workflow state machine
//! - `MarketplaceService`, the operation surface built on those ports
//!
//! ## Architecture Principles
//! - Only depends on `marketplace-domain`
//! - All external effects via traits
//! - Pure, testable business logic

pub mod marketplace;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use marketplace::ports::{PackageSource, PollTimer, RequestExecutor};
pub use marketplace::MarketplaceService;
pub use validation::ValidationState;
