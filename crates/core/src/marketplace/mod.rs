//! Marketplace operations built on the executor, package and timer ports

pub mod ports;
pub mod service;

pub use service::MarketplaceService;
