//! HTTP transport and the signed request executor

pub mod client;
pub mod executor;

pub use client::{HttpClient, HttpClientBuilder};
pub use executor::SignedHttpExecutor;
