//! Request signing

pub mod oauth;

pub use oauth::OAuthSigner;
