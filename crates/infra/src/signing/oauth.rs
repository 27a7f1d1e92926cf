//! OAuth 1.0 consumer (two-legged) request signing
//!
//! Every marketplace call carries an `Authorization: OAuth ...` header signed
//! with HMAC-SHA1 over the consumer secret. There is no user token, so the
//! signing key is `enc(consumer_secret)&`. JSON bodies are not part of the
//! signature; URL query pairs are.

use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use marketplace_domain::{Credentials, HttpMethod, MarketplaceError, Result};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use url::Url;
use urlencoding::encode;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 32;

/// Builds `Authorization` headers for consumer-signed requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct OAuthSigner;

impl OAuthSigner {
    pub fn new() -> Self {
        Self
    }

    /// Sign a request with a fresh nonce and the current time.
    ///
    /// # Errors
    ///
    /// Returns `MarketplaceError::Signing` if the URL cannot be parsed.
    pub fn authorization_header(
        &self,
        method: HttpMethod,
        url: &str,
        credentials: &Credentials,
    ) -> Result<String> {
        let nonce: String =
            rand::thread_rng().sample_iter(&Alphanumeric).take(NONCE_LEN).map(char::from).collect();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.authorization_header_with(method, url, credentials, &nonce, &timestamp)
    }

    /// Sign a request with a caller-chosen nonce and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `MarketplaceError::Signing` if the URL cannot be parsed.
    pub fn authorization_header_with(
        &self,
        method: HttpMethod,
        url: &str,
        credentials: &Credentials,
        nonce: &str,
        timestamp: &str,
    ) -> Result<String> {
        let oauth_params = [
            ("oauth_consumer_key", credentials.consumer_key()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp),
            ("oauth_version", OAUTH_VERSION),
        ];

        let base_string = signature_base_string(method, url, &oauth_params)?;
        let signature = sign(&base_string, credentials.consumer_secret())?;

        let mut header = String::from("OAuth ");
        let fields = oauth_params
            .iter()
            .copied()
            .chain(std::iter::once(("oauth_signature", signature.as_str())))
            .map(|(key, value)| format!("{}=\"{}\"", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join(", ");
        header.push_str(&fields);
        Ok(header)
    }
}

/// `METHOD&enc(base_url)&enc(normalized_params)` as defined by RFC 5849 §3.4.1.
fn signature_base_string(
    method: HttpMethod,
    url: &str,
    oauth_params: &[(&str, &str)],
) -> Result<String> {
    let parsed = Url::parse(url)
        .map_err(|e| MarketplaceError::Signing(format!("cannot sign invalid URL {url}: {e}")))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| MarketplaceError::Signing(format!("cannot sign URL without host: {url}")))?;
    let mut base_url = format!("{}://{}", parsed.scheme(), host.to_ascii_lowercase());
    // `Url::port` is None for the scheme's default port, which must be omitted.
    if let Some(port) = parsed.port() {
        let _ = write!(base_url, ":{port}");
    }
    base_url.push_str(parsed.path());

    let mut params: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(key, value)| (encode(&key).into_owned(), encode(&value).into_owned()))
        .chain(
            oauth_params
                .iter()
                .map(|(key, value)| (encode(key).into_owned(), encode(value).into_owned())),
        )
        .collect();
    params.sort();

    let normalized = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "{}&{}&{}",
        method.as_str(),
        encode(&base_url),
        encode(&normalized)
    ))
}

fn sign(base_string: &str, consumer_secret: &str) -> Result<String> {
    let signing_key = format!("{}&", encode(consumer_secret));
    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .map_err(|e| MarketplaceError::Signing(format!("invalid signing key: {e}")))?;
    mac.update(base_string.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("consumer-key", "consumer-secret")
    }

    #[test]
    fn base_string_encodes_reserved_query_characters() {
        let base = signature_base_string(
            HttpMethod::Get,
            "https://marketplace.test/api/v2/apps/?q=a%20b%2Fc~d%C3%A9",
            &[("oauth_nonce", "n")],
        )
        .unwrap();

        assert!(base.ends_with("&oauth_nonce%3Dn%26q%3Da%2520b%252Fc~d%25C3%25A9"), "{base}");
    }

    #[test]
    fn base_string_includes_query_pairs_sorted() {
        let base = signature_base_string(
            HttpMethod::Get,
            "https://Marketplace.test:443/api/v2/account/settings/mine/?limit=5",
            &[
                ("oauth_consumer_key", "consumer-key"),
                ("oauth_nonce", "abc123"),
                ("oauth_signature_method", "HMAC-SHA1"),
                ("oauth_timestamp", "1700000000"),
                ("oauth_version", "1.0"),
            ],
        )
        .unwrap();

        assert_eq!(
            base,
            "GET&https%3A%2F%2Fmarketplace.test%2Fapi%2Fv2%2Faccount%2Fsettings%2Fmine%2F&\
             limit%3D5%26oauth_consumer_key%3Dconsumer-key%26oauth_nonce%3Dabc123%26\
             oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1700000000%26\
             oauth_version%3D1.0"
        );
    }

    #[test]
    fn signs_get_with_query_string() {
        let header = OAuthSigner::new()
            .authorization_header_with(
                HttpMethod::Get,
                "https://marketplace.test/api/v2/account/settings/mine/?limit=5",
                &credentials(),
                "abc123",
                "1700000000",
            )
            .unwrap();

        assert!(header.contains("oauth_signature=\"80vW%2BxmQuFnZDVEf0e5YW7JzBbs%3D\""));
    }

    #[test]
    fn signs_post_with_reserved_characters_in_secret() {
        let header = OAuthSigner::new()
            .authorization_header_with(
                HttpMethod::Post,
                "https://marketplace.test/api/v2/apps/validation/",
                &Credentials::new("consumer-key", "consumer secret&x"),
                "abc123",
                "1700000000",
            )
            .unwrap();

        assert!(header.contains("oauth_signature=\"FgJR1m2sHpbxIj6XW1s6Qi5XvCw%3D\""));
    }

    #[test]
    fn header_lists_every_oauth_parameter() {
        let header = OAuthSigner::new()
            .authorization_header(
                HttpMethod::Get,
                "https://marketplace.test/api/v2/apps/validation/1",
                &credentials(),
            )
            .unwrap();

        assert!(header.starts_with("OAuth "));
        for field in [
            "oauth_consumer_key=\"consumer-key\"",
            "oauth_nonce=\"",
            "oauth_signature=\"",
            "oauth_signature_method=\"HMAC-SHA1\"",
            "oauth_timestamp=\"",
            "oauth_version=\"1.0\"",
        ] {
            assert!(header.contains(field), "missing {field} in {header}");
        }
        assert!(!header.contains("consumer-secret"));
    }

    #[test]
    fn fresh_nonce_per_call() {
        let signer = OAuthSigner::new();
        let url = "https://marketplace.test/api/v2/apps/app/";
        let first = signer.authorization_header(HttpMethod::Post, url, &credentials()).unwrap();
        let second = signer.authorization_header(HttpMethod::Post, url, &credentials()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn rejects_relative_urls() {
        let err = OAuthSigner::new()
            .authorization_header(HttpMethod::Get, "apps/app/", &credentials())
            .unwrap_err();
        assert!(matches!(err, MarketplaceError::Signing(_)));
    }
}
