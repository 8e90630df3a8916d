//! Spotify authentication via the client-credentials grant.
//!
//! Application credentials are exchanged for a bearer token that authorizes
//! catalog searches. The token is fetched lazily on first use and cached for
//! the lifetime of the process; interactive user authorization is out of
//! scope here.

use std::env;
use std::error::Error;
use std::sync::Mutex;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;

use crate::constants::TOKEN_URL;

/// Payload of the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Application credentials plus a cached access token.
pub struct SpotifyAuth {
    client_id: String,
    client_secret: String,
    token: Mutex<Option<String>>,
    http: reqwest::blocking::Client,
}

impl SpotifyAuth {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
            token: Mutex::new(None),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Build credentials from `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let client_id = env::var("SPOTIFY_CLIENT_ID")
            .map_err(|_| "SPOTIFY_CLIENT_ID is not set (add it to .env or the environment)")?;
        let client_secret = env::var("SPOTIFY_CLIENT_SECRET")
            .map_err(|_| "SPOTIFY_CLIENT_SECRET is not set (add it to .env or the environment)")?;
        Ok(Self::new(client_id, client_secret))
    }

    /// `Authorization` header value for catalog requests, fetching and
    /// caching a token on first use.
    ///
    /// Returns `None` when no token can be obtained; callers treat that the
    /// same as an empty catalog page.
    pub fn auth_header(&self) -> Option<String> {
        let mut token = match self.token.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("[Auth] Token cache mutex poisoned, recovering");
                poisoned.into_inner()
            }
        };

        if token.is_none() {
            match self.request_token() {
                Ok(fresh) => *token = Some(fresh),
                Err(e) => {
                    log::error!("[Auth] Failed to obtain access token: {}", e);
                    return None;
                }
            }
        }

        token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Client-credentials exchange against the token endpoint.
    fn request_token(&self) -> Result<String, Box<dyn Error>> {
        log::info!("[Auth] Requesting client-credentials token");

        let response = self
            .http
            .post(TOKEN_URL)
            .header(
                reqwest::header::AUTHORIZATION,
                basic_auth_value(&self.client_id, &self.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()?;

        if !response.status().is_success() {
            return Err(format!("token endpoint returned status {}", response.status()).into());
        }

        let payload: TokenResponse = response.json()?;
        log::debug!("[Auth] Access token obtained");
        Ok(payload.access_token)
    }

    #[cfg(test)]
    fn seed_token(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }
}

/// `Basic` header value carrying the application credentials.
fn basic_auth_value(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        BASE64.encode(format!("{}:{}", client_id, client_secret))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_auth_value_encodes_credentials() {
        // base64("abc:xyz")
        assert_eq!(basic_auth_value("abc", "xyz"), "Basic YWJjOnh5eg==");
    }

    #[test]
    fn auth_header_formats_cached_token() {
        let auth = SpotifyAuth::new("id".to_string(), "secret".to_string());
        auth.seed_token("token-123");

        assert_eq!(auth.auth_header().as_deref(), Some("Bearer token-123"));
    }
}
