use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{
    config,
    types::{Token, TokenResponse},
};

/// Failure while obtaining a Spotify access token.
#[derive(Debug)]
pub enum AuthError {
    Http(reqwest::Error),
    InvalidResponse(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Http(err)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Http(e) => write!(f, "Spotify token request failed: {}", e),
            AuthError::InvalidResponse(msg) => {
                write!(f, "Invalid response from Spotify token endpoint: {}", msg)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Requests a new access token via the OAuth 2.0 Client Credentials flow.
///
/// Sends the client id and secret from the configuration as an HTTP Basic
/// authorization header to Spotify's token endpoint. The Client Credentials
/// grant covers all read operations playlift performs against public
/// playlist data; no user authorization step is involved.
///
/// # Returns
///
/// A [`Token`] stamped with the current time, suitable for caching, or an
/// [`AuthError`] when the request fails or the response carries no token.
pub async fn request_access_token() -> Result<Token, AuthError> {
    let credentials = format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    );
    let encoded = STANDARD.encode(credentials);

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", encoded))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let payload: TokenResponse = res.json().await?;

    if payload.access_token.is_empty() {
        return Err(AuthError::InvalidResponse(
            "missing access token".to_string(),
        ));
    }

    Ok(Token {
        access_token: payload.access_token,
        expires_in: payload.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
