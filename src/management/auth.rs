use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    spotify::auth::{self, AuthError},
    types::Token,
    warning,
};

/// Seconds before actual expiry at which a cached token is already treated
/// as expired, so a request never goes out with a token about to lapse.
pub const TOKEN_EXPIRY_BUFFER_SECS: u64 = 30;

/// Persistence backend for the cached Spotify access token.
///
/// The file-backed implementation is used by the CLI; tests substitute an
/// in-memory store.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<Token>, String>;
    async fn persist(&self, token: &Token) -> Result<(), String>;
}

/// Token store backed by a JSON file in the local data directory.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        FileTokenStore { path }
    }

    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("playlift/cache/token.json");
        path
    }
}

impl Default for FileTokenStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<Token>, String> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.to_string()),
        };
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Some(token))
    }

    async fn persist(&self, token: &Token) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }
}

/// Owns the cached Spotify access token and its lifecycle.
///
/// Constructed by the CLI layer and handed to the Spotify client; there is
/// no ambient global instance. A token within [`TOKEN_EXPIRY_BUFFER_SECS`]
/// of expiring is replaced through a fresh Client Credentials grant before
/// use.
pub struct TokenManager {
    store: Box<dyn TokenStore>,
    token: Option<Token>,
}

impl TokenManager {
    pub async fn load(store: Box<dyn TokenStore>) -> Self {
        let token = match store.load().await {
            Ok(token) => token,
            Err(e) => {
                warning!("Failed to read token cache: {}", e);
                None
            }
        };
        TokenManager { store, token }
    }

    pub async fn get_valid_token(&mut self) -> Result<String, AuthError> {
        match &self.token {
            Some(token) if !token.is_expired(TOKEN_EXPIRY_BUFFER_SECS) => {
                Ok(token.access_token.clone())
            }
            _ => {
                let token = self.refresh().await?;
                Ok(token.access_token.clone())
            }
        }
    }

    /// Requests a fresh token from the Spotify token endpoint and persists
    /// it, replacing whatever was cached before.
    pub async fn refresh(&mut self) -> Result<&Token, AuthError> {
        let token = auth::request_access_token().await?;
        if let Err(e) = self.store.persist(&token).await {
            warning!("Failed to save token to cache: {}", e);
        }
        Ok(self.token.insert(token))
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}
