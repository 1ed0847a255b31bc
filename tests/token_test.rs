use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use playlift::management::{FileTokenStore, TOKEN_EXPIRY_BUFFER_SECS, TokenManager, TokenStore};
use playlift::types::Token;

fn token_obtained_at(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "BQC-access".to_string(),
        expires_in,
        obtained_at,
    }
}

/// In-memory token store for exercising the manager without touching disk.
struct MemoryStore {
    token: Mutex<Option<Token>>,
}

impl MemoryStore {
    fn holding(token: Token) -> Self {
        MemoryStore {
            token: Mutex::new(Some(token)),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn load(&self) -> Result<Option<Token>, String> {
        Ok(self.token.lock().unwrap().clone())
    }

    async fn persist(&self, token: &Token) -> Result<(), String> {
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(())
    }
}

#[test]
fn test_fresh_token_is_not_expired() {
    let now = Utc::now().timestamp() as u64;
    let token = token_obtained_at(now, 3600);
    assert!(!token.is_expired(TOKEN_EXPIRY_BUFFER_SECS));
}

#[test]
fn test_old_token_is_expired() {
    let now = Utc::now().timestamp() as u64;
    let token = token_obtained_at(now - 7200, 3600);
    assert!(token.is_expired(TOKEN_EXPIRY_BUFFER_SECS));
}

#[test]
fn test_token_within_buffer_counts_as_expired() {
    let now = Utc::now().timestamp() as u64;
    // Valid for another 10 seconds, but inside the 30 second buffer
    let token = token_obtained_at(now, 10);
    assert!(token.is_expired(TOKEN_EXPIRY_BUFFER_SECS));
}

#[tokio::test]
async fn test_manager_picks_up_stored_token() {
    let now = Utc::now().timestamp() as u64;
    let store = MemoryStore::holding(token_obtained_at(now, 3600));

    let manager = TokenManager::load(Box::new(store)).await;

    let token = manager.current_token().expect("token should be loaded");
    assert_eq!(token.access_token, "BQC-access");
}

#[tokio::test]
async fn test_manager_starts_empty_without_cache() {
    let store = MemoryStore {
        token: Mutex::new(None),
    };

    let manager = TokenManager::load(Box::new(store)).await;

    assert!(manager.current_token().is_none());
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "playlift-token-test-{}/token.json",
        std::process::id()
    ));
    let store = FileTokenStore::new(path.clone());

    let now = Utc::now().timestamp() as u64;
    let token = token_obtained_at(now, 3600);

    store.persist(&token).await.expect("persist should succeed");
    let loaded = store
        .load()
        .await
        .expect("load should succeed")
        .expect("token should be present");

    assert_eq!(loaded.access_token, token.access_token);
    assert_eq!(loaded.expires_in, token.expires_in);
    assert_eq!(loaded.obtained_at, token.obtained_at);

    let _ = std::fs::remove_file(&path);
    if let Some(parent) = path.parent() {
        let _ = std::fs::remove_dir(parent);
    }
}

#[tokio::test]
async fn test_file_store_missing_file_is_not_an_error() {
    let path = std::env::temp_dir().join("playlift-token-test-does-not-exist/token.json");
    let store = FileTokenStore::new(path);

    let loaded = store.load().await.expect("missing cache should be Ok");
    assert!(loaded.is_none());
}
