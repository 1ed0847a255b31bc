use crate::{
    error,
    management::{FileTokenStore, TokenManager},
    success,
};

pub async fn auth() {
    let mut token_manager = TokenManager::load(Box::new(FileTokenStore::default())).await;

    match token_manager.refresh().await {
        Ok(_) => {
            success!(
                "Authentication successful. Token cached at {}",
                FileTokenStore::default_path().display()
            );
        }
        Err(e) => {
            error!("Authentication failed: {}", e);
        }
    }
}
