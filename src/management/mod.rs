mod auth;

pub use auth::FileTokenStore;
pub use auth::TOKEN_EXPIRY_BUFFER_SECS;
pub use auth::TokenManager;
pub use auth::TokenStore;
