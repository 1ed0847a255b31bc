use std::path::Path;

use serde::{Deserialize, Serialize};

/// Request headers captured from a logged-in music.youtube.com session.
///
/// Obtained by copying an authenticated request's headers out of the browser
/// dev tools into a JSON file; the cookie and authorization values carry the
/// session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserCredentials {
    pub cookie: String,
    pub authorization: String,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl BrowserCredentials {
    /// Loads the credentials file from disk.
    ///
    /// A missing file is reported with a hint on how to create one, since
    /// this is the first thing a new user runs into.
    pub async fn load(path: &Path) -> Result<Self, String> {
        let content = match async_fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(format!(
                    "YouTube Music credentials not found at {}. Export the request headers of a logged-in music.youtube.com session to that file.",
                    path.display()
                ));
            }
            Err(e) => return Err(e.to_string()),
        };

        serde_json::from_str(&content).map_err(|e| e.to_string())
    }
}
