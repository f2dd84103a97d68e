use serde::{Deserialize, Serialize};

/// URL of the project repository, linked from the guest navigation menu.
pub const REPOSITORY_URL: &str = "https://github.com/tallymap/tallymap";

/// Deployment configuration for the two externally owned endpoints: the
/// quantity backend and the web frontend the navigation links point at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the quantity backend.
    pub api_url: String,
    /// Base URL of the web frontend used for login/register links.
    pub site_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            site_url: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    /// Loads the defaults, overridden by `TALLYMAP_API_URL` and
    /// `TALLYMAP_SITE_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("TALLYMAP_API_URL") {
            config.api_url = url;
        }
        if let Ok(url) = std::env::var("TALLYMAP_SITE_URL") {
            config.site_url = url;
        }
        config
    }

    /// Joins a path onto the frontend base URL.
    pub fn site_page(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
