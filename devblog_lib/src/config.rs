//! Process-wide configuration, read from the environment once at startup
//! and injected by value into whatever needs it.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_SITE_URL: &str = "https://yourdomain.com";

#[derive(Clone, Debug)]
pub struct Config {
    /// Origin of the backend REST API.
    pub api_base_url: String,
    /// Canonical public origin of the site, used for sitemap URLs.
    pub site_url: String,
}

impl Config {
    /// Reads `DEVBLOG_API_URL` and `DEVBLOG_SITE_URL`, falling back to the
    /// documented defaults.
    pub fn from_env() -> Self {
        Self {
            api_base_url: env_string("DEVBLOG_API_URL", DEFAULT_API_BASE_URL),
            site_url: env_string("DEVBLOG_SITE_URL", DEFAULT_SITE_URL),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}
