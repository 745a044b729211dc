//! Application Configuration
//!
//! Values fixed at build time or derived from the page, provided via context.

/// Storage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Note color used when an item has none
pub const DEFAULT_NOTE_COLOR: &str = "#ffc6cf";

/// Delay before leaving the register page after success
pub const REGISTER_REDIRECT_MS: u32 = 1500;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin the `/api/...` paths are joined onto
    pub api_base_url: String,
    pub token_storage_key: String,
    pub default_note_color: String,
    pub register_redirect_ms: u32,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            default_note_color: DEFAULT_NOTE_COLOR.to_string(),
            register_redirect_ms: REGISTER_REDIRECT_MS,
        }
    }

    /// `TODO_API_BASE_URL` at build time, otherwise the page origin.
    pub fn load() -> Self {
        let base = match option_env!("TODO_API_BASE_URL") {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => page_origin().unwrap_or_default(),
        };
        log::debug!("[APP] API base URL: {:?}", base);
        Self::new(base)
    }

    /// Join an absolute API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = AppConfig::new("http://localhost:3000/");
        assert_eq!(config.endpoint("/api/todo"), "http://localhost:3000/api/todo");

        let config = AppConfig::new("http://localhost:3000");
        assert_eq!(config.endpoint("api/auth/login"), "http://localhost:3000/api/auth/login");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::new("http://x");
        assert_eq!(config.token_storage_key, "token");
        assert_eq!(config.default_note_color, "#ffc6cf");
        assert_eq!(config.register_redirect_ms, 1500);
    }
}
