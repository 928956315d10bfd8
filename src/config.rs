//! Connection settings for the listing store, read from the environment.
//!
//! A `.env` file in the working directory is loaded first by `main`. Missing
//! variables become empty strings; the first fetch then fails and the store
//! falls back to sample data.

use std::fmt;

pub const BASE_URL_ENV: &str = "SUPABASE_URL";
pub const API_KEY_ENV: &str = "SUPABASE_ANON_KEY";

#[derive(Clone)]
pub struct ClientConfig {
    /// Project root URL; the REST path is appended to it.
    pub base_url: String,
    pub api_key: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: lookup(BASE_URL_ENV).unwrap_or_default(),
            api_key: lookup(API_KEY_ENV).unwrap_or_default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.api_key.is_empty()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_default_to_empty_strings() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, "");
        assert_eq!(config.api_key, "");
        assert!(!config.is_configured());
    }

    #[test]
    fn reads_both_variables() {
        let config = ClientConfig::from_lookup(|name| match name {
            BASE_URL_ENV => Some("https://demo.supabase.co".to_string()),
            API_KEY_ENV => Some("anon-key".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, "https://demo.supabase.co");
        assert_eq!(config.api_key, "anon-key");
        assert!(config.is_configured());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = ClientConfig {
            base_url: "https://demo.supabase.co".to_string(),
            api_key: "secret".to_string(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
