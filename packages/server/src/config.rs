use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub hoarder_api_base_url: String,
    pub hoarder_api_token: String,
    pub bluesky_username: Option<String>,
    pub bluesky_password: Option<String>,
    pub linkedin_access_token: Option<String>,
    pub linkedin_user_urn: Option<String>,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let config = Self {
            hoarder_api_base_url: env::var("HOARDER_API_BASE_URL")
                .context("HOARDER_API_BASE_URL must be set")?,
            hoarder_api_token: env::var("HOARDER_API_TOKEN")
                .context("HOARDER_API_TOKEN must be set")?,
            bluesky_username: optional_var("BLUESKY_USERNAME"),
            bluesky_password: optional_var("BLUESKY_PASSWORD"),
            linkedin_access_token: optional_var("LINKEDIN_ACCESS_TOKEN"),
            linkedin_user_urn: optional_var("LINKEDIN_USER_URN"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        };

        if config.bluesky_username.is_some() != config.bluesky_password.is_some() {
            tracing::warn!(
                "Bluesky is half-configured, both BLUESKY_USERNAME and BLUESKY_PASSWORD are required"
            );
        }
        if config.linkedin_access_token.is_some() != config.linkedin_user_urn.is_some() {
            tracing::warn!(
                "LinkedIn is half-configured, both LINKEDIN_ACCESS_TOKEN and LINKEDIN_USER_URN are required"
            );
        }

        Ok(config)
    }

    /// Bluesky credentials when the platform is fully configured
    pub fn bluesky_credentials(&self) -> Option<(String, String)> {
        match (&self.bluesky_username, &self.bluesky_password) {
            (Some(username), Some(password)) => Some((username.clone(), password.clone())),
            _ => None,
        }
    }

    /// LinkedIn credentials when the platform is fully configured
    pub fn linkedin_credentials(&self) -> Option<(String, String)> {
        match (&self.linkedin_access_token, &self.linkedin_user_urn) {
            (Some(token), Some(urn)) => Some((token.clone(), urn.clone())),
            _ => None,
        }
    }
}

/// Read an environment variable, treating unset and empty as absent
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            hoarder_api_base_url: "http://hoarder.local/api/v1".to_string(),
            hoarder_api_token: "token".to_string(),
            bluesky_username: None,
            bluesky_password: None,
            linkedin_access_token: None,
            linkedin_user_urn: None,
            port: 3000,
        }
    }

    #[test]
    fn half_configured_bluesky_counts_as_absent() {
        let mut config = base_config();
        config.bluesky_username = Some("user.bsky.social".to_string());

        assert!(config.bluesky_credentials().is_none());
    }

    #[test]
    fn fully_configured_platforms_yield_credentials() {
        let mut config = base_config();
        config.bluesky_username = Some("user.bsky.social".to_string());
        config.bluesky_password = Some("app-password".to_string());
        config.linkedin_access_token = Some("token".to_string());
        config.linkedin_user_urn = Some("abc123".to_string());

        assert_eq!(
            config.bluesky_credentials(),
            Some(("user.bsky.social".to_string(), "app-password".to_string()))
        );
        assert_eq!(
            config.linkedin_credentials(),
            Some(("token".to_string(), "abc123".to_string()))
        );
    }
}
