use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub account whose repositories feed the portfolio.
    pub github_handle: String,
    /// Optional bearer token; only honored in development, where it raises
    /// the rate limit from 60 to 5000 requests per hour.
    pub github_token: Option<String>,
    /// WordPress.com site the blog reads from.
    pub wordpress_site: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let development = env::var("APP_ENV")
            .map(|v| v == "development")
            .unwrap_or(false);

        // The token never leaves development builds.
        let github_token = if development {
            env::var("GITHUB_TOKEN").ok()
        } else {
            None
        };

        Ok(Self {
            github_handle: env::var("GITHUB_HANDLE")
                .context("GITHUB_HANDLE must be set")?,
            github_token,
            wordpress_site: env::var("WORDPRESS_SITE")
                .unwrap_or_else(|_| wordpress_client::DEFAULT_SITE.to_string()),
        })
    }
}
