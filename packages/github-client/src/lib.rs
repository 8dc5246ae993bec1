//! Pure GitHub REST API client.
//!
//! A minimal client for the pieces of the GitHub API the portfolio pipeline
//! needs: listing a user's repositories and fetching a repository README as
//! raw text. Carries an optional bearer token which raises the rate limit
//! from 60 to 5000 requests per hour.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_client::GithubClient;
//!
//! let client = GithubClient::new(None);
//!
//! let repos = client.list_user_repos("octocat").await?;
//! for repo in &repos {
//!     println!("{} ({} stars)", repo.name, repo.stars);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{GithubError, Result};
pub use types::RepoCandidate;

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

const BASE_URL: &str = "https://api.github.com";

/// How many repositories to request per listing call. More than the display
/// set so the filters still have options to choose from.
const REPOS_PER_PAGE: u32 = 30;

/// Hard timeout on the repository listing request.
const LIST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GithubClient {
    client: reqwest::Client,
    token: Option<String>,
    base_url: String,
}

impl GithubClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for proxies and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Whether a bearer token is attached. Authenticated clients get a much
    /// higher rate limit, so callers may throttle less aggressively.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// List up to 30 of the user's repositories, most recently updated first.
    ///
    /// The request is bounded by a 10 second timeout; expiry surfaces as
    /// [`GithubError::Timeout`] rather than a generic network error.
    pub async fn list_user_repos(&self, handle: &str) -> Result<Vec<RepoCandidate>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}&type=all",
            self.base_url, handle, REPOS_PER_PAGE
        );

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .timeout(LIST_TIMEOUT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(GithubError::from_transport)?;

        let status = resp.status();
        if !status.is_success() {
            let remaining = header_str(&resp, "x-ratelimit-remaining");
            let reset = header_str(&resp, "x-ratelimit-reset");
            let err = classify_failure(status.as_u16(), remaining.as_deref(), reset.as_deref(), handle);
            let err = match err {
                GithubError::Api { status, .. } => {
                    let message = resp.text().await.unwrap_or_default();
                    GithubError::Api { status, message }
                }
                other => other,
            };
            tracing::warn!(handle, status = status.as_u16(), error = %err, "Repository listing failed");
            return Err(err);
        }

        let repos: Vec<RepoCandidate> = resp.json().await.map_err(GithubError::from_transport)?;
        tracing::debug!(handle, count = repos.len(), "Listed repositories");
        Ok(repos)
    }

    /// Fetch a repository README as raw text.
    ///
    /// Returns `Ok(None)` when the repository has no README or the README is
    /// blank; only transport-level failures surface as errors.
    pub async fn fetch_readme(&self, handle: &str, repo: &str) -> Result<Option<String>> {
        let url = format!("{}/repos/{}/{}/readme", self.base_url, handle, repo);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3.raw");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(GithubError::from_transport)?;

        if !resp.status().is_success() {
            tracing::debug!(handle, repo, status = resp.status().as_u16(), "No README available");
            return Ok(None);
        }

        let text = resp.text().await.map_err(GithubError::from_transport)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }
}

fn header_str(resp: &reqwest::Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

/// Map a non-2xx listing response to the error taxonomy.
///
/// 403 with an exhausted quota is a rate-limit error carrying the reset time
/// when the API reported one; any other 403 is access denial; 404 means the
/// account does not exist.
fn classify_failure(
    status: u16,
    rate_limit_remaining: Option<&str>,
    rate_limit_reset: Option<&str>,
    handle: &str,
) -> GithubError {
    match status {
        403 if rate_limit_remaining == Some("0") => {
            let reset = rate_limit_reset
                .and_then(|v| v.parse::<i64>().ok())
                .and_then(unix_to_datetime);
            GithubError::RateLimitExceeded { reset }
        }
        403 => GithubError::AccessDenied,
        404 => GithubError::NotFound {
            handle: handle.to_string(),
        },
        status => GithubError::Api {
            status,
            message: String::new(),
        },
    }
}

fn unix_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}
