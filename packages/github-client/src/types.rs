use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A repository as returned by `GET /users/{handle}/repos`.
///
/// Only the fields the portfolio pipeline consumes are modelled; everything
/// else in the response is ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoCandidate {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    /// Repository size in kilobytes; zero means an empty repository.
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u32,
    #[serde(rename = "forks_count", default)]
    pub forks: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub homepage: Option<String>,
    pub html_url: String,
}
