//! Trait seams over the remote sources.
//!
//! The resolvers depend on these traits rather than on the concrete HTTP
//! clients, so tests can exercise the full pipelines against the mocks in
//! [`crate::testing`] without network calls.

use async_trait::async_trait;

use github_client::{GithubClient, RepoCandidate};
use wordpress_client::{PostQuery, RawCategory, RawPost, WordPressClient};

/// A source of repository listings and documentation artifacts.
#[async_trait]
pub trait RepoHost: Send + Sync {
    /// List the account's repositories, most recently updated first.
    async fn list_repos(&self, handle: &str) -> github_client::Result<Vec<RepoCandidate>>;

    /// Fetch a repository README as raw text; `None` when absent or blank.
    async fn readme(&self, handle: &str, repo: &str) -> github_client::Result<Option<String>>;

    /// Authenticated hosts have a higher rate limit, so the pipeline may
    /// throttle its documentation fetches less aggressively.
    fn is_authenticated(&self) -> bool;
}

#[async_trait]
impl RepoHost for GithubClient {
    async fn list_repos(&self, handle: &str) -> github_client::Result<Vec<RepoCandidate>> {
        self.list_user_repos(handle).await
    }

    async fn readme(&self, handle: &str, repo: &str) -> github_client::Result<Option<String>> {
        self.fetch_readme(handle, repo).await
    }

    fn is_authenticated(&self) -> bool {
        GithubClient::is_authenticated(self)
    }
}

/// A source of CMS posts and categories.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// List posts matching the query.
    async fn posts(&self, query: &PostQuery) -> wordpress_client::Result<Vec<RawPost>>;

    /// List the wide window of recent posts used for client-side slug lookup.
    async fn posts_for_lookup(&self) -> wordpress_client::Result<Vec<RawPost>>;

    /// List the site's categories.
    async fn categories(&self) -> wordpress_client::Result<Vec<RawCategory>>;
}

#[async_trait]
impl PostSource for WordPressClient {
    async fn posts(&self, query: &PostQuery) -> wordpress_client::Result<Vec<RawPost>> {
        self.list_posts(query).await
    }

    async fn posts_for_lookup(&self) -> wordpress_client::Result<Vec<RawPost>> {
        self.list_posts_for_lookup().await
    }

    async fn categories(&self) -> wordpress_client::Result<Vec<RawCategory>> {
        self.list_categories().await
    }
}
