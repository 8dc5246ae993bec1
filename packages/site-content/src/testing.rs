//! Testing utilities including mock implementations.
//!
//! Hand-rolled mocks with call tracking, so the full pipelines can be
//! exercised without network access.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;

use github_client::{GithubError, RepoCandidate};
use wordpress_client::{PostQuery, RawCategory, RawPost, WordPressError};

use crate::traits::{PostSource, RepoHost};
use crate::types::Post;

/// A mock repository host with configurable listings, READMEs and failures.
#[derive(Default)]
pub struct MockRepoHost {
    repos: Option<Result<Vec<RepoCandidate>, GithubError>>,
    readmes: HashMap<String, String>,
    readme_failures: HashSet<String>,
    authenticated: bool,
    calls: Arc<RwLock<Vec<MockHostCall>>>,
}

/// Record of a call made to the mock host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockHostCall {
    ListRepos { handle: String },
    Readme { repo: String },
}

impl MockRepoHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repository to the listing.
    pub fn with_repo(mut self, repo: RepoCandidate) -> Self {
        match &mut self.repos {
            Some(Ok(repos)) => repos.push(repo),
            _ => self.repos = Some(Ok(vec![repo])),
        }
        self
    }

    /// Make the listing fail with the given error.
    pub fn failing_with(mut self, err: GithubError) -> Self {
        self.repos = Some(Err(err));
        self
    }

    /// Give a repository a README.
    pub fn with_readme(mut self, repo: impl Into<String>, content: impl Into<String>) -> Self {
        self.readmes.insert(repo.into(), content.into());
        self
    }

    /// Make one repository's README fetch fail at the transport level.
    pub fn with_readme_failure(mut self, repo: impl Into<String>) -> Self {
        self.readme_failures.insert(repo.into());
        self
    }

    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    /// Calls made so far, for assertions.
    pub fn calls(&self) -> Vec<MockHostCall> {
        self.calls.read().expect("mock call log poisoned").clone()
    }

    /// Number of README fetches made so far.
    pub fn readme_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, MockHostCall::Readme { .. }))
            .count()
    }

    fn record(&self, call: MockHostCall) {
        self.calls.write().expect("mock call log poisoned").push(call);
    }
}

#[async_trait]
impl RepoHost for MockRepoHost {
    async fn list_repos(&self, handle: &str) -> github_client::Result<Vec<RepoCandidate>> {
        self.record(MockHostCall::ListRepos {
            handle: handle.to_string(),
        });
        match &self.repos {
            Some(Ok(repos)) => Ok(repos.clone()),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(Vec::new()),
        }
    }

    async fn readme(&self, _handle: &str, repo: &str) -> github_client::Result<Option<String>> {
        self.record(MockHostCall::Readme {
            repo: repo.to_string(),
        });
        if self.readme_failures.contains(repo) {
            return Err(GithubError::Network("connection reset".to_string()));
        }
        Ok(self.readmes.get(repo).cloned())
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// A mock CMS with configurable posts, categories and failures.
#[derive(Default)]
pub struct MockPostSource {
    posts: Option<Result<Vec<RawPost>, WordPressError>>,
    categories: Option<Result<Vec<RawCategory>, WordPressError>>,
}

impl MockPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_post(mut self, post: RawPost) -> Self {
        match &mut self.posts {
            Some(Ok(posts)) => posts.push(post),
            _ => self.posts = Some(Ok(vec![post])),
        }
        self
    }

    /// Make the remote succeed with zero posts (the valid-empty condition).
    pub fn with_no_posts(mut self) -> Self {
        self.posts = Some(Ok(Vec::new()));
        self
    }

    pub fn failing_with(mut self, err: WordPressError) -> Self {
        self.posts = Some(Err(err));
        self
    }

    pub fn with_category(mut self, category: RawCategory) -> Self {
        match &mut self.categories {
            Some(Ok(categories)) => categories.push(category),
            _ => self.categories = Some(Ok(vec![category])),
        }
        self
    }

    pub fn categories_failing_with(mut self, err: WordPressError) -> Self {
        self.categories = Some(Err(err));
        self
    }
}

#[async_trait]
impl PostSource for MockPostSource {
    async fn posts(&self, _query: &PostQuery) -> wordpress_client::Result<Vec<RawPost>> {
        match &self.posts {
            Some(Ok(posts)) => Ok(posts.clone()),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(Vec::new()),
        }
    }

    async fn posts_for_lookup(&self) -> wordpress_client::Result<Vec<RawPost>> {
        match &self.posts {
            Some(Ok(posts)) => Ok(posts.clone()),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(Vec::new()),
        }
    }

    async fn categories(&self) -> wordpress_client::Result<Vec<RawCategory>> {
        match &self.categories {
            Some(Ok(categories)) => Ok(categories.clone()),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(Vec::new()),
        }
    }
}

/// A plausible repository candidate with sensible defaults.
pub fn repo_fixture(id: u64, name: &str, description: Option<&str>) -> RepoCandidate {
    RepoCandidate {
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
        fork: false,
        archived: false,
        size: 128,
        stars: 0,
        forks: 0,
        topics: Vec::new(),
        language: Some("JavaScript".to_string()),
        updated_at: Utc
            .timestamp_opt(1_700_000_000 + id as i64, 0)
            .single()
            .expect("fixture timestamp is valid"),
        homepage: None,
        html_url: format!("https://github.com/someone/{name}"),
    }
}

/// Build a raw CMS post from a JSON fragment, as it would come off the wire.
pub fn raw_post(value: serde_json::Value) -> RawPost {
    serde_json::from_value(value).expect("raw post fixture is valid")
}

/// A minimal normalized post for filter tests.
pub fn post_fixture(slug: &str, category: &str) -> Post {
    crate::blog::normalize::normalize_post(raw_post(json!({
        "slug": slug,
        "title": format!("Post {slug}"),
        "content": "<p>corpo do post</p>",
        "categories": [{"name": category, "slug": category.to_lowercase()}],
    })))
}
