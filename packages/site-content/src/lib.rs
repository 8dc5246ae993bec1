//! Content resolution pipelines for the portfolio site.
//!
//! Two independent pipelines, each following fetch-remote →
//! validate/filter → transform → fallback-to-local:
//!
//! - [`portfolio`] — turns a GitHub account's repositories into a ranked,
//!   categorized, bounded set of portfolio projects.
//! - [`blog`] — turns WordPress.com posts and categories into the one
//!   normalized post model, with the bundled dataset substituted when the
//!   remote CMS is unreachable, private, or empty.
//!
//! Every resolver invocation owns its own request lifecycle and result; no
//! state is shared or cached across calls, so a stale in-flight request can
//! never leak into a newer invocation's result.
//!
//! # Usage
//!
//! ```rust,ignore
//! use github_client::GithubClient;
//! use site_content::portfolio::{resolve_portfolio, PortfolioOptions};
//! use site_content::fallback::projects_with_fallback;
//!
//! let host = GithubClient::new(None);
//! let resolution = resolve_portfolio(&host, "octocat", &PortfolioOptions::default()).await;
//! let projects = projects_with_fallback(resolution);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Trait seams over the remote sources (RepoHost, PostSource)
//! - [`types`] - Normalized data types (Project, Post, PostCategory)
//! - [`portfolio`] - Repository resolution pipeline
//! - [`blog`] - Blog resolution and normalization
//! - [`fallback`] - Bundled datasets and the page-level fallback policy
//! - [`config`] - Environment configuration
//! - [`testing`] - Mock implementations for testing

pub mod blog;
pub mod config;
pub mod fallback;
pub mod portfolio;
pub mod testing;
pub mod traits;
pub mod types;

pub use config::Config;
pub use traits::{PostSource, RepoHost};
pub use types::{Post, PostCategory, PostMeta, Project};

pub use portfolio::{
    category::Category, resolve_portfolio, PortfolioOptions, PortfolioResolution,
};

pub use blog::{
    normalize::{normalize_post, read_time, strip_html},
    resolve_categories, resolve_post, resolve_posts, CategoryListOutcome, PostListOutcome,
};

pub use fallback::{
    bundled_categories, bundled_posts, bundled_projects, categories_with_fallback, filter_posts,
    post_with_fallback, posts_with_fallback, projects_with_fallback,
};
