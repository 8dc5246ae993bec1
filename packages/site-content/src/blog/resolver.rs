//! Remote blog queries.
//!
//! The list and category queries report their own outcome and leave the
//! fallback decision to the page layer ([`crate::fallback`]); a successful
//! but empty response and a failed request stay distinguishable. The
//! single-post query swallows every failure: the detail page silently
//! renders its bundled copy instead of an error state.

use wordpress_client::{PostQuery, WordPressError};

use crate::blog::normalize::{normalize_category, normalize_post};
use crate::traits::PostSource;
use crate::types::{Post, PostCategory};

/// Outcome of a remote post-list query.
#[derive(Debug, Clone)]
pub enum PostListOutcome {
    /// The remote returned at least one post.
    Remote(Vec<Post>),
    /// The remote succeeded but had nothing — a valid, distinct condition.
    RemoteEmpty,
    /// The remote failed.
    Failed(WordPressError),
}

/// Outcome of a remote category query.
#[derive(Debug, Clone)]
pub enum CategoryListOutcome {
    Remote(Vec<PostCategory>),
    RemoteEmpty,
    Failed(WordPressError),
}

/// Query the CMS for posts matching `query`.
pub async fn resolve_posts(source: &dyn PostSource, query: &PostQuery) -> PostListOutcome {
    match source.posts(query).await {
        Ok(raw) if raw.is_empty() => {
            tracing::debug!("Remote post list is empty");
            PostListOutcome::RemoteEmpty
        }
        Ok(raw) => PostListOutcome::Remote(raw.into_iter().map(normalize_post).collect()),
        Err(err) => {
            tracing::warn!(error = %err, "Post list query failed");
            PostListOutcome::Failed(err)
        }
    }
}

/// Look up a single post by slug, case-insensitively.
///
/// The API has no per-slug endpoint, so this lists the lookup window and
/// filters client-side. Every failure, including a private site (401/403),
/// resolves to `None`.
pub async fn resolve_post(source: &dyn PostSource, slug: &str) -> Option<Post> {
    if slug.trim().is_empty() {
        return None;
    }

    let posts = match source.posts_for_lookup().await {
        Ok(posts) => posts,
        Err(err) => {
            tracing::debug!(slug, error = %err, "Slug lookup failed, falling back silently");
            return None;
        }
    };

    let wanted = slug.to_lowercase();
    posts
        .into_iter()
        .find(|post| {
            post.slug
                .as_deref()
                .map(|s| s.to_lowercase() == wanted)
                .unwrap_or(false)
        })
        .map(normalize_post)
}

/// Query the CMS for the site's categories.
pub async fn resolve_categories(source: &dyn PostSource) -> CategoryListOutcome {
    match source.categories().await {
        Ok(raw) if raw.is_empty() => CategoryListOutcome::RemoteEmpty,
        Ok(raw) => {
            CategoryListOutcome::Remote(raw.into_iter().map(normalize_category).collect())
        }
        Err(err) => {
            tracing::warn!(error = %err, "Category query failed");
            CategoryListOutcome::Failed(err)
        }
    }
}
