//! Bundled offline datasets and the page-level fallback policy.
//!
//! The datasets ship inside the binary (`include_str!`) and share the
//! normalized schema, so a view can swap between remote and bundled data
//! without caring which one it got.

use lazy_static::lazy_static;

use wordpress_client::PostQuery;

use crate::blog::resolver::{CategoryListOutcome, PostListOutcome};
use crate::portfolio::resolver::PortfolioResolution;
use crate::types::{Post, PostCategory, Project};

lazy_static! {
    static ref POSTS: Vec<Post> = serde_json::from_str(include_str!("../data/posts.json"))
        .expect("bundled posts dataset matches the Post schema");
    static ref CATEGORIES: Vec<PostCategory> =
        serde_json::from_str(include_str!("../data/categories.json"))
            .expect("bundled categories dataset matches the PostCategory schema");
    static ref PROJECTS: Vec<Project> = serde_json::from_str(include_str!("../data/projects.json"))
        .expect("bundled projects dataset matches the Project schema");
}

pub fn bundled_posts() -> &'static [Post] {
    &POSTS
}

pub fn bundled_categories() -> &'static [PostCategory] {
    &CATEGORIES
}

pub fn bundled_projects() -> &'static [Project] {
    &PROJECTS
}

/// Blog-index policy: remote posts are used only when the remote succeeded
/// and was non-empty; otherwise the bundled dataset, filtered locally with
/// the same query.
pub fn posts_with_fallback(outcome: PostListOutcome, query: &PostQuery) -> Vec<Post> {
    match outcome {
        PostListOutcome::Remote(posts) => posts,
        PostListOutcome::RemoteEmpty | PostListOutcome::Failed(_) => filter_posts(
            bundled_posts().to_vec(),
            query.category.as_deref(),
            query.search.as_deref(),
        ),
    }
}

/// Local category/search filtering over a post list; order is preserved.
pub fn filter_posts(posts: Vec<Post>, category: Option<&str>, search: Option<&str>) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|post| {
            if let Some(wanted) = category {
                let matches = post.category_slug.eq_ignore_ascii_case(wanted)
                    || post.category.eq_ignore_ascii_case(wanted)
                    || post.tags.iter().any(|t| t.eq_ignore_ascii_case(wanted));
                if !matches {
                    return false;
                }
            }
            if let Some(term) = search {
                let term = term.to_lowercase();
                let haystack = format!(
                    "{} {} {}",
                    post.title,
                    post.excerpt,
                    post.tags.join(" ")
                )
                .to_lowercase();
                if !haystack.contains(&term) {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Category-list policy, keyed on a non-empty remote category list.
pub fn categories_with_fallback(outcome: CategoryListOutcome) -> Vec<PostCategory> {
    match outcome {
        CategoryListOutcome::Remote(categories) => categories,
        CategoryListOutcome::RemoteEmpty | CategoryListOutcome::Failed(_) => {
            bundled_categories().to_vec()
        }
    }
}

/// Detail-page policy: a missed remote lookup falls back to the bundled
/// post with the same slug, case-insensitively.
pub fn post_with_fallback(resolved: Option<Post>, slug: &str) -> Option<Post> {
    resolved.or_else(|| {
        let wanted = slug.to_lowercase();
        bundled_posts()
            .iter()
            .find(|post| post.slug.to_lowercase() == wanted)
            .cloned()
    })
}

/// Portfolio policy: an empty resolution (failure or nothing surviving the
/// filters) renders the static project set.
pub fn projects_with_fallback(resolution: PortfolioResolution) -> Vec<Project> {
    if resolution.projects.is_empty() {
        bundled_projects().to_vec()
    } else {
        resolution.projects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::post_fixture;

    #[test]
    fn bundled_datasets_parse() {
        assert!(!bundled_posts().is_empty());
        assert!(!bundled_categories().is_empty());
        assert!(!bundled_projects().is_empty());
    }

    #[test]
    fn category_filter_keeps_matches_in_source_order() {
        let posts = vec![
            post_fixture("first", "Design"),
            post_fixture("second", "Dev"),
            post_fixture("third", "Design"),
        ];

        let filtered = filter_posts(posts, Some("design"), None);
        let slugs: Vec<&str> = filtered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "third"]);
    }

    #[test]
    fn search_filter_scans_title_excerpt_and_tags() {
        let mut tagged = post_fixture("tagged", "Dev");
        tagged.tags = vec!["ferramentas".to_string()];
        let mut titled = post_fixture("titled", "Dev");
        titled.title = "Ferramentas essenciais".to_string();
        let other = post_fixture("other", "Dev");

        let filtered = filter_posts(vec![tagged, titled, other], None, Some("ferramentas"));
        let slugs: Vec<&str> = filtered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["tagged", "titled"]);
    }

    #[test]
    fn bundled_post_lookup_is_case_insensitive() {
        let slug = bundled_posts()[0].slug.to_uppercase();
        assert!(post_with_fallback(None, &slug).is_some());
    }
}
