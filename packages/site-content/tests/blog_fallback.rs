//! End-to-end tests for the blog resolution and the page-level fallback
//! policy, driven through the mock CMS.

use serde_json::json;

use site_content::blog::{
    resolve_categories, resolve_post, resolve_posts, CategoryListOutcome, PostListOutcome,
};
use site_content::fallback::{
    bundled_posts, categories_with_fallback, post_with_fallback, posts_with_fallback,
};
use site_content::testing::{raw_post, MockPostSource};
use wordpress_client::{PostQuery, RawCategory, WordPressError};

#[tokio::test]
async fn remote_posts_are_normalized_and_used() {
    let source = MockPostSource::new().with_post(raw_post(json!({
        "ID": 42,
        "slug": "lancamento",
        "title": {"rendered": "Lançamento do novo site"},
        "content": "<p>conteúdo</p>",
        "tags": {"novidades": {"name": "novidades"}}
    })));

    let outcome = resolve_posts(&source, &PostQuery::new()).await;

    match outcome {
        PostListOutcome::Remote(posts) => {
            assert_eq!(posts.len(), 1);
            assert_eq!(posts[0].title, "Lançamento do novo site");
            assert_eq!(posts[0].tags, vec!["novidades"]);
        }
        other => panic!("expected remote posts, got {other:?}"),
    }
}

#[tokio::test]
async fn valid_empty_and_failed_remain_distinct_signals() {
    let empty = MockPostSource::new().with_no_posts();
    let broken = MockPostSource::new().failing_with(WordPressError::PrivateSite);

    let empty_outcome = resolve_posts(&empty, &PostQuery::new()).await;
    let failed_outcome = resolve_posts(&broken, &PostQuery::new()).await;

    assert!(matches!(empty_outcome, PostListOutcome::RemoteEmpty));
    assert!(matches!(
        failed_outcome,
        PostListOutcome::Failed(WordPressError::PrivateSite)
    ));
}

#[tokio::test]
async fn empty_remote_list_renders_the_bundled_dataset() {
    let source = MockPostSource::new().with_no_posts();

    let outcome = resolve_posts(&source, &PostQuery::new()).await;
    let posts = posts_with_fallback(outcome, &PostQuery::new());

    assert_eq!(posts.len(), bundled_posts().len());
}

#[tokio::test]
async fn failed_remote_list_renders_the_bundled_dataset_filtered() {
    let source = MockPostSource::new().failing_with(WordPressError::Network("offline".into()));

    let query = PostQuery::new().category("design");
    let outcome = resolve_posts(&source, &query).await;
    let posts = posts_with_fallback(outcome, &query);

    assert!(!posts.is_empty());
    assert!(posts.iter().all(|p| p.category_slug == "design"));
}

#[tokio::test]
async fn slug_lookup_is_case_insensitive() {
    let source = MockPostSource::new().with_post(raw_post(json!({
        "slug": "my-post",
        "title": "My Post"
    })));

    let post = resolve_post(&source, "My-Post").await;

    assert_eq!(post.expect("post must be found").slug, "my-post");
}

#[tokio::test]
async fn private_site_resolves_the_detail_page_silently() {
    let source = MockPostSource::new().failing_with(WordPressError::PrivateSite);

    // Errors are swallowed on this path: no post, but no error state either.
    let post = resolve_post(&source, "design-de-interfaces-minimalistas").await;
    assert!(post.is_none());

    // The page then falls back to the bundled copy of the same slug.
    let fallback = post_with_fallback(post, "design-de-interfaces-minimalistas");
    assert!(fallback.is_some());
}

#[tokio::test]
async fn unknown_slug_misses_remote_and_bundled() {
    let source = MockPostSource::new().with_no_posts();

    let post = resolve_post(&source, "does-not-exist").await;
    assert!(post_with_fallback(post, "does-not-exist").is_none());
}

#[tokio::test]
async fn blank_slug_short_circuits() {
    let source = MockPostSource::new();
    assert!(resolve_post(&source, "  ").await.is_none());
}

#[tokio::test]
async fn remote_categories_are_used_when_non_empty() {
    let source = MockPostSource::new().with_category(RawCategory {
        id: 5,
        name: "Projetos".to_string(),
        slug: "projetos".to_string(),
        description: String::new(),
        post_count: 3,
    });

    let outcome = resolve_categories(&source).await;
    let categories = categories_with_fallback(outcome);

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].slug, "projetos");
    assert_eq!(categories[0].count, 3);
}

#[tokio::test]
async fn failed_or_empty_categories_fall_back_to_bundled() {
    let broken = MockPostSource::new().categories_failing_with(WordPressError::Api {
        status: 500,
        message: "boom".to_string(),
    });
    let empty = MockPostSource::new();

    let from_failure = categories_with_fallback(resolve_categories(&broken).await);
    let from_empty = categories_with_fallback(resolve_categories(&empty).await);

    assert!(!from_failure.is_empty());
    assert_eq!(from_failure.len(), from_empty.len());
}
