//! Normalization of raw CMS records into the normalized post model.
//!
//! The remote API is inconsistent about field shapes (plain strings vs
//! `{rendered}` objects, four different tag encodings), so all shape
//! handling lives here in one place rather than at each call site.

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use wordpress_client::{RawCategory, RawPost, RawTags};

use crate::types::{Post, PostCategory, PostMeta};

/// Brand name used for default authorship and meta titles.
pub const BRAND: &str = "botellho.co";

const EXCERPT_MAX_CHARS: usize = 200;
const WORDS_PER_MINUTE: usize = 200;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").expect("HTML tag pattern is valid");
}

/// Remove HTML tags, leaving the text content.
pub fn strip_html(input: &str) -> String {
    HTML_TAG.replace_all(input, "").into_owned()
}

/// Reading time derived from content at 200 words per minute, rounded up.
/// Empty content reads as one minute.
pub fn read_time(content: &str) -> String {
    let text = strip_html(content);
    let words = text.split_whitespace().count();
    if words == 0 {
        return "1 min".to_string();
    }
    format!("{} min", words.div_ceil(WORDS_PER_MINUTE))
}

/// Tag-stripped excerpt capped at 200 characters.
pub fn normalize_excerpt(excerpt: &str) -> String {
    strip_html(excerpt).chars().take(EXCERPT_MAX_CHARS).collect()
}

/// Flatten any of the tag encodings into an ordered sequence of names.
pub fn normalize_tags(tags: &RawTags) -> Vec<String> {
    match tags {
        RawTags::List(values) => values.iter().map(|v| v.name().to_string()).collect(),
        RawTags::Keyed(map) => map.values().map(|v| v.name().to_string()).collect(),
        RawTags::Single(tag) => vec![tag.clone()],
    }
}

/// Normalize one raw post. Every output field gets a safe default.
pub fn normalize_post(raw: RawPost) -> Post {
    let title = raw.title.as_str().to_string();
    let content = raw.content.into_string();
    let excerpt = normalize_excerpt(raw.excerpt.as_str());

    let tags = normalize_tags(&raw.tags);
    let keywords = tags.join(", ");

    let first_category = raw.categories.as_ref().and_then(|c| c.first());
    let category = first_category
        .map(|c| c.name.clone())
        .filter(|name| !name.is_empty())
        .or(raw.category)
        .unwrap_or_else(|| "Geral".to_string());
    let category_slug = first_category
        .map(|c| c.slug.clone())
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| "geral".to_string());

    let date = raw.date.unwrap_or_default();
    let modified = raw.modified.unwrap_or_else(|| date.clone());

    let id = raw
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let featured_image = raw
        .featured_image
        .filter(|url| !url.is_empty())
        .or_else(|| raw.featured_media_url.filter(|url| !url.is_empty()));

    Post {
        id,
        slug: raw.slug.unwrap_or_default(),
        read_time: read_time(&content),
        meta: PostMeta {
            title: format!("{title} | Blog {BRAND}"),
            description: excerpt.clone(),
            keywords,
        },
        title,
        excerpt,
        content,
        date,
        modified,
        author: raw
            .author
            .and_then(|a| a.name)
            .unwrap_or_else(|| BRAND.to_string()),
        category,
        category_slug,
        tags,
        featured_image,
        link: raw.url.or(raw.link),
    }
}

/// Normalize one raw category.
pub fn normalize_category(raw: RawCategory) -> PostCategory {
    PostCategory {
        id: raw.id,
        name: raw.name,
        slug: raw.slug,
        description: raw.description,
        count: raw.post_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::testing::raw_post;

    #[test]
    fn wrapped_title_resolves_to_plain_string() {
        let post = normalize_post(raw_post(json!({
            "ID": 7,
            "slug": "hello",
            "title": {"rendered": "Hello World"}
        })));
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.meta.title, "Hello World | Blog botellho.co");
    }

    #[test]
    fn excerpt_is_stripped_and_capped() {
        let long = format!("<p>{}</p>", "a".repeat(300));
        let post = normalize_post(raw_post(json!({"excerpt": long})));
        assert_eq!(post.excerpt.len(), 200);
        assert!(!post.excerpt.contains('<'));
    }

    #[test]
    fn read_time_of_empty_content_is_one_minute() {
        assert_eq!(read_time(""), "1 min");
        assert_eq!(read_time("<p></p>"), "1 min");
    }

    #[test]
    fn read_time_rounds_up() {
        let words_500 = vec!["word"; 500].join(" ");
        assert_eq!(read_time(&words_500), "3 min");

        let words_200 = vec!["word"; 200].join(" ");
        assert_eq!(read_time(&words_200), "1 min");
    }

    #[test]
    fn html_is_ignored_when_counting_words() {
        let content = format!("<div class=\"post\">{}</div>", vec!["w"; 250].join(" "));
        assert_eq!(read_time(&content), "2 min");
    }

    #[test]
    fn tags_normalize_from_every_encoding() {
        let list = normalize_post(raw_post(json!({"tags": ["rust", "web"]})));
        assert_eq!(list.tags, vec!["rust", "web"]);

        let objects = normalize_post(raw_post(json!({"tags": [{"name": "rust"}]})));
        assert_eq!(objects.tags, vec!["rust"]);

        // Deserialized straight from text, as off the wire: a `json!` value
        // would alphabetize the keys and lose the document order.
        let keyed: RawPost = serde_json::from_str(
            r#"{"tags": {"web": {"name": "web"}, "rust": {"name": "rust"}}}"#,
        )
        .unwrap();
        assert_eq!(normalize_post(keyed).tags, vec!["web", "rust"]);

        let single = normalize_post(raw_post(json!({"tags": "rust"})));
        assert_eq!(single.tags, vec!["rust"]);
    }

    #[test]
    fn defaults_cover_missing_fields() {
        let post = normalize_post(raw_post(json!({})));
        assert_eq!(post.author, BRAND);
        assert_eq!(post.category, "Geral");
        assert_eq!(post.category_slug, "geral");
        assert_eq!(post.read_time, "1 min");
        assert!(post.tags.is_empty());
        assert!(post.featured_image.is_none());
        assert!(post.link.is_none());
        assert!(!post.id.is_empty());
    }

    #[test]
    fn first_category_supplies_name_and_slug() {
        let post = normalize_post(raw_post(json!({
            "categories": [{"ID": 3, "name": "Design", "slug": "design"}]
        })));
        assert_eq!(post.category, "Design");
        assert_eq!(post.category_slug, "design");
    }

    #[test]
    fn modified_defaults_to_date() {
        let post = normalize_post(raw_post(json!({"date": "2025-03-01T10:00:00+00:00"})));
        assert_eq!(post.modified, post.date);
    }

    #[test]
    fn keywords_join_the_tags() {
        let post = normalize_post(raw_post(json!({"tags": ["a", "b", "c"]})));
        assert_eq!(post.meta.keywords, "a, b, c");
    }
}
