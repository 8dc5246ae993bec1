//! Normalized data types consumed by the presentation layer.
//!
//! Field names serialize in camelCase so the bundled JSON datasets and the
//! values handed to the views share one schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::portfolio::category::Category;

/// A portfolio-worthy repository after filtering and classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub updated_at: DateTime<Utc>,
    pub topics: Vec<String>,
    /// Always assigned; classification falls back to [`Category::Web`].
    pub category: Category,
}

/// A normalized blog post. Every field carries a safe default so rendering
/// never sees a missing value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// HTML-stripped, capped at 200 characters.
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub modified: String,
    pub author: String,
    pub category: String,
    pub category_slug: String,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    /// Derived reading time, e.g. `"3 min"`.
    pub read_time: String,
    pub link: Option<String>,
    pub meta: PostMeta,
}

/// SEO metadata composed during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// A blog category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCategory {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub count: u64,
}
