use indexmap::IndexMap;
use serde::Deserialize;

/// A field that arrives either as a plain string or wrapped in an object
/// with a `rendered` member. The WordPress.com v1.1 API mixes both shapes
/// depending on the site and the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Rendered {
    Plain(String),
    Wrapped { rendered: String },
}

impl Rendered {
    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Plain(s) => s,
            Rendered::Wrapped { rendered } => rendered,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Rendered::Plain(s) => s,
            Rendered::Wrapped { rendered } => rendered,
        }
    }
}

impl Default for Rendered {
    fn default() -> Self {
        Rendered::Plain(String::new())
    }
}

/// A tag value: either a bare name or a tag object carrying one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTagValue {
    Name(String),
    Object(RawTag),
}

impl RawTagValue {
    pub fn name(&self) -> &str {
        match self {
            RawTagValue::Name(s) => s,
            RawTagValue::Object(tag) => &tag.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTag {
    #[serde(default)]
    pub name: String,
}

/// The post `tags` field: an array of strings or tag objects, an object
/// keyed by tag name, or a single string. `IndexMap` keeps the keyed shape
/// in document order so the normalized sequence is deterministic.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    List(Vec<RawTagValue>),
    Keyed(IndexMap<String, RawTagValue>),
    Single(String),
}

impl Default for RawTags {
    fn default() -> Self {
        RawTags::List(Vec::new())
    }
}

/// A category, both as embedded in posts and from `GET /categories/`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    #[serde(rename = "ID", default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub post_count: u64,
}

/// The post `categories` field: an array or an object keyed by name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPostCategories {
    List(Vec<RawCategory>),
    Keyed(IndexMap<String, RawCategory>),
}

impl RawPostCategories {
    /// The first category in document order.
    pub fn first(&self) -> Option<&RawCategory> {
        match self {
            RawPostCategories::List(list) => list.first(),
            RawPostCategories::Keyed(map) => map.values().next(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAuthor {
    #[serde(default)]
    pub name: Option<String>,
}

/// A post as returned by `GET /sites/{site}/posts/`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPost {
    #[serde(rename = "ID", default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub author: Option<RawAuthor>,
    #[serde(default)]
    pub categories: Option<RawPostCategories>,
    /// Flat category name some response shapes carry instead of `categories`.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: RawTags,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub featured_media_url: Option<String>,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Envelope for `GET /sites/{site}/posts/`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<RawPost>,
}

/// Envelope for `GET /sites/{site}/categories/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<RawCategory>,
}

/// Query parameters for the post listing endpoint.
#[derive(Debug, Clone)]
pub struct PostQuery {
    /// Page size (`number` in the API).
    pub number: u32,
    pub category: Option<String>,
    pub search: Option<String>,
    pub order_by: String,
    pub order: String,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            number: 10,
            category: None,
            search: None,
            order_by: "date".to_string(),
            order: "DESC".to_string(),
        }
    }
}

impl PostQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(mut self, number: u32) -> Self {
        self.number = number;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }
}
