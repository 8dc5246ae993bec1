//! Pure WordPress.com REST API client.
//!
//! A minimal client for the WordPress.com public v1.1 API: listing posts
//! with paging/filter/search parameters and listing categories. The API has
//! no per-slug post lookup, so slug resolution is done client-side by the
//! consumer over a wide listing window.
//!
//! # Example
//!
//! ```rust,ignore
//! use wordpress_client::{PostQuery, WordPressClient};
//!
//! let client = WordPressClient::default_site();
//!
//! let posts = client.list_posts(&PostQuery::new().number(10)).await?;
//! for post in &posts {
//!     println!("{}", post.title.as_str());
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, WordPressError};
pub use types::{
    CategoriesResponse, PostQuery, PostsResponse, RawCategory, RawPost, RawPostCategories, RawTag,
    RawTagValue, RawTags, Rendered,
};

const API_BASE: &str = "https://public-api.wordpress.com/rest/v1.1/sites";

/// The site this client talks to unless one is supplied.
pub const DEFAULT_SITE: &str = "botellhocomblog.wordpress.com";

/// Listing window used for client-side slug lookup: the API offers no
/// per-slug endpoint, so consumers fetch this many posts and filter locally.
const SLUG_LOOKUP_WINDOW: u32 = 100;

pub struct WordPressClient {
    client: reqwest::Client,
    base_url: String,
}

impl WordPressClient {
    /// Client for a specific WordPress.com site (e.g. `"myblog.wordpress.com"`).
    pub fn new(site: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("{}/{}", API_BASE, site.as_ref()),
        }
    }

    /// Client for the default site.
    pub fn default_site() -> Self {
        Self::new(DEFAULT_SITE)
    }

    /// Override the full base URL (for proxies and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// List posts matching the query.
    pub async fn list_posts(&self, query: &PostQuery) -> Result<Vec<RawPost>> {
        let url = format!("{}/posts/", self.base_url);

        let mut params: Vec<(&str, String)> = vec![
            ("number", query.number.to_string()),
            ("order_by", query.order_by.clone()),
            ("order", query.order.clone()),
        ];
        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }
        if let Some(search) = &query.search {
            params.push(("search", search.clone()));
        }

        let resp = self.client.get(&url).query(&params).send().await?;
        let body: PostsResponse = check(resp).await?.json().await?;
        tracing::debug!(count = body.posts.len(), "Listed WordPress posts");
        Ok(body.posts)
    }

    /// List the slug-lookup window of most recent posts (currently 100).
    pub async fn list_posts_for_lookup(&self) -> Result<Vec<RawPost>> {
        let url = format!("{}/posts/", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[("number", SLUG_LOOKUP_WINDOW.to_string())])
            .send()
            .await?;
        let body: PostsResponse = check(resp).await?.json().await?;
        Ok(body.posts)
    }

    /// List the site's categories.
    pub async fn list_categories(&self) -> Result<Vec<RawCategory>> {
        let url = format!("{}/categories/", self.base_url);

        let resp = self.client.get(&url).send().await?;
        let body: CategoriesResponse = check(resp).await?.json().await?;
        tracing::debug!(count = body.categories.len(), "Listed WordPress categories");
        Ok(body.categories)
    }
}

/// Map non-2xx responses to the error taxonomy; 401/403 means the site is
/// private.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status.as_u16() == 401 || status.as_u16() == 403 {
        return Err(WordPressError::PrivateSite);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(WordPressError::Api {
        status: status.as_u16(),
        message,
    })
}
