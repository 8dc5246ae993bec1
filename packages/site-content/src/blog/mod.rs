//! Blog resolution and normalization.
//!
//! Remote queries against the CMS with the valid-empty and failed outcomes
//! kept distinct, plus the normalization of heterogeneous response shapes
//! into the one [`crate::types::Post`] model.

pub mod normalize;
pub mod resolver;

pub use resolver::{
    resolve_categories, resolve_post, resolve_posts, CategoryListOutcome, PostListOutcome,
};
