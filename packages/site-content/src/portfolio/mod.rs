//! Repository resolution pipeline.
//!
//! Produces a ranked, categorized, bounded list of portfolio-worthy
//! repositories for a GitHub account: list → first-pass filter →
//! README-gated second pass → classification → ranking → truncation.

pub mod category;
pub mod filter;
pub mod resolver;

pub use resolver::{resolve_portfolio, PortfolioOptions, PortfolioResolution};
