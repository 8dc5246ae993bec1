//! Resolve the portfolio and blog content end-to-end against the live APIs.
//!
//! Reads GITHUB_HANDLE (required), GITHUB_TOKEN (development only) and
//! WORDPRESS_SITE from the environment or a .env file.

use github_client::GithubClient;
use wordpress_client::{PostQuery, WordPressClient};

use site_content::fallback::{posts_with_fallback, projects_with_fallback};
use site_content::portfolio::{resolve_portfolio, PortfolioOptions};
use site_content::{blog, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    // Portfolio
    println!("=== Portfolio ===");
    let host = GithubClient::new(config.github_token.clone());
    let resolution =
        resolve_portfolio(&host, &config.github_handle, &PortfolioOptions::default()).await;
    if let Some(message) = &resolution.error {
        println!("(remote failed: {message} — showing static projects)");
    }
    for project in projects_with_fallback(resolution) {
        println!(
            "[{}] {} — {} stars",
            project.category, project.name, project.stars
        );
    }

    // Blog
    println!("\n=== Blog ===");
    let source = WordPressClient::new(&config.wordpress_site);
    let query = PostQuery::new().number(5);
    let outcome = blog::resolve_posts(&source, &query).await;
    for post in posts_with_fallback(outcome, &query) {
        println!("{} ({}) — {}", post.title, post.read_time, post.date);
    }

    Ok(())
}
