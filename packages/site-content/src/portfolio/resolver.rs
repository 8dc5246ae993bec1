//! The repository resolution pipeline.
//!
//! Failure is soft by contract: any listing error surfaces as a user-visible
//! message beside an empty project list, and the caller renders fallback
//! content (see [`crate::fallback::projects_with_fallback`]).

use std::time::Duration;

use github_client::{GithubError, RepoCandidate};

use crate::portfolio::{category, filter};
use crate::traits::RepoHost;
use crate::types::Project;

/// Tuning knobs for the pipeline. Defaults match production behavior.
#[derive(Debug, Clone)]
pub struct PortfolioOptions {
    /// Size of the final display set.
    pub max_projects: usize,
    /// Cap on README fetches in the second pass, bounding request volume.
    pub readme_scan_cap: usize,
    /// Delay between sequential README fetches with an authenticated host.
    pub authenticated_delay: Duration,
    /// Delay between sequential README fetches without a token.
    pub anonymous_delay: Duration,
}

impl Default for PortfolioOptions {
    fn default() -> Self {
        Self {
            max_projects: 6,
            readme_scan_cap: 15,
            authenticated_delay: Duration::from_millis(150),
            anonymous_delay: Duration::from_millis(500),
        }
    }
}

/// Outcome of a portfolio resolution.
#[derive(Debug, Clone, Default)]
pub struct PortfolioResolution {
    /// Ranked, categorized, bounded project set; empty on failure.
    pub projects: Vec<Project>,
    /// User-visible message when the listing failed.
    pub error: Option<String>,
}

/// Resolve an account's portfolio projects.
///
/// A blank handle short-circuits to an empty, error-free resolution. The
/// second-pass README fetches run strictly sequentially, spaced by the
/// configured delay.
pub async fn resolve_portfolio(
    host: &dyn RepoHost,
    handle: &str,
    options: &PortfolioOptions,
) -> PortfolioResolution {
    if handle.trim().is_empty() {
        return PortfolioResolution::default();
    }

    let candidates = match host.list_repos(handle).await {
        Ok(candidates) => candidates,
        Err(err) => {
            tracing::warn!(handle, error = %err, "Repository listing failed");
            return PortfolioResolution {
                projects: Vec::new(),
                error: Some(user_message(&err)),
            };
        }
    };

    let survivors = filter::first_pass(candidates);

    let delay = if host.is_authenticated() {
        options.authenticated_delay
    } else {
        options.anonymous_delay
    };

    let mut projects = Vec::new();
    for (index, repo) in survivors
        .into_iter()
        .take(options.readme_scan_cap)
        .enumerate()
    {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        // One failed document fetch only costs this repository.
        let readme = match host.readme(handle, &repo.name).await {
            Ok(readme) => readme,
            Err(err) => {
                tracing::debug!(repo = %repo.name, error = %err, "README fetch failed");
                None
            }
        };

        let documented = readme
            .as_deref()
            .map(|r| !r.trim().is_empty())
            .unwrap_or(false);
        if !documented && !filter::is_force_included(&repo.name) {
            continue;
        }

        projects.push(build_project(repo, readme.as_deref()));
    }

    rank(&mut projects);
    projects.truncate(options.max_projects);

    tracing::info!(handle, count = projects.len(), "Resolved portfolio projects");
    PortfolioResolution {
        projects,
        error: None,
    }
}

fn build_project(repo: RepoCandidate, readme: Option<&str>) -> Project {
    let category = category::classify(
        readme,
        repo.description.as_deref(),
        &repo.name,
        &repo.topics,
    );

    Project {
        id: repo.id,
        name: repo.name,
        description: repo.description,
        url: repo.html_url,
        homepage: repo.homepage,
        language: repo.language,
        stars: repo.stars,
        forks: repo.forks,
        updated_at: repo.updated_at,
        topics: repo.topics,
        category,
    }
}

/// Category priority ascending, then stars descending, then recency.
fn rank(projects: &mut [Project]) {
    projects.sort_by(|a, b| {
        a.category
            .priority()
            .cmp(&b.category.priority())
            .then_with(|| b.stars.cmp(&a.stars))
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
}

/// User-visible message for a failed listing, per error category.
fn user_message(err: &GithubError) -> String {
    match err {
        GithubError::RateLimitExceeded { reset: Some(reset) } => format!(
            "GitHub rate limit exceeded. Try again after {}.",
            reset.format("%H:%M:%S")
        ),
        GithubError::RateLimitExceeded { reset: None } => {
            "GitHub rate limit exceeded. Use an access token to raise the limit.".to_string()
        }
        GithubError::AccessDenied => {
            "Access denied by the GitHub API. Check that the user exists or configure an access token."
                .to_string()
        }
        GithubError::NotFound { handle } => format!("GitHub user \"{handle}\" not found."),
        GithubError::Timeout => "Timed out loading repositories.".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::portfolio::category::Category;
    use crate::testing::repo_fixture;

    fn project(name: &str, category: Category, stars: u32, updated_unix: i64) -> Project {
        let repo = RepoCandidate {
            stars,
            updated_at: Utc.timestamp_opt(updated_unix, 0).single().unwrap(),
            ..repo_fixture(1, name, Some("x"))
        };
        Project {
            category,
            ..build_project(repo, None)
        }
    }

    #[test]
    fn ranking_orders_by_priority_then_stars_then_recency() {
        let mut projects = vec![
            project("web", Category::Web, 100, 30),
            project("lib", Category::Biblioteca, 5, 10),
            project("plugin", Category::Plugin, 0, 5),
            project("shop-old", Category::Ecommerce, 3, 10),
            project("shop-new", Category::Ecommerce, 3, 20),
            project("shop-starred", Category::Ecommerce, 9, 1),
        ];
        rank(&mut projects);

        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["plugin", "shop-starred", "shop-new", "shop-old", "lib", "web"]
        );
    }

    #[test]
    fn rate_limit_message_mentions_the_reset_time() {
        let reset = Utc.with_ymd_and_hms(2025, 1, 1, 14, 30, 0).single();
        let message = user_message(&GithubError::RateLimitExceeded { reset });
        assert!(message.contains("rate limit"));
        assert!(message.contains("14:30:00"));
    }

    #[test]
    fn not_found_message_names_the_handle() {
        let message = user_message(&GithubError::NotFound {
            handle: "ghost".to_string(),
        });
        assert!(message.contains("\"ghost\""));
    }
}
