//! First-pass repository filtering: name policy and hygiene checks.
//!
//! Pure, no network. The name policy is a process-wide constant: excluded
//! substrings disqualify a repository, force-included substrings override
//! the exclusion and waive the description/README requirements.

use github_client::RepoCandidate;

/// Name substrings that never belong in the portfolio (profile repos,
/// CV mirrors, the site's own repository, ...).
const EXCLUDED_NAMES: &[&str] = &[
    "botellho",
    "botellho.co",
    "botellho-co",
    "botelllhx",
    "profile",
    "readme",
    ".github",
    "github-profile",
    "portfolio",
    "cv",
    "resume",
];

/// Name substrings that must always survive filtering.
const FORCE_INCLUDE_NAMES: &[&str] = &["fmd-projeto", "fmd"];

/// Whether the name matches the force-include set.
pub fn is_force_included(name: &str) -> bool {
    let name = name.to_lowercase();
    FORCE_INCLUDE_NAMES.iter().any(|inc| name.contains(inc))
}

/// Whether the name is disqualified. Force-inclusion always wins.
pub fn is_excluded(name: &str) -> bool {
    if is_force_included(name) {
        return false;
    }
    let name = name.to_lowercase();
    EXCLUDED_NAMES.iter().any(|exc| name.contains(exc))
}

/// First-pass filter over the raw listing.
pub fn first_pass(candidates: Vec<RepoCandidate>) -> Vec<RepoCandidate> {
    candidates.into_iter().filter(survives).collect()
}

fn survives(repo: &RepoCandidate) -> bool {
    if repo.fork {
        return false;
    }
    if is_excluded(&repo.name) {
        return false;
    }
    // Archived and empty repositories are never portfolio material.
    if repo.archived || repo.size == 0 {
        return false;
    }
    // A non-blank description is required, except for forced names.
    if !is_force_included(&repo.name) {
        let described = repo
            .description
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false);
        if !described {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::repo_fixture;

    #[test]
    fn force_include_overrides_exclusion() {
        // "fmd-portfolio" matches both the excluded "portfolio" substring and
        // the force-included "fmd" substring.
        assert!(is_force_included("fmd-portfolio"));
        assert!(!is_excluded("fmd-portfolio"));
    }

    #[test]
    fn excluded_names_match_as_substrings_case_insensitively() {
        assert!(is_excluded("My-Portfolio"));
        assert!(is_excluded("awesome-CV"));
        assert!(!is_excluded("weather-dashboard"));
    }

    #[test]
    fn forks_archived_and_empty_repos_are_dropped() {
        let fork = RepoCandidate {
            fork: true,
            ..repo_fixture(1, "forked-thing", Some("a fork"))
        };
        let archived = RepoCandidate {
            archived: true,
            ..repo_fixture(2, "old-thing", Some("archived"))
        };
        let empty = RepoCandidate {
            size: 0,
            ..repo_fixture(3, "empty-thing", Some("nothing here"))
        };
        let keeper = repo_fixture(4, "real-thing", Some("a real project"));

        let kept = first_pass(vec![fork, archived, empty, keeper]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "real-thing");
    }

    #[test]
    fn description_is_required_unless_forced() {
        let undescribed = repo_fixture(1, "demo", None);
        let blank = repo_fixture(2, "blank", Some("   "));
        let forced = repo_fixture(3, "fmd-projeto", None);

        let kept = first_pass(vec![undescribed, blank, forced]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "fmd-projeto");
    }
}
