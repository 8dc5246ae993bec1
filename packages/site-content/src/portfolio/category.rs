//! Repository categorization.
//!
//! A repository is classified by scanning the concatenation of its README,
//! description, name and topics against an ordered keyword table with
//! whole-word matching. Within a category, longer (more specific) keywords
//! are checked before shorter ones; the first matching category wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed category enumeration. Display labels keep the site's original
/// (Portuguese) naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Plugin,
    WordPress,
    #[serde(rename = "E-commerce")]
    Ecommerce,
    Sistema,
    Institucional,
    #[serde(rename = "API")]
    Api,
    Biblioteca,
    App,
    Site,
    Web,
}

impl Category {
    /// Display label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Plugin => "Plugin",
            Category::WordPress => "WordPress",
            Category::Ecommerce => "E-commerce",
            Category::Sistema => "Sistema",
            Category::Institucional => "Institucional",
            Category::Api => "API",
            Category::Biblioteca => "Biblioteca",
            Category::App => "App",
            Category::Site => "Site",
            Category::Web => "Web",
        }
    }

    /// Display-order priority: lower sorts first. Plugins lead, then
    /// site-like work, then systems, then libraries/apps, then the rest.
    pub fn priority(&self) -> u8 {
        match self {
            Category::Plugin => 1,
            Category::Site | Category::WordPress | Category::Ecommerce => 2,
            Category::Sistema | Category::Institucional => 3,
            Category::Api | Category::Biblioteca | Category::App => 4,
            Category::Web => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered keyword table. Order matters twice: categories are tried top to
/// bottom, and within a category the longer keywords are matched first.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Plugin,
        &[
            "wordpress plugin",
            "wp plugin",
            "woocommerce plugin",
            "plugin wordpress",
            "plugin para",
            "plugin de",
            "wordpress-plugin",
            "wp-plugin",
            "plugin",
            "addon",
            "extension",
        ],
    ),
    (
        Category::WordPress,
        &[
            "wordpress theme",
            "wp theme",
            "wordpress site",
            "wp site",
            "tema wordpress",
            "wordpress",
            "wp-",
        ],
    ),
    (
        Category::Ecommerce,
        &[
            "ecommerce",
            "e-commerce",
            "loja virtual",
            "loja online",
            "online store",
            "woocommerce",
            "shop",
            "store",
            "venda",
        ],
    ),
    (
        Category::Sistema,
        &[
            "sistema de gestão",
            "sistema de",
            "management system",
            "gestão",
            "dashboard",
            "admin panel",
            "crm",
            "erp",
            "sistema",
            "system",
        ],
    ),
    (
        Category::Institucional,
        &[
            "institucional",
            "institutional",
            "museu",
            "faculdade",
            "universidade",
            "ong",
            "organização",
            "foundation",
        ],
    ),
    (
        Category::Api,
        &[
            "rest api",
            "graphql api",
            "api rest",
            "backend api",
            "api service",
            "api endpoint",
            "api",
        ],
    ),
    (
        Category::Biblioteca,
        &[
            "library",
            "biblioteca",
            "npm package",
            "composer package",
            "sdk",
            "package",
            "lib",
        ],
    ),
    (
        Category::App,
        &[
            "mobile app",
            "react native",
            "flutter app",
            "mobile application",
            "app mobile",
            "application",
        ],
    ),
    (
        Category::Site,
        &[
            "landing page",
            "página",
            "webpage",
            "frontend",
            "site",
            "website",
        ],
    ),
];

/// Name tokens of known repositories that classify straight to `Site`.
const SITE_NAME_TOKENS: &[&str] = &["fmd"];

/// Classify a repository from its categorization signals.
///
/// Never fails to assign: falls back to `Site` when the description mentions
/// a site, else `Web`.
pub fn classify(
    readme: Option<&str>,
    description: Option<&str>,
    name: &str,
    topics: &[String],
) -> Category {
    if SITE_NAME_TOKENS
        .iter()
        .any(|token| name.to_lowercase().contains(token))
    {
        return Category::Site;
    }

    let haystack = format!(
        "{} {} {} {}",
        readme.unwrap_or(""),
        description.unwrap_or(""),
        name,
        topics.join(" ")
    )
    .to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        let mut by_length: Vec<&str> = keywords.to_vec();
        by_length.sort_by_key(|k| std::cmp::Reverse(k.len()));

        for keyword in by_length {
            if contains_word(&haystack, keyword) {
                return *category;
            }
        }
    }

    if let Some(desc) = description {
        let desc = desc.to_lowercase();
        if desc.contains("site") || desc.contains("website") {
            return Category::Site;
        }
    }

    Category::Web
}

/// Whole-word containment, mirroring `\b...\b` semantics: a boundary exists
/// where word-character-ness flips between the needle edge and its neighbor
/// (start/end of text counts as non-word).
fn contains_word(haystack: &str, needle: &str) -> bool {
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
        return false;
    };

    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let at = from + pos;
        let end = at + needle.len();

        let prev = haystack[..at].chars().next_back();
        let next = haystack[end..].chars().next();

        let boundary_before = is_word_char(first) != prev.map(is_word_char).unwrap_or(false);
        let boundary_after = is_word_char(last) != next.map(is_word_char).unwrap_or(false);
        if boundary_before && boundary_after {
            return true;
        }

        from = at + first.len_utf8();
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_text(text: &str) -> Category {
        classify(Some(text), None, "repo", &[])
    }

    #[test]
    fn specific_phrases_win_over_generic_keywords() {
        // "wordpress plugin" must classify as Plugin, not WordPress, even
        // though both categories would match some keyword.
        assert_eq!(classify_text("A wordpress plugin for forms"), Category::Plugin);
        assert_eq!(classify_text("My wordpress theme collection"), Category::WordPress);
    }

    #[test]
    fn whole_word_matching_rejects_substrings() {
        // "shopping" must not match the "shop" keyword.
        assert_eq!(classify_text("shopping around for ideas"), Category::Web);
        assert_eq!(classify_text("an online shop for shoes"), Category::Ecommerce);
    }

    #[test]
    fn topics_contribute_to_classification() {
        let category = classify(None, None, "repo", &["dashboard".to_string()]);
        assert_eq!(category, Category::Sistema);
    }

    #[test]
    fn known_name_token_short_circuits_to_site() {
        assert_eq!(
            classify(Some("rest api for things"), None, "fmd-projeto", &[]),
            Category::Site
        );
    }

    #[test]
    fn description_mentioning_site_falls_back_to_site() {
        assert_eq!(
            classify(None, Some("personal website of mine"), "repo", &[]),
            Category::Site
        );
    }

    #[test]
    fn unmatched_content_falls_back_to_web() {
        assert_eq!(classify(None, Some("misc experiments"), "repo", &[]), Category::Web);
    }

    #[test]
    fn accented_keywords_match() {
        assert_eq!(classify_text("ferramenta de gestão financeira"), Category::Sistema);
    }

    #[test]
    fn priorities_follow_display_order() {
        assert_eq!(Category::Plugin.priority(), 1);
        assert_eq!(Category::Site.priority(), 2);
        assert_eq!(Category::WordPress.priority(), 2);
        assert_eq!(Category::Ecommerce.priority(), 2);
        assert_eq!(Category::Sistema.priority(), 3);
        assert_eq!(Category::Institucional.priority(), 3);
        assert_eq!(Category::Api.priority(), 4);
        assert_eq!(Category::Biblioteca.priority(), 4);
        assert_eq!(Category::App.priority(), 4);
        assert_eq!(Category::Web.priority(), 5);
    }

    #[test]
    fn labels_round_trip_through_serde() {
        let json = serde_json::to_string(&Category::Ecommerce).unwrap();
        assert_eq!(json, "\"E-commerce\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Ecommerce);
    }
}
