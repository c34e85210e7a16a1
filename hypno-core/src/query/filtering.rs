//! Named predicates over [`ProjectRecord`] and the helpers that translate UI
//! filter state into them.
//!
//! Every predicate is pure and independent, so the combined portfolio filter
//! is simply their conjunction and the order of evaluation never matters.
//!
//! Matching rules:
//!
//! - category, status and platform compare exactly (case-sensitive), with the
//!   `All` sentinel admitting everything;
//! - the free-text term is matched case-insensitively as a substring of the
//!   title, the description, any single tag, or the category;
//! - a blank term (empty or whitespace only) imposes no restriction; any
//!   other term is matched as typed, surrounding whitespace included.

use crate::query::types::{Facet, PortfolioFilter};
use hypno_model::ProjectRecord;
use url::{Url, form_urlencoded};

/// Query-string key carrying the free-text term.
pub const SEARCH_PARAM: &str = "search";
pub const CATEGORY_PARAM: &str = "category";
pub const STATUS_PARAM: &str = "status";
pub const PLATFORM_PARAM: &str = "platform";

/// Map blank search box input to `None`. Other input is kept verbatim.
pub fn normalize_search_term(raw: &str) -> Option<String> {
    if is_blank_term(raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

fn is_blank_term(term: &str) -> bool {
    term.trim().is_empty()
}

/// Case-insensitive substring match of an already-lowercased needle.
pub fn matches_search(project: &ProjectRecord, needle: &str) -> bool {
    contains_folded(&project.title, needle)
        || contains_folded(&project.description, needle)
        || project.tags.iter().any(|tag| contains_folded(tag, needle))
        || contains_folded(&project.category, needle)
}

pub fn matches_category(project: &ProjectRecord, category: &Facet) -> bool {
    category.admits(&project.category)
}

pub fn matches_status(project: &ProjectRecord, status: &Facet) -> bool {
    status.admits(project.status.label())
}

pub fn matches_platform(project: &ProjectRecord, platform: &Facet) -> bool {
    platform.admits(&project.platform)
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl PortfolioFilter {
    /// Build the filter from the four raw values the browsing page holds.
    pub fn new(term: &str, category: &str, status: &str, platform: &str) -> Self {
        Self {
            search: normalize_search_term(term),
            category: Facet::parse(category),
            status: Facet::parse(status),
            platform: Facet::parse(platform),
        }
    }

    /// `true` when no predicate restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.search_needle().is_none()
            && self.category.is_all()
            && self.status.is_all()
            && self.platform.is_all()
    }

    /// Lowercased search needle, if a non-blank term is set.
    pub fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !is_blank_term(term))
            .map(str::to_lowercase)
    }

    /// The conjunction of every predicate, with the needle folded once.
    pub fn predicate(&self) -> impl Fn(&ProjectRecord) -> bool + '_ {
        let needle = self.search_needle();
        move |project| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(project, needle))
                && matches_category(project, &self.category)
                && matches_status(project, &self.status)
                && matches_platform(project, &self.platform)
        }
    }

    pub fn matches(&self, project: &ProjectRecord) -> bool {
        (self.predicate())(project)
    }

    /// Seed a filter from a query string (`?search=rpg&status=Live`), a
    /// relative page path (`/portfolio?search=rpg`) or a full URL. Unknown
    /// keys are ignored and the first occurrence of a key wins. Missing facets
    /// default to `All`.
    pub fn from_query_string(input: &str) -> Self {
        let mut filter = PortfolioFilter::default();
        let mut seen_search = false;
        let mut seen_category = false;
        let mut seen_status = false;
        let mut seen_platform = false;

        let owned_pairs: Vec<(String, String)> = match Url::parse(input) {
            Ok(url) => url.query_pairs().into_owned().collect(),
            Err(_) => {
                let raw = input.split('#').next().unwrap_or_default();
                let query = raw.split_once('?').map_or(raw, |(_, q)| q);
                form_urlencoded::parse(query.as_bytes())
                    .into_owned()
                    .collect()
            }
        };

        for (key, value) in owned_pairs {
            match key.as_str() {
                SEARCH_PARAM if !seen_search => {
                    seen_search = true;
                    filter.search = normalize_search_term(&value);
                }
                CATEGORY_PARAM if !seen_category => {
                    seen_category = true;
                    filter.category = Facet::from(value);
                }
                STATUS_PARAM if !seen_status => {
                    seen_status = true;
                    filter.status = Facet::from(value);
                }
                PLATFORM_PARAM if !seen_platform => {
                    seen_platform = true;
                    filter.platform = Facet::from(value);
                }
                _ => {}
            }
        }

        filter
    }

    /// Encode the filter back into a query string (without the leading
    /// `?`). Only restricting parts are written, so an unrestricted filter
    /// yields an empty string.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(term) = self.search.as_deref() {
            serializer.append_pair(SEARCH_PARAM, term);
        }
        for (key, facet) in [
            (CATEGORY_PARAM, &self.category),
            (STATUS_PARAM, &self.status),
            (PLATFORM_PARAM, &self.platform),
        ] {
            if let Facet::Only(value) = facet {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypno_model::{ProjectId, ProjectStats, ProjectStatus, Rating};

    fn sample() -> ProjectRecord {
        ProjectRecord {
            id: ProjectId::new(1),
            title: "Galactic Miners".into(),
            description: "Estrategia espacial".into(),
            short_description: None,
            platform: "PC/Steam".into(),
            status: ProjectStatus::Live,
            category: "Strategy".into(),
            tags: vec!["Space".into(), "Mining".into()],
            image: String::new(),
            stats: ProjectStats {
                players: "15K+".into(),
                revenue: "$2.3M".into(),
                rating: Rating::Score(4.8),
            },
            launch_date: "2023-08".into(),
            featured: true,
        }
    }

    #[test]
    fn blank_terms_normalize_to_none() {
        assert_eq!(normalize_search_term(""), None);
        assert_eq!(normalize_search_term("   \t"), None);
        assert_eq!(normalize_search_term(" rpg "), Some(" rpg ".into()));
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_term() {
        let project = sample();
        let term = |text: &str| PortfolioFilter::new(text, "All", "All", "All");
        assert!(term("galactic").matches(&project));
        assert!(term("galactic miners").matches(&project));
        assert!(!term("galactic ").matches(&project));
        assert!(!term(" galactic").matches(&project));
    }

    #[test]
    fn blank_term_set_directly_is_no_restriction() {
        let filter = PortfolioFilter {
            search: Some("   ".into()),
            ..PortfolioFilter::default()
        };
        assert_eq!(filter.search_needle(), None);
        assert!(filter.is_unrestricted());
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn search_checks_every_text_field() {
        let project = sample();
        assert!(matches_search(&project, "galactic"));
        assert!(matches_search(&project, "espacial"));
        assert!(matches_search(&project, "mining"));
        assert!(matches_search(&project, "strat"));
        assert!(!matches_search(&project, "racing"));
    }

    #[test]
    fn facets_compare_exactly() {
        let project = sample();
        assert!(matches_category(&project, &Facet::All));
        assert!(matches_category(&project, &Facet::parse("Strategy")));
        assert!(!matches_category(&project, &Facet::parse("strategy")));
        assert!(matches_status(&project, &Facet::parse("Live")));
        assert!(!matches_status(&project, &Facet::parse("live")));
        assert!(matches_platform(&project, &Facet::parse("PC/Steam")));
        assert!(!matches_platform(&project, &Facet::parse("PC")));
    }

    #[test]
    fn filter_uppercase_term_matches() {
        let filter = PortfolioFilter::new("GALACTIC", "All", "All", "All");
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn unrestricted_only_without_any_predicate() {
        assert!(PortfolioFilter::new(" ", "All", "All", "All").is_unrestricted());
        assert!(!PortfolioFilter::new("", "RPG", "All", "All").is_unrestricted());
    }

    #[test]
    fn query_string_seeds_search_term() {
        let filter = PortfolioFilter::from_query_string("?search=Pixel%20Art");
        assert_eq!(filter.search.as_deref(), Some("Pixel Art"));
        assert!(filter.category.is_all());
    }

    #[test]
    fn query_string_accepts_full_urls_and_first_key_wins() {
        let filter = PortfolioFilter::from_query_string(
            "https://hypnocentral.example/portfolio?search=rpg&status=Live&search=other",
        );
        assert_eq!(filter.search.as_deref(), Some("rpg"));
        assert_eq!(filter.status, Facet::Only("Live".into()));
    }

    #[test]
    fn query_string_accepts_relative_paths() {
        let filter =
            PortfolioFilter::from_query_string("/portfolio?search=rpg#grid");
        assert_eq!(filter.search.as_deref(), Some("rpg"));
    }

    #[test]
    fn query_string_round_trips_restrictions_only() {
        let filter = PortfolioFilter::new("space", "All", "Growing", "PC/Steam");
        let encoded = filter.to_query_string();
        assert_eq!(encoded, "search=space&status=Growing&platform=PC%2FSteam");
        assert_eq!(PortfolioFilter::from_query_string(&encoded), filter);
        assert_eq!(PortfolioFilter::default().to_query_string(), "");
    }
}
