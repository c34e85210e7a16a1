//! The portfolio catalog: an immutable, ordered collection of
//! [`ProjectRecord`]s and the read-only queries the site runs against it.
//!
//! Every query is total. Unknown facet values and terms that match nothing
//! produce an empty result, never an error, and results always preserve the
//! catalog's display order.

mod fixture;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use hypno_model::{
    CATEGORY_OPTIONS, ModelError, ModelResult, PLATFORM_OPTIONS, ProjectId,
    ProjectRecord, STATUS_OPTIONS,
};
use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::query::filtering::{
    matches_category, matches_platform, matches_search, matches_status,
    normalize_search_term,
};
use crate::query::types::{Facet, FilterOutcome, PortfolioFilter};

static REFERENCE: Lazy<Catalog> = Lazy::new(|| Catalog {
    projects: fixture::reference_projects(),
});

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// The studio's built-in portfolio, built on first access and shared
    /// read-only for the rest of the process.
    pub fn reference() -> &'static Catalog {
        &REFERENCE
    }

    /// Build a catalog from externally supplied records, keeping their order.
    /// Ids must be unique and titles non-blank.
    pub fn from_records(projects: Vec<ProjectRecord>) -> ModelResult<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(ModelError::DuplicateId(project.id));
            }
            if project.title.trim().is_empty() {
                return Err(ModelError::EmptyTitle(project.id));
            }
        }
        Ok(Self { projects })
    }

    /// Load a catalog from a JSON array of records.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let projects: Vec<ProjectRecord> = serde_json::from_str(&contents)
            .map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_records(projects)?;
        info!(
            path = %path.display(),
            projects = catalog.len(),
            "loaded portfolio catalog"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Every record, in display order.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Records flagged as featured. No cap is applied; how many get the flag
    /// is up to whoever authors the data.
    pub fn featured(&self) -> Vec<&ProjectRecord> {
        self.select(|project| project.featured)
    }

    pub fn by_category(&self, category: &str) -> Vec<&ProjectRecord> {
        let facet = Facet::parse(category);
        self.select(|project| matches_category(project, &facet))
    }

    pub fn by_status(&self, status: &str) -> Vec<&ProjectRecord> {
        let facet = Facet::parse(status);
        self.select(|project| matches_status(project, &facet))
    }

    pub fn by_platform(&self, platform: &str) -> Vec<&ProjectRecord> {
        let facet = Facet::parse(platform);
        self.select(|project| matches_platform(project, &facet))
    }

    /// Free-text search. A blank term returns the whole catalog.
    pub fn search(&self, term: &str) -> Vec<&ProjectRecord> {
        match normalize_search_term(term) {
            Some(term) => {
                let needle = term.to_lowercase();
                self.select(|project| matches_search(project, &needle))
            }
            None => self.projects.iter().collect(),
        }
    }

    /// Records admitted by every part of `filter`.
    pub fn filter(&self, filter: &PortfolioFilter) -> Vec<&ProjectRecord> {
        let predicate = filter.predicate();
        let matched = self.select(predicate);
        debug!(
            search = filter.search.as_deref().unwrap_or_default(),
            category = %filter.category,
            status = %filter.status,
            platform = %filter.platform,
            matched = matched.len(),
            total = self.len(),
            "applied portfolio filter"
        );
        matched
    }

    /// Like [`Catalog::filter`], keeping the filter alongside the results.
    pub fn apply(&self, filter: &PortfolioFilter) -> FilterOutcome<'_> {
        FilterOutcome {
            projects: self.filter(filter),
            filter: filter.clone(),
        }
    }

    pub fn category_options() -> &'static [&'static str] {
        CATEGORY_OPTIONS
    }

    pub fn status_options() -> &'static [&'static str] {
        STATUS_OPTIONS
    }

    pub fn platform_options() -> &'static [&'static str] {
        PLATFORM_OPTIONS
    }

    /// Distinct categories present in the data, in first-seen order.
    pub fn observed_categories(&self) -> Vec<&str> {
        distinct(self.projects.iter().map(|p| p.category.as_str()))
    }

    /// Distinct status labels present in the data, in first-seen order.
    pub fn observed_statuses(&self) -> Vec<&str> {
        distinct(self.projects.iter().map(|p| p.status.label()))
    }

    /// Distinct platforms present in the data, in first-seen order.
    pub fn observed_platforms(&self) -> Vec<&str> {
        distinct(self.projects.iter().map(|p| p.platform.as_str()))
    }

    fn select<F>(&self, predicate: F) -> Vec<&ProjectRecord>
    where
        F: Fn(&ProjectRecord) -> bool,
    {
        self.projects
            .iter()
            .filter(|project| predicate(*project))
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

// Operations over the reference catalog, named after what the portfolio page
// asks for.

pub fn all_projects() -> &'static [ProjectRecord] {
    Catalog::reference().all()
}

pub fn featured_projects() -> Vec<&'static ProjectRecord> {
    Catalog::reference().featured()
}

pub fn project_by_id(id: ProjectId) -> Option<&'static ProjectRecord> {
    Catalog::reference().get(id)
}

pub fn projects_by_category(category: &str) -> Vec<&'static ProjectRecord> {
    Catalog::reference().by_category(category)
}

pub fn projects_by_status(status: &str) -> Vec<&'static ProjectRecord> {
    Catalog::reference().by_status(status)
}

pub fn projects_by_platform(platform: &str) -> Vec<&'static ProjectRecord> {
    Catalog::reference().by_platform(platform)
}

pub fn search_projects(term: &str) -> Vec<&'static ProjectRecord> {
    Catalog::reference().search(term)
}

/// The portfolio page's combined query: term AND category AND status AND
/// platform, with `"All"` and a blank term meaning "no restriction".
pub fn filter_projects(
    term: &str,
    category: &str,
    status: &str,
    platform: &str,
) -> Vec<&'static ProjectRecord> {
    Catalog::reference()
        .filter(&PortfolioFilter::new(term, category, status, platform))
}
