use hypno_model::{ALL_SENTINEL, ProjectRecord, is_all_sentinel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selection on a single exact-match field.
///
/// `All` admits every record. `Only` admits records whose field equals the
/// value exactly, case included; a value that no record carries admits none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Interpret a raw UI value, mapping the `All` sentinel to [`Facet::All`].
    pub fn parse(raw: &str) -> Self {
        if is_all_sentinel(raw) {
            Facet::All
        } else {
            Facet::Only(raw.to_string())
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Facet::All => ALL_SENTINEL,
            Facet::Only(value) => value,
        }
    }
}

impl From<&str> for Facet {
    fn from(raw: &str) -> Self {
        Facet::parse(raw)
    }
}

impl From<String> for Facet {
    fn from(raw: String) -> Self {
        if is_all_sentinel(&raw) {
            Facet::All
        } else {
            Facet::Only(raw)
        }
    }
}

impl From<Facet> for String {
    fn from(facet: Facet) -> Self {
        match facet {
            Facet::All => ALL_SENTINEL.to_string(),
            Facet::Only(value) => value,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined browsing state of the portfolio page: a free-text term plus one
/// facet per exact-match field. All parts are ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioFilter {
    /// Search term as typed; `None` when the user typed nothing (or only
    /// whitespace). A blank `Some` restricts nothing either.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub category: Facet,
    pub status: Facet,
    pub platform: Facet,
}

/// Records matched by a [`PortfolioFilter`], together with the filter that
/// produced them.
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    pub projects: Vec<&'a ProjectRecord>,
    pub filter: PortfolioFilter,
}

impl<'a> FilterOutcome<'a> {
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// `true` when at least one predicate restricted the result. An empty
    /// outcome with an active filter is "no results", not "no filters".
    pub fn is_filtered(&self) -> bool {
        !self.filter.is_unrestricted()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ProjectRecord> + '_ {
        self.projects.iter().copied()
    }
}

impl fmt::Display for FilterOutcome<'_> {
    /// Result-count line shown above the grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.len();
        let noun = if count == 1 { "project" } else { "projects" };
        write!(f, "{count} {noun} found")?;
        if let Some(term) = self.filter.search.as_deref()
            && !term.trim().is_empty()
        {
            write!(f, " for \"{term}\"")?;
        }
        Ok(())
    }
}
