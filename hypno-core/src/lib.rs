//! Portfolio catalog and query library for the HypnoCentral site.
//!
//! The crate owns the studio's project list and answers read-only questions
//! about it: everything, the featured subset, exact-match facet filters,
//! free-text search, and the combined filter the portfolio page applies.
//!
//! ```
//! use hypno_core::{PortfolioFilter, filter_projects, Catalog};
//!
//! let live_on_steam = filter_projects("", "All", "Live", "PC/Steam");
//! assert_eq!(live_on_steam[0].title, "Galactic Miners");
//!
//! let seeded = PortfolioFilter::from_query_string("?search=space");
//! assert_eq!(Catalog::reference().filter(&seeded).len(), 2);
//! ```
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod query;

pub use catalog::{
    Catalog, all_projects, featured_projects, filter_projects, project_by_id,
    projects_by_category, projects_by_platform, projects_by_status,
    search_projects,
};
pub use error::{CatalogError, Result};
pub use query::{
    Facet, FilterOutcome, PortfolioFilter, PortfolioFilterBuilder,
};

pub use hypno_model;
