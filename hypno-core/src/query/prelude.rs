//! Intentional query surface consumed by browsing clients.

pub use super::builder::PortfolioFilterBuilder;
pub use super::filtering::{
    CATEGORY_PARAM, PLATFORM_PARAM, SEARCH_PARAM, STATUS_PARAM,
    normalize_search_term,
};
pub use super::types::{Facet, FilterOutcome, PortfolioFilter};
