pub mod builder;
pub mod filtering;
pub mod prelude;
pub mod types;

pub use builder::PortfolioFilterBuilder;
pub use filtering::{
    matches_category, matches_platform, matches_search, matches_status,
    normalize_search_term,
};
pub use types::*;
