//! Core data model definitions shared across HypnoCentral crates.
#![allow(missing_docs)]

pub mod error;
pub mod filter_types;
pub mod ids;
pub mod prelude;
pub mod project;
pub mod status;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{
    ALL_SENTINEL, CATEGORY_OPTIONS, PLATFORM_OPTIONS, STATUS_OPTIONS,
    is_all_sentinel,
};
pub use ids::ProjectId;
pub use project::{ProjectRecord, ProjectStats, Rating};
pub use status::ProjectStatus;
