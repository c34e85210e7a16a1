//! Presentation-focused snapshot of the model surface.
//! Prefer importing from this module when rendering catalog results.

pub use super::filter_types::{
    ALL_SENTINEL, CATEGORY_OPTIONS, PLATFORM_OPTIONS, STATUS_OPTIONS,
};
pub use super::ids::ProjectId;
pub use super::project::{ProjectRecord, ProjectStats, Rating};
pub use super::status::ProjectStatus;
