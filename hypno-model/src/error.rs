use std::fmt::{self, Display};

use crate::ids::ProjectId;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    DuplicateId(ProjectId),
    EmptyTitle(ProjectId),
    UnknownStatus(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::DuplicateId(id) => {
                write!(f, "duplicate project id {id}")
            }
            ModelError::EmptyTitle(id) => {
                write!(f, "project {id} has an empty title")
            }
            ModelError::UnknownStatus(raw) => {
                write!(f, "unknown project status '{raw}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
