use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Lifecycle stage of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectStatus {
    Live,
    Growing,
    Development,
}

impl ProjectStatus {
    pub fn all() -> &'static [ProjectStatus] {
        use ProjectStatus::*;
        &[Live, Growing, Development]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::Growing => "Growing",
            ProjectStatus::Development => "Development",
        }
    }

    /// Whether players can currently get their hands on the project.
    pub fn is_released(&self) -> bool {
        !matches!(self, ProjectStatus::Development)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = ModelError;

    /// Labels are matched exactly, like every other facet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::all()
            .iter()
            .copied()
            .find(|status| status.label() == s)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_label() {
        for status in ProjectStatus::all() {
            assert_eq!(status.label().parse::<ProjectStatus>(), Ok(*status));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(
            "live".parse::<ProjectStatus>(),
            Err(ModelError::UnknownStatus("live".into()))
        );
    }

    #[test]
    fn development_is_not_released() {
        assert!(ProjectStatus::Live.is_released());
        assert!(ProjectStatus::Growing.is_released());
        assert!(!ProjectStatus::Development.is_released());
    }
}
