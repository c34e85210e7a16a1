use std::fmt;

use crate::ids::ProjectId;
use crate::status::ProjectStatus;

/// A single entry of the studio portfolio.
///
/// Records are authored data: every field is display-ready and nothing is
/// derived from anything else at runtime.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// One-line pitch used by compact cards.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub short_description: Option<String>,
    /// Free-form label such as `PC/Steam` or `Mobile/Switch`.
    pub platform: String,
    pub status: ProjectStatus,
    pub category: String,
    /// Ordered; compact views only show the first few.
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
    pub stats: ProjectStats,
    /// Year-month or year-quarter, e.g. `2023-08` or `2024-Q2`.
    pub launch_date: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
}

impl ProjectRecord {
    /// Text for compact views: the short description when authored, the full
    /// description otherwise.
    pub fn summary(&self) -> &str {
        self.short_description
            .as_deref()
            .unwrap_or(&self.description)
    }

    /// The first `limit` tags, in authored order.
    pub fn tag_preview(&self, limit: usize) -> &[String] {
        &self.tags[..self.tags.len().min(limit)]
    }
}

/// Marketing figures shown on a project card. Values are pre-formatted
/// strings ("15K+", "$2.3M") and are never computed on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectStats {
    pub players: String,
    pub revenue: String,
    pub rating: Rating,
}

/// Player rating: a numeric score for released projects, a placeholder label
/// ("N/A") for everything else.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Rating {
    Score(f32),
    Label(String),
}

impl Rating {
    pub fn score(&self) -> Option<f32> {
        match self {
            Rating::Score(score) => Some(*score),
            Rating::Label(_) => None,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{score}"),
            Rating::Label(label) => write!(f, "{label}"),
        }
    }
}

impl From<f32> for Rating {
    fn from(score: f32) -> Self {
        Rating::Score(score)
    }
}

impl From<&str> for Rating {
    fn from(label: &str) -> Self {
        Rating::Label(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: ProjectId::new(42),
            title: "Test Project".into(),
            description: "A long description".into(),
            short_description: None,
            platform: "PC/Steam".into(),
            status: ProjectStatus::Live,
            category: "Strategy".into(),
            tags: vec!["One".into(), "Two".into()],
            image: String::new(),
            stats: ProjectStats {
                players: "1K".into(),
                revenue: "TBA".into(),
                rating: Rating::from("N/A"),
            },
            launch_date: "2024-Q1".into(),
            featured: false,
        }
    }

    #[test]
    fn summary_prefers_short_description() {
        let mut project = record();
        assert_eq!(project.summary(), "A long description");

        project.short_description = Some("Short".into());
        assert_eq!(project.summary(), "Short");
    }

    #[test]
    fn tag_preview_truncates_without_panicking() {
        let project = record();
        assert_eq!(project.tag_preview(1), &["One".to_string()]);
        assert_eq!(project.tag_preview(3).len(), 2);
        assert!(project.tag_preview(0).is_empty());
    }

    #[test]
    fn rating_displays_either_form() {
        assert_eq!(Rating::from(4.8).to_string(), "4.8");
        assert_eq!(Rating::from("N/A").to_string(), "N/A");
        assert_eq!(Rating::from("N/A").score(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_camel_case_with_optional_fields() {
        let json = r#"{
            "id": 7,
            "title": "Crystal Defenders",
            "description": "Tower defense",
            "platform": "Mobile/PC",
            "status": "Live",
            "category": "Tower Defense",
            "tags": ["RPG"],
            "stats": { "players": "18K", "revenue": "$1.2M", "rating": 4.5 },
            "launchDate": "2023-06"
        }"#;
        let project: ProjectRecord =
            serde_json::from_str(json).expect("valid record");
        assert_eq!(project.id, ProjectId::new(7));
        assert!(!project.featured);
        assert_eq!(project.short_description, None);
        assert_eq!(project.stats.rating, Rating::Score(4.5));
    }
}
