use super::filtering::normalize_search_term;
use super::types::*;
use hypno_model::ProjectStatus;

/// Fluent API for building portfolio filters
#[derive(Debug, Clone, Default)]
pub struct PortfolioFilterBuilder {
    filter: PortfolioFilter,
}

impl PortfolioFilterBuilder {
    /// Create a new builder with every facet set to `All`
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing filter, e.g. one seeded from a URL
    pub fn from_filter(filter: PortfolioFilter) -> Self {
        Self { filter }
    }

    // === Search methods ===

    /// Set the free-text term; blank input clears it
    pub fn search(mut self, text: impl AsRef<str>) -> Self {
        self.filter.search = normalize_search_term(text.as_ref());
        self
    }

    /// Drop the free-text term
    pub fn clear_search(mut self) -> Self {
        self.filter.search = None;
        self
    }

    // === Facet methods ===

    /// Filter by category; `"All"` clears the restriction
    pub fn category(mut self, category: impl AsRef<str>) -> Self {
        self.filter.category = Facet::parse(category.as_ref());
        self
    }

    /// Filter by status label; `"All"` clears the restriction
    pub fn status(mut self, status: impl AsRef<str>) -> Self {
        self.filter.status = Facet::parse(status.as_ref());
        self
    }

    /// Filter by a typed status
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.filter.status = Facet::Only(status.label().to_string());
        self
    }

    /// Filter by platform; `"All"` clears the restriction
    pub fn platform(mut self, platform: impl AsRef<str>) -> Self {
        self.filter.platform = Facet::parse(platform.as_ref());
        self
    }

    /// Reset every facet to `All`, keeping the search term
    pub fn clear_facets(mut self) -> Self {
        self.filter.category = Facet::All;
        self.filter.status = Facet::All;
        self.filter.platform = Facet::All;
        self
    }

    // === Build method ===

    /// Build the final filter
    pub fn build(self) -> PortfolioFilter {
        self.filter
    }
}

// === Convenience constructors ===

impl PortfolioFilter {
    pub fn builder() -> PortfolioFilterBuilder {
        PortfolioFilterBuilder::new()
    }

    /// Create a plain free-text search
    pub fn search(text: impl AsRef<str>) -> Self {
        PortfolioFilterBuilder::new().search(text).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_matches_raw_constructor() {
        let built = PortfolioFilter::builder()
            .search("space")
            .category("All")
            .with_status(ProjectStatus::Growing)
            .platform("PC/Steam")
            .build();
        assert_eq!(
            built,
            PortfolioFilter::new("space", "All", "Growing", "PC/Steam")
        );
    }

    #[test]
    fn clearing_returns_to_unrestricted() {
        let filter = PortfolioFilter::builder()
            .search("rpg")
            .category("RPG")
            .status("Live")
            .clear_facets()
            .clear_search()
            .build();
        assert!(filter.is_unrestricted());
    }
}
