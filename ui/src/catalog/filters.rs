use super::model::{ALL_SUBCATEGORIES, FEATURED};
use super::query::{CatalogQuery, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Catalog page controls. Lives as long as the page does.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category: String,
    pub subcategory: String,
    pub search: String,
    pub sort: SortKey,
    pub view_mode: ViewMode,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl FilterState {
    /// Fresh controls for a catalog opened on `category` with an optional
    /// search taken from the URL.
    pub fn new(category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            category: category.unwrap_or(FEATURED).to_string(),
            subcategory: ALL_SUBCATEGORIES.to_string(),
            search: search.unwrap_or_default().to_string(),
            sort: SortKey::Featured,
            view_mode: ViewMode::Grid,
        }
    }

    pub fn to_query(&self) -> CatalogQuery {
        CatalogQuery {
            category: self.category.clone(),
            subcategory: Some(self.subcategory.clone()),
            search: self.search.clone(),
            sort: self.sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unfiltered_grid() {
        let state = FilterState::default();
        assert_eq!(state.category, FEATURED);
        assert_eq!(state.subcategory, ALL_SUBCATEGORIES);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert!(state.search.is_empty());
    }

    #[test]
    fn query_carries_every_control() {
        let mut state = FilterState::new(Some("excel"), Some("pivot"));
        state.sort = SortKey::Newest;
        let query = state.to_query();
        assert_eq!(query.category, "excel");
        assert_eq!(query.search, "pivot");
        assert_eq!(query.sort, SortKey::Newest);
    }
}
