//! Catalog modal state
//!
//! Holds the fetched categories and items plus the two selection indices.
//! All of it lives only as long as one opening of the catalog modal.

use super::catalog::{ApiResponse, CatalogItem, Category};
use crate::error::CatalogError;

/// Ephemeral state behind the catalog modal
#[derive(Debug, Default)]
pub struct CatalogState {
    pub categories: Vec<Category>,
    pub options: Vec<CatalogItem>,
    pub selected_category: Option<usize>,
    pub selected_option: Option<usize>,
    pub categories_loading: bool,
    pub options_loading: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything, as when the modal is reopened
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply the outcome of a categories request
    pub fn apply_categories(&mut self, result: Result<ApiResponse<Vec<Category>>, CatalogError>) {
        self.categories_loading = false;
        match result {
            Ok(response) if response.is_ok() => {
                tracing::debug!(count = response.data.len(), "Loaded catalog categories");
                self.categories = response.data;
            }
            Ok(response) => {
                tracing::warn!(status = response.status, "Catalog categories request failed");
                self.categories.clear();
            }
            Err(e) => {
                tracing::error!("Failed to get transformation catalog: {}", e);
            }
        }

        if self
            .selected_category
            .is_some_and(|idx| idx >= self.categories.len())
        {
            self.selected_category = None;
            self.selected_option = None;
            self.options.clear();
        }
    }

    /// Select a category, returning the id to fetch items for
    ///
    /// Any previously selected item is cleared. Out-of-range indices are
    /// ignored.
    pub fn select_category(&mut self, index: usize) -> Option<String> {
        let id = self.categories.get(index)?.id.clone();
        self.selected_option = None;
        self.selected_category = Some(index);
        self.options_loading = true;
        Some(id)
    }

    /// Apply the outcome of an items request
    pub fn apply_items(&mut self, result: Result<ApiResponse<Vec<CatalogItem>>, CatalogError>) {
        self.options_loading = false;
        match result {
            Ok(response) if response.is_ok() => {
                tracing::debug!(count = response.data.len(), "Loaded catalog items");
                self.options = response.data;
            }
            Ok(response) => {
                tracing::warn!(status = response.status, "Catalog items request failed");
                self.options.clear();
            }
            Err(e) => {
                tracing::error!("Failed to get transformation catalog: {}", e);
            }
        }

        if self
            .selected_option
            .is_some_and(|idx| idx >= self.options.len())
        {
            self.selected_option = None;
        }
    }

    /// Select an item in the current list
    ///
    /// Returns false if out of range, or while the list still belongs to the
    /// previous category because its replacement is loading.
    pub fn select_option(&mut self, index: usize) -> bool {
        if !self.options_loading && index < self.options.len() {
            self.selected_option = Some(index);
            true
        } else {
            false
        }
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.selected_option.and_then(|i| self.options.get(i))
    }
}
