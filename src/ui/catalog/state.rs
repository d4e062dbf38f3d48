//! State for the catalog list.

use crate::catalog::Product;
use crate::ui::mvi::UiState;

/// Products currently shown, in the order the endpoint returned them.
///
/// Empty until the mount-time fetch succeeds. An empty list is the loading
/// view; there is no separate error state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
