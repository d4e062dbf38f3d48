//! Intents for the catalog list.

use crate::catalog::Product;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum CatalogIntent {
    /// A fetch succeeded; its result replaces the list wholesale.
    Replace { products: Vec<Product> },
}

impl Intent for CatalogIntent {}
