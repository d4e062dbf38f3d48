use serde::{Deserialize, Serialize};

/// A product as served by the remote catalog endpoint.
///
/// Received verbatim; fields the screen does not use (e.g. `rating`) are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// List key only.
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// URI of the product image.
    pub image: String,
}

/// Ordered product list, in the order the endpoint returned it.
pub type Catalog = Vec<Product>;
