//! Remote product catalog: wire model, retrieval and display transforms.

pub mod error;
pub mod fetcher;
pub mod format;
pub mod product;
pub mod thumbnail;

pub use error::{FetchError, ThumbnailError};
pub use fetcher::{spawn_catalog_fetch, CatalogFetcher};
pub use product::{Catalog, Product};
pub use thumbnail::{spawn_thumbnail_loads, Thumbnail};
