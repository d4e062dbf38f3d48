//! Catalog list state (MVI pattern).

mod intent;
mod reducer;
mod state;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::CatalogState;
