//! Reducer for the catalog list.

use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::CatalogState;
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // No merge with the previous list, no sorting, no filtering.
            CatalogIntent::Replace { products } => CatalogState { products },
        }
    }
}
