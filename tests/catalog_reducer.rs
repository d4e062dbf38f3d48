mod common;

use common::product;
use storefront::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use storefront::ui::mvi::Reducer;

#[test]
fn default_is_loading() {
    let state = CatalogState::default();
    assert!(state.is_loading());
    assert_eq!(state.len(), 0);
}

#[test]
fn replace_keeps_order() {
    let products = vec![product(3, "c"), product(1, "a"), product(2, "b")];
    let state = CatalogReducer::reduce(
        CatalogState::default(),
        CatalogIntent::Replace {
            products: products.clone(),
        },
    );
    assert!(!state.is_loading());
    assert_eq!(state.products, products);
}

#[test]
fn replace_discards_previous_list() {
    let first = CatalogReducer::reduce(
        CatalogState::default(),
        CatalogIntent::Replace {
            products: vec![product(1, "a"), product(2, "b")],
        },
    );
    let second = CatalogReducer::reduce(
        first,
        CatalogIntent::Replace {
            products: vec![product(9, "z")],
        },
    );
    let ids: Vec<u64> = second.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![9]);
}

#[test]
fn empty_replace_is_still_loading() {
    let state = CatalogReducer::reduce(
        CatalogState::default(),
        CatalogIntent::Replace { products: vec![] },
    );
    assert!(state.is_loading());
}
