//! State for the cart counter.

use crate::ui::mvi::UiState;

/// Local tally of Add presses. Not tied to any product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartState {
    pub count: u64,
}

impl UiState for CartState {}
