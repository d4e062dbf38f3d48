//! Intents for the cart counter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartIntent {
    /// Any card's Add control was pressed.
    Add,
}

impl Intent for CartIntent {}
