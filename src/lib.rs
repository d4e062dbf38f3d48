//! Single-screen terminal storefront.
//!
//! Fetches a product catalog once per mount, renders it as a list of cards
//! and keeps a local add-to-cart counter.

pub mod args;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod ui;
