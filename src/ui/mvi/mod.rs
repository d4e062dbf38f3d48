//! Model-View-Intent primitives for the storefront screen.
//!
//! ```text
//! key / click / fetch result ──→ Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! Reducers never perform I/O. Network results reach them as intents after
//! the runtime has delivered them to the UI thread.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
