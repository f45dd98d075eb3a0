//! Reducer primitives shared by the record store and the list view-model.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers / view-model
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: a snapshot of one slice, replaced wholesale on every step
//! - **Intent**: a closed set of actions a slice reacts to
//! - **Reducer**: a pure `(State, &Intent) -> State` function

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
