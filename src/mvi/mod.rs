//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow with nested components.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ Composable ──→ Program ──→ State + Effect
//!    ↑                                                     │
//!    └──────────────────── host runtime ◀──────────────────┘
//! ```
//!
//! - **State**: Immutable representation of component state
//! - **Intent**: User actions or effect results
//! - **Reducer**: Pure function from (shared, state, intent) to a container
//! - **Program**: Root that unpacks containers and owns the shared data

mod intent;
mod program;
mod reducer;
mod state;

pub use intent::Intent;
pub use program::Program;
pub use reducer::{Reducer, ReducerOutput};
pub use state::UiState;
