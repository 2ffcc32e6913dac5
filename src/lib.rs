//! Composable state-effect containers for nested MVI components.
//!
//! A nested component returns a [`Composable`]: its own model, a possibly
//! replaced copy of the application's shared data, and two ordered effect
//! streams, one for itself and one for the application. The parent unpacks
//! it with [`Composable::run`], so children can request global changes
//! without ever holding write access to their parent's state.

pub mod composable;
pub mod config;
pub mod demo;
pub mod effect;
pub mod logging;
pub mod mvi;
pub mod runtime;

pub use composable::Composable;
pub use effect::{Effect, Job};
pub use runtime::Runtime;
