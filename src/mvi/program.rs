//! Root orchestrator trait.

use super::intent::Intent;
use crate::effect::Effect;

/// The root of a component tree, driven by a host runtime.
///
/// The program owns the shared data. It delegates to nested [`Reducer`]s,
/// unpacks their containers with [`Composable::run`] and stores the shared
/// data they return in its own state.
///
/// [`Reducer`]: super::Reducer
/// [`Composable::run`]: crate::composable::Composable::run
pub trait Program {
    type State: Default + Send + 'static;
    type Intent: Intent;

    fn init(&self) -> (Self::State, Effect<Self::Intent>);

    fn update(
        &self,
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Effect<Self::Intent>);
}
