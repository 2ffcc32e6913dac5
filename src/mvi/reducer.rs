//! Reducer trait for nested components.

use super::intent::Intent;
use super::state::UiState;
use crate::composable::Composable;

/// Container type a [`Reducer`] produces.
pub type ReducerOutput<R> = Composable<
    <R as Reducer>::Shared,
    <R as Reducer>::SharedIntent,
    <R as Reducer>::State,
    <R as Reducer>::Intent,
>;

/// A nested component.
///
/// The reducer is the only place where the component's state transitions
/// happen. It reads the shared data it is handed and may return a replaced
/// copy plus shared effects, but it never writes its parent's state.
pub trait Reducer: Sized {
    /// Application data shared by every component.
    type Shared: UiState;

    /// Intents addressed to the application as a whole.
    type SharedIntent: Intent;

    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Start-up parameters for [`Reducer::init`].
    type Flags;

    /// Initial state and effects.
    fn init(shared: Self::Shared, flags: Self::Flags) -> ReducerOutput<Self>;

    /// Process an intent and return the new container.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(
        shared: Self::Shared,
        state: Self::State,
        intent: Self::Intent,
    ) -> ReducerOutput<Self>;
}
