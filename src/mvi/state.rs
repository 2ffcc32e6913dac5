//! Marker trait for component models and shared data.

/// Marker trait for a component's model or the application's shared data.
///
/// Values are replaced, never mutated in place, so they need `Clone`;
/// `PartialEq` lets callers and tests compare a container before and after
/// a combinator.
pub trait UiState: Clone + PartialEq + Send + 'static {}
