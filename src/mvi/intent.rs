//! Marker trait for messages flowing through reducers.

/// Marker trait for intent objects.
///
/// An intent is either something that happened to a component (a click,
/// a key press) or the result of one of its effects, delivered back by the
/// host runtime. Shared intents are the requests a nested component
/// addresses to the application; only the root handles them.
pub trait Intent: Send + 'static {}
