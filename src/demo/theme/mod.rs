//! Theme switch component. Requests dark-mode toggles from the root.

mod intent;
mod reducer;
mod state;

pub use intent::ThemeIntent;
pub use reducer::{label, ThemeReducer};
pub use state::ThemeState;
