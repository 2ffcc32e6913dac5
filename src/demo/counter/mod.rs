//! Counter component. Posts an application notice at every milestone.

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
