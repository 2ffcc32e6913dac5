//! Two-component demo of the shared-data pattern.
//!
//! A counter and a theme switch share [`AppData`]. Neither can write it:
//! the counter posts notices and the switch requests dark-mode toggles
//! through shared effects, and [`DemoApp`] applies them.

pub mod app;
pub mod counter;
pub mod data;
pub mod script;
pub mod theme;

pub use app::{DemoApp, DemoIntent, DemoState};
pub use data::{AppData, AppIntent};
pub use script::{parse_script, ScriptError, MAX_BATCH};

use crate::config::DemoConfig;
use crate::runtime::Runtime;

/// Runs `intents` one at a time, each until the runtime is idle, and
/// returns the final state.
pub async fn run_script(config: DemoConfig, intents: Vec<DemoIntent>) -> DemoState {
    let mut runtime = Runtime::new(DemoApp::new(config));
    runtime.run_until_idle().await;
    for intent in intents {
        runtime.dispatch(intent);
        runtime.run_until_idle().await;
    }
    tracing::debug!(updates = runtime.updates(), "script finished");
    runtime.into_state()
}
