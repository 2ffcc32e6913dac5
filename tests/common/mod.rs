//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use composable_state::Effect;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Performs every job of `effect` in batch order and collects the results.
pub async fn resolve<Msg: 'static>(effect: &Effect<Msg>) -> Vec<Msg> {
    let mut out = Vec::new();
    for job in effect.jobs() {
        out.push(job.perform().await);
    }
    out
}

/// Resolves a whole effect collection, in order.
pub async fn resolve_all<Msg: 'static>(effects: &[Effect<Msg>]) -> Vec<Msg> {
    let mut out = Vec::new();
    for effect in effects {
        out.extend(resolve(effect).await);
    }
    out
}

/// Shared call counter for closures handed to combinators.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Write `content` to a `demo.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("demo.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
