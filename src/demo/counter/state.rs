use serde::Serialize;

use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterState {
    pub count: i64,
    /// Value `Reset` returns to.
    pub start: i64,
    pub notify_every: u32,
}

impl UiState for CounterState {}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            count: 0,
            start: 0,
            notify_every: 5,
        }
    }
}

impl CounterState {
    /// True when the count sits on a positive multiple of `notify_every`.
    pub fn at_milestone(&self) -> bool {
        self.notify_every > 0 && self.count > 0 && self.count % i64::from(self.notify_every) == 0
    }
}
