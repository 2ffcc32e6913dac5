use serde::Serialize;

use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeState {
    pub clicks: u32,
    /// Set on click, cleared once the toggle has settled.
    pub pending: bool,
    pub settle_ms: u64,
}

impl UiState for ThemeState {}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            clicks: 0,
            pending: false,
            settle_ms: 50,
        }
    }
}
