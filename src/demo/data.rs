//! Application data shared by every demo component.

use serde::Serialize;

use crate::mvi::{Intent, UiState};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppData {
    pub dark_mode: bool,
    /// Notices posted by components, oldest first.
    pub notices: Vec<String>,
}

impl UiState for AppData {}

/// Requests a component addresses to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    ToggleDarkMode,
    Notify(String),
}

impl Intent for AppIntent {}

impl AppData {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            notices: Vec::new(),
        }
    }

    /// Applies an application-level intent. Only the root calls this.
    pub fn apply(mut self, intent: AppIntent) -> Self {
        match intent {
            AppIntent::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                tracing::info!(dark_mode = self.dark_mode, "theme toggled");
            }
            AppIntent::Notify(notice) => {
                tracing::info!(%notice, "notice posted");
                self.notices.push(notice);
            }
        }
        self
    }
}
