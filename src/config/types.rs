use serde::{Deserialize, Serialize};

/// Root configuration container for the demo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Initial shared application data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Whether the application starts in dark mode.
    #[serde(default)]
    pub dark_mode: bool,
}

/// Counter component settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Initial count, also the value `reset` returns to.
    #[serde(default)]
    pub start: i64,
    /// Post a notice each time the count reaches a multiple of this (default: 5).
    #[serde(default = "default_notify_every")]
    pub notify_every: u32,
}

/// Theme switch component settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Delay before a toggle counts as settled, in milliseconds (default: 50).
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

fn default_notify_every() -> u32 {
    5
}

fn default_settle_ms() -> u64 {
    50
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            start: 0,
            notify_every: default_notify_every(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
        }
    }
}
