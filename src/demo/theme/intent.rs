use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeIntent {
    /// User clicked the switch.
    Click,
    /// The settle timer fired.
    Settled,
}

impl Intent for ThemeIntent {}
