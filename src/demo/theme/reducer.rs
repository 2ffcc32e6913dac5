use std::time::Duration;

use crate::composable::Composable;
use crate::config::ThemeConfig;
use crate::demo::data::{AppData, AppIntent};
use crate::demo::theme::intent::ThemeIntent;
use crate::demo::theme::state::ThemeState;
use crate::effect::Effect;
use crate::mvi::{Reducer, ReducerOutput};

pub struct ThemeReducer;

impl Reducer for ThemeReducer {
    type Shared = AppData;
    type SharedIntent = AppIntent;
    type State = ThemeState;
    type Intent = ThemeIntent;
    type Flags = ThemeConfig;

    fn init(shared: AppData, flags: ThemeConfig) -> ReducerOutput<Self> {
        Composable::new(
            shared,
            ThemeState {
                settle_ms: flags.settle_ms,
                ..ThemeState::default()
            },
        )
    }

    fn reduce(shared: AppData, state: ThemeState, intent: ThemeIntent) -> ReducerOutput<Self> {
        match intent {
            // The switch cannot flip dark mode itself; it asks the root to.
            ThemeIntent::Click => Composable::new(
                shared,
                ThemeState {
                    clicks: state.clicks + 1,
                    pending: true,
                    ..state
                },
            )
            .with_shared_effect(Effect::message(AppIntent::ToggleDarkMode))
            .with_local_effect_from_model(|state| {
                let settle = Effect::after(
                    Duration::from_millis(state.settle_ms),
                    ThemeIntent::Settled,
                );
                (state, settle)
            }),
            ThemeIntent::Settled => Composable::new(
                shared,
                ThemeState {
                    pending: false,
                    ..state
                },
            ),
        }
    }
}

/// Label the switch shows for the current shared data.
pub fn label(shared: &AppData) -> &'static str {
    if shared.dark_mode {
        "dark"
    } else {
        "light"
    }
}
