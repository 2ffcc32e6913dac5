//! Root of the demo: owns the shared data and both components.

use serde::Serialize;

use crate::composable::Composable;
use crate::config::DemoConfig;
use crate::demo::counter::{CounterIntent, CounterReducer, CounterState};
use crate::demo::data::{AppData, AppIntent};
use crate::demo::theme::{ThemeIntent, ThemeReducer, ThemeState};
use crate::effect::Effect;
use crate::mvi::{Intent, Program, Reducer};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemoState {
    pub data: AppData,
    pub counter: CounterState,
    pub theme: ThemeState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DemoIntent {
    Counter(CounterIntent),
    /// Several counter intents applied in one update.
    CounterBatch(Vec<CounterIntent>),
    Theme(ThemeIntent),
    App(AppIntent),
}

impl Intent for DemoIntent {}

pub struct DemoApp {
    config: DemoConfig,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }
}

/// The root keeps whatever shared data a child hands back.
fn store_shared_data(data: AppData, state: DemoState) -> DemoState {
    DemoState { data, ..state }
}

// `data` of the returned state is a placeholder until `run` stores the
// shared data.
fn with_counter(theme: ThemeState) -> impl FnOnce(CounterState) -> DemoState {
    move |counter| DemoState {
        data: AppData::default(),
        counter,
        theme,
    }
}

fn with_theme(counter: CounterState) -> impl FnOnce(ThemeState) -> DemoState {
    move |theme| DemoState {
        data: AppData::default(),
        counter,
        theme,
    }
}

impl Program for DemoApp {
    type State = DemoState;
    type Intent = DemoIntent;

    fn init(&self) -> (DemoState, Effect<DemoIntent>) {
        let data = AppData::new(self.config.defaults.dark_mode);
        let counter = CounterReducer::init(data.clone(), self.config.counter.clone());
        let theme = ThemeReducer::init(data, self.config.theme.clone());

        let both: Composable<AppData, AppIntent, (CounterState, ThemeState), DemoIntent> =
            Composable::merge(
                |theme, counter| (counter, theme),
                |theme_data, _counter_data| theme_data,
                DemoIntent::Counter,
                DemoIntent::Theme,
                |intent| intent,
                |intent| intent,
                counter,
                theme,
            );

        both.map_model(|(counter, theme)| DemoState {
            data: AppData::default(),
            counter,
            theme,
        })
        .run(store_shared_data, DemoIntent::App)
    }

    fn update(&self, state: DemoState, intent: DemoIntent) -> (DemoState, Effect<DemoIntent>) {
        let DemoState {
            data,
            counter,
            theme,
        } = state;

        match intent {
            DemoIntent::Counter(intent) => CounterReducer::reduce(data, counter, intent)
                .map_model(with_counter(theme))
                .map_local_msg(DemoIntent::Counter)
                .run(store_shared_data, DemoIntent::App),
            DemoIntent::CounterBatch(intents) => Composable::new(data, counter)
                .fold_over(intents, |intent, acc| {
                    acc.and_then(|data, counter| CounterReducer::reduce(data, counter, intent))
                })
                .map_model(with_counter(theme))
                .map_local_msg(DemoIntent::Counter)
                .run(store_shared_data, DemoIntent::App),
            DemoIntent::Theme(intent) => ThemeReducer::reduce(data, theme, intent)
                .map_model(with_theme(counter))
                .map_local_msg(DemoIntent::Theme)
                .run(store_shared_data, DemoIntent::App),
            DemoIntent::App(intent) => (
                DemoState {
                    data: data.apply(intent),
                    counter,
                    theme,
                },
                Effect::none(),
            ),
        }
    }
}
