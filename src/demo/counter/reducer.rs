use crate::composable::Composable;
use crate::config::CounterConfig;
use crate::demo::counter::intent::CounterIntent;
use crate::demo::counter::state::CounterState;
use crate::demo::data::{AppData, AppIntent};
use crate::effect::Effect;
use crate::mvi::{Reducer, ReducerOutput};

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type Shared = AppData;
    type SharedIntent = AppIntent;
    type State = CounterState;
    type Intent = CounterIntent;
    type Flags = CounterConfig;

    fn init(shared: AppData, flags: CounterConfig) -> ReducerOutput<Self> {
        Composable::new(
            shared,
            CounterState {
                count: flags.start,
                start: flags.start,
                notify_every: flags.notify_every,
            },
        )
    }

    fn reduce(shared: AppData, state: CounterState, intent: CounterIntent) -> ReducerOutput<Self> {
        match intent {
            CounterIntent::Increment => step(shared, state, 1),
            CounterIntent::Decrement => step(shared, state, -1),
            CounterIntent::Reset => Composable::new(
                shared,
                CounterState {
                    count: state.start,
                    ..state
                },
            ),
        }
    }
}

fn step(shared: AppData, state: CounterState, delta: i64) -> ReducerOutput<CounterReducer> {
    let count = state.count.saturating_add(delta);
    Composable::new(shared, CounterState { count, ..state }).with_shared_effect_from_model(|state| {
        let effect = if state.at_milestone() {
            Effect::message(AppIntent::Notify(format!("counter reached {}", state.count)))
        } else {
            Effect::none()
        };
        (state, effect)
    })
}
