mod common;

use common::{resolve, resolve_all};
use composable_state::config::{CounterConfig, DemoConfig, ThemeConfig};
use composable_state::demo::counter::{CounterIntent, CounterReducer, CounterState};
use composable_state::demo::theme::{label, ThemeIntent, ThemeReducer, ThemeState};
use composable_state::demo::{AppData, AppIntent, DemoApp, DemoIntent, DemoState};
use composable_state::mvi::{Program, Reducer};

fn counter(count: i64, notify_every: u32) -> CounterState {
    CounterState {
        count,
        start: 0,
        notify_every,
    }
}

#[test]
fn counter_init_uses_flags() {
    let c = CounterReducer::init(
        AppData::default(),
        CounterConfig {
            start: 4,
            notify_every: 3,
        },
    );
    assert_eq!(c.model().count, 4);
    assert_eq!(c.model().start, 4);
    assert_eq!(c.model().notify_every, 3);
    assert!(c.shared_effects().is_empty());
}

#[test]
fn increment_below_milestone_has_no_effects() {
    let c = CounterReducer::reduce(AppData::default(), counter(1, 5), CounterIntent::Increment);
    assert_eq!(c.model().count, 2);
    assert!(c.local_effects().is_empty());
    assert!(c.shared_effects().is_empty());
}

#[tokio::test]
async fn reaching_milestone_posts_notice() {
    let c = CounterReducer::reduce(AppData::default(), counter(4, 5), CounterIntent::Increment);
    assert_eq!(c.model().count, 5);
    assert_eq!(
        resolve_all(c.shared_effects()).await,
        vec![AppIntent::Notify("counter reached 5".into())]
    );
    // The counter never writes shared data itself.
    assert!(c.shared_data().notices.is_empty());
}

#[test]
fn decrement_to_zero_is_not_a_milestone() {
    let c = CounterReducer::reduce(AppData::default(), counter(1, 1), CounterIntent::Decrement);
    assert_eq!(c.model().count, 0);
    assert!(c.shared_effects().is_empty());
}

#[test]
fn count_saturates_at_bounds() {
    let c = CounterReducer::reduce(
        AppData::default(),
        counter(i64::MAX, 0),
        CounterIntent::Increment,
    );
    assert_eq!(c.model().count, i64::MAX);
    assert!(c.shared_effects().is_empty());

    let c = CounterReducer::reduce(
        AppData::default(),
        counter(i64::MIN, 0),
        CounterIntent::Decrement,
    );
    assert_eq!(c.model().count, i64::MIN);
    assert!(c.shared_effects().is_empty());
}

#[test]
fn reset_returns_to_start() {
    let state = CounterState {
        count: 9,
        start: 2,
        notify_every: 5,
    };
    let c = CounterReducer::reduce(AppData::default(), state, CounterIntent::Reset);
    assert_eq!(c.model().count, 2);
    assert!(c.shared_effects().is_empty());
}

#[test]
fn theme_init_uses_flags() {
    let c = ThemeReducer::init(AppData::default(), ThemeConfig { settle_ms: 7 });
    assert_eq!(c.model().settle_ms, 7);
    assert_eq!(c.model().clicks, 0);
    assert!(!c.model().pending);
}

#[tokio::test(start_paused = true)]
async fn click_requests_toggle_and_schedules_settle() {
    let shared = AppData::new(false);
    let c = ThemeReducer::reduce(shared.clone(), ThemeState::default(), ThemeIntent::Click);

    assert_eq!(c.model().clicks, 1);
    assert!(c.model().pending);
    assert_eq!(*c.shared_data(), shared);
    assert_eq!(
        resolve_all(c.shared_effects()).await,
        vec![AppIntent::ToggleDarkMode]
    );
    assert_eq!(
        resolve_all(c.local_effects()).await,
        vec![ThemeIntent::Settled]
    );
}

#[test]
fn settled_clears_pending() {
    let state = ThemeState {
        clicks: 2,
        pending: true,
        settle_ms: 10,
    };
    let c = ThemeReducer::reduce(AppData::default(), state, ThemeIntent::Settled);
    assert!(!c.model().pending);
    assert_eq!(c.model().clicks, 2);
}

#[test]
fn label_follows_shared_data() {
    assert_eq!(label(&AppData::new(true)), "dark");
    assert_eq!(label(&AppData::new(false)), "light");
}

#[test]
fn demo_init_applies_config_without_effects() {
    let config = DemoConfig {
        defaults: composable_state::config::Defaults { dark_mode: true },
        counter: CounterConfig {
            start: 3,
            notify_every: 2,
        },
        theme: ThemeConfig { settle_ms: 20 },
    };
    let (state, effect) = DemoApp::new(config).init();

    assert!(state.data.dark_mode);
    assert_eq!(state.counter.count, 3);
    assert_eq!(state.counter.notify_every, 2);
    assert_eq!(state.theme.settle_ms, 20);
    assert!(effect.is_none());
}

#[test]
fn demo_applies_app_intents_directly() {
    let app = DemoApp::new(DemoConfig::default());
    let (state, effect) = app.update(
        DemoState::default(),
        DemoIntent::App(AppIntent::ToggleDarkMode),
    );
    assert!(state.data.dark_mode);
    assert!(effect.is_none());
}

#[tokio::test(start_paused = true)]
async fn demo_lifts_child_effects_local_first() {
    let app = DemoApp::new(DemoConfig::default());
    let (state, effect) = app.update(DemoState::default(), DemoIntent::Theme(ThemeIntent::Click));

    // The toggle is only requested; the root applies it when it comes back.
    assert!(!state.data.dark_mode);
    assert!(state.theme.pending);
    assert_eq!(
        resolve(&effect).await,
        vec![
            DemoIntent::Theme(ThemeIntent::Settled),
            DemoIntent::App(AppIntent::ToggleDarkMode),
        ]
    );
}

#[tokio::test]
async fn demo_counter_batch_folds_every_increment() {
    let app = DemoApp::new(DemoConfig::default());
    let start = DemoState {
        counter: counter(0, 2),
        ..DemoState::default()
    };
    let (state, effect) = app.update(
        start,
        DemoIntent::CounterBatch(vec![CounterIntent::Increment; 4]),
    );

    assert_eq!(state.counter.count, 4);
    assert_eq!(
        resolve(&effect).await,
        vec![
            DemoIntent::App(AppIntent::Notify("counter reached 2".into())),
            DemoIntent::App(AppIntent::Notify("counter reached 4".into())),
        ]
    );
}

#[test]
fn demo_keeps_other_child_untouched() {
    let app = DemoApp::new(DemoConfig::default());
    let before = DemoState::default();
    let (state, _) = app.update(before.clone(), DemoIntent::Counter(CounterIntent::Increment));
    assert_eq!(state.theme, before.theme);
    assert_eq!(state.data, before.data);
    assert_eq!(state.counter.count, 1);
}
