//! Composable state-effect container.
//!
//! A [`Composable`] bundles what one `init` / `reduce` call produces:
//!
//! ```text
//!            ┌──────────────────────────────┐
//!  parent ◀──│ shared_data   shared_effects │──▶ app-level intents
//!            │ model         local_effects  │──▶ component intents
//!            └──────────────────────────────┘
//! ```
//!
//! A nested component cannot write its parent's state. Instead it returns a
//! possibly replaced copy of the shared data and a list of shared effects,
//! and the parent reconciles both in [`Composable::run`]. Until then the
//! local and shared effect streams stay separate.
//!
//! Type parameters, in order: shared data `D`, shared intent `SM`, local
//! model `M`, local intent `LM`.

mod combine;
mod map;

use crate::effect::{map_effects, Effect};

use std::fmt;

/// Local model plus shared data plus the effects both sides requested.
///
/// Immutable: every combinator consumes the container and returns a new
/// one. The only way to take it apart is [`Composable::run`].
pub struct Composable<D, SM, M, LM> {
    model: M,
    shared_data: D,
    local_effects: Vec<Effect<LM>>,
    shared_effects: Vec<Effect<SM>>,
}

impl<D, SM, M, LM> Composable<D, SM, M, LM> {
    /// Container with the given shared data and model and no effects.
    pub fn new(shared_data: D, model: M) -> Self {
        Self {
            model,
            shared_data,
            local_effects: Vec::new(),
            shared_effects: Vec::new(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn shared_data(&self) -> &D {
        &self.shared_data
    }

    pub fn local_effects(&self) -> &[Effect<LM>] {
        &self.local_effects
    }

    pub fn shared_effects(&self) -> &[Effect<SM>] {
        &self.shared_effects
    }

    /// Appends a local effect. [`Effect::none`] leaves the container as is.
    pub fn with_local_effect(mut self, effect: Effect<LM>) -> Self {
        if !effect.is_none() {
            self.local_effects.push(effect);
        }
        self
    }

    /// Appends a shared effect. [`Effect::none`] leaves the container as is.
    pub fn with_shared_effect(mut self, effect: Effect<SM>) -> Self {
        if !effect.is_none() {
            self.shared_effects.push(effect);
        }
        self
    }

    /// Runs `f` on the model, keeps the returned model and appends the
    /// returned effect to the local effects.
    pub fn with_local_effect_from_model<F>(self, f: F) -> Self
    where
        F: FnOnce(M) -> (M, Effect<LM>),
    {
        let Self {
            model,
            shared_data,
            local_effects,
            shared_effects,
        } = self;
        let (model, effect) = f(model);
        Self {
            model,
            shared_data,
            local_effects,
            shared_effects,
        }
        .with_local_effect(effect)
    }

    /// Runs `f` on the model, keeps the returned model and appends the
    /// returned effect to the shared effects.
    pub fn with_shared_effect_from_model<F>(self, f: F) -> Self
    where
        F: FnOnce(M) -> (M, Effect<SM>),
    {
        let Self {
            model,
            shared_data,
            local_effects,
            shared_effects,
        } = self;
        let (model, effect) = f(model);
        Self {
            model,
            shared_data,
            local_effects,
            shared_effects,
        }
        .with_shared_effect(effect)
    }

    /// Unpacks the container for the host loop.
    ///
    /// `merge_shared_data_into_model` decides what happens to the shared
    /// data: a root stores it, a leaf usually ignores it. The returned
    /// effect is the local effects followed by the shared effects, the
    /// latter re-tagged with `tag_shared_msg`.
    pub fn run<F, T>(self, merge_shared_data_into_model: F, tag_shared_msg: T) -> (M, Effect<LM>)
    where
        F: FnOnce(D, M) -> M,
        T: Fn(SM) -> LM + Send + Sync + 'static,
        SM: 'static,
        LM: 'static,
    {
        tracing::trace!(
            local = self.local_effects.len(),
            shared = self.shared_effects.len(),
            "unpacking composable"
        );
        let model = merge_shared_data_into_model(self.shared_data, self.model);
        let shared = map_effects(self.shared_effects, tag_shared_msg);
        let effect = Effect::batch(self.local_effects.into_iter().chain(shared));
        (model, effect)
    }
}

impl<D: Clone, SM, M: Clone, LM> Clone for Composable<D, SM, M, LM> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            shared_data: self.shared_data.clone(),
            local_effects: self.local_effects.clone(),
            shared_effects: self.shared_effects.clone(),
        }
    }
}

impl<D: PartialEq, SM, M: PartialEq, LM> PartialEq for Composable<D, SM, M, LM> {
    fn eq(&self, other: &Self) -> bool {
        self.model == other.model
            && self.shared_data == other.shared_data
            && self.local_effects == other.local_effects
            && self.shared_effects == other.shared_effects
    }
}

impl<D: fmt::Debug, SM, M: fmt::Debug, LM> fmt::Debug for Composable<D, SM, M, LM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composable")
            .field("model", &self.model)
            .field("shared_data", &self.shared_data)
            .field("local_effects", &self.local_effects)
            .field("shared_effects", &self.shared_effects)
            .finish()
    }
}
