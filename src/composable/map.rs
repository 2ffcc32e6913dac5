//! Field-wise mapping over the four type parameters of a [`Composable`].

use super::Composable;
use crate::effect::map_effects;

impl<D, SM, M, LM> Composable<D, SM, M, LM> {
    /// Transforms all four axes at once.
    ///
    /// Model and shared data are transformed directly. Pending effects keep
    /// their order; only the tag of their eventual result changes.
    pub fn map_all<D2, SM2, M2, LM2, FM, FD, FL, FS>(
        self,
        map_model: FM,
        map_shared_data: FD,
        map_local_msg: FL,
        map_shared_msg: FS,
    ) -> Composable<D2, SM2, M2, LM2>
    where
        FM: FnOnce(M) -> M2,
        FD: FnOnce(D) -> D2,
        FL: Fn(LM) -> LM2 + Send + Sync + 'static,
        FS: Fn(SM) -> SM2 + Send + Sync + 'static,
        SM: 'static,
        LM: 'static,
        SM2: 'static,
        LM2: 'static,
    {
        Composable {
            model: map_model(self.model),
            shared_data: map_shared_data(self.shared_data),
            local_effects: map_effects(self.local_effects, map_local_msg),
            shared_effects: map_effects(self.shared_effects, map_shared_msg),
        }
    }

    pub fn map_model<M2, F>(self, f: F) -> Composable<D, SM, M2, LM>
    where
        F: FnOnce(M) -> M2,
    {
        Composable {
            model: f(self.model),
            shared_data: self.shared_data,
            local_effects: self.local_effects,
            shared_effects: self.shared_effects,
        }
    }

    pub fn map_shared_data<D2, F>(self, f: F) -> Composable<D2, SM, M, LM>
    where
        F: FnOnce(D) -> D2,
    {
        Composable {
            model: self.model,
            shared_data: f(self.shared_data),
            local_effects: self.local_effects,
            shared_effects: self.shared_effects,
        }
    }

    /// Re-tags the local effects, typically to lift a child's intents into
    /// the parent's intent type.
    pub fn map_local_msg<LM2, F>(self, f: F) -> Composable<D, SM, M, LM2>
    where
        F: Fn(LM) -> LM2 + Send + Sync + 'static,
        LM: 'static,
        LM2: 'static,
    {
        Composable {
            model: self.model,
            shared_data: self.shared_data,
            local_effects: map_effects(self.local_effects, f),
            shared_effects: self.shared_effects,
        }
    }

    pub fn map_shared_msg<SM2, F>(self, f: F) -> Composable<D, SM2, M, LM>
    where
        F: Fn(SM) -> SM2 + Send + Sync + 'static,
        SM: 'static,
        SM2: 'static,
    {
        Composable {
            model: self.model,
            shared_data: self.shared_data,
            local_effects: self.local_effects,
            shared_effects: map_effects(self.shared_effects, f),
        }
    }
}
