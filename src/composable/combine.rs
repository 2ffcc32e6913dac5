//! Combining containers: merge, sequencing and folding.

use super::Composable;
use crate::effect::map_effects;

impl<D, SM, M, LM> Composable<D, SM, M, LM> {
    /// Combines two containers of possibly different types into one.
    ///
    /// Model and shared data are combined with `b`'s value as the first
    /// argument: `merge_model(model_b, model_a)`. Effects are re-tagged per
    /// side and concatenated per stream, `a`'s before `b`'s. A side with no
    /// effects never touches its tag function.
    #[allow(clippy::too_many_arguments)]
    pub fn merge<DA, SMA, MA, LMA, DB, SMB, MB, LMB>(
        merge_model: impl FnOnce(MB, MA) -> M,
        merge_shared_data: impl FnOnce(DB, DA) -> D,
        tag_local_a: impl Fn(LMA) -> LM + Send + Sync + 'static,
        tag_local_b: impl Fn(LMB) -> LM + Send + Sync + 'static,
        tag_shared_a: impl Fn(SMA) -> SM + Send + Sync + 'static,
        tag_shared_b: impl Fn(SMB) -> SM + Send + Sync + 'static,
        a: Composable<DA, SMA, MA, LMA>,
        b: Composable<DB, SMB, MB, LMB>,
    ) -> Self
    where
        SM: 'static,
        LM: 'static,
        SMA: 'static,
        LMA: 'static,
        SMB: 'static,
        LMB: 'static,
    {
        let mut local_effects = map_effects(a.local_effects, tag_local_a);
        local_effects.extend(map_effects(b.local_effects, tag_local_b));

        let mut shared_effects = map_effects(a.shared_effects, tag_shared_a);
        shared_effects.extend(map_effects(b.shared_effects, tag_shared_b));

        Self {
            model: merge_model(b.model, a.model),
            shared_data: merge_shared_data(b.shared_data, a.shared_data),
            local_effects,
            shared_effects,
        }
    }

    /// Feeds shared data and model into `f` and keeps this container's
    /// effects in front of the ones `f` returns.
    pub fn and_then<M2, F>(self, f: F) -> Composable<D, SM, M2, LM>
    where
        F: FnOnce(D, M) -> Composable<D, SM, M2, LM>,
    {
        let Self {
            model,
            shared_data,
            mut local_effects,
            mut shared_effects,
        } = self;
        let next = f(shared_data, model);
        local_effects.extend(next.local_effects);
        shared_effects.extend(next.shared_effects);
        Composable {
            model: next.model,
            shared_data: next.shared_data,
            local_effects,
            shared_effects,
        }
    }

    /// Threads the container through `f` once per item, left to right.
    pub fn fold_over<I, F>(self, items: I, mut f: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item, Self) -> Self,
    {
        items.into_iter().fold(self, |acc, item| f(item, acc))
    }
}
