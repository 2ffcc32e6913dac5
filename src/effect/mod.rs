//! Effect descriptions handed to the host runtime.
//!
//! An [`Effect`] never runs anything by itself. It is an ordered batch of
//! [`Job`]s that the host executes, delivering each job's result back to
//! the update loop as a message. Reducers stay pure by returning effects
//! instead of performing them.
//!
//! The host-facing capabilities are:
//!
//! - [`Effect::none`] / [`Effect::is_none`]: the comparable no-op value
//! - [`Effect::batch`]: combine an ordered sequence into one effect
//! - [`Effect::map`]: re-tag the eventual result of every job

mod job;

pub use job::{BoxFuture, Job};

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use job::{Delay, FromFn, Mapped, Ready, Tag};

/// An ordered batch of pending jobs producing messages of type `Msg`.
///
/// Batches are kept flat: batching effects concatenates their jobs, so
/// `none` is simply the empty batch.
///
/// Two effects are equal when they hold the same jobs in the same order.
/// Jobs compare by identity; a clone of an effect equals the original,
/// while re-tagging with [`Effect::map`] produces new jobs.
pub struct Effect<Msg> {
    jobs: Vec<Arc<dyn Job<Msg>>>,
}

impl<Msg> Effect<Msg> {
    /// The no-op effect.
    pub fn none() -> Self {
        Self { jobs: Vec::new() }
    }

    pub fn is_none(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of leaf jobs in this effect.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Wraps any [`Job`] implementor as a single-job effect.
    pub fn from_job<J>(job: J) -> Self
    where
        J: Job<Msg> + 'static,
    {
        Self {
            jobs: vec![Arc::new(job)],
        }
    }

    /// Combines effects into one, keeping their order. No-op members
    /// contribute nothing; an empty sequence yields [`Effect::none`].
    pub fn batch<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = Effect<Msg>>,
    {
        Self {
            jobs: effects.into_iter().flat_map(|effect| effect.jobs).collect(),
        }
    }

    /// Leaf jobs in batch order.
    pub fn jobs(&self) -> &[Arc<dyn Job<Msg>>] {
        &self.jobs
    }

    pub fn into_jobs(self) -> Vec<Arc<dyn Job<Msg>>> {
        self.jobs
    }
}

impl<Msg: 'static> Effect<Msg> {
    /// Effect that resolves immediately to `msg`.
    pub fn message(msg: Msg) -> Self
    where
        Msg: Clone + Send + Sync,
    {
        Self::from_job(Ready { msg })
    }

    /// Effect that resolves to `msg` after `delay`.
    pub fn after(delay: Duration, msg: Msg) -> Self
    where
        Msg: Clone + Send + Sync,
    {
        Self::from_job(Delay { delay, msg })
    }

    /// Effect that runs the async closure `f` and resolves to its output.
    pub fn perform<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Msg> + Send + 'static,
    {
        Self::from_job(FromFn { f })
    }

    /// Re-tags the result of every job with `f`. Job order is unchanged and
    /// `none` maps to `none`.
    pub fn map<U, F>(self, f: F) -> Effect<U>
    where
        U: 'static,
        F: Fn(Msg) -> U + Send + Sync + 'static,
    {
        if self.is_none() {
            return Effect::none();
        }
        let tag: Tag<Msg, U> = Arc::new(f);
        self.map_with(&tag)
    }

    fn map_with<U: 'static>(self, tag: &Tag<Msg, U>) -> Effect<U> {
        Effect {
            jobs: self
                .jobs
                .into_iter()
                .map(|inner| {
                    Arc::new(Mapped {
                        inner,
                        tag: Arc::clone(tag),
                    }) as Arc<dyn Job<U>>
                })
                .collect(),
        }
    }
}

/// Re-tags every effect of a collection with one shared function.
///
/// An empty collection never touches `f`.
pub(crate) fn map_effects<A, B, F>(effects: Vec<Effect<A>>, f: F) -> Vec<Effect<B>>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    if effects.is_empty() {
        return Vec::new();
    }
    let tag: Tag<A, B> = Arc::new(f);
    effects
        .into_iter()
        .map(|effect| effect.map_with(&tag))
        .collect()
}

impl<Msg> Clone for Effect<Msg> {
    fn clone(&self) -> Self {
        Self {
            jobs: self.jobs.clone(),
        }
    }
}

impl<Msg> Default for Effect<Msg> {
    fn default() -> Self {
        Self::none()
    }
}

impl<Msg> PartialEq for Effect<Msg> {
    fn eq(&self, other: &Self) -> bool {
        self.jobs.len() == other.jobs.len()
            && self
                .jobs
                .iter()
                .zip(&other.jobs)
                .all(|(a, b)| std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)))
    }
}

impl<Msg> Eq for Effect<Msg> {}

impl<Msg> fmt::Debug for Effect<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("Effect::none");
        }
        f.debug_struct("Effect")
            .field("jobs", &self.jobs.len())
            .finish()
    }
}

impl<Msg> FromIterator<Effect<Msg>> for Effect<Msg> {
    fn from_iter<I: IntoIterator<Item = Effect<Msg>>>(iter: I) -> Self {
        Self::batch(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn resolve<Msg: 'static>(effect: &Effect<Msg>) -> Vec<Msg> {
        let mut out = Vec::new();
        for job in effect.jobs() {
            out.push(job.perform().await);
        }
        out
    }

    #[test]
    fn none_is_empty_and_equal_to_itself() {
        let none: Effect<u8> = Effect::none();
        assert!(none.is_none());
        assert_eq!(none.len(), 0);
        assert_eq!(none, Effect::none());
        assert_eq!(Effect::<u8>::default(), none);
    }

    #[test]
    fn batch_drops_noops_and_keeps_order() {
        let a = Effect::message(1u8);
        let b = Effect::message(2u8);
        let batched = Effect::batch([Effect::none(), a.clone(), Effect::none(), b.clone()]);
        assert_eq!(batched.len(), 2);
        assert_eq!(batched, Effect::batch([a, b]));
    }

    #[test]
    fn empty_batch_is_none() {
        let batched: Effect<u8> = Effect::batch(Vec::new());
        assert!(batched.is_none());
    }

    #[test]
    fn distinct_jobs_are_not_equal() {
        assert_ne!(Effect::message(1u8), Effect::message(1u8));
    }

    #[test]
    fn clone_preserves_identity() {
        let effect = Effect::message("ping");
        assert_eq!(effect.clone(), effect);
    }

    #[test]
    fn map_of_none_is_none() {
        let mapped = Effect::<u8>::none().map(|n| n as u32 + 1);
        assert!(mapped.is_none());
    }

    #[tokio::test]
    async fn map_retags_results_in_order() {
        let effect = Effect::batch([Effect::message(1u8), Effect::message(2u8)]);
        let mapped = effect.map(|n| format!("#{n}"));
        assert_eq!(resolve(&mapped).await, vec!["#1", "#2"]);
    }

    #[tokio::test]
    async fn perform_runs_closure_each_time() {
        let effect = Effect::perform(|| async { 7u32 });
        let job = &effect.jobs()[0];
        assert_eq!(job.perform().await, 7);
        assert_eq!(job.perform().await, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn after_waits_for_delay() {
        let effect = Effect::after(Duration::from_secs(5), "done");
        let start = tokio::time::Instant::now();
        assert_eq!(resolve(&effect).await, vec!["done"]);
        assert!(start.elapsed() >= Duration::from_secs(5));
    }
}
