//! Leaf jobs: the units of work an [`Effect`](super::Effect) is made of.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub use futures_core::future::BoxFuture;

/// A single unit of work that eventually produces one message.
///
/// Anything that wants to take part in effect batching (timers, network
/// calls, subscriptions) implements this trait and is wrapped with
/// [`Effect::from_job`](super::Effect::from_job). A job may be performed
/// more than once, so `perform` takes `&self`.
pub trait Job<Msg>: Send + Sync {
    fn perform(&self) -> BoxFuture<'static, Msg>;
}

/// Resolves immediately with a clone of the stored message.
pub(crate) struct Ready<Msg> {
    pub(crate) msg: Msg,
}

impl<Msg> Job<Msg> for Ready<Msg>
where
    Msg: Clone + Send + Sync + 'static,
{
    fn perform(&self) -> BoxFuture<'static, Msg> {
        let msg = self.msg.clone();
        Box::pin(async move { msg })
    }
}

/// Resolves with the stored message once `delay` has elapsed.
pub(crate) struct Delay<Msg> {
    pub(crate) delay: Duration,
    pub(crate) msg: Msg,
}

impl<Msg> Job<Msg> for Delay<Msg>
where
    Msg: Clone + Send + Sync + 'static,
{
    fn perform(&self) -> BoxFuture<'static, Msg> {
        let delay = self.delay;
        let msg = self.msg.clone();
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            msg
        })
    }
}

/// Runs an async closure every time the job is performed.
pub(crate) struct FromFn<F> {
    pub(crate) f: F,
}

impl<Msg, F, Fut> Job<Msg> for FromFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Msg> + Send + 'static,
{
    fn perform(&self) -> BoxFuture<'static, Msg> {
        Box::pin((self.f)())
    }
}

pub(crate) type Tag<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// Re-tags the result of an inner job.
pub(crate) struct Mapped<A, B> {
    pub(crate) inner: Arc<dyn Job<A>>,
    pub(crate) tag: Tag<A, B>,
}

impl<A, B> Job<B> for Mapped<A, B>
where
    A: 'static,
    B: 'static,
{
    fn perform(&self) -> BoxFuture<'static, B> {
        let fut = self.inner.perform();
        let tag = Arc::clone(&self.tag);
        Box::pin(async move { tag(fut.await) })
    }
}
