//! Reference host runtime.
//!
//! Owns the root state of a [`Program`], runs every job of every effect the
//! program returns on tokio and feeds the results back through
//! [`Program::update`]. There is no rendering; the runtime is what the demo
//! binary and the integration tests drive.

use std::collections::VecDeque;

use tokio::task::JoinSet;

use crate::effect::Effect;
use crate::mvi::Program;

/// Generic dispatch: takes current state, runs the program, stores result.
macro_rules! dispatch_program {
    ($self:expr, $intent:expr) => {{
        let (state, effect) = $self
            .program
            .update(std::mem::take(&mut $self.state), $intent);
        $self.state = state;
        $self.schedule(effect);
    }};
}

pub struct Runtime<P: Program> {
    program: P,
    state: P::State,
    queue: VecDeque<P::Intent>,
    jobs: JoinSet<P::Intent>,
    pending: Vec<Effect<P::Intent>>,
    updates: usize,
}

impl<P: Program> Runtime<P> {
    /// Initializes the program. Its initial effect is scheduled on the
    /// first call to [`Runtime::run_until_idle`].
    pub fn new(program: P) -> Self {
        let (state, effect) = program.init();
        Self {
            program,
            state,
            queue: VecDeque::new(),
            jobs: JoinSet::new(),
            pending: vec![effect],
            updates: 0,
        }
    }

    pub fn state(&self) -> &P::State {
        &self.state
    }

    pub fn into_state(self) -> P::State {
        self.state
    }

    /// Total number of updates processed so far.
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Queues an intent for the next [`Runtime::run_until_idle`].
    pub fn dispatch(&mut self, intent: P::Intent) {
        self.queue.push_back(intent);
    }

    /// Processes queued intents and effect results until nothing is queued
    /// and no job is in flight. Returns the number of updates processed.
    ///
    /// Queued intents are handled in dispatch order before waiting on jobs.
    /// Jobs are spawned in batch order; results are handled as they
    /// complete.
    pub async fn run_until_idle(&mut self) -> usize {
        let before = self.updates;
        for effect in std::mem::take(&mut self.pending) {
            self.schedule(effect);
        }

        loop {
            while let Some(intent) = self.queue.pop_front() {
                self.apply(intent);
            }

            match self.jobs.join_next().await {
                Some(Ok(intent)) => {
                    tracing::trace!("effect job completed");
                    self.apply(intent);
                }
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "effect job did not complete");
                }
                None => break,
            }
        }

        self.updates - before
    }

    fn apply(&mut self, intent: P::Intent) {
        self.updates += 1;
        tracing::debug!(update = self.updates, "processing intent");
        dispatch_program!(self, intent);
    }

    fn schedule(&mut self, effect: Effect<P::Intent>) {
        if effect.is_none() {
            return;
        }
        tracing::debug!(jobs = effect.len(), "scheduling effect");
        for job in effect.into_jobs() {
            self.jobs.spawn(job.perform());
        }
    }
}
