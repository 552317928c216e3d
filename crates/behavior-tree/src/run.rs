//! Leaf node that bridges to an externally completed action.
//!
//! A [`Run`] node starts its [`Action`] once per activation and hands it a
//! [`Completion`]. The action reports its outcome through that handle,
//! either before `start` returns or later from anywhere else (another
//! thread, an async task, an engine callback). The node polls for the
//! outcome on every tick and never starts the action twice for one
//! activation.
//!
//! # Activations
//!
//! Every activation gets a new generation number and every handle carries
//! the generation it was issued for. A handle that outlives its activation
//! is rejected with [`CompletionError::Stale`] instead of resolving the
//! activation that replaced it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::{Behavior, CompletionError, Status};

/// An externally implemented unit of work driven by a [`Run`] node.
///
/// `start` is called once per activation. The action must eventually call
/// [`Completion::complete`] exactly once with `Success` or `Failure`.
pub trait Action<C>: Send + Sync {
    fn start(&mut self, ctx: &mut C, done: Completion);
}

impl<C, F> Action<C> for F
where
    F: FnMut(&mut C, Completion) + Send + Sync,
{
    #[inline]
    fn start(&mut self, ctx: &mut C, done: Completion) {
        self(ctx, done)
    }
}

/// Completion state shared between a node and the handles it issued.
#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    outcome: Option<Status>,
    settled: bool,
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle an [`Action`] uses to report the outcome of one activation.
///
/// The handle holds only a weak reference to its node, so keeping it alive
/// does not keep the tree alive.
#[derive(Debug)]
pub struct Completion {
    slot: Weak<Mutex<Slot>>,
    generation: u64,
}

impl Completion {
    /// Reports the outcome of the activation this handle was issued for.
    ///
    /// # Errors
    ///
    /// - [`CompletionError::NonTerminal`] if `status` is `Running`
    /// - [`CompletionError::Detached`] if the node no longer exists
    /// - [`CompletionError::Stale`] if the node has since started a newer activation
    /// - [`CompletionError::AlreadyCompleted`] if this activation was already completed
    pub fn complete(&self, status: Status) -> crate::Result<()> {
        let result = self.record(status);
        if let Err(err) = &result {
            tracing::warn!(generation = self.generation, %err, "completion rejected");
        }
        result
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn record(&self, status: Status) -> crate::Result<()> {
        if status.is_running() {
            return Err(CompletionError::NonTerminal(status));
        }
        let slot = self.slot.upgrade().ok_or(CompletionError::Detached {
            generation: self.generation,
        })?;
        let mut slot = lock(&slot);

        if slot.generation != self.generation {
            return Err(CompletionError::Stale {
                issued: self.generation,
                current: slot.generation,
            });
        }
        if slot.settled {
            return Err(CompletionError::AlreadyCompleted {
                generation: self.generation,
            });
        }

        slot.settled = true;
        slot.outcome = Some(status);
        Ok(())
    }
}

/// Runs an [`Action`] and waits for it to report completion.
///
/// # Semantics
///
/// - Idle: starts a new activation and calls the action. Returns the
///   reported status right away if the action completed synchronously,
///   otherwise `Running`.
/// - Running, not completed: returns `Running` without touching the action.
/// - Running, completed: returns the reported status once and goes idle.
pub struct Run<C> {
    action: Box<dyn Action<C>>,
    slot: Arc<Mutex<Slot>>,
    running: bool,
}

impl<C> Run<C> {
    pub fn new(action: impl Action<C> + 'static) -> Self {
        Self {
            action: Box::new(action),
            slot: Arc::new(Mutex::new(Slot::default())),
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of activations started so far.
    pub fn activations(&self) -> u64 {
        lock(&self.slot).generation
    }

    fn take_outcome(&mut self) -> Option<Status> {
        let outcome = lock(&self.slot).outcome.take();
        if outcome.is_some() {
            self.running = false;
        }
        outcome
    }

    fn activate(&mut self) -> Completion {
        let mut slot = lock(&self.slot);
        slot.generation = slot.generation.wrapping_add(1);
        slot.outcome = None;
        slot.settled = false;
        self.running = true;

        Completion {
            slot: Arc::downgrade(&self.slot),
            generation: slot.generation,
        }
    }
}

impl<C> Behavior<C> for Run<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.running {
            return self.take_outcome().unwrap_or(Status::Running);
        }

        let done = self.activate();
        tracing::trace!(generation = done.generation, "run action started");
        // No lock is held here, so the action may complete synchronously.
        self.action.start(ctx, done);

        match self.take_outcome() {
            Some(status) => status,
            None => Status::Running,
        }
    }
}
