//! Looping composite.
//!
//! A [`Repeater`] runs one pass over its children per tick and counts the
//! passes that complete. It either loops forever or gives up with `Failure`
//! after a configured number of passes.

use crate::{Behavior, Status};

/// Loop configuration for a [`Repeater`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RepeaterConfig {
    /// When set, a completed pass always yields `Success` and passes are not counted.
    pub run_forever: bool,

    /// Completed passes after which the repeater reports `Failure`.
    /// Only consulted when `run_forever` is false.
    pub steps_to_run: u32,

    /// When set, a failing child aborts the pass with `Failure`.
    /// Otherwise the failure is swallowed and the pass continues.
    pub stop_on_failure: bool,
}

impl Default for RepeaterConfig {
    fn default() -> Self {
        Self {
            run_forever: true,
            steps_to_run: 1,
            stop_on_failure: false,
        }
    }
}

/// Repeats a Sequence-like pass over its children.
///
/// # Semantics
///
/// Each tick runs one pass from the first child:
/// - A `Running` child ends the tick with `Running`
/// - A `Failure` child ends the tick with `Failure` if `stop_on_failure`,
///   otherwise the pass moves on to the next child
/// - A pass that reaches the end counts toward `steps_to_run` (bounded mode
///   only) and returns `Failure` once the bound is reached, `Success` before
///
/// The pass counter is never reset. A repeater that hit its bound keeps
/// reporting `Failure` for every further completed pass, including after
/// the owning tree is restarted.
pub struct Repeater<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    config: RepeaterConfig,
    times_run: u32,
}

impl<C> Repeater<C> {
    /// Creates a repeater that loops forever and swallows child failures.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self::with_config(children, RepeaterConfig::default())
    }

    pub fn with_config(children: Vec<Box<dyn Behavior<C>>>, config: RepeaterConfig) -> Self {
        Self {
            children,
            config,
            times_run: 0,
        }
    }

    /// Bounds the repeater to `steps` completed passes.
    pub fn steps(mut self, steps: u32) -> Self {
        self.config.run_forever = false;
        self.config.steps_to_run = steps;
        self
    }

    pub fn stop_on_failure(mut self, stop: bool) -> Self {
        self.config.stop_on_failure = stop;
        self
    }

    pub fn config(&self) -> &RepeaterConfig {
        &self.config
    }

    /// Number of completed passes counted so far (bounded mode only).
    pub fn times_run(&self) -> u32 {
        self.times_run
    }

    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Running => return Status::Running,
                Status::Failure if self.config.stop_on_failure => return Status::Failure,
                Status::Failure | Status::Success => {}
            }
        }

        if self.config.run_forever {
            return Status::Success;
        }

        self.times_run = self.times_run.saturating_add(1);
        if self.times_run >= self.config.steps_to_run {
            Status::Failure
        } else {
            Status::Success
        }
    }
}
