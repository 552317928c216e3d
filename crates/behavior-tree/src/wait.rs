//! Timed leaf nodes.
//!
//! [`Wait`] and [`WaitDynamic`] share one two-state machine (idle, counting):
//! the activating tick latches the duration and always reports `Running`,
//! and each later tick subtracts the frame delta until the timer reaches
//! zero. Neither node ever fails.

use crate::context::{DeltaTime, elapsed};
use crate::{Behavior, Status};

/// Countdown shared by the timed leaves. `None` while idle.
#[derive(Debug, Clone, Copy, Default)]
struct Countdown {
    timer: Option<f64>,
}

impl Countdown {
    fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Latches `duration`, or advances the running timer by the frame delta.
    fn tick(&mut self, duration: impl FnOnce() -> f64, delta: f64) -> Status {
        match self.timer.as_mut() {
            None => {
                // Negative and NaN durations finish on the next tick.
                self.timer = Some(duration().max(0.0));
                Status::Running
            }
            Some(timer) => {
                *timer -= delta;
                if *timer <= 0.0 {
                    self.timer = None;
                    Status::Success
                } else {
                    Status::Running
                }
            }
        }
    }
}

/// Waits for a fixed duration.
///
/// The tick that starts the wait never completes it, even for a zero,
/// negative or NaN duration, so a wait always spans at least two ticks.
#[derive(Debug, Clone)]
pub struct Wait {
    duration: f64,
    countdown: Countdown,
}

impl Wait {
    /// Creates a wait of `duration` seconds.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            countdown: Countdown::default(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Time left on the current activation, or `None` while idle.
    pub fn remaining(&self) -> Option<f64> {
        self.countdown.timer
    }
}

impl<C: DeltaTime> Behavior<C> for Wait {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let duration = self.duration;
        self.countdown.tick(
            || {
                tracing::trace!(duration, "wait started");
                duration
            },
            elapsed(ctx),
        )
    }
}

/// Duration source for [`WaitDynamic`].
pub type DurationFn = Box<dyn FnMut() -> f64 + Send + Sync>;

/// Waits for a duration computed at the start of each activation.
///
/// The duration function is called exactly once per activation, on the
/// idle-to-counting transition. Changes in its result while the wait is
/// counting have no effect until the next activation.
pub struct WaitDynamic {
    duration: DurationFn,
    countdown: Countdown,
}

impl WaitDynamic {
    pub fn new(duration: impl FnMut() -> f64 + Send + Sync + 'static) -> Self {
        Self {
            duration: Box::new(duration),
            countdown: Countdown::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn remaining(&self) -> Option<f64> {
        self.countdown.timer
    }
}

impl<C: DeltaTime> Behavior<C> for WaitDynamic {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.countdown.tick(
            || {
                let duration = (self.duration)();
                tracing::trace!(duration, "dynamic wait started");
                duration
            },
            elapsed(ctx),
        )
    }
}

impl std::fmt::Debug for WaitDynamic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitDynamic")
            .field("countdown", &self.countdown)
            .finish_non_exhaustive()
    }
}
