//! Tick context and elapsed-time access.
//!
//! The library never reads a clock. The outer loop measures the time since
//! the previous tick and hands it in through the context, which keeps every
//! tree deterministic under a synthetic sequence of deltas.

/// Exposes the elapsed time, in seconds, since the previous tick.
///
/// Required by the timed leaves ([`Wait`](crate::Wait),
/// [`WaitDynamic`](crate::WaitDynamic)). Values are expected to be
/// non-negative; zero is legal and stalls timers for that tick.
pub trait DeltaTime {
    fn delta_time(&self) -> f64;
}

impl DeltaTime for f64 {
    #[inline]
    fn delta_time(&self) -> f64 {
        *self
    }
}

impl DeltaTime for f32 {
    #[inline]
    fn delta_time(&self) -> f64 {
        f64::from(*self)
    }
}

/// Ready-made tick context: the frame delta plus a caller blackboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame<B = ()> {
    /// Seconds elapsed since the previous tick.
    pub delta: f64,

    /// Caller state shared by the leaves of one tree.
    pub blackboard: B,
}

impl Frame {
    /// Creates a frame with no blackboard.
    pub fn new(delta: f64) -> Self {
        Self {
            delta,
            blackboard: (),
        }
    }
}

impl<B> Frame<B> {
    /// Creates a frame carrying `blackboard` for the leaves to share.
    pub fn with_blackboard(delta: f64, blackboard: B) -> Self {
        Self { delta, blackboard }
    }

    /// Replaces the delta for the next tick, keeping the blackboard.
    pub fn advance(&mut self, delta: f64) -> &mut Self {
        self.delta = delta;
        self
    }
}

impl<B> DeltaTime for Frame<B> {
    #[inline]
    fn delta_time(&self) -> f64 {
        self.delta
    }
}

/// Reads the delta from `ctx`, clamping negative and NaN values to zero.
#[inline]
pub(crate) fn elapsed<C: DeltaTime>(ctx: &C) -> f64 {
    ctx.delta_time().max(0.0)
}
