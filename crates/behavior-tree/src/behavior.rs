//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, which carries the elapsed frame time and whatever
//! blackboard the caller's leaves need.

use crate::Status;

/// A behavior tree node that can be ticked against a context.
///
/// `tick` is the only way to advance a node. Nodes that span several ticks
/// keep their progress in their own fields, so a parent resumes a running
/// child simply by ticking it again.
pub trait Behavior<C>: Send + Sync {
    /// Run one step of this node.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the tick context. Timed leaves read the
    ///   elapsed time from it; caller-supplied leaves may read and write it.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior needs further ticks
    fn tick(&mut self, ctx: &mut C) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
