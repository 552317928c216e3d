//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.
//!
//! ```
//! use behavior_tree::builder::{run, sequence, wait};
//! use behavior_tree::{BehaviorTree, Completion, Frame, Status};
//!
//! let mut tree = BehaviorTree::new(sequence(vec![
//!     wait(2.0),
//!     run(|_: &mut Frame, done: Completion| {
//!         done.complete(Status::Success).unwrap();
//!     }),
//! ]));
//!
//! // The first tick only starts the wait; the next two consume its duration.
//! let mut frame = Frame::new(1.0);
//! assert_eq!(tree.tick(&mut frame), Some(Status::Running));
//! assert_eq!(tree.tick(&mut frame), Some(Status::Running));
//! assert_eq!(tree.tick(&mut frame), Some(Status::Success));
//! // A succeeding root starts over on the next tick.
//! assert!(tree.is_active());
//! ```

use crate::{
    Action, Behavior, DeltaTime, Repeater, RepeaterConfig, Run, Selector, Sequence, Wait,
    WaitDynamic,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates a repeater node with the given loop configuration.
#[inline]
pub fn repeater<C: 'static>(
    config: RepeaterConfig,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Repeater::with_config(children, config))
}

/// Creates a fixed-duration wait.
#[inline]
pub fn wait<C: DeltaTime>(duration: f64) -> Box<dyn Behavior<C>> {
    Box::new(Wait::new(duration))
}

/// Creates a wait whose duration is sampled at each activation.
#[inline]
pub fn wait_dynamic<C: DeltaTime>(
    duration: impl FnMut() -> f64 + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(WaitDynamic::new(duration))
}

/// Creates a run node around an externally completed action.
#[inline]
pub fn run<C: 'static>(action: impl Action<C> + 'static) -> Box<dyn Behavior<C>> {
    Box::new(Run::new(action))
}
