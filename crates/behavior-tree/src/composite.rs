//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! By default composites keep no memory of which child was running on the
//! previous tick. Every tick scans from the first child, so children that
//! already succeeded are ticked again while a later sibling is `Running`.
//! Composites built with `resuming()` instead pick up at the child that
//! returned `Running` and rewind only once they conclude.

use crate::{Behavior, Status};

/// Where a composite starts its scan on each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scan {
    /// Always start from the first child.
    #[default]
    FromStart,

    /// Start from the child that was `Running` on the previous tick.
    Resume,
}

/// Executes child behaviors in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success` (or there are none), the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    scan: Scan,
    cursor: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// An empty sequence is valid and always succeeds.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            children,
            scan: Scan::FromStart,
            cursor: 0,
        }
    }

    /// Resumes at the running child instead of rescanning earlier children.
    pub fn resuming(mut self) -> Self {
        self.scan = Scan::Resume;
        self
    }

    pub fn scan(&self) -> Scan {
        self.scan
    }

    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let start = start_index(self.scan, self.cursor);
        for (index, child) in self.children.iter_mut().enumerate().skip(start) {
            match child.tick(ctx) {
                Status::Success => continue,
                Status::Running => {
                    self.cursor = index;
                    return Status::Running;
                }
                Status::Failure => {
                    self.cursor = 0;
                    return Status::Failure;
                }
            }
        }
        self.cursor = 0;
        Status::Success
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector **stops immediately** and returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure` (or there are none), the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    scan: Scan,
    cursor: usize,
}

/// OR composite under its "any child succeeds" name.
pub type Any<C> = Selector<C>;

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// An empty selector is valid and always fails.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            children,
            scan: Scan::FromStart,
            cursor: 0,
        }
    }

    /// Resumes at the running child instead of retrying earlier children.
    pub fn resuming(mut self) -> Self {
        self.scan = Scan::Resume;
        self
    }

    pub fn scan(&self) -> Scan {
        self.scan
    }

    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let start = start_index(self.scan, self.cursor);
        for (index, child) in self.children.iter_mut().enumerate().skip(start) {
            match child.tick(ctx) {
                Status::Failure => continue,
                Status::Running => {
                    self.cursor = index;
                    return Status::Running;
                }
                Status::Success => {
                    self.cursor = 0;
                    return Status::Success;
                }
            }
        }
        self.cursor = 0;
        Status::Failure
    }
}

#[inline]
fn start_index(scan: Scan, cursor: usize) -> usize {
    match scan {
        Scan::FromStart => 0,
        Scan::Resume => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestContext {
        value: i32,
        log: Vec<&'static str>,
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            ctx.log.push("inc");
            Status::Success
        }
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.log.push("fail");
            Status::Failure
        }
    }

    /// Reports `Running` for `remaining` ticks, then `Success`.
    struct Busy {
        remaining: u32,
    }
    impl Behavior<TestContext> for Busy {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.log.push("busy");
            if self.remaining == 0 {
                return Status::Success;
            }
            self.remaining -= 1;
            Status::Running
        }
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(FailAlways),
            Box::new(Increment), // Should not execute
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn sequence_stops_at_running_child() {
        let mut seq = Sequence::new(vec![
            Box::new(Busy { remaining: 1 }),
            Box::new(Increment),
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 0);
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn sequence_rescans_completed_children_each_tick() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(Busy { remaining: 2 }),
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        // The leading child ran once per tick, not once per activation.
        assert_eq!(ctx.value, 3);
    }

    #[test]
    fn resuming_sequence_skips_completed_children() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(Busy { remaining: 2 }),
            Box::new(Increment),
        ])
        .resuming();

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);

        // Rewound after concluding.
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 4);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let mut seq = Sequence::<TestContext>::new(Vec::new());
        assert_eq!(seq.tick(&mut TestContext::default()), Status::Success);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Selector::new(vec![
            Box::new(FailAlways),
            Box::new(Increment),
            Box::new(Increment), // Should not execute
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.log, vec!["fail", "inc"]);
    }

    #[test]
    fn selector_stops_at_running_child() {
        let mut sel = Selector::new(vec![
            Box::new(FailAlways),
            Box::new(Busy { remaining: 1 }),
            Box::new(Increment),
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.log, vec!["fail", "busy"]);
    }

    #[test]
    fn resuming_selector_does_not_retry_failed_children() {
        let mut sel = Selector::new(vec![
            Box::new(FailAlways),
            Box::new(Busy { remaining: 1 }),
        ])
        .resuming();

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.log, vec!["fail", "busy", "busy"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(vec![Box::new(FailAlways), Box::new(FailAlways)]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn empty_selector_fails() {
        let mut any = Any::<TestContext>::new(Vec::new());
        assert_eq!(any.tick(&mut TestContext::default()), Status::Failure);
    }
}
