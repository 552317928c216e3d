//! Tree driver.
//!
//! [`BehaviorTree`] owns the root node and is the entry point for the outer
//! update loop: call [`BehaviorTree::tick`] once per frame with that frame's
//! context. By default the root starts over after each `Success` and the
//! driver stops evaluating it after a `Failure`, until
//! [`BehaviorTree::restart`] re-arms it.

use crate::{Behavior, Status};

/// What the driver does after the root returns a terminal status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompletionPolicy {
    /// Stay active after `Success` so the root starts over on the next tick.
    /// Deactivate after `Failure`.
    #[default]
    LoopOnSuccess,

    /// Deactivate after `Success` or `Failure`.
    StopOnTerminal,
}

/// Driver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeConfig {
    pub completion: CompletionPolicy,
}

impl TreeConfig {
    /// Configuration that deactivates the tree after any terminal status.
    pub const STOP_ON_TERMINAL: Self = Self {
        completion: CompletionPolicy::StopOnTerminal,
    };
}

/// Owns a root node and drives it one tick at a time.
///
/// # Lifecycle
///
/// - A tree built with a root starts active; the root is not evaluated
///   until the first tick.
/// - A tree built without a root is permanently inactive.
/// - While the root returns `Running` the tree stays active.
/// - A terminal status deactivates the tree according to its
///   [`CompletionPolicy`].
///
/// Ticks must not overlap. The driver takes `&mut self`, so the borrow
/// checker already rules out concurrent ticks of one tree.
pub struct BehaviorTree<C> {
    root: Option<Box<dyn Behavior<C>>>,
    config: TreeConfig,
    active: bool,
    last_status: Option<Status>,
    ticks: u64,
}

impl<C> BehaviorTree<C> {
    /// Creates an active tree around `root`.
    pub fn new(root: impl Behavior<C> + 'static) -> Self {
        let root: Box<dyn Behavior<C>> = Box::new(root);
        Self::from_optional(Some(root))
    }

    /// Creates a tree from a root that may be absent.
    pub fn from_optional(root: Option<Box<dyn Behavior<C>>>) -> Self {
        let active = root.is_some();
        Self {
            root,
            config: TreeConfig::default(),
            active,
            last_status: None,
            ticks: 0,
        }
    }

    /// Creates an inactive tree with no root. Ticking it does nothing.
    pub fn empty() -> Self {
        Self::from_optional(None)
    }

    pub fn with_config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluates the root once if the tree is active.
    ///
    /// Returns `None` without touching any node when the tree is inactive.
    pub fn tick(&mut self, ctx: &mut C) -> Option<Status> {
        if !self.active {
            return None;
        }
        let root = self.root.as_mut()?;

        let status = root.tick(ctx);
        self.ticks += 1;
        self.last_status = Some(status);
        tracing::trace!(tick = self.ticks, ?status, "tree ticked");

        if status.is_terminal() {
            self.active = match self.config.completion {
                CompletionPolicy::StopOnTerminal => false,
                CompletionPolicy::LoopOnSuccess => status.is_success(),
            };
            tracing::debug!(tick = self.ticks, ?status, active = self.active, "tree concluded");
        }
        Some(status)
    }

    /// Re-arms the tree.
    ///
    /// Node state is left untouched: running leaves resume where they
    /// stopped and repeater pass counters keep their values.
    pub fn restart(&mut self) {
        self.active = self.root.is_some();
        tracing::debug!(active = self.active, "tree restarted");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Status returned by the most recent root evaluation.
    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Number of root evaluations performed.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}

impl<C> std::fmt::Debug for BehaviorTree<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorTree")
            .field("has_root", &self.root.is_some())
            .field("config", &self.config)
            .field("active", &self.active)
            .field("last_status", &self.last_status)
            .field("ticks", &self.ticks)
            .finish()
    }
}
