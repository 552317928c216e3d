//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Frame Semantics
///
/// Nodes are ticked once per frame by an outer update loop:
/// - Conditions and instant actions resolve within the tick
/// - Timers and asynchronous actions report `Running` until they conclude
///
/// There is no ordering between variants; a status is an outcome, not a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The behavior failed.
    ///
    /// This is the only channel for domain-level failure. Integration misuse
    /// is reported through [`CompletionError`](crate::CompletionError) instead.
    Failure,

    /// The behavior has not concluded yet and must be ticked again.
    Running,

    /// The behavior completed successfully.
    Success,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }
}
