//! Integration errors.
//!
//! A leaf that fails its task reports [`Status::Failure`]; that is ordinary
//! control flow. The errors here are different: they mean an external
//! action broke the completion contract of a [`Run`](crate::Run) node, and
//! they are returned to the action that misbehaved.

use thiserror::Error;

use crate::Status;

pub type Result<T> = std::result::Result<T, CompletionError>;

/// Rejected call to [`Completion::complete`](crate::Completion::complete).
///
/// A rejected completion is never recorded; the node's current activation
/// is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("completion must report a terminal status, got {0:?}")]
    NonTerminal(Status),

    #[error("activation {generation} was already completed")]
    AlreadyCompleted { generation: u64 },

    #[error("activation {issued} was superseded by activation {current}")]
    Stale { issued: u64, current: u64 },

    #[error("run node was dropped before activation {generation} completed")]
    Detached { generation: u64 },
}

impl CompletionError {
    /// Generation of the activation the rejected handle was issued for.
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::NonTerminal(_) => None,
            Self::AlreadyCompleted { generation } | Self::Detached { generation } => {
                Some(*generation)
            }
            Self::Stale { issued, .. } => Some(*issued),
        }
    }
}
