//! Frame-driven behavior tree library.
//!
//! This library provides a small behavior tree implementation meant to be
//! ticked from an external per-frame update loop, such as a game engine's
//! update callback or a fixed-rate simulation step.
//!
//! - **Three-valued status**: nodes report `Success`, `Failure` or `Running`
//! - **No call stack between ticks**: running nodes keep their progress in
//!   their own fields and resume when ticked again
//! - **Injected time**: timed leaves read the frame delta from the tick
//!   context; the library never reads a clock
//! - **Async-friendly leaves**: [`Run`] hands its action a [`Completion`]
//!   that may be resolved on the same tick or any time later
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - [`BehaviorTree`]: Driver that owns the root and tracks activity
//! - Composite nodes: [`Sequence`], [`Selector`], [`Repeater`]
//! - Leaf nodes: [`Wait`], [`WaitDynamic`], [`Run`]
//! - Context: [`DeltaTime`], [`Frame`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod context;
pub mod error;
pub mod repeater;
pub mod run;
pub mod status;
pub mod tree;
pub mod wait;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Any, Scan, Selector, Sequence};
pub use context::{DeltaTime, Frame};
pub use error::{CompletionError, Result};
pub use repeater::{Repeater, RepeaterConfig};
pub use run::{Action, Completion, Run};
pub use status::Status;
pub use tree::{BehaviorTree, CompletionPolicy, TreeConfig};
pub use wait::{DurationFn, Wait, WaitDynamic};
