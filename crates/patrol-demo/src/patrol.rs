//! Guard patrol tree.
//!
//! The guard walks a fixed loop of waypoints. Each leg is an asynchronous
//! walk that completes from a tokio task, followed by an instant arrival
//! update and a look-around pause whose length varies per stop.

use std::time::Duration;

use behavior_tree::{
    Behavior, Completion, Frame, Repeater, RepeaterConfig, Run, Sequence, Status, WaitDynamic,
};

use crate::config::PatrolConfig;

pub type Position = (i32, i32);

/// Blackboard shared by the patrol leaves.
#[derive(Debug, Clone)]
pub struct Guard {
    pub waypoints: Vec<Position>,
    pub position: Position,
    pub next: usize,
    pub stops: u32,
}

impl Guard {
    pub fn new(waypoints: Vec<Position>) -> Self {
        let position = waypoints.first().copied().unwrap_or_default();
        Self {
            waypoints,
            position,
            next: 1,
            stops: 0,
        }
    }

    fn target(&self) -> Option<Position> {
        if self.waypoints.is_empty() {
            return None;
        }
        self.waypoints.get(self.next % self.waypoints.len()).copied()
    }
}

pub type PatrolFrame = Frame<Guard>;

/// Builds the patrol tree. It reports `Failure` once every lap is done.
pub fn build(config: &PatrolConfig, stops_per_lap: u32) -> Box<dyn Behavior<PatrolFrame>> {
    let leg: Sequence<PatrolFrame> = Sequence::new(vec![
        Box::new(Run::new(walk(config.walk))),
        Box::new(Run::new(arrive)),
        Box::new(look_around(config.look_secs)),
    ])
    .resuming();

    Box::new(Repeater::with_config(
        vec![Box::new(leg)],
        RepeaterConfig {
            run_forever: false,
            steps_to_run: config.laps.saturating_mul(stops_per_lap),
            stop_on_failure: true,
        },
    ))
}

/// Starts a walk toward the next waypoint; the walk finishes on a tokio task.
fn walk(travel: Duration) -> impl FnMut(&mut PatrolFrame, Completion) + Send + Sync {
    move |frame: &mut PatrolFrame, done: Completion| {
        let Some(target) = frame.blackboard.target() else {
            tracing::warn!("no waypoints to walk to");
            if let Err(err) = done.complete(Status::Failure) {
                tracing::warn!(%err, "walk completion dropped");
            }
            return;
        };
        tracing::info!(from = ?frame.blackboard.position, to = ?target, "walking");

        tokio::spawn(async move {
            tokio::time::sleep(travel).await;
            if let Err(err) = done.complete(Status::Success) {
                tracing::warn!(%err, "walk completion dropped");
            }
        });
    }
}

fn arrive(frame: &mut PatrolFrame, done: Completion) {
    let guard = &mut frame.blackboard;
    let status = match guard.target() {
        Some(target) => {
            guard.position = target;
            guard.next = (guard.next + 1) % guard.waypoints.len();
            guard.stops += 1;
            tracing::info!(position = ?target, stops = guard.stops, "arrived");
            Status::Success
        }
        None => Status::Failure,
    };
    if let Err(err) = done.complete(status) {
        tracing::warn!(%err, "arrival completion dropped");
    }
}

/// Pauses for 1x, 2x or 3x the base duration, cycling per stop.
fn look_around(base: f64) -> WaitDynamic {
    let mut stop = 0u32;
    WaitDynamic::new(move || {
        stop = stop.wrapping_add(1);
        let pause = base * f64::from(1 + stop % 3);
        tracing::debug!(pause, "looking around");
        pause
    })
}
