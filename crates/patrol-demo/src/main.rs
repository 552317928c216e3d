//! Patrol demo entry point.
//!
//! Drives a guard patrol tree from a fixed-rate frame loop and measures the
//! frame delta that timed leaves consume.
mod config;
mod patrol;

use anyhow::Result;
use behavior_tree::{BehaviorTree, Frame};
use tokio::time::{Instant, MissedTickBehavior};

use config::PatrolConfig;
use patrol::Guard;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PatrolConfig::from_env();
    tracing::info!(?config, "starting patrol");

    let waypoints = vec![(0, 0), (4, 0), (4, 3), (0, 3)];
    let stops_per_lap = u32::try_from(waypoints.len())?;
    // The repeater succeeds after each stop and fails once every lap is done,
    // which is what deactivates the tree.
    let mut tree = BehaviorTree::from_optional(Some(patrol::build(&config, stops_per_lap)));
    let mut frame = Frame::with_blackboard(0.0, Guard::new(waypoints));

    let mut interval = tokio::time::interval(config.tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    while tree.is_active() {
        interval.tick().await;
        let now = Instant::now();
        frame.advance(now.duration_since(last).as_secs_f64());
        last = now;
        tree.tick(&mut frame);
    }

    tracing::info!(
        frames = tree.ticks(),
        stops = frame.blackboard.stops,
        position = ?frame.blackboard.position,
        "patrol finished"
    );
    Ok(())
}
