//! Patrol demo configuration structures and loaders.
use std::env;
use std::time::Duration;

/// Configuration for one patrol run.
#[derive(Clone, Debug)]
pub struct PatrolConfig {
    /// Interval between frames of the outer loop.
    pub tick: Duration,
    /// Full circuits of the waypoint list before the patrol ends.
    pub laps: u32,
    /// Simulated travel time between two waypoints.
    pub walk: Duration,
    /// Base look-around pause at each waypoint, in seconds.
    pub look_secs: f64,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            laps: 2,
            walk: Duration::from_millis(250),
            look_secs: 0.3,
        }
    }
}

impl PatrolConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PATROL_TICK_MS` - Frame interval in milliseconds (default: 100)
    /// - `PATROL_LAPS` - Number of laps (default: 2)
    /// - `PATROL_WALK_MS` - Travel time per leg in milliseconds (default: 250)
    /// - `PATROL_LOOK_SECS` - Base look-around pause in seconds (default: 0.3)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("PATROL_TICK_MS") {
            config.tick = Duration::from_millis(ms.max(1));
        }
        if let Some(laps) = read_env::<u32>("PATROL_LAPS") {
            config.laps = laps.max(1);
        }
        if let Some(ms) = read_env::<u64>("PATROL_WALK_MS") {
            config.walk = Duration::from_millis(ms);
        }
        if let Some(secs) = read_env::<f64>("PATROL_LOOK_SECS")
            && secs.is_finite()
        {
            config.look_secs = secs.max(0.0);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
