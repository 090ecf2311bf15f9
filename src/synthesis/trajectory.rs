use std::f64::consts::PI;
use std::sync::Arc;

use super::random::RandomSource;

/// Fixed interpolation step count for a planned move.
pub const STEPS: usize = 10;

/// One planned cursor position with the pause to hold after reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waypoint {
    pub x: i32,
    pub y: i32,
    pub delay_ms: u64,
}

/// Plans cursor paths that read as hand motion: jittered interpolation with
/// an occasional circular detour near the destination.
pub struct TrajectoryPlanner {
    random: Arc<dyn RandomSource>,
}

impl TrajectoryPlanner {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Plan a move from `(start_x, start_y)` to `(end_x, end_y)`.
    ///
    /// The sequence always terminates at exactly the destination; jitter and
    /// the detour change the path, never the endpoint.
    pub fn plan_linear(&self, start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Vec<Waypoint> {
        let mut waypoints = Vec::with_capacity(2 * STEPS + 1);

        for i in 0..STEPS - 1 {
            let t = i as f64 / STEPS as f64;
            let base_x = start_x as f64 + t * (end_x - start_x) as f64;
            let base_y = start_y as f64 + t * (end_y - start_y) as f64;
            waypoints.push(Waypoint {
                x: base_x as i32 + self.random.uniform_int(-2, 2) as i32,
                y: base_y as i32 + self.random.uniform_int(-2, 2) as i32,
                delay_ms: self.random.uniform_int(10, 50) as u64,
            });
        }

        if self.random.uniform_int(0, 1) > 0 {
            self.push_detour(&mut waypoints, end_x, end_y);
        }

        waypoints.push(Waypoint {
            x: end_x,
            y: end_y,
            delay_ms: 0,
        });
        waypoints
    }

    /// Append a circular detour around the destination: a glide to the
    /// endpoint followed by a full circle of `STEPS` points, micro-paused.
    fn push_detour(&self, waypoints: &mut Vec<Waypoint>, end_x: i32, end_y: i32) {
        let r = self.random.uniform_int(16, 50) as f64;
        let pause_ms = self.random.uniform_int(5, 50) as u64;
        let clockwise = self.random.uniform_int(0, 1) == 0;

        let center_x = end_x as f64 - r * (PI / 2.0).cos();
        let center_y = end_y as f64 - r * (PI / 2.0).sin();

        waypoints.push(Waypoint {
            x: end_x,
            y: end_y,
            delay_ms: pause_ms,
        });

        for i in 1..=STEPS {
            let mut angle = 2.0 * PI * i as f64 / STEPS as f64;
            if !clockwise {
                angle = -angle;
            }
            waypoints.push(Waypoint {
                x: (center_x + r * angle.cos()) as i32,
                y: (center_y + r * angle.sin()) as i32,
                delay_ms: pause_ms,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::random::{EntropyRandom, ScriptedRandom};

    fn straight_line_script() -> Vec<i64> {
        // per step: jitter x, jitter y, delay
        let mut script = Vec::new();
        for _ in 0..STEPS - 1 {
            script.extend([0, 0, 10]);
        }
        script
    }

    #[test]
    fn without_detour_yields_ten_waypoints_ending_at_target() {
        let mut script = straight_line_script();
        script.push(0); // detour coin: off
        let planner = TrajectoryPlanner::new(Arc::new(ScriptedRandom::new(script)));

        let wps = planner.plan_linear(0, 0, 100, 200);

        assert_eq!(wps.len(), STEPS);
        assert_eq!(wps[0], Waypoint { x: 0, y: 0, delay_ms: 10 });
        assert_eq!(*wps.last().unwrap(), Waypoint { x: 100, y: 200, delay_ms: 0 });
    }

    #[test]
    fn detour_adds_steps_plus_one_waypoints() {
        let mut script = straight_line_script();
        script.extend([1, 20, 7, 0]); // coin on, r=20, pause=7, clockwise
        let planner = TrajectoryPlanner::new(Arc::new(ScriptedRandom::new(script)));

        let wps = planner.plan_linear(0, 0, 100, 200);

        assert_eq!(wps.len(), STEPS + (STEPS + 1));
        // detour glides to the destination first
        assert_eq!(wps[STEPS - 1], Waypoint { x: 100, y: 200, delay_ms: 7 });
        // circle points sit at radius r around the offset center
        for wp in &wps[STEPS..2 * STEPS] {
            assert_eq!(wp.delay_ms, 7);
            let dx = (wp.x - 100) as f64;
            let dy = (wp.y - 180) as f64;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((18.0..=22.0).contains(&dist), "off circle: {wp:?}");
        }
        assert_eq!(*wps.last().unwrap(), Waypoint { x: 100, y: 200, delay_ms: 0 });
    }

    #[test]
    fn converges_exactly_regardless_of_randomness() {
        let planner = TrajectoryPlanner::new(Arc::new(EntropyRandom));
        for _ in 0..50 {
            let wps = planner.plan_linear(3, 9, 640, 480);
            assert!(wps.len() == STEPS || wps.len() == STEPS + (STEPS + 1));
            let last = wps.last().unwrap();
            assert_eq!((last.x, last.y), (640, 480));
        }
    }

    #[test]
    fn intermediate_waypoints_jitter_at_most_two_pixels() {
        let planner = TrajectoryPlanner::new(Arc::new(EntropyRandom));
        for _ in 0..20 {
            let wps = planner.plan_linear(0, 0, 100, 100);
            for (i, wp) in wps[..STEPS - 1].iter().enumerate() {
                let base = i as i32 * 10;
                assert!((wp.x - base).abs() <= 2, "x jitter too large at {i}");
                assert!((wp.y - base).abs() <= 2, "y jitter too large at {i}");
                assert!((10..=50).contains(&wp.delay_ms));
            }
        }
    }
}
