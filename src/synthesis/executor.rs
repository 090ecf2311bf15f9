use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::debug;

use super::trajectory::Waypoint;
use super::typing::TypingAction;
use crate::platform::{InputDriver, PlatformResult};

/// Replays planned sequences against the platform driver, strictly in
/// order, honoring each action's pause. The sequence is the literal
/// script: no reordering, no batching, no skipping. The first driver
/// error aborts the remainder and propagates.
pub struct InputExecutor {
    driver: Arc<dyn InputDriver>,
}

impl InputExecutor {
    pub fn new(driver: Arc<dyn InputDriver>) -> Self {
        Self { driver }
    }

    pub async fn run_trajectory(
        &self,
        waypoints: &[Waypoint],
        speed: f64,
        velocity: f64,
    ) -> PlatformResult<()> {
        debug!(count = waypoints.len(), "running trajectory");
        for wp in waypoints {
            self.driver.move_cursor_smooth(wp.x, wp.y, speed, velocity)?;
            if wp.delay_ms > 0 {
                sleep(Duration::from_millis(wp.delay_ms)).await;
            }
        }
        Ok(())
    }

    pub async fn run_typing(&self, actions: &[TypingAction]) -> PlatformResult<()> {
        debug!(count = actions.len(), "running typing sequence");
        for action in actions {
            let delay_ms = match action {
                TypingAction::EmitChar { c, delay_ms }
                | TypingAction::EmitTypo { c, delay_ms } => {
                    self.driver.type_char(*c)?;
                    *delay_ms
                }
                TypingAction::Correct { delay_ms } => {
                    self.driver.key_tap("backspace")?;
                    *delay_ms
                }
            };
            if delay_ms > 0 {
                sleep(Duration::from_millis(delay_ms)).await;
            }
        }
        Ok(())
    }
}
