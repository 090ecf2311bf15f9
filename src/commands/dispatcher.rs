use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::platform::{InputDriver, MouseButton, PlatformError};
use crate::synthesis::executor::InputExecutor;
use crate::synthesis::random::RandomSource;
use crate::synthesis::trajectory::TrajectoryPlanner;
use crate::synthesis::typing::TypingPlanner;

/// One unit of work from the network. `action` stays a plain string so an
/// unrecognized value survives decoding and fails at dispatch, not as a
/// body-decode rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct Command {
    pub action: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Maps a validated command onto the planner/executor paths.
pub struct CommandDispatcher {
    driver: Arc<dyn InputDriver>,
    random: Arc<dyn RandomSource>,
    trajectory: TrajectoryPlanner,
    typing: TypingPlanner,
    executor: InputExecutor,
    // One command drives the platform at a time; waiters queue FIFO.
    exec_lock: Mutex<()>,
}

impl CommandDispatcher {
    pub fn new(driver: Arc<dyn InputDriver>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            trajectory: TrajectoryPlanner::new(random.clone()),
            typing: TypingPlanner::new(random.clone()),
            executor: InputExecutor::new(driver.clone()),
            driver,
            random,
            exec_lock: Mutex::new(()),
        }
    }

    pub async fn dispatch(&self, cmd: &Command) -> Result<(), DispatchError> {
        let _guard = self.exec_lock.lock().await;
        info!(action = %cmd.action, "dispatching command");

        match cmd.action.as_str() {
            "moveMouse" => self.move_mouse(cmd.x, cmd.y).await,
            "click" => Ok(self.driver.click(MouseButton::Left)?),
            "right_click" => Ok(self.driver.click(MouseButton::Right)?),
            "type" => {
                let actions = self.typing.plan_typing(&cmd.value);
                Ok(self.executor.run_typing(&actions).await?)
            }
            "keyTap" => Ok(self.driver.key_tap(&cmd.value)?),
            other => Err(DispatchError::UnknownAction(other.to_string())),
        }
    }

    async fn move_mouse(&self, x: i32, y: i32) -> Result<(), DispatchError> {
        let (cur_x, cur_y) = self.driver.cursor_position()?;
        let speed = self.random.uniform_float(0.5, 1.5);
        let velocity = self.random.uniform_float(0.5, 1.5);
        debug!(x, y, speed, velocity, "moving cursor");

        let waypoints = self.trajectory.plan_linear(cur_x, cur_y, x, y);
        Ok(self.executor.run_trajectory(&waypoints, speed, velocity).await?)
    }
}
