//! Platform capability set for raw cursor/keyboard control.
//!
//! Everything above this module plans input as data; drivers here are the
//! only code that touches the OS.

pub mod enigo_driver;

pub use enigo_driver::EnigoDriver;

use thiserror::Error;
use tracing::debug;

/// Errors raised by an input driver.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("input injection failed: {0}")]
    InjectionFailed(String),
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("cursor position unavailable: {0}")]
    CursorUnavailable(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Raw input capabilities expected from the host platform.
///
/// `move_cursor_smooth` carries the motion-smoothing parameters sampled per
/// command; drivers without native glide may treat it as an absolute move.
pub trait InputDriver: Send + Sync {
    fn cursor_position(&self) -> PlatformResult<(i32, i32)>;
    fn move_cursor(&self, x: i32, y: i32) -> PlatformResult<()>;
    fn move_cursor_smooth(&self, x: i32, y: i32, speed: f64, velocity: f64) -> PlatformResult<()>;
    fn click(&self, button: MouseButton) -> PlatformResult<()>;
    fn key_tap(&self, key: &str) -> PlatformResult<()>;
    fn type_char(&self, c: char) -> PlatformResult<()>;
}

/// Driver that only logs. Used for dry runs on headless hosts.
pub struct NoopDriver;

impl InputDriver for NoopDriver {
    fn cursor_position(&self) -> PlatformResult<(i32, i32)> {
        Ok((0, 0))
    }

    fn move_cursor(&self, x: i32, y: i32) -> PlatformResult<()> {
        debug!(x, y, "noop: move cursor");
        Ok(())
    }

    fn move_cursor_smooth(&self, x: i32, y: i32, speed: f64, velocity: f64) -> PlatformResult<()> {
        debug!(x, y, speed, velocity, "noop: smooth move");
        Ok(())
    }

    fn click(&self, button: MouseButton) -> PlatformResult<()> {
        debug!(?button, "noop: click");
        Ok(())
    }

    fn key_tap(&self, key: &str) -> PlatformResult<()> {
        debug!(key, "noop: key tap");
        Ok(())
    }

    fn type_char(&self, c: char) -> PlatformResult<()> {
        debug!(%c, "noop: type char");
        Ok(())
    }
}
