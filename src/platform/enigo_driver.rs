//! Real input driver backed by `enigo`.

use enigo::{Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use std::sync::Mutex;
use tracing::trace;

use super::{InputDriver, MouseButton, PlatformError, PlatformResult};

pub struct EnigoDriver {
    enigo: Mutex<Enigo>,
}

impl EnigoDriver {
    pub fn new() -> PlatformResult<Self> {
        let enigo = Enigo::new(&Settings::default()).map_err(|e| {
            PlatformError::InjectionFailed(format!("failed to initialize input backend: {e}"))
        })?;
        Ok(Self {
            enigo: Mutex::new(enigo),
        })
    }
}

impl InputDriver for EnigoDriver {
    fn cursor_position(&self) -> PlatformResult<(i32, i32)> {
        let enigo = self.enigo.lock().unwrap();
        enigo
            .location()
            .map_err(|e| PlatformError::CursorUnavailable(e.to_string()))
    }

    fn move_cursor(&self, x: i32, y: i32) -> PlatformResult<()> {
        let mut enigo = self.enigo.lock().unwrap();
        enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| PlatformError::InjectionFailed(e.to_string()))
    }

    fn move_cursor_smooth(&self, x: i32, y: i32, speed: f64, velocity: f64) -> PlatformResult<()> {
        // enigo has no animated glide; pacing comes from the planner delays
        trace!(x, y, speed, velocity, "smooth move");
        self.move_cursor(x, y)
    }

    fn click(&self, button: MouseButton) -> PlatformResult<()> {
        let btn = match button {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
        };
        let mut enigo = self.enigo.lock().unwrap();
        enigo
            .button(btn, Direction::Click)
            .map_err(|e| PlatformError::InjectionFailed(e.to_string()))
    }

    fn key_tap(&self, key: &str) -> PlatformResult<()> {
        let k = parse_key(key)?;
        let mut enigo = self.enigo.lock().unwrap();
        enigo
            .key(k, Direction::Click)
            .map_err(|e| PlatformError::InjectionFailed(e.to_string()))
    }

    fn type_char(&self, c: char) -> PlatformResult<()> {
        let mut buf = [0u8; 4];
        let mut enigo = self.enigo.lock().unwrap();
        enigo
            .text(c.encode_utf8(&mut buf))
            .map_err(|e| PlatformError::InjectionFailed(e.to_string()))
    }
}

/// Parse a key name into an enigo key. Single characters map to their
/// unicode key; unrecognized names are an error surfaced to the caller.
fn parse_key(key: &str) -> PlatformResult<Key> {
    if key.chars().count() == 1 {
        return Ok(Key::Unicode(key.chars().next().unwrap()));
    }

    let parsed = match key.to_lowercase().as_str() {
        "backspace" | "back" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "enter" | "return" => Key::Return,
        "tab" => Key::Tab,
        "escape" | "esc" => Key::Escape,
        "space" => Key::Space,
        "up" => Key::UpArrow,
        "down" => Key::DownArrow,
        "left" => Key::LeftArrow,
        "right" => Key::RightArrow,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" | "pgup" => Key::PageUp,
        "pagedown" | "pgdn" => Key::PageDown,
        "shift" => Key::Shift,
        "control" | "ctrl" => Key::Control,
        "alt" => Key::Alt,
        "meta" | "cmd" | "command" | "super" | "win" => Key::Meta,
        "capslock" => Key::CapsLock,
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        _ => return Err(PlatformError::InvalidKey(key.to_string())),
    };
    Ok(parsed)
}
