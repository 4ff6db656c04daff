//! Mouse and keyboard through enigo.

use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use deskhands_protocols::{
    BackendError, KeyCode, Keyboard, Mouse, MouseButton, Point, ScrollDirection,
};
use enigo::{
    Axis, Button, Coordinate, Direction, Enigo, Key, Keyboard as _, Mouse as _, Settings,
};
use tracing::trace;

use crate::run_blocking;

/// Wheel units the platform reports for one notch.
const WHEEL_UNITS_PER_STEP: i32 = 120;

/// Native mouse and keyboard. Each call opens a fresh enigo connection on the
/// blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeInput;

impl NativeInput {
    pub fn new() -> Self {
        Self
    }
}

fn connect() -> Result<Enigo, String> {
    Enigo::new(&Settings::default()).map_err(|e| e.to_string())
}

fn button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
    }
}

async fn mouse_button(button_kind: MouseButton, direction: Direction) -> Result<(), BackendError> {
    run_blocking(BackendError::Mouse, move || {
        connect()?
            .button(button(button_kind), direction)
            .map_err(|e| e.to_string())
    })
    .await
}

/// Notches to send for a wheel amount. Never rounds a non-zero amount to zero.
pub fn wheel_steps(amount: i32) -> i32 {
    if amount == 0 {
        return 0;
    }
    let steps = (amount.unsigned_abs() as f64 / WHEEL_UNITS_PER_STEP as f64)
        .round()
        .max(1.0) as i32;
    steps * amount.signum()
}

#[async_trait]
impl Mouse for NativeInput {
    async fn set_position(&self, point: Point) -> Result<(), BackendError> {
        run_blocking(BackendError::Mouse, move || {
            connect()?
                .move_mouse(point.x, point.y, Coordinate::Abs)
                .map_err(|e| e.to_string())
        })
        .await
    }

    async fn click(&self, button: MouseButton) -> Result<(), BackendError> {
        mouse_button(button, Direction::Click).await
    }

    async fn double_click(&self, button_kind: MouseButton) -> Result<(), BackendError> {
        run_blocking(BackendError::Mouse, move || {
            let mut enigo = connect()?;
            enigo
                .button(button(button_kind), Direction::Click)
                .map_err(|e| e.to_string())?;
            thread::sleep(Duration::from_millis(50));
            enigo
                .button(button(button_kind), Direction::Click)
                .map_err(|e| e.to_string())
        })
        .await
    }

    async fn press_button(&self, button: MouseButton) -> Result<(), BackendError> {
        mouse_button(button, Direction::Press).await
    }

    async fn release_button(&self, button: MouseButton) -> Result<(), BackendError> {
        mouse_button(button, Direction::Release).await
    }

    async fn scroll(&self, direction: ScrollDirection, amount: i32) -> Result<(), BackendError> {
        let sign = match direction {
            ScrollDirection::Up | ScrollDirection::Left => -1,
            ScrollDirection::Down | ScrollDirection::Right => 1,
        };
        let axis = if direction.is_vertical() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let length = wheel_steps(amount) * sign;
        if length == 0 {
            return Ok(());
        }

        trace!("Wheel {:?} {} steps", axis, length);
        run_blocking(BackendError::Mouse, move || {
            connect()?.scroll(length, axis).map_err(|e| e.to_string())
        })
        .await
    }
}

#[async_trait]
impl Keyboard for NativeInput {
    async fn press_keys(&self, keys: &[KeyCode]) -> Result<(), BackendError> {
        let keys = keys
            .iter()
            .map(|k| to_enigo_key(*k))
            .collect::<Result<Vec<_>, _>>()?;
        run_blocking(BackendError::Keyboard, move || {
            let mut enigo = connect()?;
            for key in keys {
                enigo.key(key, Direction::Press).map_err(|e| e.to_string())?;
            }
            Ok(())
        })
        .await
    }

    async fn release_keys(&self, keys: &[KeyCode]) -> Result<(), BackendError> {
        let keys = keys
            .iter()
            .map(|k| to_enigo_key(*k))
            .collect::<Result<Vec<_>, _>>()?;
        run_blocking(BackendError::Keyboard, move || {
            let mut enigo = connect()?;
            // Modifiers go up last.
            for key in keys.into_iter().rev() {
                enigo
                    .key(key, Direction::Release)
                    .map_err(|e| e.to_string())?;
            }
            Ok(())
        })
        .await
    }
}

/// Map a key code to the enigo key that types it.
pub fn to_enigo_key(key: KeyCode) -> Result<Key, BackendError> {
    let name = key.name();
    if name.len() == 1 {
        // Letter keys are named by their capital.
        if let Some(c) = name.chars().next().filter(char::is_ascii_uppercase) {
            return Ok(Key::Unicode(c.to_ascii_lowercase()));
        }
    }
    if let Some(digit) = name.strip_prefix("Num").and_then(|d| d.chars().next()) {
        if name.len() == 4 && digit.is_ascii_digit() {
            return Ok(Key::Unicode(digit));
        }
    }

    let mapped = match key {
        KeyCode::Grave => Key::Unicode('`'),
        KeyCode::Minus => Key::Unicode('-'),
        KeyCode::Equal => Key::Unicode('='),
        KeyCode::LeftBracket => Key::Unicode('['),
        KeyCode::RightBracket => Key::Unicode(']'),
        KeyCode::Backslash => Key::Unicode('\\'),
        KeyCode::Semicolon => Key::Unicode(';'),
        KeyCode::Quote => Key::Unicode('\''),
        KeyCode::Comma => Key::Unicode(','),
        KeyCode::Period => Key::Unicode('.'),
        KeyCode::Slash => Key::Unicode('/'),

        KeyCode::Return | KeyCode::NumPadEnter => Key::Return,
        KeyCode::Tab => Key::Tab,
        KeyCode::Space => Key::Space,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Escape => Key::Escape,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Up => Key::UpArrow,
        KeyCode::Down => Key::DownArrow,
        KeyCode::Left => Key::LeftArrow,
        KeyCode::Right => Key::RightArrow,
        KeyCode::CapsLock => Key::CapsLock,

        KeyCode::LeftControl | KeyCode::RightControl => Key::Control,
        KeyCode::LeftShift | KeyCode::RightShift => Key::Shift,
        KeyCode::LeftAlt | KeyCode::RightAlt => Key::Alt,
        KeyCode::LeftSuper
        | KeyCode::LeftWin
        | KeyCode::LeftCmd
        | KeyCode::LeftMeta
        | KeyCode::RightSuper
        | KeyCode::RightWin
        | KeyCode::RightCmd
        | KeyCode::RightMeta => Key::Meta,

        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,

        other => {
            return Err(BackendError::Keyboard(format!(
                "Key {} not supported by the native backend",
                other
            )));
        }
    };
    Ok(mapped)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
