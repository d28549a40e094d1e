//! Input events, raw (from a backend) and curated (handed to callers).

use std::fmt;

use crate::geom::{GridPos, PixelPos};
use crate::key::Key;

/// Mouse buttons that produce clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Map a raw button code (1 = left, 2 = middle, 3 = right).
    ///
    /// Wheel and extra buttons have no entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridgame_types::MouseButton;
    ///
    /// assert_eq!(MouseButton::from_code(1), Some(MouseButton::Left));
    /// assert_eq!(MouseButton::from_code(3), Some(MouseButton::Right));
    /// assert_eq!(MouseButton::from_code(4), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MouseButton::Left),
            2 => Some(MouseButton::Middle),
            3 => Some(MouseButton::Right),
            _ => None,
        }
    }

    /// `"LEFT"`, `"MIDDLE"` or `"RIGHT"`.
    pub fn name(&self) -> &'static str {
        match self {
            MouseButton::Left => "LEFT",
            MouseButton::Middle => "MIDDLE",
            MouseButton::Right => "RIGHT",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mouse click, already converted to the cell under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Click {
    pub pos: GridPos,
    pub button: MouseButton,
}

impl Click {
    pub const fn new(pos: GridPos, button: MouseButton) -> Self {
        Self { pos, button }
    }
}

/// A notification from the underlying input source.
///
/// Backends map their platform events into this set. Anything they cannot
/// map is dropped before it gets here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// The user asked to close the display.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// A mouse button was released at a surface pixel.
    MouseUp { button: MouseButton, pos: PixelPos },
    /// The display changed size and must be fully redrawn.
    Resize,
}
