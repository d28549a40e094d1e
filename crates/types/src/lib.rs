//! Shared types for the grid display - pure data with no I/O.
//!
//! Everything here can be used from the facade, the terminal backend and the
//! example games alike. Raw platform input is translated into this vocabulary
//! before it reaches the facade.
//!
//! # Coordinates
//!
//! - **Grid coordinate** ([`GridPos`]): one addressable cell, `(0, 0)` is the
//!   top-left cell.
//! - **Pixel coordinate** ([`PixelPos`]): derived from a grid coordinate by
//!   multiplying with the cell size. Clicks travel the other way, by integer
//!   division.
//!
//! # Colors
//!
//! | Name | RGB |
//! |------|-----|
//! | `white` | 255, 255, 255 |
//! | `black` | 0, 0, 0 |
//! | `red` | 255, 0, 0 |
//! | `green` | 0, 255, 0 |
//! | `blue` | 0, 0, 255 |
//! | `yellow` | 255, 255, 0 |
//! | `pink` | 255, 20, 147 |
//! | `purple` | 128, 0, 128 |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 30 | Frame rate of a new facade |
//! | `MAX_FPS` | 60 | Highest accepted frame rate (inclusive) |
//! | `DEFAULT_KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without release events |
//! | `DEFAULT_FIRST_REPEAT_TIMEOUT_MS` | 600 | Hold window before the first auto-repeat arrives |
//!
//! # Examples
//!
//! ```
//! use gridgame_types::{CellSize, Color, ColorName, GridPos, IntoColor, Key, Rgb};
//!
//! // Colors resolve once, from a name or a triple.
//! assert_eq!("red".resolve().unwrap(), Rgb::new(255, 0, 0));
//! assert_eq!(IntoColor::resolve((0, 0, 255)).unwrap(), Rgb::new(0, 0, 255));
//! assert!("chartreuse".resolve().is_err());
//! assert_eq!(Color::Named(ColorName::Pink).to_rgb(), Rgb::new(255, 20, 147));
//!
//! // Grid <-> pixel mapping.
//! let cell = CellSize::new(2, 1);
//! let px = cell.to_pixel(GridPos::new(3, 4));
//! assert_eq!((px.x, px.y), (6, 4));
//! assert_eq!(cell.to_grid(px), Some(GridPos::new(3, 4)));
//!
//! // Symbolic key names.
//! assert_eq!(Key::Up.name(), "UP");
//! assert_eq!(Key::from_name("kp5"), Some(Key::Kp5));
//! ```

pub mod color;
pub mod error;
pub mod event;
pub mod geom;
pub mod key;

pub use color::{Color, ColorName, IntoColor, Rgb};
pub use error::{GridError, Result};
pub use event::{Click, MouseButton, RawEvent};
pub use geom::{CellSize, GridPos, GridSize, IntoGridPos, PixelPos};
pub use key::Key;

/// Frame rate a facade starts with.
pub const DEFAULT_FPS: f64 = 30.0;

/// Highest accepted frame rate. The bound is inclusive.
pub const MAX_FPS: f64 = 60.0;

/// Auto-release delay for held keys when the terminal never reports releases.
///
/// A short timeout keeps a single tap from turning into a sustained "held"
/// state.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// How long a freshly pressed key stays held while waiting for its first
/// auto-repeat. Must cover the OS repeat delay (typically 250-660 ms).
pub const DEFAULT_FIRST_REPEAT_TIMEOUT_MS: u32 = 600;

/// Upper bound on simultaneously tracked held keys.
pub const MAX_HELD_KEYS: usize = 16;

/// Color a new surface starts with.
pub const BACKGROUND: Rgb = Rgb::new(255, 255, 255);
