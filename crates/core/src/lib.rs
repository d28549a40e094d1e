//! Grid display core: the facade and everything it owns.
//!
//! This crate has no dependency on a particular terminal or window library.
//! A [`Backend`] supplies presentation, raw input and sleeping. The facade
//! turns those into grid-level operations:
//!
//! - [`gui`]: `GridGui`, the facade programs talk to
//! - [`surface`]: the in-memory pixel surface
//! - [`pacing`]: frame-rate capping for `tick`
//! - [`backend`]: the `Backend` trait and a scripted `HeadlessBackend`
//!
//! # Example
//!
//! ```
//! use gridgame_core::{GridGui, HeadlessBackend};
//! use gridgame_types::{Key, MouseButton, Rgb};
//!
//! let mut gui = GridGui::new((10, 8), (2, 1), HeadlessBackend::new()).unwrap();
//! gui.set_fps(60).unwrap();
//!
//! gui.fill("white").unwrap();
//! gui.color_square((3, 4), "green").unwrap();
//! assert_eq!(gui.surface().get(6, 4), Some(Rgb::new(0, 255, 0)));
//!
//! // Input arrives through the backend and is drained in order.
//! gui.backend_mut().press(Key::Space);
//! gui.backend_mut().click(MouseButton::Left, 7, 4);
//! gui.tick().unwrap();
//!
//! assert_eq!(gui.get_key_presses().unwrap(), vec![Key::Space]);
//! let clicks = gui.get_clicks().unwrap();
//! assert_eq!(clicks[0].pos, (3, 4));
//! assert_eq!(clicks[0].button.name(), "LEFT");
//! ```

pub mod backend;
pub mod gui;
pub mod pacing;
pub mod surface;

pub use gridgame_types as types;

pub use backend::{Backend, HeadlessBackend};
pub use gui::GridGui;
pub use pacing::FramePacer;
pub use surface::Surface;
