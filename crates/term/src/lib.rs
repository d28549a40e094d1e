//! Terminal backend for the grid display.
//!
//! Renders the facade's pixel surface into a framebuffer of terminal cells
//! (one pixel per cell, drawn as a colored space) and flushes only the cells
//! that changed. Keyboard and mouse input come from crossterm.
//!
//! Pixels are taller than they are wide, so a cell size of `(2, 1)` gives
//! roughly square grid cells.

pub mod backend;
pub mod fb;
pub mod renderer;
pub mod view;

pub use gridgame_core as core;
pub use gridgame_types as types;

pub use backend::{fit_within, terminal_size, TerminalBackend};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{SurfaceView, Viewport};

use gridgame_core::GridGui;
use gridgame_types::Result;

/// Construct a [`GridGui`] drawn in the current terminal.
pub trait TerminalGui: Sized {
    /// Take over the terminal and create a `dimensions` grid of
    /// `cell_size`-pixel cells. The terminal is restored when the facade is
    /// dropped.
    fn terminal(dimensions: (u16, u16), cell_size: (u16, u16)) -> Result<Self>;
}

impl TerminalGui for GridGui<TerminalBackend> {
    fn terminal(dimensions: (u16, u16), cell_size: (u16, u16)) -> Result<Self> {
        let backend = TerminalBackend::new()?;
        GridGui::new(dimensions, cell_size, backend)
    }
}
