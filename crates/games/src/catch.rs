//! Catch: click the wandering square.
//!
//! A green square walks the grid one cell per frame in row-major order and
//! wraps around after the last cell. A LEFT click on the cell it currently
//! occupies ends the game, after which the board stays blank.

use tracing::info;

use gridgame_core::{Backend, GridGui};

use crate::types::{ColorName, GridPos, MouseButton, Result};
use crate::{CATCH_FPS, CATCH_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct CatchConfig {
    /// Cells per side.
    pub size: u16,
    pub cell_size: (u16, u16),
    pub fps: f64,
}

impl Default for CatchConfig {
    fn default() -> Self {
        Self {
            size: CATCH_SIZE,
            cell_size: (2, 1),
            fps: CATCH_FPS,
        }
    }
}

impl CatchConfig {
    pub fn with_size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    pub fn with_cell_size(mut self, cell_size: (u16, u16)) -> Self {
        self.cell_size = cell_size;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CatchGame {
    n: u16,
    step: u32,
    over: bool,
}

impl CatchGame {
    pub fn new(n: u16) -> Self {
        Self {
            n: n.max(1),
            step: 0,
            over: false,
        }
    }

    pub fn from_config(config: &CatchConfig) -> Self {
        Self::new(config.size)
    }

    /// The cell the square occupies right now.
    pub fn square(&self) -> GridPos {
        let n = self.n as u32;
        GridPos::new((self.step % n) as u16, (self.step / n) as u16)
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// One frame: handle clicks, redraw, tick.
    pub fn frame<B: Backend>(&mut self, gui: &mut GridGui<B>) -> Result<()> {
        let target = self.square();
        for click in gui.get_clicks()? {
            if click.button == MouseButton::Left && click.pos == target && !self.over {
                info!(%target, "square caught");
                self.over = true;
            }
        }

        gui.fill(ColorName::White)?;
        if !self.over {
            let cells = self.n as u32 * self.n as u32;
            self.step = (self.step + 1) % cells;
            gui.color_square(self.square(), ColorName::Green)?;
        }
        gui.tick()
    }

    /// Run frames until quit is requested.
    pub fn run<B: Backend>(&mut self, gui: &mut GridGui<B>) -> Result<()> {
        while !gui.quit_requested() {
            self.frame(gui)?;
        }
        Ok(())
    }
}
