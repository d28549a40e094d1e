//! Catch: click the moving green square with the left mouse button.
//!
//! Ctrl+C quits.

use anyhow::Result;

use gridgame::core::GridGui;
use gridgame::games::{CatchConfig, CatchGame};
use gridgame::logging;
use gridgame::term::{fit_within, terminal_size, TerminalBackend, TerminalGui};

fn main() -> Result<()> {
    logging::init()?;

    let defaults = CatchConfig::default();
    let (w, h) = fit_within((defaults.size, defaults.size), defaults.cell_size, terminal_size());
    let config = defaults.with_size(w.min(h));

    let mut gui: GridGui<TerminalBackend> =
        GridGui::terminal((config.size, config.size), config.cell_size)?;
    gui.set_fps(config.fps)?;

    let result = CatchGame::from_config(&config).run(&mut gui);

    let restored = gui.backend_mut().restore();
    result?;
    restored?;
    Ok(())
}
