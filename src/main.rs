//! Chase (default binary).
//!
//! Steer the green square onto the black one with the arrow keys. Ctrl+C
//! quits.

use anyhow::Result;

use gridgame::core::GridGui;
use gridgame::games::{ChaseConfig, ChaseGame, SimpleRng};
use gridgame::logging;
use gridgame::term::{fit_within, terminal_size, TerminalBackend, TerminalGui};

fn main() -> Result<()> {
    logging::init()?;

    let defaults = ChaseConfig::default();
    let (w, h) = fit_within(
        (defaults.width, defaults.height),
        defaults.cell_size,
        terminal_size(),
    );
    let config = defaults.with_dimensions(w, h);

    let mut gui: GridGui<TerminalBackend> = GridGui::terminal((w, h), config.cell_size)?;
    gui.set_fps(config.fps)?;

    let result = ChaseGame::from_config(&config, SimpleRng::from_clock()).run(&mut gui);

    // Always try to restore terminal state.
    let restored = gui.backend_mut().restore();
    result?;
    restored?;
    Ok(())
}
