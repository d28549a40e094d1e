//! Input test: a manual check of keyboard and mouse mapping.
//!
//! - Clicks paint the clicked cell: LEFT red, MIDDLE green, RIGHT blue.
//! - The top row shows one yellow cell per key held down.
//! - SPACE clears the board.
//!
//! Run with `GRIDGAME_LOG=input.log` to get every event in the log file.
//! Ctrl+C quits.

use anyhow::Result;
use tracing::info;

use gridgame::core::GridGui;
use gridgame::logging;
use gridgame::term::{fit_within, terminal_size, TerminalBackend, TerminalGui};
use gridgame::types::{ColorName, GridPos, Key, MouseButton};

const CELL: (u16, u16) = (2, 1);

fn main() -> Result<()> {
    logging::init()?;

    let dims = fit_within((16, 12), CELL, terminal_size());
    let mut gui: GridGui<TerminalBackend> = GridGui::terminal(dims, CELL)?;
    gui.set_fps(30)?;

    let result = run(&mut gui);

    let restored = gui.backend_mut().restore();
    result?;
    restored?;
    Ok(())
}

fn run(gui: &mut GridGui<TerminalBackend>) -> Result<()> {
    let size = gui.dimensions();
    let mut held_before: Vec<Key> = Vec::new();
    gui.fill(ColorName::White)?;

    while !gui.quit_requested() {
        for key in gui.get_key_presses()? {
            info!(key = key.name(), "key press");
            if key == Key::Space {
                gui.fill(ColorName::White)?;
            }
        }

        for click in gui.get_clicks()? {
            info!(pos = %click.pos, button = click.button.name(), "click");
            let color = match click.button {
                MouseButton::Left => ColorName::Red,
                MouseButton::Middle => ColorName::Green,
                MouseButton::Right => ColorName::Blue,
            };
            gui.color_square(click.pos, color)?;
        }

        let held = gui.get_currently_pressed_keys()?;
        if held != held_before {
            let names: Vec<&str> = held.iter().map(|k| k.name()).collect();
            info!(?names, "held keys changed");
            held_before = held;
        }
        for x in 0..size.width {
            let color = if (x as usize) < held_before.len() {
                ColorName::Yellow
            } else {
                ColorName::White
            };
            gui.color_square(GridPos::new(x, 0), color)?;
        }

        gui.tick()?;
    }
    Ok(())
}
