//! Grid game display (workspace facade crate).
//!
//! A tiny grid display for teaching-sized games: a grid of colored cells,
//! keyboard and mouse input in grid coordinates, and a frame-rate-capped
//! tick. The implementation lives in dedicated crates under `crates/`:
//!
//! - [`types`]: colors, keys, buttons, coordinates, errors
//! - [`core`]: the `GridGui` facade, its surface and the `Backend` seam
//! - [`input`]: crossterm event mapping and held-key tracking
//! - [`term`]: the terminal backend
//! - [`games`]: the catch and chase example games

pub mod logging;

pub use gridgame_core as core;
pub use gridgame_games as games;
pub use gridgame_input as input;
pub use gridgame_term as term;
pub use gridgame_types as types;
