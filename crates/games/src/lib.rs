//! Example games built on the grid display facade.
//!
//! Each game is generic over the [`Backend`](gridgame_core::Backend), so the
//! same loop runs in a terminal or against the headless backend in tests.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CATCH_SIZE` | 40 | Cells per side of the catch board |
//! | `CATCH_FPS` | 5 | Catch frame rate |
//! | `CHASE_WIDTH` x `CHASE_HEIGHT` | 80 x 50 | Chase board |
//! | `CHASE_FPS` | 30 | Chase frame rate |
//! | `CHASE_MOVE_EVERY` | 5 | Frames per opponent step |
//! | `BLINK_TICKS` | 5 | Ticks per game-over blink phase |

pub mod blink;
pub mod catch;
pub mod chase;
pub mod rng;

pub use gridgame_types as types;

pub use blink::GameOverBlink;
pub use catch::{CatchConfig, CatchGame};
pub use chase::{ChaseConfig, ChaseGame, ChaseStatus, Direction};
pub use rng::SimpleRng;

pub const CATCH_SIZE: u16 = 40;
pub const CATCH_FPS: f64 = 5.0;

pub const CHASE_WIDTH: u16 = 80;
pub const CHASE_HEIGHT: u16 = 50;
pub const CHASE_FPS: f64 = 30.0;
pub const CHASE_MOVE_EVERY: u32 = 5;

pub const BLINK_TICKS: u32 = 5;
