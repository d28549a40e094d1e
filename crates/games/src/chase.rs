//! Chase: steer the green player onto the black opponent.
//!
//! The opponent drifts one cell every few frames in its current direction
//! and picks a new random direction now and then, much sooner when it is
//! against an edge. The player moves one cell per frame for each held arrow
//! key. Catching the opponent ends the chase and starts the blink animation.

use tracing::{debug, info};

use gridgame_core::{Backend, GridGui};

use crate::blink::GameOverBlink;
use crate::rng::SimpleRng;
use crate::types::{ColorName, GridPos, Key, Result};
use crate::{BLINK_TICKS, CHASE_FPS, CHASE_HEIGHT, CHASE_MOVE_EVERY, CHASE_WIDTH};

/// Extra direction-change pressure for ending a move on an edge.
const EDGE_PENALTY: u32 = 10;
/// The direction changes once the counter goes past this.
const CHANGE_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ChaseConfig {
    pub width: u16,
    pub height: u16,
    pub cell_size: (u16, u16),
    pub fps: f64,
    /// The opponent moves on every `move_every`-th frame.
    pub move_every: u32,
    /// Ticks per phase of the game-over animation.
    pub blink_ticks: u32,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            width: CHASE_WIDTH,
            height: CHASE_HEIGHT,
            cell_size: (2, 1),
            fps: CHASE_FPS,
            move_every: CHASE_MOVE_EVERY,
            blink_ticks: BLINK_TICKS,
        }
    }
}

impl ChaseConfig {
    pub fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_cell_size(mut self, cell_size: (u16, u16)) -> Self {
        self.cell_size = cell_size;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    fn random(rng: &mut SimpleRng) -> Self {
        Self::ALL[rng.next_range(4) as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaseStatus {
    Running,
    Caught,
}

#[derive(Debug, Clone)]
pub struct ChaseGame {
    width: u16,
    height: u16,
    player: GridPos,
    opponent: GridPos,
    direction: Direction,
    motion_counter: u32,
    change_counter: u32,
    move_every: u32,
    blink_ticks: u32,
    rng: SimpleRng,
}

impl ChaseGame {
    /// Player in the centre, opponent at a random offset of up to a third
    /// of the grid in each axis.
    pub fn new(width: u16, height: u16, mut rng: SimpleRng) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let player = GridPos::new(width / 2, height / 2);

        let dx = rng.range_inclusive(-third_up(width), (width / 3) as i32);
        let dy = rng.range_inclusive(-third_up(height), (height / 3) as i32);
        let opponent = GridPos::new(
            clamp_axis(player.x as i32 + dx, width),
            clamp_axis(player.y as i32 + dy, height),
        );
        let direction = Direction::random(&mut rng);
        debug!(%player, %opponent, direction = direction.as_str(), "chase set up");

        Self {
            width,
            height,
            player,
            opponent,
            direction,
            motion_counter: 0,
            change_counter: 0,
            move_every: CHASE_MOVE_EVERY,
            blink_ticks: BLINK_TICKS,
            rng,
        }
    }

    pub fn from_config(config: &ChaseConfig, rng: SimpleRng) -> Self {
        let mut game = Self::new(config.width, config.height, rng);
        game.move_every = config.move_every.max(1);
        game.blink_ticks = config.blink_ticks;
        game
    }

    /// Put both pieces at known cells, clamped to the grid.
    pub fn place(&mut self, player: GridPos, opponent: GridPos, direction: Direction) {
        self.player = self.clamp(player);
        self.opponent = self.clamp(opponent);
        self.direction = direction;
        self.motion_counter = 0;
        self.change_counter = 0;
    }

    pub fn player(&self) -> GridPos {
        self.player
    }

    pub fn opponent(&self) -> GridPos {
        self.opponent
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn change_counter(&self) -> u32 {
        self.change_counter
    }

    /// One frame: draw, check for a catch, move both pieces, tick.
    ///
    /// A catch returns before anything moves or ticks.
    pub fn step<B: Backend>(&mut self, gui: &mut GridGui<B>) -> Result<ChaseStatus> {
        gui.fill(ColorName::White)?;
        gui.color_square(self.player, ColorName::Green)?;
        gui.color_square(self.opponent, ColorName::Black)?;

        if self.player == self.opponent {
            info!(at = %self.player, "opponent caught");
            return Ok(ChaseStatus::Caught);
        }

        self.motion_counter += 1;
        if self.motion_counter >= self.move_every {
            self.motion_counter = 0;
            self.move_opponent();
        }

        let keys = gui.get_currently_pressed_keys()?;
        self.move_player(&keys);

        gui.tick()?;
        Ok(ChaseStatus::Running)
    }

    /// Chase until caught, then blink until quit. Returns early on quit.
    pub fn run<B: Backend>(&mut self, gui: &mut GridGui<B>) -> Result<()> {
        while !gui.quit_requested() {
            if self.step(gui)? == ChaseStatus::Caught {
                return GameOverBlink::new(self.blink_ticks).run(gui);
            }
        }
        Ok(())
    }

    fn move_opponent(&mut self) {
        let GridPos { x, y } = self.opponent;
        self.opponent = match self.direction {
            Direction::Left => GridPos::new(x.saturating_sub(1), y),
            Direction::Right => GridPos::new((x + 1).min(self.width - 1), y),
            Direction::Up => GridPos::new(x, y.saturating_sub(1)),
            Direction::Down => GridPos::new(x, (y + 1).min(self.height - 1)),
        };

        if self.on_edge(self.opponent) {
            self.change_counter += EDGE_PENALTY;
        }
        self.change_counter += 1;
        if self.change_counter > CHANGE_THRESHOLD {
            self.change_counter = 0;
            self.direction = Direction::random(&mut self.rng);
            debug!(direction = self.direction.as_str(), "opponent turns");
        }
    }

    fn move_player(&mut self, keys: &[Key]) {
        let GridPos { mut x, mut y } = self.player;
        if keys.contains(&Key::Up) {
            y = y.saturating_sub(1);
        }
        if keys.contains(&Key::Down) {
            y = (y + 1).min(self.height - 1);
        }
        if keys.contains(&Key::Left) {
            x = x.saturating_sub(1);
        }
        if keys.contains(&Key::Right) {
            x = (x + 1).min(self.width - 1);
        }
        self.player = GridPos::new(x, y);
    }

    fn on_edge(&self, pos: GridPos) -> bool {
        pos.x == 0 || pos.x == self.width - 1 || pos.y == 0 || pos.y == self.height - 1
    }

    fn clamp(&self, pos: GridPos) -> GridPos {
        GridPos::new(pos.x.min(self.width - 1), pos.y.min(self.height - 1))
    }
}

/// `ceil(n / 3)`: the magnitude of the negative offset bound, so the range
/// matches floor division of `-n` by three.
fn third_up(n: u16) -> i32 {
    (n as i32 + 2) / 3
}

fn clamp_axis(v: i32, len: u16) -> u16 {
    v.clamp(0, len as i32 - 1) as u16
}
