//! Frame pacing: cap the caller's loop at a target frame rate.

use std::time::{Duration, Instant};

use crate::types::{GridError, Result, DEFAULT_FPS, MAX_FPS};

/// Tracks when the last frame ended and how long the next one must wait.
#[derive(Debug, Clone)]
pub struct FramePacer {
    fps: f64,
    last_frame: Instant,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            fps: DEFAULT_FPS,
            last_frame: now,
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Accepts finite rates with `0 < fps <= MAX_FPS`.
    pub fn set_fps(&mut self, fps: f64) -> Result<()> {
        if !fps.is_finite() {
            return Err(GridError::InvalidArgument(format!(
                "fps must be a number, got {fps}"
            )));
        }
        if fps <= 0.0 || fps > MAX_FPS {
            return Err(GridError::InvalidArgument(format!(
                "fps must be greater than 0 and at most {MAX_FPS}, got {fps}"
            )));
        }
        self.fps = fps;
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps)
    }

    /// How long to block at `now` so the current frame lasts one interval.
    pub fn remaining(&self, now: Instant) -> Duration {
        let spent = now.saturating_duration_since(self.last_frame);
        self.frame_interval().saturating_sub(spent)
    }

    /// Record that a frame ended at `at`.
    pub fn mark(&mut self, at: Instant) {
        self.last_frame = at;
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}
