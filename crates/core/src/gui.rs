//! GridGui: the grid display facade.
//!
//! Owns the pixel surface, the cell-to-pixel mapping and two event buffers
//! (key presses, clicks) that accumulate between drains. Every public call
//! except `color_square` refreshes: it pulls pending input from the backend
//! into the buffers and presents the surface.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::backend::Backend;
use crate::pacing::FramePacer;
use crate::surface::Surface;
use crate::types::{
    CellSize, Click, GridError, GridSize, IntoColor, IntoGridPos, Key, RawEvent, Result,
    BACKGROUND,
};

pub struct GridGui<B: Backend> {
    grid: GridSize,
    cell: CellSize,
    surface: Surface,
    pacer: FramePacer,
    key_presses: Vec<Key>,
    clicks: Vec<Click>,
    quit_requested: bool,
    scratch: Vec<RawEvent>,
    backend: B,
}

impl<B: Backend> GridGui<B> {
    /// Create a facade with a `dimensions` grid of cells, each `cell_size`
    /// pixels, drawn through `backend`.
    ///
    /// The surface starts white and the frame rate starts at 30.
    pub fn new(dimensions: (u16, u16), cell_size: (u16, u16), backend: B) -> Result<Self> {
        let (w, h) = dimensions;
        let (cw, ch) = cell_size;
        if w == 0 || h == 0 {
            return Err(GridError::InvalidArgument(format!(
                "both dimensions must be positive, got ({w}, {h})"
            )));
        }
        if cw == 0 || ch == 0 {
            return Err(GridError::InvalidArgument(format!(
                "both dimensions of cell_size must be positive, got ({cw}, {ch})"
            )));
        }

        let px_w = w as u32 * cw as u32;
        let px_h = h as u32 * ch as u32;
        if px_w > u16::MAX as u32 || px_h > u16::MAX as u32 {
            return Err(GridError::InvalidArgument(format!(
                "surface of {px_w}x{px_h} pixels is too large"
            )));
        }

        debug!(w, h, cw, ch, "creating grid display");
        Ok(Self {
            grid: GridSize::new(w, h),
            cell: CellSize::new(cw, ch),
            surface: Surface::new(px_w, px_h, BACKGROUND),
            pacer: FramePacer::new(),
            key_presses: Vec::new(),
            clicks: Vec::new(),
            quit_requested: false,
            scratch: Vec::new(),
            backend,
        })
    }

    pub fn dimensions(&self) -> GridSize {
        self.grid
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn fps(&self) -> f64 {
        self.pacer.fps()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Whether the input source delivered a quit notification.
    ///
    /// Sticky: once set it stays set. Game loops should check it every frame
    /// and return.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Set the frame rate used by [`tick`](Self::tick). Valid values are
    /// `0 < fps <= 60`.
    pub fn set_fps(&mut self, fps: impl Into<f64>) -> Result<()> {
        self.pacer.set_fps(fps.into())
    }

    /// Paint the whole surface, discarding earlier drawing.
    pub fn fill(&mut self, color: impl IntoColor) -> Result<()> {
        let rgb = color.resolve()?;
        self.surface.fill(rgb);
        self.refresh()
    }

    /// Paint one cell. Other cells are untouched and nothing is presented.
    pub fn color_square(&mut self, position: impl IntoGridPos, color: impl IntoColor) -> Result<()> {
        let pos = position.into_grid_pos()?;
        if !self.grid.contains(pos) {
            return Err(GridError::InvalidPosition(format!(
                "{pos} is outside the grid; valid positions run from (0, 0) inclusive to ({}, {}) exclusive",
                self.grid.width, self.grid.height
            )));
        }
        let rgb = color.resolve()?;
        let px = self.cell.to_pixel(pos);
        self.surface.fill_rect(
            px.x,
            px.y,
            self.cell.width as u32,
            self.cell.height as u32,
            rgb,
        );
        Ok(())
    }

    /// Keys held down right now, in table order.
    ///
    /// Queried fresh on each call; the key-press buffer is left alone.
    pub fn get_currently_pressed_keys(&mut self) -> Result<Vec<Key>> {
        self.refresh()?;
        let mut keys = self.backend.pressed_keys();
        keys.sort_unstable();
        keys.dedup();
        Ok(keys)
    }

    /// Keys that went down since the last call, in event order.
    pub fn get_key_presses(&mut self) -> Result<Vec<Key>> {
        self.refresh()?;
        let keys = std::mem::take(&mut self.key_presses);
        self.refresh()?;
        Ok(keys)
    }

    /// Clicks since the last call, in arrival order.
    pub fn get_clicks(&mut self) -> Result<Vec<Click>> {
        self.refresh()?;
        let clicks = std::mem::take(&mut self.clicks);
        self.refresh()?;
        Ok(clicks)
    }

    /// Present the frame, collect input, then block for what is left of
    /// `1 / fps` seconds.
    ///
    /// Call once after every completed screen update.
    pub fn tick(&mut self) -> Result<()> {
        self.refresh()?;
        let now = Instant::now();
        let wait = self.pacer.remaining(now);
        trace!(wait_us = wait.as_micros() as u64, "frame pacing");
        self.backend.sleep(wait);
        self.pacer.mark(now + wait);
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.enqueue_events()?;
        self.backend.present(&self.surface)?;
        Ok(())
    }

    fn enqueue_events(&mut self) -> Result<()> {
        let mut events = std::mem::take(&mut self.scratch);
        events.clear();
        let polled = self.backend.poll_events(&mut events);

        for event in events.drain(..) {
            match event {
                RawEvent::Quit => {
                    if !self.quit_requested {
                        info!("quit requested");
                    }
                    self.quit_requested = true;
                }
                RawEvent::KeyDown(key) => self.key_presses.push(key),
                RawEvent::MouseUp { button, pos } => {
                    match self.cell.to_grid(pos).filter(|p| self.grid.contains(*p)) {
                        Some(cell) => self.clicks.push(Click::new(cell, button)),
                        None => debug!(x = pos.x, y = pos.y, "click outside the grid dropped"),
                    }
                }
                RawEvent::KeyUp(_) | RawEvent::Resize => {}
            }
        }

        self.scratch = events;
        polled?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;
    use crate::types::{MouseButton, Rgb};

    fn gui(w: u16, h: u16, cw: u16, ch: u16) -> GridGui<HeadlessBackend> {
        GridGui::new((w, h), (cw, ch), HeadlessBackend::new()).unwrap()
    }

    #[test]
    fn surface_is_sized_by_cells_and_starts_white() {
        let g = gui(40, 40, 30, 30);
        assert_eq!(g.surface().width(), 1200);
        assert_eq!(g.surface().height(), 1200);
        assert!(g.surface().rect_is(0, 0, 1200, 1200, BACKGROUND));
        assert_eq!(g.fps(), 30.0);
    }

    #[test]
    fn rejects_zero_dimensions() {
        for (dims, cell) in [((0, 10), (5, 5)), ((10, 0), (5, 5)), ((10, 10), (5, 0)), ((10, 10), (0, 5))] {
            let err = GridGui::new(dims, cell, HeadlessBackend::new()).err().unwrap();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn rejects_surfaces_that_do_not_fit() {
        let err = GridGui::new((1000, 10), (100, 1), HeadlessBackend::new()).err().unwrap();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn fill_presents_and_color_square_does_not() {
        let mut g = gui(4, 4, 2, 1);
        g.fill("black").unwrap();
        assert_eq!(g.backend().present_count(), 1);

        g.color_square((1, 1), "red").unwrap();
        assert_eq!(g.backend().present_count(), 1);
        assert_eq!(g.surface().get(2, 1), Some(Rgb::new(255, 0, 0)));
        assert_eq!(
            g.backend().presented().unwrap().get(2, 1),
            Some(Rgb::new(0, 0, 0))
        );
    }

    #[test]
    fn quit_sets_a_sticky_flag() {
        let mut g = gui(3, 3, 1, 1);
        g.backend_mut().quit();
        assert!(!g.quit_requested());
        g.tick().unwrap();
        assert!(g.quit_requested());
        g.tick().unwrap();
        assert!(g.quit_requested());
    }

    #[test]
    fn key_up_does_not_enter_the_press_buffer() {
        let mut g = gui(3, 3, 1, 1);
        g.backend_mut().press(Key::A);
        g.backend_mut().release(Key::A);
        assert_eq!(g.get_key_presses().unwrap(), vec![Key::A]);
    }

    #[test]
    fn click_outside_the_surface_is_dropped() {
        let mut g = gui(3, 3, 2, 1);
        g.backend_mut().click(MouseButton::Left, 6, 0);
        g.backend_mut().click(MouseButton::Left, 5, 2);
        let clicks = g.get_clicks().unwrap();
        assert_eq!(clicks.len(), 1);
        assert_eq!(clicks[0].pos, (2, 2));
    }

    #[test]
    fn tick_waits_one_frame_interval_when_idle() {
        let mut g = gui(3, 3, 1, 1);
        g.set_fps(10).unwrap();
        g.tick().unwrap();
        g.tick().unwrap();
        let slept = g.backend().slept();
        assert_eq!(slept.len(), 2);
        assert!(slept.iter().all(|d| *d <= std::time::Duration::from_millis(100)));
        assert!(slept[1] > std::time::Duration::from_millis(90));
    }
}
