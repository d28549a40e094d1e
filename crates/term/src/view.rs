//! SurfaceView: maps a pixel `Surface` into a terminal framebuffer.
//!
//! This module is pure (no I/O). One surface pixel is one terminal cell,
//! drawn as a space on the pixel's color. The surface origin sits at the
//! top-left of the terminal; whatever does not fit is clipped.

use gridgame_core::Surface;

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct SurfaceView {
    backdrop: Rgb,
}

impl Default for SurfaceView {
    fn default() -> Self {
        Self {
            backdrop: Rgb::new(40, 40, 40),
        }
    }
}

impl SurfaceView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of the terminal area not covered by the surface.
    pub fn with_backdrop(mut self, backdrop: Rgb) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn backdrop(&self) -> Rgb {
        self.backdrop
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, surface: &Surface, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::solid(self.backdrop).into_cell(' '));

        let cols = surface.width().min(viewport.width as u32) as usize;
        let rows = surface.height().min(viewport.height as u32);
        let stride = surface.width() as usize;

        for y in 0..rows {
            let start = y as usize * stride;
            let row = &surface.pixels()[start..start + cols];
            fb.put_row(
                0,
                y as u16,
                row.iter().map(|&px| CellStyle::solid(px).into_cell(' ')),
            );
        }
    }

    pub fn render(&self, surface: &Surface, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(surface, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn bg_at(fb: &FrameBuffer, x: u16, y: u16) -> Rgb {
        fb.get(x, y).unwrap().style.bg
    }

    #[test]
    fn pixels_map_one_to_one_from_the_top_left() {
        let mut s = Surface::new(4, 2, WHITE);
        s.set(3, 1, RED);

        let fb = SurfaceView::new().render(&s, Viewport::new(6, 3));
        assert_eq!(bg_at(&fb, 0, 0), WHITE);
        assert_eq!(bg_at(&fb, 3, 1), RED);
        assert_eq!(fb.get(3, 1).unwrap().ch, ' ');
    }

    #[test]
    fn area_outside_the_surface_gets_the_backdrop() {
        let s = Surface::new(2, 2, WHITE);
        let backdrop = Rgb::new(1, 2, 3);
        let fb = SurfaceView::new()
            .with_backdrop(backdrop)
            .render(&s, Viewport::new(4, 3));
        assert_eq!(bg_at(&fb, 2, 0), backdrop);
        assert_eq!(bg_at(&fb, 0, 2), backdrop);
        assert_eq!(bg_at(&fb, 1, 1), WHITE);
    }

    #[test]
    fn oversize_surface_is_clipped() {
        let mut s = Surface::new(10, 10, WHITE);
        s.set(2, 1, RED);
        let fb = SurfaceView::new().render(&s, Viewport::new(3, 2));
        assert_eq!((fb.width(), fb.height()), (3, 2));
        assert_eq!(bg_at(&fb, 2, 1), RED);
    }
}
