//! In-memory pixel surface.

use crate::types::Rgb;

/// Row-major grid of RGB pixels.
///
/// Drawing writes pixels immediately. Nothing becomes visible until a backend
/// presents the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Surface {
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    /// Overwrite with `other`, reusing this surface's allocation.
    pub fn copy_from(&mut self, other: &Surface) {
        self.width = other.width;
        self.height = other.height;
        self.pixels.clear();
        self.pixels.extend_from_slice(&other.pixels);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = rgb;
        }
    }

    pub fn fill(&mut self, rgb: Rgb) {
        self.pixels.fill(rgb);
    }

    /// Paint a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, rgb: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end || y >= y_end {
            return;
        }
        let stride = self.width as usize;
        for row in y..y_end {
            let start = row as usize * stride + x as usize;
            let end = row as usize * stride + x_end as usize;
            self.pixels[start..end].fill(rgb);
        }
    }

    /// Whether every pixel of the rectangle has color `rgb`.
    ///
    /// Pixels outside the surface do not count.
    pub fn rect_is(&self, x: u32, y: u32, w: u32, h: u32, rgb: Rgb) -> bool {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        (y..y_end).all(|py| (x..x_end).all(|px| self.get(px, py) == Some(rgb)))
    }
}
