//! Grid and pixel geometry.

use std::fmt;

use crate::error::{GridError, Result};

/// Grid dimensions, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether `pos` addresses a cell of this grid.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }
}

/// Size of one cell, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl CellSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Top-left pixel of the cell at `pos`.
    pub fn to_pixel(&self, pos: GridPos) -> PixelPos {
        PixelPos {
            x: pos.x as u32 * self.width as u32,
            y: pos.y as u32 * self.height as u32,
        }
    }

    /// Cell containing pixel `px` (integer division by the cell size).
    ///
    /// Returns `None` for a zero-sized cell or when the cell index does not
    /// fit a grid coordinate.
    pub fn to_grid(&self, px: PixelPos) -> Option<GridPos> {
        let x = px.x.checked_div(self.width as u32)?;
        let y = px.y.checked_div(self.height as u32)?;
        Some(GridPos {
            x: u16::try_from(x).ok()?,
            y: u16::try_from(y).ok()?,
        })
    }
}

/// One addressable cell. `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridPos {
    pub x: u16,
    pub y: u16,
}

impl GridPos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u16, u16)> for GridPos {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

impl From<GridPos> for (u16, u16) {
    fn from(pos: GridPos) -> Self {
        (pos.x, pos.y)
    }
}

impl PartialEq<(u16, u16)> for GridPos {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.x == other.0 && self.y == other.1
    }
}

/// A pixel on the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPos {
    pub x: u32,
    pub y: u32,
}

impl PixelPos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Anything the facade accepts as a cell position.
///
/// Conversion checks shape and sign only. Whether the position lies inside a
/// particular grid is checked by the caller against its [`GridSize`].
pub trait IntoGridPos {
    fn into_grid_pos(self) -> Result<GridPos>;
}

fn from_components(x: i64, y: i64) -> Result<GridPos> {
    match (u16::try_from(x), u16::try_from(y)) {
        (Ok(x), Ok(y)) => Ok(GridPos { x, y }),
        _ => Err(GridError::InvalidPosition(format!(
            "({x}, {y}) is outside the grid"
        ))),
    }
}

impl IntoGridPos for GridPos {
    fn into_grid_pos(self) -> Result<GridPos> {
        Ok(self)
    }
}

impl IntoGridPos for (u16, u16) {
    fn into_grid_pos(self) -> Result<GridPos> {
        Ok(GridPos::new(self.0, self.1))
    }
}

impl IntoGridPos for (i32, i32) {
    fn into_grid_pos(self) -> Result<GridPos> {
        from_components(self.0 as i64, self.1 as i64)
    }
}

impl IntoGridPos for (usize, usize) {
    fn into_grid_pos(self) -> Result<GridPos> {
        let x = i64::try_from(self.0).unwrap_or(i64::MAX);
        let y = i64::try_from(self.1).unwrap_or(i64::MAX);
        from_components(x, y)
    }
}

impl IntoGridPos for [i32; 2] {
    fn into_grid_pos(self) -> Result<GridPos> {
        from_components(self[0] as i64, self[1] as i64)
    }
}

impl IntoGridPos for &[i32] {
    fn into_grid_pos(self) -> Result<GridPos> {
        match *self {
            [x, y] => from_components(x as i64, y as i64),
            _ => Err(GridError::InvalidPosition(format!(
                "position must have two components, not {}",
                self.len()
            ))),
        }
    }
}

impl IntoGridPos for &Vec<i32> {
    fn into_grid_pos(self) -> Result<GridPos> {
        self.as_slice().into_grid_pos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_pixel_round_trip_covers_every_cell() {
        let grid = GridSize::new(12, 7);
        for cell in [CellSize::new(1, 1), CellSize::new(2, 1), CellSize::new(30, 30)] {
            for y in 0..grid.height {
                for x in 0..grid.width {
                    let pos = GridPos::new(x, y);
                    assert_eq!(cell.to_grid(cell.to_pixel(pos)), Some(pos));
                }
            }
        }
    }

    #[test]
    fn any_pixel_inside_a_cell_maps_back_to_it() {
        let cell = CellSize::new(3, 2);
        let origin = cell.to_pixel(GridPos::new(4, 5));
        for dy in 0..2 {
            for dx in 0..3 {
                let px = PixelPos::new(origin.x + dx, origin.y + dy);
                assert_eq!(cell.to_grid(px), Some(GridPos::new(4, 5)));
            }
        }
    }

    #[test]
    fn zero_sized_cell_maps_nothing() {
        assert_eq!(CellSize::new(0, 1).to_grid(PixelPos::new(5, 5)), None);
    }

    #[test]
    fn contains_excludes_the_far_edges() {
        let grid = GridSize::new(4, 3);
        assert!(grid.contains(GridPos::new(0, 0)));
        assert!(grid.contains(GridPos::new(3, 2)));
        assert!(!grid.contains(GridPos::new(4, 0)));
        assert!(!grid.contains(GridPos::new(0, 3)));
    }

    #[test]
    fn negative_components_are_rejected() {
        assert!((-1i32, 0i32).into_grid_pos().unwrap_err().is_invalid_position());
        assert!((0i32, -1i32).into_grid_pos().unwrap_err().is_invalid_position());
        assert!((70_000i32, 0i32).into_grid_pos().is_err());
    }

    #[test]
    fn slices_must_have_two_components() {
        let three: &[i32] = &[1, 2, 3];
        assert!(three.into_grid_pos().unwrap_err().is_invalid_position());
        let two: &[i32] = &[1, 2];
        assert_eq!(two.into_grid_pos().unwrap(), GridPos::new(1, 2));
    }

    #[test]
    fn grid_pos_compares_with_tuples() {
        assert_eq!(GridPos::new(3, 9), (3, 9));
        assert_eq!(GridPos::new(3, 9).to_string(), "(3, 9)");
    }
}
