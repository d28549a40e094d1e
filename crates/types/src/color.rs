//! Colors: a closed set of names plus explicit RGB triples.
//!
//! Callers may hand the facade either form. [`IntoColor`] resolves it once, at
//! the API boundary, into a canonical [`Rgb`].

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, Result};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The recognized color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    White,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Pink,
    Purple,
}

impl ColorName {
    pub const ALL: [ColorName; 8] = [
        ColorName::White,
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Yellow,
        ColorName::Pink,
        ColorName::Purple,
    ];

    /// Parse a color name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridgame_types::ColorName;
    ///
    /// assert_eq!(ColorName::from_name("purple"), Some(ColorName::Purple));
    /// assert_eq!(ColorName::from_name("GREEN"), Some(ColorName::Green));
    /// assert_eq!(ColorName::from_name("chartreuse"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "white" => Some(ColorName::White),
            "black" => Some(ColorName::Black),
            "red" => Some(ColorName::Red),
            "green" => Some(ColorName::Green),
            "blue" => Some(ColorName::Blue),
            "yellow" => Some(ColorName::Yellow),
            "pink" => Some(ColorName::Pink),
            "purple" => Some(ColorName::Purple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::White => "white",
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Blue => "blue",
            ColorName::Yellow => "yellow",
            ColorName::Pink => "pink",
            ColorName::Purple => "purple",
        }
    }

    pub const fn rgb(&self) -> Rgb {
        match self {
            ColorName::White => Rgb::new(255, 255, 255),
            ColorName::Black => Rgb::new(0, 0, 0),
            ColorName::Red => Rgb::new(255, 0, 0),
            ColorName::Green => Rgb::new(0, 255, 0),
            ColorName::Blue => Rgb::new(0, 0, 255),
            ColorName::Yellow => Rgb::new(255, 255, 0),
            ColorName::Pink => Rgb::new(255, 20, 147),
            ColorName::Purple => Rgb::new(128, 0, 128),
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        ColorName::from_name(s).ok_or_else(|| unknown_name(s))
    }
}

fn unknown_name(s: &str) -> GridError {
    let known: Vec<&str> = ColorName::ALL.iter().map(ColorName::as_str).collect();
    GridError::InvalidColor(format!(
        "unrecognized color \"{s}\"; known colors are RGB triples or: {}",
        known.join(",")
    ))
}

/// Either a named color or an explicit triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Named(ColorName),
    Rgb(Rgb),
}

impl Color {
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Named(name) => name.rgb(),
            Color::Rgb(rgb) => *rgb,
        }
    }
}

impl From<ColorName> for Color {
    fn from(name: ColorName) -> Self {
        Color::Named(name)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

/// Anything the facade accepts as a color.
pub trait IntoColor {
    fn resolve(self) -> Result<Rgb>;
}

impl IntoColor for Rgb {
    fn resolve(self) -> Result<Rgb> {
        Ok(self)
    }
}

impl IntoColor for ColorName {
    fn resolve(self) -> Result<Rgb> {
        Ok(self.rgb())
    }
}

impl IntoColor for Color {
    fn resolve(self) -> Result<Rgb> {
        Ok(self.to_rgb())
    }
}

impl IntoColor for &str {
    fn resolve(self) -> Result<Rgb> {
        Ok(self.parse::<ColorName>()?.rgb())
    }
}

impl IntoColor for &String {
    fn resolve(self) -> Result<Rgb> {
        self.as_str().resolve()
    }
}

impl IntoColor for String {
    fn resolve(self) -> Result<Rgb> {
        self.as_str().resolve()
    }
}

fn component(v: i64) -> Result<u8> {
    u8::try_from(v).map_err(|_| {
        GridError::InvalidColor(format!(
            "RGB components must be >= 0 and <= 255, got {v}"
        ))
    })
}

fn from_components(r: i64, g: i64, b: i64) -> Result<Rgb> {
    Ok(Rgb::new(component(r)?, component(g)?, component(b)?))
}

impl IntoColor for (i32, i32, i32) {
    fn resolve(self) -> Result<Rgb> {
        from_components(self.0 as i64, self.1 as i64, self.2 as i64)
    }
}

impl IntoColor for [i32; 3] {
    fn resolve(self) -> Result<Rgb> {
        from_components(self[0] as i64, self[1] as i64, self[2] as i64)
    }
}

fn arity_error(len: usize) -> GridError {
    GridError::InvalidColor(format!("RGB color must have 3 components, not {len}"))
}

impl IntoColor for &[i32] {
    fn resolve(self) -> Result<Rgb> {
        match *self {
            [r, g, b] => from_components(r as i64, g as i64, b as i64),
            _ => Err(arity_error(self.len())),
        }
    }
}

/// Floats are accepted only when they hold whole numbers.
impl IntoColor for &[f64] {
    fn resolve(self) -> Result<Rgb> {
        let [r, g, b] = *self else {
            return Err(arity_error(self.len()));
        };
        let mut out = [0i64; 3];
        for (slot, v) in out.iter_mut().zip([r, g, b]) {
            if !v.is_finite() || v.fract() != 0.0 {
                return Err(GridError::InvalidColor(format!(
                    "RGB components must be integers, got {v}"
                )));
            }
            *slot = v as i64;
        }
        from_components(out[0], out[1], out[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_round_trips() {
        for name in ColorName::ALL {
            assert_eq!(ColorName::from_name(name.as_str()), Some(name));
            assert_eq!(name.as_str().resolve().unwrap(), name.rgb());
        }
    }

    #[test]
    fn unknown_name_lists_the_known_ones() {
        let err = "chartreuse".resolve().unwrap_err();
        assert!(err.is_invalid_color());
        let msg = err.to_string();
        assert!(msg.contains("chartreuse"));
        assert!(msg.contains("purple"));
    }

    #[test]
    fn triples_are_range_checked_on_every_component() {
        assert_eq!((255i32, 0i32, 0i32).resolve().unwrap(), Rgb::new(255, 0, 0));
        assert!((256i32, 0i32, 0i32).resolve().unwrap_err().is_invalid_color());
        assert!((0i32, 256i32, 0i32).resolve().unwrap_err().is_invalid_color());
        assert!((0i32, 0i32, -1i32).resolve().unwrap_err().is_invalid_color());
    }

    #[test]
    fn slices_must_have_three_components() {
        let two: &[i32] = &[1, 2];
        let four: &[i32] = &[1, 2, 3, 4];
        assert!(two.resolve().unwrap_err().is_invalid_color());
        assert!(four.resolve().unwrap_err().is_invalid_color());
    }

    #[test]
    fn fractional_components_are_rejected() {
        let whole: &[f64] = &[10.0, 20.0, 30.0];
        let frac: &[f64] = &[10.5, 20.0, 30.0];
        assert_eq!(whole.resolve().unwrap(), Rgb::new(10, 20, 30));
        assert!(frac.resolve().unwrap_err().is_invalid_color());
    }

    #[test]
    fn color_enum_resolves_to_canonical_triple() {
        assert_eq!(Color::from(ColorName::Yellow).to_rgb(), Rgb::new(255, 255, 0));
        assert_eq!(Color::from(Rgb::new(1, 2, 3)).resolve().unwrap(), Rgb::new(1, 2, 3));
    }
}
