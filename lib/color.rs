use std::fmt;

use crate::error::{ConstructionError, RenderError};

/// An RGB color with every channel on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

fn in_range(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f64, g: f64, b: f64) -> Result<Color, ConstructionError> {
        if !(in_range(r) && in_range(g) && in_range(b)) {
            return Err(ConstructionError::ColorOutOfRange { r, g, b });
        }
        Ok(Color { r, g, b })
    }

    pub fn gray(v: f64) -> Result<Color, ConstructionError> {
        Color::new(v, v, v)
    }

    /// Converts to 8-bit channels, truncating `c * 255`.
    pub fn to_bytes(&self) -> Result<[u8; 3], RenderError> {
        Ok([byte(self.r)?, byte(self.g)?, byte(self.b)?])
    }
}

fn byte(x: f64) -> Result<u8, RenderError> {
    if !in_range(x) {
        return Err(RenderError::ColorOutOfRange(x));
    }
    Ok((x * 255.0) as u8)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r={:.6},g={:.6},b={:.6})", self.r, self.g, self.b)
    }
}
