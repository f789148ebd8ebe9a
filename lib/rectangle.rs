use crate::color::Color;
use crate::error::ConstructionError;
use crate::ray::Ray;
use crate::surface::{Hit, Raycast};
use crate::vector::Vector3;

/// Axis-aligned rectangle in the plane `z = upper_left.z`, facing `-z`.
///
/// It spans `w` along `+x` and `h` along `-y` from `upper_left`. Image rows grow
/// downward, so the extent test runs against the negated `y` of the hit point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub upper_left: Vector3,
    pub w: f64,
    pub h: f64,
    pub surface_color: Color,
    pub shine: Color,
}

const NORMAL: Vector3 = Vector3::new(0.0, 0.0, -1.0);

impl Rectangle {
    pub fn new(
        upper_left: Vector3,
        w: f64,
        h: f64,
        surface_color: Color,
        shine: Color,
    ) -> Result<Rectangle, ConstructionError> {
        if !(w >= 0.0) {
            return Err(ConstructionError::NegativeWidth(w));
        }
        if !(h >= 0.0) {
            return Err(ConstructionError::NegativeHeight(h));
        }
        Ok(Rectangle { upper_left, w, h, surface_color, shine })
    }

    fn contains(&self, p: Vector3) -> bool {
        let ul = self.upper_left;
        let y_ok = p.y >= -ul.y && p.y <= -(ul.y - self.h);
        let x_ok = p.x >= ul.x && p.x <= ul.x + self.w;
        y_ok && x_ok
    }
}

impl Raycast for Rectangle {
    fn raycast(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<Hit> {
        let denom = r.direction.dot(NORMAL);
        if denom == 0.0 {
            // parallel ray, will never intersect
            return None;
        }
        let t = -(r.origin.dot(NORMAL) + self.upper_left.z) / denom;
        if t <= t_min || t >= t_max {
            return None;
        }
        if !self.contains(r.at(t)) {
            return None;
        }
        Some(Hit { t, surface_color: self.surface_color, surface_normal: NORMAL })
    }
}
