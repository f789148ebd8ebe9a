use crate::color::Color;
use crate::error::ConstructionError;
use crate::ray::Ray;
use crate::surface::{Hit, Raycast};
use crate::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
    pub surface_color: Color,
    pub shine: Color,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64, surface_color: Color, shine: Color) -> Result<Sphere, ConstructionError> {
        if !(radius >= 0.0) {
            return Err(ConstructionError::NegativeRadius(radius));
        }
        return Ok(Sphere { center, radius, surface_color, shine });
    }
}

impl Raycast for Sphere {
    fn raycast(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<Hit> {
        // direction is unit length, so the quadratic's leading term is 1
        let oc = r.origin - self.center;
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - (self.radius * self.radius);

        let discriminant = (half_b * half_b) - c;

        // also rejects NaN from a degenerate ray
        if !(discriminant > 0.0) {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();

        let root_lower = -half_b - discriminant_sqrt;
        let root_upper = -half_b + discriminant_sqrt;

        let mut root = root_lower;

        // origin inside the sphere: the near root is behind us, take the far one
        if root <= t_min || t_max <= root {
            root = root_upper;
            if root <= t_min || t_max <= root {
                return None;
            }
        }

        let t = root;
        let p = r.at(t);

        let surface_normal = (p - self.center).normalize();

        return Some(Hit { t, surface_color: self.surface_color, surface_normal });
    }
}
