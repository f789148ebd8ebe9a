use crate::color::Color;
use crate::ray::Ray;
use crate::vector::Vector3;

pub trait Raycast: Send + Sync {
    /// Nearest intersection with `t_min < t < t_max`, if any.
    fn raycast(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<Hit>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub t: f64,
    pub surface_color: Color,
    pub surface_normal: Vector3,
}

/// Color source for the scene background.
#[derive(Clone, Copy)]
pub enum Surface {
    Constant(Color),
    /// Called with the camera-relative point and the image-plane point.
    Sampled(fn(Vector3, Vector3) -> Color),
}

impl Surface {
    pub fn color_at(&self, camera_relative: Vector3, point: Vector3) -> Color {
        match self {
            Surface::Constant(c) => *c,
            Surface::Sampled(f) => f(camera_relative, point),
        }
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Surface::Constant(c) => write!(f, "Constant{}", c),
            Surface::Sampled(_) => write!(f, "Sampled(..)"),
        }
    }
}
