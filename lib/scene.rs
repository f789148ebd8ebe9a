use crate::color::Color;
use crate::error::ConstructionError;
use crate::object::Object;
use crate::ray::Ray;
use crate::surface::{Hit, Raycast, Surface};
use crate::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3,
    pub color: Color,
}

impl DirectionalLight {
    /// `direction` need not be unit length; it is normalized here.
    pub fn new(direction: Vector3, color: Color) -> Result<DirectionalLight, ConstructionError> {
        let direction = direction.try_normalize().ok_or(ConstructionError::ZeroLightDirection)?;
        Ok(DirectionalLight { direction, color })
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        DirectionalLight { direction: Vector3::Z, color: Color::BLACK }
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Surface,
    pub ambient_light: Color,
    pub directional_light: DirectionalLight,
    pub objects: Vec<Object>,
}

impl Scene {
    pub fn new(background: Surface, ambient_light: Color, directional_light: DirectionalLight) -> Scene {
        Scene { background, ambient_light, directional_light, objects: Vec::new() }
    }

    pub fn push(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    /// Nearest hit in front of the ray origin across all objects.
    pub fn intersect(&self, r: &Ray) -> Option<Hit> {
        self.raycast(r, 0.0, f64::INFINITY)
    }

    /// Color seen along `r`, which passes through `image_point` on the image plane.
    ///
    /// Lighting is not applied: a hit yields the flat surface color, a miss the background.
    pub fn trace(&self, r: &Ray, image_point: Vector3) -> Color {
        match self.intersect(r) {
            Some(hit) => hit.surface_color,
            None => self.background.color_at(r.direction * r.origin.z, image_point),
        }
    }
}

impl Raycast for Scene {
    fn raycast(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<Hit> {
        let mut result = None;
        let mut t_nearest = t_max;

        for obj in &self.objects {
            if let Some(hit) = obj.raycast(r, t_min, t_nearest) {
                t_nearest = hit.t;
                result = Some(hit);
            }
        }

        return result;
    }
}
