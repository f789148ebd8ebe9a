use crate::ray::Ray;
use crate::rectangle::Rectangle;
use crate::sphere::Sphere;
use crate::surface::{Hit, Raycast};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Sphere(Sphere),
    Rectangle(Rectangle),
}

impl From<Sphere> for Object {
    fn from(data: Sphere) -> Self {
        Object::Sphere(data)
    }
}

impl From<Rectangle> for Object {
    fn from(data: Rectangle) -> Self {
        Object::Rectangle(data)
    }
}

impl Raycast for Object {
    fn raycast(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<Hit> {
        match self {
            Object::Sphere(sphere) => sphere.raycast(r, t_min, t_max),
            Object::Rectangle(rect) => rect.raycast(r, t_min, t_max),
        }
    }
}
