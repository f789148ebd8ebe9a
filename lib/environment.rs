use crate::camera::Camera;
use crate::color::Color;
use crate::error::ConstructionError;
use crate::rectangle::Rectangle;
use crate::scene::{DirectionalLight, Scene};
use crate::sphere::Sphere;
use crate::surface::Surface;
use crate::vector::Vector3;

/// Everything needed to render one image: camera placement, resolution and scene.
#[derive(Debug, Clone)]
pub struct Environment {
    pub camera_z: f64,
    pub image_width: u32,
    pub image_height: u32,
    pub scene: Scene,
}

impl Environment {
    pub fn new(
        camera_z: f64,
        image_width: u32,
        image_height: u32,
        scene: Scene,
    ) -> Result<Environment, ConstructionError> {
        if image_width == 0 || image_height == 0 {
            return Err(ConstructionError::EmptyImage { width: image_width, height: image_height });
        }
        Ok(Environment { camera_z, image_width, image_height, scene })
    }

    pub fn camera(&self) -> Camera {
        Camera::new(self.camera_z, self.image_width, self.image_height)
    }

    /// Built-in scene: a white sphere in front of a blue rectangle on light gray.
    pub fn demo() -> Result<Environment, ConstructionError> {
        let mut scene = Scene::new(
            Surface::Constant(Color::gray(0.8)?),
            Color::gray(0.2)?,
            DirectionalLight::new(Vector3::new(-1.0, 1.0, -1.0), Color::WHITE)?,
        );
        scene.push(Sphere::new(Vector3::new(1.0, 0.0, 3.0), 0.6, Color::WHITE, Color::BLACK)?);
        scene.push(Rectangle::new(
            Vector3::new(1.0, 1.3, 4.0),
            1.0,
            2.5,
            Color::new(0.0, 0.0, 1.0)?,
            Color::BLACK,
        )?);
        Environment::new(-4.0, 300, 300, scene)
    }
}
