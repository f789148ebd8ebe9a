use crate::ray::Ray;
use crate::vector::{normify, Vector3};

/// Maps a pixel to the image plane `z = 0`, normalized to `[-1, 1]` along the
/// longer image side. Samples sit at pixel centers; rows grow toward `+y`.
pub fn logical_coord(image_height: u32, image_width: u32, pixel_row: u32, pixel_col: u32) -> Vector3 {
    let max = image_height.max(image_width) as f64;
    let x = -(image_width as f64) / max + 2.0 * pixel_col as f64 / max + 1.0 / max;
    let y = -(image_height as f64) / max + 2.0 * pixel_row as f64 / max + 1.0 / max;
    return Vector3::new(x, y, 0.0);
}

/// Pinhole camera on the z axis looking through the image plane.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vector3,
    pub image_width: u32,
    pub image_height: u32,
}

impl Camera {
    pub fn new(camera_z: f64, image_width: u32, image_height: u32) -> Camera {
        Camera { origin: Vector3::new(0.0, 0.0, camera_z), image_width, image_height }
    }

    /// Ray through the center of pixel (`row`, `col`) and the image-plane point it passes.
    pub fn create_ray(&self, row: u32, col: u32) -> (Ray, Vector3) {
        let point = logical_coord(self.image_height, self.image_width, row, col);
        let mut direction = point - self.origin;
        normify(&mut direction);
        return (Ray::new(self.origin, direction), point);
    }
}
