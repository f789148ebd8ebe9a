use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::color::Color;
use crate::environment::Environment;
use crate::error::RenderError;

/// 8-bit RGB pixels in row-major order, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl Image {
    pub fn pixel(&self, row: u32, col: u32) -> [u8; 3] {
        self.pixels[row as usize * self.width as usize + col as usize]
    }
}

/// Lazily traces every pixel in raster order on the calling thread.
pub fn pixels(env: &Environment) -> impl Iterator<Item = Color> + '_ {
    let camera = env.camera();
    let scene = &env.scene;
    (0..env.image_height).flat_map(move |row| {
        (0..camera.image_width).map(move |col| {
            let (ray, point) = camera.create_ray(row, col);
            scene.trace(&ray, point)
        })
    })
}

/// Traces one ray per pixel, rows in parallel, and converts the result to bytes.
///
/// Fails without producing an image if any color channel is out of range.
pub fn render(env: &Environment) -> Result<Image, RenderError> {
    let camera = env.camera();
    let (width, height) = (env.image_width, env.image_height);
    info!("rendering {}x{} image, {} objects", width, height, env.scene.objects.len());
    let start = Instant::now();

    let rows: Vec<Vec<[u8; 3]>> = (0..height)
        .into_par_iter()
        .map(|row| {
            (0..width)
                .map(|col| {
                    let (ray, point) = camera.create_ray(row, col);
                    env.scene.trace(&ray, point).to_bytes()
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pixels: Vec<[u8; 3]> = rows.into_iter().flatten().collect();
    debug!("traced {} rays", pixels.len());
    info!("render finished in {:.3}s", start.elapsed().as_secs_f64());

    Ok(Image { width, height, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DirectionalLight, Scene};
    use crate::sphere::Sphere;
    use crate::surface::Surface;
    use crate::vector::Vector3;

    #[test]
    fn test_demo_regions() {
        let env = Environment::demo().unwrap();
        let image = render(&env).unwrap();
        assert_eq!(image.pixels.len(), 300 * 300);

        // sphere (1, 0, 3) projects to roughly column 235, row 150
        for (row, col) in [(150, 235), (140, 225), (160, 245), (150, 215)] {
            assert_eq!(image.pixel(row, col), [255, 255, 255], "({}, {})", row, col);
        }
        // rectangle spans columns 225..300, rows 52..240, behind the sphere
        for (row, col) in [(70, 280), (230, 290), (60, 230)] {
            assert_eq!(image.pixel(row, col), [0, 0, 255], "({}, {})", row, col);
        }
        for (row, col) in [(0, 0), (150, 50), (299, 0), (10, 150), (290, 150), (150, 150)] {
            assert_eq!(image.pixel(row, col), [204, 204, 204], "({}, {})", row, col);
        }
    }

    #[test]
    fn test_pixel_index_is_row_major() {
        let image = Image { width: 3, height: 2, pixels: (0..6).map(|i| [i, 0, 0]).collect() };
        assert_eq!(image.pixel(0, 2), [2, 0, 0]);
        assert_eq!(image.pixel(1, 0), [3, 0, 0]);
        assert_eq!(image.pixel(1, 2), [5, 0, 0]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut env = Environment::demo().unwrap();
        env.image_width = 40;
        env.image_height = 25;

        let image = render(&env).unwrap();
        let sequential: Vec<[u8; 3]> = pixels(&env).map(|c| c.to_bytes().unwrap()).collect();
        assert_eq!(image.pixels, sequential);
    }

    fn split_background(_camera_relative: Vector3, point: Vector3) -> Color {
        if point.x > 0.0 {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }

    #[test]
    fn test_sampled_background_split() {
        let scene = Scene::new(Surface::Sampled(split_background), Color::BLACK, DirectionalLight::default());
        let env = Environment::new(-4.0, 4, 2, scene).unwrap();
        let image = render(&env).unwrap();
        assert_eq!(image.pixel(0, 0), [0, 0, 0]);
        assert_eq!(image.pixel(1, 1), [0, 0, 0]);
        assert_eq!(image.pixel(0, 2), [255, 255, 255]);
        assert_eq!(image.pixel(1, 3), [255, 255, 255]);
    }

    #[test]
    fn test_sphere_fills_view() {
        let mut scene = Scene::new(Surface::Constant(Color::BLACK), Color::BLACK, DirectionalLight::default());
        scene.push(Sphere::new(Vector3::new(0.0, 0.0, 2.0), 100.0, Color::WHITE, Color::BLACK).unwrap());
        // camera is inside the sphere, so every ray meets the far wall
        let env = Environment::new(-4.0, 8, 8, scene).unwrap();
        let image = render(&env).unwrap();
        assert!(image.pixels.iter().all(|p| *p == [255, 255, 255]));
    }
}
