//! Line-oriented scene descriptions.
//!
//! ```text
//! BG  r g b
//! ENV z width height
//! AMB r g b
//! DL  dx dy dz r g b
//! SPHERE cx cy cz radius cr cg cb sr sg sb
//! RECTANGLE ulx uly ulz w h cr cg cb sr sg sb
//! ```
//!
//! Unknown directives are logged and skipped. Blank lines and `#` comments are ignored.

use std::io::BufRead;
use std::str::FromStr;

use log::{debug, warn};

use crate::color::Color;
use crate::environment::Environment;
use crate::error::{ConstructionError, ParseError};
use crate::object::Object;
use crate::rectangle::Rectangle;
use crate::scene::{DirectionalLight, Scene};
use crate::sphere::Sphere;
use crate::surface::Surface;
use crate::vector::Vector3;

struct Directive<'a> {
    line: usize,
    name: &'a str,
    args: Vec<&'a str>,
}

impl<'a> Directive<'a> {
    fn malformed(&self, reason: String) -> ParseError {
        ParseError::Malformed { line: self.line, directive: self.name.to_string(), reason }
    }

    fn construction(&self, source: ConstructionError) -> ParseError {
        ParseError::Construction { line: self.line, source }
    }

    fn expect_len(&self, n: usize) -> Result<(), ParseError> {
        if self.args.len() != n {
            return Err(self.malformed(format!("expected {} fields, found {}", n, self.args.len())));
        }
        Ok(())
    }

    fn field<T: FromStr>(&self, i: usize) -> Result<T, ParseError> {
        self.args[i]
            .parse()
            .map_err(|_| self.malformed(format!("field {} is not a valid number: {:?}", i + 1, self.args[i])))
    }

    fn number(&self, i: usize) -> Result<f64, ParseError> {
        let v: f64 = self.field(i)?;
        if !v.is_finite() {
            return Err(self.malformed(format!("field {} is not a finite number: {:?}", i + 1, self.args[i])));
        }
        Ok(v)
    }

    fn numbers<const N: usize>(&self) -> Result<[f64; N], ParseError> {
        self.expect_len(N)?;
        let mut out = [0.0; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.number(i)?;
        }
        Ok(out)
    }

    fn color(&self, r: f64, g: f64, b: f64) -> Result<Color, ParseError> {
        Color::new(r, g, b).map_err(|e| self.construction(e))
    }
}

#[derive(Default)]
struct SceneBuilder {
    background: Option<Color>,
    ambient_light: Option<Color>,
    directional_light: Option<DirectionalLight>,
    env: Option<(usize, f64, u32, u32)>,
    objects: Vec<Object>,
}

impl SceneBuilder {
    fn apply(&mut self, d: &Directive<'_>) -> Result<(), ParseError> {
        match d.name {
            "BG" => {
                let [r, g, b] = d.numbers::<3>()?;
                self.background = Some(d.color(r, g, b)?);
            }
            "ENV" => {
                d.expect_len(3)?;
                self.env = Some((d.line, d.number(0)?, d.field(1)?, d.field(2)?));
            }
            "AMB" => {
                let [r, g, b] = d.numbers::<3>()?;
                self.ambient_light = Some(d.color(r, g, b)?);
            }
            "DL" => {
                let [x, y, z, r, g, b] = d.numbers::<6>()?;
                let light = DirectionalLight::new(Vector3::new(x, y, z), d.color(r, g, b)?)
                    .map_err(|e| d.construction(e))?;
                self.directional_light = Some(light);
            }
            "SPHERE" => {
                let [cx, cy, cz, radius, cr, cg, cb, sr, sg, sb] = d.numbers::<10>()?;
                let sphere = Sphere::new(
                    Vector3::new(cx, cy, cz),
                    radius,
                    d.color(cr, cg, cb)?,
                    d.color(sr, sg, sb)?,
                )
                .map_err(|e| d.construction(e))?;
                debug!("line {}: sphere at {} radius {}", d.line, sphere.center, sphere.radius);
                self.objects.push(sphere.into());
            }
            "RECTANGLE" => {
                let [ulx, uly, ulz, w, h, cr, cg, cb, sr, sg, sb] = d.numbers::<11>()?;
                let rect = Rectangle::new(
                    Vector3::new(ulx, uly, ulz),
                    w,
                    h,
                    d.color(cr, cg, cb)?,
                    d.color(sr, sg, sb)?,
                )
                .map_err(|e| d.construction(e))?;
                debug!("line {}: rectangle at {} size {}x{}", d.line, rect.upper_left, rect.w, rect.h);
                self.objects.push(rect.into());
            }
            _ => warn!("skipping line {}: unrecognized directive {:?}", d.line, d.name),
        }
        Ok(())
    }

    fn build(self) -> Result<Environment, ParseError> {
        let (env_line, camera_z, width, height) = self.env.ok_or(ParseError::MissingEnvironment)?;

        let background = self.background.unwrap_or_else(|| {
            debug!("no BG directive, using black background");
            Color::BLACK
        });
        let ambient_light = self.ambient_light.unwrap_or_else(|| {
            debug!("no AMB directive, using black ambient light");
            Color::BLACK
        });
        let directional_light = self.directional_light.unwrap_or_else(|| {
            debug!("no DL directive, using an unlit directional light");
            DirectionalLight::default()
        });

        let mut scene = Scene::new(Surface::Constant(background), ambient_light, directional_light);
        scene.objects = self.objects;

        Environment::new(camera_z, width, height, scene)
            .map_err(|source| ParseError::Construction { line: env_line, source })
    }
}

/// Reads a scene description until end of input.
pub fn parse_scene<R: BufRead>(reader: R) -> Result<Environment, ParseError> {
    let mut builder = SceneBuilder::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let name = match tokens.next() {
            Some(name) => name,
            None => continue,
        };
        let directive = Directive { line: idx + 1, name, args: tokens.collect() };
        builder.apply(&directive)?;
    }

    builder.build()
}

pub fn parse_scene_str(text: &str) -> Result<Environment, ParseError> {
    parse_scene(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    #[test]
    fn test_uniform_background() {
        let env = parse_scene_str("BG 1 0 0\nENV -4 10 10\n").unwrap();
        assert_eq!((env.camera_z, env.image_width, env.image_height), (-4.0, 10, 10));
        assert!(env.scene.objects.is_empty());

        let image = render(&env).unwrap();
        assert_eq!(image.pixels.len(), 100);
        assert!(image.pixels.iter().all(|p| *p == [255, 0, 0]));
    }

    #[test]
    fn test_full_scene() {
        let text = "\
# demo scene
BG 0.8 0.8 0.8
ENV -4 300 200
AMB 0.2 0.2 0.2
DL -1 1 -1 1 1 1

SPHERE 1 0 3 0.6 1 1 1 0 0 0
RECTANGLE 1 1.3 4 1 2.5 0 0 1 0 0 0
";
        let env = parse_scene_str(text).unwrap();
        assert_eq!((env.image_width, env.image_height), (300, 200));
        assert_eq!(env.scene.ambient_light, Color::gray(0.2).unwrap());
        assert!((env.scene.directional_light.direction.length() - 1.0).abs() < 1e-12);
        assert_eq!(env.scene.objects.len(), 2);
        // input order is kept
        assert!(matches!(env.scene.objects[0], Object::Sphere(s) if s.radius == 0.6));
        assert!(matches!(env.scene.objects[1], Object::Rectangle(r) if r.h == 2.5));
    }

    #[test]
    fn test_unknown_directive_skipped() {
        let env = parse_scene_str("FOO 1 2 3\nBG 0 1 0\nENV -4 2 2\nSPHERE 0 0 5 1 1 1 1 0 0 0\n").unwrap();
        assert_eq!(env.scene.objects.len(), 1);
        assert!(matches!(env.scene.background, Surface::Constant(c) if c == Color::new(0.0, 1.0, 0.0).unwrap()));
    }

    #[test]
    fn test_malformed_fields_report_line() {
        let err = parse_scene_str("BG 1 0 0\nENV -4 10 10\nSPHERE 0 0 five 1 1 1 1 0 0 0\n").unwrap_err();
        assert!(
            matches!(err, ParseError::Malformed { line: 3, ref directive, .. } if directive == "SPHERE"),
            "{}",
            err
        );

        let err = parse_scene_str("BG 1 0\nENV -4 10 10\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 1, .. }), "{}", err);

        let err = parse_scene_str("ENV -4 10.5 10\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 1, .. }), "{}", err);
    }

    #[test]
    fn test_non_finite_fields_rejected() {
        let err = parse_scene_str("ENV -4 10 10\nSPHERE 0 0 5 nan 1 1 1 0 0 0\n").unwrap_err();
        assert!(
            matches!(err, ParseError::Malformed { line: 2, ref reason, .. } if reason.contains("not a finite number")),
            "{}",
            err
        );

        let err = parse_scene_str("ENV nan 10 10\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 1, .. }), "{}", err);

        let err = parse_scene_str("ENV -4 10 10\nRECTANGLE 0 1 inf 1 1 1 1 1 0 0 0\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 2, .. }), "{}", err);

        let err = parse_scene_str("BG -inf 0 0\nENV -4 10 10\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 1, .. }), "{}", err);
    }

    #[test]
    fn test_construction_errors() {
        let err = parse_scene_str("BG 1.5 0 0\nENV -4 10 10\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Construction { line: 1, source: ConstructionError::ColorOutOfRange { .. } }
        ));

        let err = parse_scene_str("ENV -4 10 10\nSPHERE 0 0 5 -1 1 1 1 0 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Construction { line: 2, source: ConstructionError::NegativeRadius(_) }
        ));

        let err = parse_scene_str("ENV -4 10 10\nRECTANGLE 0 0 5 1 -1 1 1 1 0 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Construction { line: 2, source: ConstructionError::NegativeHeight(_) }
        ));

        let err = parse_scene_str("ENV -4 10 10\nDL 0 0 0 1 1 1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Construction { line: 2, source: ConstructionError::ZeroLightDirection }
        ));

        let err = parse_scene_str("ENV -4 0 10\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Construction { line: 1, source: ConstructionError::EmptyImage { .. } }
        ));
    }

    #[test]
    fn test_missing_env() {
        let err = parse_scene_str("BG 1 0 0\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingEnvironment));
    }

    #[test]
    fn test_defaults() {
        let env = parse_scene_str("ENV 2 1 1").unwrap();
        assert!(matches!(env.scene.background, Surface::Constant(c) if c == Color::BLACK));
        assert_eq!(env.scene.ambient_light, Color::BLACK);
        assert_eq!(env.scene.directional_light, DirectionalLight::default());
    }
}
