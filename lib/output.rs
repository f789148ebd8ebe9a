//! Image writers: plain PPM (P3) for streams, PNG when the output path asks for it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use log::info;

use crate::error::RenderError;
use crate::render::Image;

pub fn write_ppm<W: Write>(w: &mut W, image: &Image) -> std::io::Result<()> {
    writeln!(w, "P3")?;
    writeln!(w, "{} {}", image.width, image.height)?;
    writeln!(w, "255")?;

    for [r, g, b] in &image.pixels {
        writeln!(w, "{} {} {}", r, g, b)?;
    }
    w.flush()
}

pub fn save_png(image: &Image, path: &Path) -> Result<(), RenderError> {
    let raw: Vec<u8> = image.pixels.iter().flatten().copied().collect();
    let buffer = RgbImage::from_raw(image.width, image.height, raw).ok_or_else(|| {
        RenderError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "pixel buffer does not match image dimensions",
        ))
    })?;
    buffer.save(path)?;
    info!("saved PNG to {}", path.display());
    Ok(())
}

/// Writes `image` to `path`, choosing PNG for a `.png` extension and PPM otherwise.
pub fn save_image(image: &Image, path: &Path) -> Result<(), RenderError> {
    let is_png = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        return save_png(image, path);
    }

    let mut w = BufWriter::new(File::create(path)?);
    write_ppm(&mut w, image)?;
    info!("saved PPM to {}", path.display());
    Ok(())
}
