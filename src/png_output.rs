// src/png_output.rs
//
// PNG writer for rendered charts. The bitmap backend only knows pixels, so the
// physical resolution is stored here in the pHYs chunk.

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder, PixelDimensions, Unit};

use crate::constants::METERS_PER_INCH;

/// Converts dots per inch to the pixels-per-meter unit PNG uses.
pub fn dpi_to_pixels_per_meter(dpi: f64) -> u32 {
    (dpi / METERS_PER_INCH).round() as u32
}

/// Writes packed 8-bit RGB pixels to `path`, tagging the file with `dpi`.
/// Missing parent directories are created.
pub fn write_png_with_dpi(
    path: &Path,
    rgb: &[u8],
    (width, height): (u32, u32),
    dpi: f64,
) -> Result<(), Box<dyn Error>> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(format!(
            "RGB buffer holds {} bytes, a {width}x{height} image needs {expected}",
            rgb.len()
        )
        .into());
    }
    if !(dpi.is_finite() && dpi > 0.0) {
        return Err(format!("invalid output resolution: {dpi} dpi").into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let pixels_per_meter = dpi_to_pixels_per_meter(dpi);
    encoder.set_pixel_dims(Some(PixelDimensions {
        xppu: pixels_per_meter,
        yppu: pixels_per_meter,
        unit: Unit::Meter,
    }));

    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgb)?;
    writer.finish()?;
    Ok(())
}
