//! PNG loading and export for raster pixel data

use crate::io::error::{Result, TilingError, invalid_input};
use crate::raster::buffer::Raster;
use image::{ImageBuffer, Rgba};
use ndarray::Array3;
use std::path::Path;

/// Load a PNG file into a raster of RGBA samples in [0.0, 1.0]
///
/// # Errors
///
/// Returns `TilingError::ImageLoad` if the file cannot be read or
/// decoded.
pub fn load_png(path: &Path) -> Result<Raster> {
    let img = image::open(path).map_err(|e| TilingError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = Array3::zeros((height as usize, width as usize, 4));
    for (x, y, pixel) in rgba.enumerate_pixels() {
        for (channel, &value) in pixel.0.iter().enumerate() {
            if let Some(sample) = data.get_mut((y as usize, x as usize, channel)) {
                *sample = f32::from(value) / 255.0;
            }
        }
    }

    Ok(Raster::from_array(data))
}

/// Save a raster as a PNG file, creating parent directories as needed
///
/// Samples clamp to [0.0, 1.0] before quantization. Single-channel
/// rasters export as opaque grayscale; three-channel rasters as opaque
/// color.
///
/// # Errors
///
/// Returns an error if:
/// - The raster has a zero dimension
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &Raster, path: &Path) -> Result<()> {
    if image.is_degenerate() {
        return Err(invalid_input("cannot export a raster with a zero dimension"));
    }

    let width = image.width() as u32;
    let height = image.height() as u32;
    let mut out = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            out.put_pixel(x, y, pixel_at(image, x as usize, y as usize));
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    out.save(path).map_err(|e| TilingError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn pixel_at(image: &Raster, x: usize, y: usize) -> Rgba<u8> {
    let channel = |c: usize, default: f32| -> u8 {
        let value = image.sample(x, y, c).unwrap_or(default);
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    match image.channels() {
        1 => {
            let v = channel(0, 0.0);
            Rgba([v, v, v, 255])
        }
        2 => {
            let v = channel(0, 0.0);
            let a = channel(1, 1.0);
            Rgba([v, v, v, a])
        }
        3 => Rgba([channel(0, 0.0), channel(1, 0.0), channel(2, 0.0), 255]),
        _ => Rgba([
            channel(0, 0.0),
            channel(1, 0.0),
            channel(2, 0.0),
            channel(3, 1.0),
        ]),
    }
}
