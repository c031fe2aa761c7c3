//! RGB buffer post-processing and PNG output
//!
//! Charts are rasterized into an [`image::RgbImage`]. This module trims
//! surrounding whitespace and encodes the result as PNG with the render DPI
//! recorded in the pHYs chunk.

use crate::error::ChartResult;
use image::math::Rect;
use image::{imageops, Rgb, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const METERS_PER_INCH: f64 = 0.0254;

/// Blank canvas filled with `background`
pub fn blank_canvas(width: u32, height: u32, background: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, background)
}

/// Smallest rectangle holding every pixel that differs from `background`,
/// or `None` if the image is blank
pub fn content_bounds(image: &RgbImage, background: Rgb<u8>) -> Option<Rect> {
    let mut corners: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        let (x0, y0, x1, y1) = corners.get_or_insert((x, y, x, y));
        *x0 = (*x0).min(x);
        *y0 = (*y0).min(y);
        *x1 = (*x1).max(x);
        *y1 = (*y1).max(y);
    }
    corners.map(|(x0, y0, x1, y1)| Rect {
        x: x0,
        y: y0,
        width: x1 - x0 + 1,
        height: y1 - y0 + 1,
    })
}

/// Crop to the content plus `pad` pixels on every side, clamped to the
/// image. A blank image is returned unchanged.
pub fn crop_tight(image: &RgbImage, background: Rgb<u8>, pad: u32) -> RgbImage {
    let Some(content) = content_bounds(image, background) else {
        return image.clone();
    };
    let x = content.x.saturating_sub(pad);
    let y = content.y.saturating_sub(pad);
    let right = (content.x + content.width + pad).min(image.width());
    let bottom = (content.y + content.height + pad).min(image.height());
    imageops::crop_imm(image, x, y, right - x, bottom - y).to_image()
}

/// Encode as 8-bit RGB PNG at `path`, overwriting any existing file
pub fn write_png(image: &RgbImage, path: &Path, dpi: u32) -> ChartResult<()> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let ppm = pixels_per_meter(dpi);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(())
}

/// PNG pHYs density for a DPI value
pub fn pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn with_dot(width: u32, height: u32, x: u32, y: u32) -> RgbImage {
        let mut image = blank_canvas(width, height, WHITE);
        image.put_pixel(x, y, Rgb([0, 0, 0]));
        image
    }

    #[test]
    fn test_content_bounds() {
        let image = with_dot(10, 8, 3, 5);
        assert_eq!(
            content_bounds(&image, WHITE),
            Some(Rect {
                x: 3,
                y: 5,
                width: 1,
                height: 1
            })
        );
        assert_eq!(content_bounds(&blank_canvas(4, 4, WHITE), WHITE), None);
    }

    #[test]
    fn test_crop_tight_pads_and_clamps() {
        let image = with_dot(10, 8, 1, 5);
        let cropped = crop_tight(&image, WHITE, 2);
        // x: 0..4 (clamped on the left), y: 3..8 (clamped at the bottom)
        assert_eq!(cropped.dimensions(), (4, 5));
        assert_eq!(cropped.get_pixel(1, 2), &Rgb([0, 0, 0]));
        assert_eq!(
            content_bounds(&cropped, WHITE).map(|r| (r.x, r.y)),
            Some((1, 2))
        );
    }

    #[test]
    fn test_crop_tight_blank_is_identity() {
        let image = blank_canvas(6, 3, WHITE);
        assert_eq!(crop_tight(&image, WHITE, 1), image);
    }

    #[test]
    fn test_write_png_records_dpi() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        write_png(&with_dot(5, 4, 2, 2), &path, 300).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (5, 4));
        let dims = info.pixel_dims.unwrap();
        assert_eq!(dims.xppu, 11811);
        assert_eq!(dims.unit, png::Unit::Meter);
    }
}
