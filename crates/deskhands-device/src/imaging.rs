//! Bitmap conversion, cropping and PNG encoding.

use base64::Engine;
use deskhands_protocols::{Bitmap, Rect};
use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

use crate::error::DeviceError;

pub(crate) fn bitmap_to_image(bitmap: Bitmap) -> Result<RgbaImage, DeviceError> {
    let (width, height, len) = (bitmap.width, bitmap.height, bitmap.rgba.len());
    RgbaImage::from_raw(width, height, bitmap.rgba).ok_or_else(|| {
        DeviceError::MalformedBitmap(format!(
            "{}x{} bitmap with {} bytes",
            width, height, len
        ))
    })
}

/// Crop to `rect`, clipped to the image bounds.
pub(crate) fn crop(image: &RgbaImage, rect: &Rect) -> RgbaImage {
    let x = rect.x.max(0) as u32;
    let y = rect.y.max(0) as u32;
    let width = rect.width.max(0) as u32;
    let height = rect.height.max(0) as u32;
    image::imageops::crop_imm(image, x, y, width, height).to_image()
}

/// Scale a logical rect into a capture with `sx`/`sy` physical pixels per
/// logical pixel.
pub(crate) fn scale_rect(rect: &Rect, sx: f64, sy: f64) -> Rect {
    let scale = |value: i32, factor: f64| (f64::from(value) * factor).round() as i32;
    Rect::new(
        scale(rect.x, sx),
        scale(rect.y, sy),
        scale(rect.width, sx),
        scale(rect.height, sy),
    )
}

/// Resize a physical-pixel image down to logical size. Identity at scale 1.
pub(crate) fn to_logical(image: RgbaImage, sx: f64, sy: f64) -> RgbaImage {
    if !(sx.is_finite() && sy.is_finite() && sx > 0.0 && sy > 0.0) {
        return image;
    }
    let width = ((f64::from(image.width()) / sx).round() as u32).max(1);
    let height = ((f64::from(image.height()) / sy).round() as u32).max(1);
    if (width, height) == image.dimensions() {
        return image;
    }
    image::imageops::resize(&image, width, height, FilterType::Triangle)
}

pub(crate) fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, DeviceError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

pub(crate) fn png_data_uri(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}
