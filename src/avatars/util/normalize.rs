use std::io::Cursor;

use image::{imageops::FilterType, DynamicImage, ImageFormat, RgbaImage};
use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

pub const AVATAR_SIZE: u32 = 256;

/// Decodes `bytes`, scales the image to fit inside an `AVATAR_SIZE` square
/// without cropping and centers it on a fully transparent canvas. Returns
/// the canvas encoded as RGBA PNG.
pub fn normalize_avatar(bytes: &[u8]) -> Result<Vec<u8>, ApiError> {
    let source = image::load_from_memory(bytes).map_err(|e| {
        tracing::error!(%e, "failed to decode avatar source");
        ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: ["Failed to decode image: ", &e.to_string()].concat(),
        }
    })?;

    let canvas = contain(&source, AVATAR_SIZE);

    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| {
            tracing::error!(%e, "failed to encode avatar");
            ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: ["Failed to encode image: ", &e.to_string()].concat(),
            }
        })?;

    Ok(buf)
}

/// Box of the scaled content inside a `size` square: `(x, y, width, height)`.
pub fn content_box(width: u32, height: u32, size: u32) -> (u32, u32, u32, u32) {
    let (scaled_width, scaled_height) = if width >= height {
        let scaled = (height as u64 * size as u64 + width as u64 / 2) / width as u64;
        (size, (scaled as u32).clamp(1, size))
    } else {
        let scaled = (width as u64 * size as u64 + height as u64 / 2) / height as u64;
        ((scaled as u32).clamp(1, size), size)
    };

    (
        (size - scaled_width) / 2,
        (size - scaled_height) / 2,
        scaled_width,
        scaled_height,
    )
}

fn contain(source: &DynamicImage, size: u32) -> RgbaImage {
    let (x, y, width, height) = content_box(source.width(), source.height(), size);
    let resized = source
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgba8();

    let mut canvas = RgbaImage::new(size, size);
    image::imageops::replace(&mut canvas, &resized, x as i64, y as i64);
    canvas
}
