use egui::{ColorImage, Rect};
use image::codecs::png::PngEncoder;
use image::{imageops, ExtendedColorType, ImageEncoder, RgbaImage};
use thiserror::Error;

use crate::util::time;

/// Exported bitmaps are enlarged by this factor (512 logical points → a
/// 1024×1024 image at 1x display scale).
pub const EXPORT_SCALE: u32 = 2;

/// Errors that can occur while exporting the canvas to a PNG
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("captured frame does not cover the canvas")]
    EmptyCapture,

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Cut the canvas region out of a full-window capture and upscale it.
///
/// `canvas_rect` is in ui points; the capture is in physical pixels, so the
/// crop is mapped through `pixels_per_point`. Upscaling is nearest-neighbor
/// to keep stroke edges crisp rather than smeared.
pub fn canvas_bitmap(
    capture: &ColorImage,
    canvas_rect: Rect,
    pixels_per_point: f32,
    scale: u32,
) -> Result<RgbaImage, ExportError> {
    let region = capture.region(&canvas_rect, Some(pixels_per_point));
    let [width, height] = region.size;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCapture);
    }

    let bitmap = RgbaImage::from_raw(width as u32, height as u32, region.as_raw().to_vec())
        .ok_or(ExportError::EmptyCapture)?;

    if scale <= 1 {
        return Ok(bitmap);
    }
    Ok(imageops::resize(
        &bitmap,
        width as u32 * scale,
        height as u32 * scale,
        imageops::FilterType::Nearest,
    ))
}

/// Encode a bitmap as PNG bytes
pub fn encode_png(bitmap: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        bitmap.as_raw(),
        bitmap.width(),
        bitmap.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Default export file name, e.g. `sketch-1722275040.png`
pub fn default_file_name() -> String {
    format!("sketch-{}.png", time::timestamp_secs())
}

/// Ask the user where to put the PNG and write it there.
/// Returns `Ok(None)` if the dialog was dismissed.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png_with_dialog(
    bytes: &[u8],
    file_name: &str,
) -> Result<Option<std::path::PathBuf>, ExportError> {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("PNG image", &["png"])
        .set_file_name(file_name)
        .save_file()
    else {
        return Ok(None);
    };

    std::fs::write(&path, bytes)?;
    Ok(Some(path))
}
