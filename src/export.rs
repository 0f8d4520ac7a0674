use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::{Path, PathBuf};
use std::process::Command;

use base64::Engine;
use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{RgbImage, RgbaImage};

use crate::error::ExportError;
use crate::surface::Surface;

/// JPEG quality, out of 100.
const JPEG_QUALITY: u8 = 90;

/// Supported save formats.
///
/// PNG preserves transparency; the other formats composite the artwork over
/// a white background first. WebP is written losslessly (the encoder in the
/// `image` crate has no lossy mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Jpeg,
    Png,
    WebP,
    Bmp,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Jpeg,
        ExportFormat::Png,
        ExportFormat::WebP,
        ExportFormat::Bmp,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Png => "png",
            ExportFormat::WebP => "webp",
            ExportFormat::Bmp => "bmp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::Png => "PNG",
            ExportFormat::WebP => "WebP",
            ExportFormat::Bmp => "BMP",
        }
    }
}

/// Milliseconds since the UNIX epoch, for filename stamping.
fn timestamp_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// `artwork-<unix-epoch-ms>.<ext>`
fn artwork_filename(format: ExportFormat) -> String {
    format!("artwork-{}.{}", timestamp_ms(), format.extension())
}

/// Flatten transparency against a white page.
fn composite_on_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let a = a as u32;
        let inv = 255 - a;
        image::Rgb([
            ((r as u32 * a + 255 * inv) / 255) as u8,
            ((g as u32 * a + 255 * inv) / 255) as u8,
            ((b as u32 * a + 255 * inv) / 255) as u8,
        ])
    })
}

/// Encode the surface into `dir` under a timestamped artwork filename.
/// Returns the path written.
pub fn export_surface(
    surface: &Surface,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(artwork_filename(format));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    let rgba = surface.to_rgba_image();

    match format {
        ExportFormat::Png => {
            rgba.write_with_encoder(PngEncoder::new(&mut writer))?;
        }
        ExportFormat::Jpeg => {
            let flat = composite_on_white(&rgba);
            flat.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY))?;
        }
        ExportFormat::WebP => {
            let flat = composite_on_white(&rgba);
            flat.write_with_encoder(WebPEncoder::new_lossless(&mut writer))?;
        }
        ExportFormat::Bmp => {
            let flat = composite_on_white(&rgba);
            flat.write_with_encoder(BmpEncoder::new(&mut writer))?;
        }
    }

    log::info!("Exported {} to {}", format.label(), path.display());
    Ok(path)
}

/// Write a print-oriented document embedding the surface as a PNG data URI
/// and hand it to the platform opener, which exposes the print dialog.
/// Returns the document path.
pub fn print_surface(surface: &Surface) -> Result<PathBuf, ExportError> {
    let rgba = surface.to_rgba_image();
    let mut png = Cursor::new(Vec::new());
    rgba.write_with_encoder(PngEncoder::new(&mut png))?;
    let data_uri = base64::engine::general_purpose::STANDARD.encode(png.into_inner());

    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Print Canvas</title></head>\n\
         <body style=\"margin: 0; display: flex; justify-content: center; \
         align-items: center; min-height: 100vh;\">\n\
         <img src=\"data:image/png;base64,{data_uri}\" \
         style=\"max-width: 100%; max-height: 100%;\" />\n\
         </body>\n</html>\n"
    );

    let path = std::env::temp_dir().join(format!("easel-print-{}.html", timestamp_ms()));
    std::fs::write(&path, html)?;
    open_with_platform_handler(&path)?;
    log::info!("Opened print document {}", path.display());
    Ok(path)
}

#[cfg(target_os = "macos")]
fn open_with_platform_handler(path: &Path) -> std::io::Result<()> {
    let _ = Command::new("open").arg(path).spawn()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn open_with_platform_handler(path: &Path) -> std::io::Result<()> {
    let _ = Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_with_platform_handler(path: &Path) -> std::io::Result<()> {
    let _ = Command::new("xdg-open").arg(path).spawn()?;
    Ok(())
}
