use std::borrow::Cow;

use image::RgbaImage;

/// Place an RGBA image on the system clipboard.
///
/// Failures (no clipboard, denied access) are logged and swallowed — the
/// operation simply has no effect.
pub fn copy_image(image: &RgbaImage) {
    let data = arboard::ImageData {
        width: image.width() as usize,
        height: image.height() as usize,
        bytes: Cow::Borrowed(image.as_raw().as_slice()),
    };

    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_image(data) {
                log::warn!("Failed to copy image to clipboard: {err}");
            } else {
                log::info!(
                    "Copied {}x{} image to clipboard",
                    image.width(),
                    image.height()
                );
            }
        }
        Err(err) => log::warn!("Failed to access clipboard: {err}"),
    }
}

/// Read the first image from the system clipboard, if any.
pub fn read_image() -> Option<RgbaImage> {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            log::warn!("Failed to access clipboard: {err}");
            return None;
        }
    };

    match clipboard.get_image() {
        Ok(data) => {
            let width = data.width as u32;
            let height = data.height as u32;
            match RgbaImage::from_raw(width, height, data.bytes.into_owned()) {
                Some(image) => Some(image),
                None => {
                    log::warn!("Clipboard image has inconsistent dimensions, ignoring");
                    None
                }
            }
        }
        Err(err) => {
            log::warn!("Failed to read clipboard contents: {err}");
            None
        }
    }
}
