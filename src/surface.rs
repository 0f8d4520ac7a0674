use egui::{Color32, ColorImage};
use image::RgbaImage;

/// Fixed artwork page size.
pub const SURFACE_WIDTH: u32 = 800;
pub const SURFACE_HEIGHT: u32 = 600;

/// Spacing between grid lines, in pixels.
pub const GRID_SPACING: u32 = 20;

/// Color of the grid overlay lines.
pub const GRID_COLOR: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);

/// The single raster pixel buffer representing the artwork's visible state.
///
/// Pixels are straight (unpremultiplied) RGBA, row-major, four bytes per
/// pixel. The buffer is exclusively owned by the canvas session; drawing
/// components borrow it for the duration of a single operation.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a surface filled with opaque white.
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        };
        surface.fill(Color32::WHITE);
        surface
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    /// Read the pixel at (x, y). Caller guarantees bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Read the pixel at signed coordinates, `None` when out of bounds.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if self.in_bounds(x, y) {
            Some(self.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Overwrite the pixel at (x, y). Caller guarantees bounds.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Source-over composite `src` onto the pixel at (x, y).
    pub fn composite_pixel(&mut self, x: u32, y: u32, src: [u8; 4]) {
        let sa = src[3] as u32;
        if sa == 0 {
            return;
        }
        if sa == 255 {
            self.put_pixel(x, y, src);
            return;
        }
        let dst = self.get_pixel(x, y);
        let da = dst[3] as u32;
        let inv = 255 - sa;
        let out_a = sa + da * inv / 255;
        let mut out = [0u8; 4];
        for c in 0..3 {
            let s = src[c] as u32;
            let d = dst[c] as u32;
            let num = s * sa + d * da * inv / 255;
            out[c] = (num / out_a.max(1)) as u8;
        }
        out[3] = out_a as u8;
        self.put_pixel(x, y, out);
    }

    /// Flood the whole surface with one color.
    pub fn fill(&mut self, color: Color32) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Repaint the page: opaque white, plus grid lines when requested.
    pub fn reset_page(&mut self, show_grid: bool) {
        self.fill(Color32::WHITE);
        if show_grid {
            self.draw_grid(GRID_SPACING, GRID_COLOR);
        }
    }

    /// One-pixel grid lines every `spacing` pixels, both axes.
    fn draw_grid(&mut self, spacing: u32, color: Color32) {
        let rgba = color.to_array();
        let mut x = 0;
        while x < self.width {
            for y in 0..self.height {
                self.put_pixel(x, y, rgba);
            }
            x += spacing;
        }
        let mut y = 0;
        while y < self.height {
            for x in 0..self.width {
                self.put_pixel(x, y, rgba);
            }
            y += spacing;
        }
    }

    /// Replace the whole buffer from a snapshot of identical dimensions.
    pub fn restore(&mut self, pixels: &[u8]) {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        self.pixels.copy_from_slice(pixels);
    }

    /// Source-over blit of an RGBA image with its top-left corner at (ox, oy).
    /// Pixels falling outside the surface are clipped.
    pub fn blit_rgba(&mut self, img: &RgbaImage, ox: i32, oy: i32) {
        for (x, y, pixel) in img.enumerate_pixels() {
            let tx = ox + x as i32;
            let ty = oy + y as i32;
            if self.in_bounds(tx, ty) {
                self.composite_pixel(tx as u32, ty as u32, pixel.0);
            }
        }
    }

    /// Copy out as an egui image for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.pixels,
        )
    }

    /// Copy out as an `image` crate buffer for export and clipboard use.
    pub fn to_rgba_image(&self) -> RgbaImage {
        // The buffer length is width * height * 4 by construction.
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}
