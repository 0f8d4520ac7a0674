use std::sync::OnceLock;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Well-known font locations, tried in order at first use.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static SYSTEM_FONT: OnceLock<Option<FontArc>> = OnceLock::new();

/// Load the first usable system font, once per process.
fn system_font() -> Option<&'static FontArc> {
    SYSTEM_FONT
        .get_or_init(|| {
            for path in FONT_CANDIDATES {
                let Ok(bytes) = std::fs::read(path) else {
                    continue;
                };
                match FontArc::try_from_vec(bytes) {
                    Ok(font) => {
                        log::info!("Loaded text font from {path}");
                        return Some(font);
                    }
                    Err(err) => log::warn!("Unusable font at {path}: {err}"),
                }
            }
            log::warn!("No usable system font found; text insertion is disabled");
            None
        })
        .as_ref()
}

/// Rasterize `text` onto the surface with its baseline starting at `origin`.
///
/// Glyph coverage is alpha-blended in the given color. Returns false (and
/// draws nothing) when no system font could be loaded, so the caller can
/// skip the history commit.
pub fn draw_text(
    surface: &mut Surface,
    text: &str,
    origin: Pos2,
    font_size: f32,
    color: Color32,
) -> bool {
    let Some(font) = system_font() else {
        return false;
    };

    let scale = PxScale::from(font_size);
    let scaled = font.as_scaled(scale);
    let [r, g, b, _] = color.to_array();

    let mut caret = origin.x;
    let mut prev = None;
    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch);
        if let Some(prev_id) = prev {
            caret += scaled.kern(prev_id, glyph_id);
        }
        let glyph = glyph_id.with_scale_and_position(scale, point(caret, origin.y));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if surface.in_bounds(x, y) && coverage > 0.0 {
                    let alpha = (coverage.clamp(0.0, 1.0) * 255.0) as u8;
                    surface.composite_pixel(x as u32, y as u32, [r, g, b, alpha]);
                }
            });
        }
        caret += scaled.h_advance(glyph_id);
        prev = Some(glyph_id);
    }

    true
}
