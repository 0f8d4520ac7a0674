use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::tools::ToolKind;

pub const MIN_BRUSH_SIZE: f32 = 1.0;
pub const MAX_BRUSH_SIZE: f32 = 50.0;
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;

/// The ambient tool settings, passed by shared reference into every
/// gesture-handling call. Mutated only by the UI layer; the core reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    pub active_tool: ToolKind,
    pub color: Color32,
    pub brush_size: f32,
    pub zoom: f32,
    pub show_grid: bool,
    pub show_rulers: bool,
    pub show_status_bar: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            active_tool: ToolKind::default(),
            color: Color32::BLACK,
            brush_size: 5.0,
            zoom: 1.0,
            show_grid: false,
            show_rulers: false,
            show_status_bar: true,
        }
    }
}

impl ToolState {
    /// Clamp brush size into its valid range.
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    /// Zoom in by one step (factor 1.2, capped at 5x).
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * 1.2).min(MAX_ZOOM);
    }

    /// Zoom out by one step (factor 0.8, floored at 0.1x).
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom * 0.8).max(MIN_ZOOM);
    }

    /// Reset to 1:1.
    pub fn fit_to_canvas(&mut self) {
        self.zoom = 1.0;
    }
}

/// Parse a `#RRGGBB` hex string into an opaque color. Returns `None` for
/// anything else (short forms, missing `#`, non-hex digits).
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Format a color as `#rrggbb`, discarding alpha.
pub fn format_hex_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_round_trips() {
        for hex in ["#000000", "#ff0000", "#00ff7f", "#abcdef"] {
            let color = parse_hex_color(hex).unwrap();
            assert_eq!(format_hex_color(color), hex);
        }
    }

    #[test]
    fn invalid_hex_is_rejected() {
        for bad in ["ff0000", "#fff", "#gggggg", "#12345", "#1234567", ""] {
            assert!(parse_hex_color(bad).is_none(), "{bad:?}");
        }
    }

    #[test]
    fn brush_size_clamps_to_range() {
        let mut state = ToolState::default();
        state.set_brush_size(0.0);
        assert_eq!(state.brush_size, MIN_BRUSH_SIZE);
        state.set_brush_size(120.0);
        assert_eq!(state.brush_size, MAX_BRUSH_SIZE);
    }

    #[test]
    fn zoom_steps_stay_in_range() {
        let mut state = ToolState::default();
        for _ in 0..40 {
            state.zoom_in();
        }
        assert!(state.zoom <= MAX_ZOOM);
        for _ in 0..80 {
            state.zoom_out();
        }
        assert!(state.zoom >= MIN_ZOOM);
        state.fit_to_canvas();
        assert_eq!(state.zoom, 1.0);
    }
}
