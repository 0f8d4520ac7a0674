use egui::{Color32, Pos2};

use crate::surface::Surface;

/// How stamped pixels combine with the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintMode {
    /// Overwrite with the stroke color, fully opaque.
    Paint(Color32),
    /// Cut-out compositing: touched pixels become fully transparent.
    Erase,
}

impl PaintMode {
    fn rgba(&self) -> [u8; 4] {
        match self {
            PaintMode::Paint(color) => color.to_array(),
            PaintMode::Erase => [0, 0, 0, 0],
        }
    }
}

/// Stamp one filled circular dab of the brush centered at `center`.
///
/// Hard-edged (no antialiasing) so region colors stay exact for the flood
/// fill's equality test.
pub fn stamp_dot(surface: &mut Surface, center: Pos2, width: f32, mode: PaintMode) {
    let radius = (width * 0.5).max(0.5);
    let rgba = mode.rgba();
    let r2 = radius * radius;

    let x0 = (center.x - radius).floor() as i32;
    let x1 = (center.x + radius).ceil() as i32;
    let y0 = (center.y - radius).floor() as i32;
    let y1 = (center.y + radius).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            if !surface.in_bounds(x, y) {
                continue;
            }
            let dx = x as f32 - center.x;
            let dy = y as f32 - center.y;
            if dx * dx + dy * dy <= r2 {
                surface.put_pixel(x as u32, y as u32, rgba);
            }
        }
    }
}

/// Render the straight subsegment from `a` to `b` as a dense run of stamps,
/// which yields round caps and round joins for free.
pub fn draw_segment(surface: &mut Surface, a: Pos2, b: Pos2, width: f32, mode: PaintMode) {
    let distance = a.distance(b);
    let steps = distance.ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let point = Pos2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
        stamp_dot(surface, point, width, mode);
    }
}

/// Stroke a connected sequence of points.
pub fn stroke_polyline(surface: &mut Surface, points: &[Pos2], width: f32, mode: PaintMode) {
    match points {
        [] => {}
        [single] => stamp_dot(surface, *single, width, mode),
        _ => {
            for pair in points.windows(2) {
                draw_segment(surface, pair[0], pair[1], width, mode);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_paints_center_pixel() {
        let mut surface = Surface::new(10, 10);
        stamp_dot(
            &mut surface,
            Pos2::new(5.0, 5.0),
            1.0,
            PaintMode::Paint(Color32::BLACK),
        );
        assert_eq!(surface.get_pixel(5, 5), [0, 0, 0, 255]);
        assert_eq!(surface.get_pixel(8, 8), [255, 255, 255, 255]);
    }

    #[test]
    fn segment_is_continuous_between_distant_points() {
        let mut surface = Surface::new(120, 120);
        draw_segment(
            &mut surface,
            Pos2::new(0.0, 0.0),
            Pos2::new(100.0, 100.0),
            5.0,
            PaintMode::Paint(Color32::BLACK),
        );
        // Every point on the diagonal is covered, not just sampled dots.
        for i in 0..=100 {
            assert_eq!(surface.get_pixel(i, i), [0, 0, 0, 255], "gap at {i}");
        }
    }

    #[test]
    fn erase_clears_to_transparent() {
        let mut surface = Surface::new(10, 10);
        draw_segment(
            &mut surface,
            Pos2::new(2.0, 5.0),
            Pos2::new(7.0, 5.0),
            3.0,
            PaintMode::Erase,
        );
        assert_eq!(surface.get_pixel(4, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn stamps_clip_at_surface_edges() {
        let mut surface = Surface::new(10, 10);
        stamp_dot(
            &mut surface,
            Pos2::new(0.0, 0.0),
            8.0,
            PaintMode::Paint(Color32::BLACK),
        );
        assert_eq!(surface.get_pixel(0, 0), [0, 0, 0, 255]);
    }
}
