use egui::{Color32, Pos2};
use std::f32::consts::{PI, TAU};

use crate::raster::{self, PaintMode};
use crate::surface::Surface;
use crate::tools::ToolKind;

/// Number of points on a star outline.
pub const STAR_POINTS: u32 = 5;

/// Stroke the outline of a drag-defined shape onto the surface.
///
/// Shapes are computed only at gesture end from the start and end points;
/// there is no incremental rendering during the drag.
pub fn stroke_shape(
    surface: &mut Surface,
    tool: ToolKind,
    start: Pos2,
    end: Pos2,
    width: f32,
    color: Color32,
) {
    let mode = PaintMode::Paint(color);
    let outline = match tool {
        ToolKind::Rectangle => rectangle_outline(start, end),
        ToolKind::Circle => circle_outline(start, start.distance(end)),
        ToolKind::Line => vec![start, end],
        ToolKind::Triangle => triangle_outline(start, end),
        ToolKind::Star => {
            let outer = (end.x - start.x).abs() / 2.0;
            star_outline(start, outer, STAR_POINTS)
        }
        ToolKind::Heart => heart_outline(start, (end.x - start.x).abs()),
        _ => return,
    };
    raster::stroke_polyline(surface, &outline, width, mode);
}

/// Axis-aligned rectangle between the drag corners, closed.
fn rectangle_outline(start: Pos2, end: Pos2) -> Vec<Pos2> {
    vec![
        start,
        Pos2::new(end.x, start.y),
        end,
        Pos2::new(start.x, end.y),
        start,
    ]
}

/// Circle centered on the drag start, flattened to a closed polygon.
fn circle_outline(center: Pos2, radius: f32) -> Vec<Pos2> {
    let steps = (radius * TAU / 2.0).ceil().clamp(16.0, 512.0) as usize;
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let angle = TAU * i as f32 / steps as f32;
        points.push(Pos2::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        ));
    }
    points
}

/// Isosceles triangle: apex centered between the drag x extents at the start
/// height, base along the end height.
fn triangle_outline(start: Pos2, end: Pos2) -> Vec<Pos2> {
    let apex = Pos2::new((start.x + end.x) / 2.0, start.y);
    vec![
        apex,
        Pos2::new(start.x, end.y),
        Pos2::new(end.x, end.y),
        apex,
    ]
}

/// Alternating-radius star polygon: `2 * points` vertices, inner radius half
/// the outer, vertex `i` at angle `i * PI / points`, closed.
pub fn star_outline(center: Pos2, outer_radius: f32, points: u32) -> Vec<Pos2> {
    let count = points * 2;
    let mut vertices = Vec::with_capacity(count as usize + 1);
    for i in 0..count {
        let angle = i as f32 * PI / points as f32;
        let radius = if i % 2 == 0 {
            outer_radius
        } else {
            outer_radius / 2.0
        };
        vertices.push(Pos2::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        ));
    }
    if let Some(&first) = vertices.first() {
        vertices.push(first);
    }
    vertices
}

/// Heart silhouette: four cubic Bézier segments anchored at `origin`,
/// scaled by `size`, with the top curve at `0.3 * size`.
fn heart_outline(origin: Pos2, size: f32) -> Vec<Pos2> {
    let (x, y) = (origin.x, origin.y);
    let top = size * 0.3;
    let mid = (size + top) / 2.0;
    let half = size / 2.0;

    let start = Pos2::new(x, y + top);
    let mut path = vec![start];
    // Left lobe, left flank down to the tip.
    flatten_cubic(
        start,
        Pos2::new(x, y),
        Pos2::new(x - half, y),
        Pos2::new(x - half, y + top),
        &mut path,
    );
    flatten_cubic(
        Pos2::new(x - half, y + top),
        Pos2::new(x - half, y + mid),
        Pos2::new(x, y + mid),
        Pos2::new(x, y + size),
        &mut path,
    );
    // Right flank back up and over the right lobe.
    flatten_cubic(
        Pos2::new(x, y + size),
        Pos2::new(x, y + mid),
        Pos2::new(x + half, y + mid),
        Pos2::new(x + half, y + top),
        &mut path,
    );
    flatten_cubic(
        Pos2::new(x + half, y + top),
        Pos2::new(x + half, y),
        Pos2::new(x, y),
        start,
        &mut path,
    );
    path
}

/// Flatten one cubic Bézier into line segments, appending to `out`.
/// The segment's start point is expected to already be in `out`.
fn flatten_cubic(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, out: &mut Vec<Pos2>) {
    const SEGMENTS: usize = 24;
    for i in 1..=SEGMENTS {
        let t = i as f32 / SEGMENTS as f32;
        let u = 1.0 - t;
        let x = u * u * u * p0.x
            + 3.0 * u * u * t * p1.x
            + 3.0 * u * t * t * p2.x
            + t * t * t * p3.x;
        let y = u * u * u * p0.y
            + 3.0 * u * u * t * p1.y
            + 3.0 * u * t * t * p2.y
            + t * t * t * p3.y;
        out.push(Pos2::new(x, y));
    }
}
