use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Region-fill the contiguous area around `seed` with `fill_color`.
///
/// Membership is exact RGBA equality with the seed pixel's original color,
/// over 4-connected neighbors only. Traversal uses an explicit LIFO stack of
/// packed flat indices with a byte mask doubling as the visited set, so each
/// pixel is evaluated once and large regions cannot overflow the call stack.
///
/// An out-of-bounds seed is a silent no-op. Filling with the seed's own
/// color is an idempotent paint-over. Returns true when any pixel was
/// written (used by the session to decide whether to commit).
pub fn flood_fill(surface: &mut Surface, seed: Pos2, fill_color: Color32) -> bool {
    let x = seed.x.floor() as i32;
    let y = seed.y.floor() as i32;
    let Some(target) = surface.pixel_at(x, y) else {
        return false;
    };

    let width = surface.width() as usize;
    let height = surface.height() as usize;
    let color = fill_color.to_array();
    let fill = [color[0], color[1], color[2], 255];

    // Mask doubles as the visited set; marked when pushed, written when popped.
    let mut visited = vec![false; width * height];
    let mut stack: Vec<u32> = Vec::with_capacity(4096);

    let seed_idx = y as usize * width + x as usize;
    visited[seed_idx] = true;
    stack.push(seed_idx as u32);

    while let Some(idx) = stack.pop() {
        let idx = idx as usize;
        let px = (idx % width) as u32;
        let py = (idx / width) as u32;
        surface.put_pixel(px, py, fill);

        // 4-connected neighbors, in-bounds, unvisited, exact color match.
        if px > 0 {
            push_if_match(surface, &mut visited, &mut stack, idx - 1, target);
        }
        if (px as usize) + 1 < width {
            push_if_match(surface, &mut visited, &mut stack, idx + 1, target);
        }
        if py > 0 {
            push_if_match(surface, &mut visited, &mut stack, idx - width, target);
        }
        if (py as usize) + 1 < height {
            push_if_match(surface, &mut visited, &mut stack, idx + width, target);
        }
    }

    true
}

fn push_if_match(
    surface: &Surface,
    visited: &mut [bool],
    stack: &mut Vec<u32>,
    idx: usize,
    target: [u8; 4],
) {
    if visited[idx] {
        return;
    }
    let width = surface.width() as usize;
    let px = (idx % width) as u32;
    let py = (idx / width) as u32;
    if surface.get_pixel(px, py) == target {
        visited[idx] = true;
        stack.push(idx as u32);
    }
}
