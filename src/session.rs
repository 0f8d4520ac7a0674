use egui::Pos2;
use image::RgbaImage;
use image::imageops::FilterType;

use crate::fill::flood_fill;
use crate::history::SnapshotHistory;
use crate::raster::{self, PaintMode};
use crate::shapes;
use crate::state::ToolState;
use crate::surface::{SURFACE_HEIGHT, SURFACE_WIDTH, Surface};
use crate::text;
use crate::tools::ToolKind;

/// Top-left offset at which pasted images are placed.
const PASTE_OFFSET: i32 = 50;

/// Baseline anchor for inserted text.
const TEXT_ANCHOR: Pos2 = Pos2::new(100.0, 100.0);

/// Transient record of one in-progress gesture; lives only between
/// pointer-down and pointer-up/leave.
struct Gesture {
    tool: ToolKind,
    start: Pos2,
    last: Pos2,
}

/// Owns the raster surface and its history, and runs the per-gesture state
/// machine (`Idle -> Active(tool) -> Idle`).
///
/// Pointer events arrive already mapped to canvas space; the ambient tool
/// settings are passed in by shared reference on every call.
pub struct CanvasSession {
    surface: Surface,
    history: SnapshotHistory,
    gesture: Option<Gesture>,
    version: u64,
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new(false)
    }
}

impl CanvasSession {
    /// Create a session over a blank white page (grid lines included when
    /// the grid flag starts enabled) with the initial snapshot committed.
    pub fn new(show_grid: bool) -> Self {
        let mut surface = Surface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
        surface.reset_page(show_grid);
        let mut history = SnapshotHistory::new();
        history.commit(&surface);
        Self {
            surface,
            history,
            gesture: None,
            version: 0,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Monotonic counter bumped on every pixel mutation; lets the UI know
    /// when to re-upload the canvas texture.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    fn commit(&mut self) {
        self.history.commit(&self.surface);
    }

    fn paint_mode(tool: ToolKind, state: &ToolState) -> PaintMode {
        if tool == ToolKind::Eraser {
            PaintMode::Erase
        } else {
            PaintMode::Paint(state.color)
        }
    }

    /// `Idle -> Active` (or a synchronous fill for the paint bucket).
    pub fn pointer_down(&mut self, point: Pos2, state: &ToolState) {
        match state.active_tool {
            ToolKind::PaintBucket => {
                // Fill is delegated immediately; the gesture never activates.
                if flood_fill(&mut self.surface, point, state.color) {
                    self.touch();
                    self.commit();
                }
            }
            // Text is a one-shot command; the magnifier is reserved.
            ToolKind::Text | ToolKind::Magnifier => {}
            tool => {
                self.gesture = Some(Gesture {
                    tool,
                    start: point,
                    last: point,
                });
            }
        }
    }

    /// Freehand tools render the subsegment since the last point; shape
    /// tools just track the endpoint (no live preview).
    pub fn pointer_move(&mut self, point: Pos2, state: &ToolState) {
        let Some(gesture) = &mut self.gesture else {
            return;
        };
        if gesture.tool.is_freehand() {
            let mode = Self::paint_mode(gesture.tool, state);
            raster::draw_segment(&mut self.surface, gesture.last, point, state.brush_size, mode);
            gesture.last = point;
            self.touch();
        } else {
            gesture.last = point;
        }
    }

    /// `Active -> Idle`: render shapes, commit exactly one snapshot.
    pub fn pointer_up(&mut self, point: Pos2, state: &ToolState) {
        self.finish(Some(point), state);
    }

    /// Forced finalization when the pointer exits the canvas; behaves like
    /// pointer-up at the last known point so no gesture is left dangling.
    pub fn pointer_leave(&mut self, state: &ToolState) {
        self.finish(None, state);
    }

    fn finish(&mut self, point: Option<Pos2>, state: &ToolState) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        let end = point.unwrap_or(gesture.last);

        if gesture.tool.is_freehand() && end != gesture.last {
            let mode = Self::paint_mode(gesture.tool, state);
            raster::draw_segment(&mut self.surface, gesture.last, end, state.brush_size, mode);
        }
        if gesture.tool.is_shape() {
            shapes::stroke_shape(
                &mut self.surface,
                gesture.tool,
                gesture.start,
                end,
                state.brush_size,
                state.color,
            );
        }

        self.touch();
        self.commit();
    }

    /// Restore the previous snapshot, if any.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.history.undo() {
            self.surface.restore(snapshot.pixels());
            self.touch();
            true
        } else {
            false
        }
    }

    /// Restore the next snapshot, if any.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.history.redo() {
            self.surface.restore(snapshot.pixels());
            self.touch();
            true
        } else {
            false
        }
    }

    /// Wipe to an opaque white page and commit.
    pub fn clear(&mut self) {
        self.surface.fill(egui::Color32::WHITE);
        self.touch();
        self.commit();
    }

    /// Rasterize text at the fixed anchor in the current color and commit.
    /// Silent no-op when no font is available.
    pub fn insert_text(&mut self, content: &str, font_size: f32, state: &ToolState) -> bool {
        if text::draw_text(
            &mut self.surface,
            content,
            TEXT_ANCHOR,
            font_size,
            state.color,
        ) {
            self.touch();
            self.commit();
            true
        } else {
            false
        }
    }

    /// Draw a bitmap at the paste offset, scaled to half its source
    /// dimensions, and commit.
    pub fn paste_image(&mut self, image: &RgbaImage) {
        let width = (image.width() / 2).max(1);
        let height = (image.height() / 2).max(1);
        let scaled = image::imageops::resize(image, width, height, FilterType::Triangle);
        self.surface.blit_rgba(&scaled, PASTE_OFFSET, PASTE_OFFSET);
        self.touch();
        self.commit();
    }

    /// Point-in-time copy of the surface. Read-only: no commit.
    pub fn copy_image(&self) -> RgbaImage {
        self.surface.to_rgba_image()
    }

    /// Copy, then clear. The clear provides the single commit.
    pub fn cut(&mut self) -> RgbaImage {
        let copy = self.copy_image();
        self.clear();
        copy
    }

    /// Repaint the page for the new grid setting and commit.
    ///
    /// This intentionally wipes the drawing, matching the long-standing
    /// behavior of the page reset on grid changes; the wipe itself is
    /// undoable since it goes through the normal commit path.
    pub fn set_show_grid(&mut self, show_grid: bool) {
        self.surface.reset_page(show_grid);
        self.touch();
        self.commit();
    }
}
