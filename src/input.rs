use egui::{Context, Pos2, Rect};

/// A pointer event already resolved to canvas-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button was pressed inside the canvas.
    Down(Pos2),
    /// Pointer moved while a gesture is active.
    Move(Pos2),
    /// Primary button was released.
    Up(Pos2),
    /// Pointer left the canvas mid-gesture; must finalize like `Up`.
    Leave,
}

/// Map a raw screen position to canvas space under the current zoom.
///
/// `origin` is the on-screen top-left corner of the canvas. Re-derive it on
/// every event — the canvas rectangle moves under resize and fullscreen.
pub fn map_to_canvas(raw: Pos2, origin: Pos2, zoom: f32) -> Pos2 {
    Pos2::new((raw.x - origin.x) / zoom, (raw.y - origin.y) / zoom)
}

/// Translates raw egui pointer input into canvas [`PointerEvent`]s.
///
/// Only events relevant to the drawing area are produced: a gesture starts
/// with a press inside the canvas rectangle and ends with a release or with
/// the pointer leaving the rectangle, whichever comes first.
pub struct InputHandler {
    last_pos: Option<Pos2>,
    gesture_active: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pos: None,
            gesture_active: false,
        }
    }

    /// Process this frame's pointer input against the given canvas rectangle.
    pub fn process(&mut self, ctx: &Context, canvas_rect: Rect, zoom: f32) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let origin = canvas_rect.min;

        ctx.input(|input| {
            let pos = input.pointer.hover_pos();

            if input.pointer.primary_pressed() {
                if let Some(p) = pos {
                    if canvas_rect.contains(p) {
                        self.gesture_active = true;
                        events.push(PointerEvent::Down(map_to_canvas(p, origin, zoom)));
                    }
                }
            }

            if self.gesture_active {
                match pos {
                    Some(p) if canvas_rect.contains(p) => {
                        if Some(p) != self.last_pos {
                            events.push(PointerEvent::Move(map_to_canvas(p, origin, zoom)));
                        }
                        if input.pointer.primary_released() {
                            events.push(PointerEvent::Up(map_to_canvas(p, origin, zoom)));
                            self.gesture_active = false;
                        }
                    }
                    // Outside the canvas (or off-window): forced finalization.
                    _ => {
                        events.push(PointerEvent::Leave);
                        self.gesture_active = false;
                    }
                }
            }

            self.last_pos = pos;
        });

        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
