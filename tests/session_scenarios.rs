use easel_paint::session::CanvasSession;
use easel_paint::state::{ToolState, parse_hex_color};
use easel_paint::tools::ToolKind;
use egui::Pos2;
use image::RgbaImage;

fn state_with(tool: ToolKind) -> ToolState {
    ToolState {
        active_tool: tool,
        ..ToolState::default()
    }
}

#[test]
fn paint_bucket_fills_blank_canvas_with_one_commit() {
    let mut session = CanvasSession::new(false);
    let entries_before = session.history_len();

    let mut state = state_with(ToolKind::PaintBucket);
    state.color = parse_hex_color("#ff0000").unwrap();
    session.pointer_down(Pos2::new(10.0, 10.0), &state);

    // The blank page is uniformly white, so the bounded region is the whole
    // canvas.
    let surface = session.surface();
    for (x, y) in [(0, 0), (799, 0), (0, 599), (799, 599), (400, 300)] {
        assert_eq!(surface.get_pixel(x, y), [255, 0, 0, 255], "pixel {x},{y}");
    }
    assert_eq!(session.history_len(), entries_before + 1);

    // The fill already finalized; the matching release adds nothing.
    session.pointer_up(Pos2::new(10.0, 10.0), &state);
    assert_eq!(session.history_len(), entries_before + 1);
}

#[test]
fn line_then_undo_restores_previous_buffer_exactly() {
    let mut session = CanvasSession::new(false);
    let before = session.surface().pixels().to_vec();

    let mut state = state_with(ToolKind::Brush);
    state.brush_size = 5.0;
    session.pointer_down(Pos2::new(0.0, 0.0), &state);
    session.pointer_move(Pos2::new(100.0, 100.0), &state);
    session.pointer_up(Pos2::new(100.0, 100.0), &state);

    assert_eq!(session.surface().get_pixel(50, 50), [0, 0, 0, 255]);

    assert!(session.undo());
    assert_eq!(session.surface().pixels(), before.as_slice());
}

#[test]
fn shapes_render_only_on_release() {
    let mut session = CanvasSession::new(false);
    let state = state_with(ToolKind::Rectangle);

    session.pointer_down(Pos2::new(10.0, 10.0), &state);
    session.pointer_move(Pos2::new(60.0, 40.0), &state);
    // Mid-drag the committed buffer is untouched: no live preview.
    assert_eq!(session.surface().get_pixel(10, 10), [255, 255, 255, 255]);

    session.pointer_up(Pos2::new(60.0, 40.0), &state);
    for (x, y) in [(10, 10), (60, 10), (60, 40), (10, 40)] {
        assert_eq!(session.surface().get_pixel(x, y), [0, 0, 0, 255]);
    }
}

#[test]
fn pointer_leave_finalizes_like_pointer_up() {
    let mut session = CanvasSession::new(false);
    let entries_before = session.history_len();
    let state = state_with(ToolKind::Brush);

    session.pointer_down(Pos2::new(5.0, 5.0), &state);
    session.pointer_move(Pos2::new(20.0, 5.0), &state);
    session.pointer_leave(&state);

    assert!(!session.is_drawing());
    assert_eq!(session.history_len(), entries_before + 1);
    assert_eq!(session.surface().get_pixel(12, 5), [0, 0, 0, 255]);

    // A stray release afterwards must not commit again.
    session.pointer_up(Pos2::new(20.0, 5.0), &state);
    assert_eq!(session.history_len(), entries_before + 1);
}

#[test]
fn eraser_cuts_out_pixels_then_brush_paints_over() {
    let mut session = CanvasSession::new(false);

    let mut brush = state_with(ToolKind::Brush);
    brush.brush_size = 10.0;
    session.pointer_down(Pos2::new(30.0, 30.0), &brush);
    session.pointer_move(Pos2::new(70.0, 30.0), &brush);
    session.pointer_up(Pos2::new(70.0, 30.0), &brush);
    assert_eq!(session.surface().get_pixel(50, 30), [0, 0, 0, 255]);

    let mut eraser = state_with(ToolKind::Eraser);
    eraser.brush_size = 10.0;
    session.pointer_down(Pos2::new(30.0, 30.0), &eraser);
    session.pointer_move(Pos2::new(70.0, 30.0), &eraser);
    session.pointer_up(Pos2::new(70.0, 30.0), &eraser);
    assert_eq!(session.surface().get_pixel(50, 30), [0, 0, 0, 0]);

    // Normal compositing is restored for the next stroke.
    session.pointer_down(Pos2::new(30.0, 30.0), &brush);
    session.pointer_move(Pos2::new(70.0, 30.0), &brush);
    session.pointer_up(Pos2::new(70.0, 30.0), &brush);
    assert_eq!(session.surface().get_pixel(50, 30), [0, 0, 0, 255]);
}

#[test]
fn cut_returns_copy_and_clears_to_white() {
    let mut session = CanvasSession::new(false);
    let mut state = state_with(ToolKind::PaintBucket);
    state.color = parse_hex_color("#0000ff").unwrap();
    session.pointer_down(Pos2::new(1.0, 1.0), &state);
    let entries_before = session.history_len();

    let copy = session.cut();
    assert_eq!(copy.get_pixel(10, 10).0, [0, 0, 255, 255]);
    assert_eq!(session.surface().get_pixel(10, 10), [255, 255, 255, 255]);
    assert_eq!(session.history_len(), entries_before + 1);
}

#[test]
fn paste_draws_half_scaled_at_fixed_offset() {
    let mut session = CanvasSession::new(false);
    let entries_before = session.history_len();

    let mut source = RgbaImage::new(100, 60);
    for pixel in source.pixels_mut() {
        pixel.0 = [0, 0, 255, 255];
    }
    session.paste_image(&source);

    // Scaled to 50x30, placed with its top-left corner at (50, 50).
    assert_eq!(session.surface().get_pixel(60, 60), [0, 0, 255, 255]);
    assert_eq!(session.surface().get_pixel(99, 79), [0, 0, 255, 255]);
    assert_eq!(session.surface().get_pixel(49, 49), [255, 255, 255, 255]);
    assert_eq!(session.surface().get_pixel(110, 90), [255, 255, 255, 255]);
    assert_eq!(session.history_len(), entries_before + 1);
}

#[test]
fn text_and_magnifier_ignore_pointer_events() {
    let mut session = CanvasSession::new(false);
    let entries_before = session.history_len();

    for tool in [ToolKind::Text, ToolKind::Magnifier] {
        let state = state_with(tool);
        session.pointer_down(Pos2::new(10.0, 10.0), &state);
        assert!(!session.is_drawing());
        session.pointer_up(Pos2::new(20.0, 20.0), &state);
    }
    assert_eq!(session.history_len(), entries_before);
}

#[test]
fn grid_toggle_wipes_canvas_but_stays_undoable() {
    let mut session = CanvasSession::new(false);
    let mut state = state_with(ToolKind::PaintBucket);
    state.color = parse_hex_color("#ff0000").unwrap();
    session.pointer_down(Pos2::new(1.0, 1.0), &state);
    let entries_before = session.history_len();

    session.set_show_grid(true);
    // The drawing is gone; the page is white with grid lines.
    assert_eq!(session.surface().get_pixel(5, 5), [255, 255, 255, 255]);
    assert_eq!(session.surface().get_pixel(20, 5), [0xe0, 0xe0, 0xe0, 255]);
    assert_eq!(session.history_len(), entries_before + 1);

    // The wipe went through the normal commit path, so it can be undone.
    assert!(session.undo());
    assert_eq!(session.surface().get_pixel(5, 5), [255, 0, 0, 255]);
}

#[test]
fn clear_resets_to_plain_white_even_with_grid_enabled() {
    let mut session = CanvasSession::new(true);
    assert_eq!(session.surface().get_pixel(20, 5), [0xe0, 0xe0, 0xe0, 255]);

    session.clear();
    assert_eq!(session.surface().get_pixel(20, 5), [255, 255, 255, 255]);
}
