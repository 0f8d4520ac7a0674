use easel_paint::session::CanvasSession;
use easel_paint::state::{ToolState, parse_hex_color};
use easel_paint::tools::ToolKind;
use egui::Pos2;

fn bucket(color: &str) -> ToolState {
    ToolState {
        active_tool: ToolKind::PaintBucket,
        color: parse_hex_color(color).unwrap(),
        ..ToolState::default()
    }
}

fn brush() -> ToolState {
    ToolState {
        active_tool: ToolKind::Brush,
        brush_size: 8.0,
        ..ToolState::default()
    }
}

/// Run a mixed batch of committed edits, returning how many were applied.
fn apply_edits(session: &mut CanvasSession) -> usize {
    session.pointer_down(Pos2::new(5.0, 5.0), &bucket("#ff0000"));

    let stroke = brush();
    session.pointer_down(Pos2::new(10.0, 10.0), &stroke);
    session.pointer_move(Pos2::new(200.0, 150.0), &stroke);
    session.pointer_up(Pos2::new(200.0, 150.0), &stroke);

    let rect = ToolState {
        active_tool: ToolKind::Rectangle,
        ..ToolState::default()
    };
    session.pointer_down(Pos2::new(300.0, 300.0), &rect);
    session.pointer_move(Pos2::new(400.0, 380.0), &rect);
    session.pointer_up(Pos2::new(400.0, 380.0), &rect);

    session.pointer_down(Pos2::new(350.0, 340.0), &bucket("#00ff00"));
    session.clear();

    5
}

#[test]
fn undo_n_then_redo_n_restores_final_buffer() {
    let mut session = CanvasSession::new(false);
    let edits = apply_edits(&mut session);
    let final_pixels = session.surface().pixels().to_vec();

    for _ in 0..edits {
        assert!(session.undo());
    }
    // The floor: one more undo is a no-op, not an error.
    assert!(!session.undo());
    assert!(!session.can_undo());

    for _ in 0..edits {
        assert!(session.redo());
    }
    assert!(!session.redo());
    assert_eq!(session.surface().pixels(), final_pixels.as_slice());
}

#[test]
fn undo_restores_each_intermediate_state() {
    let mut session = CanvasSession::new(false);

    session.pointer_down(Pos2::new(5.0, 5.0), &bucket("#ff0000"));
    let after_red = session.surface().pixels().to_vec();
    session.pointer_down(Pos2::new(5.0, 5.0), &bucket("#0000ff"));

    assert!(session.undo());
    assert_eq!(session.surface().pixels(), after_red.as_slice());
    assert!(session.undo());
    assert_eq!(session.surface().get_pixel(5, 5), [255, 255, 255, 255]);
}

#[test]
fn commit_after_undo_discards_redoable_entries() {
    let mut session = CanvasSession::new(false);

    session.pointer_down(Pos2::new(5.0, 5.0), &bucket("#ff0000"));
    session.pointer_down(Pos2::new(5.0, 5.0), &bucket("#00ff00"));
    assert!(session.undo());
    assert!(session.can_redo());

    // A fresh edit truncates the branch: redo becomes a no-op.
    session.pointer_down(Pos2::new(5.0, 5.0), &bucket("#0000ff"));
    assert!(!session.can_redo());
    assert!(!session.redo());
    assert_eq!(session.surface().get_pixel(5, 5), [0, 0, 255, 255]);
}

#[test]
fn every_gesture_commits_exactly_one_snapshot() {
    let mut session = CanvasSession::new(false);
    let start = session.history_len();
    let edits = apply_edits(&mut session);
    assert_eq!(session.history_len(), start + edits);
}
