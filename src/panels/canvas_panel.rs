use crate::PaintApp;
use crate::input::map_to_canvas;
use crate::surface::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Central panel: the zoomed canvas with optional ruler strips.
pub fn canvas_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let zoom = app.tool_state().zoom;
            let show_rulers = app.tool_state().show_rulers;
            let margin = if show_rulers { 18.0 } else { 0.0 };

            let size = egui::vec2(
                SURFACE_WIDTH as f32 * zoom,
                SURFACE_HEIGHT as f32 * zoom,
            );
            let (full_rect, _response) = ui.allocate_exact_size(
                size + egui::vec2(margin, margin),
                egui::Sense::click_and_drag(),
            );
            let canvas_rect =
                egui::Rect::from_min_size(full_rect.min + egui::vec2(margin, margin), size);

            // Input first so this frame's texture reflects the new pixels.
            app.handle_canvas_input(ctx, canvas_rect);
            app.update_canvas_texture(ctx);

            let painter = ui.painter();
            if show_rulers {
                let ruler = egui::Color32::from_gray(235);
                painter.rect_filled(
                    egui::Rect::from_min_size(
                        full_rect.min,
                        egui::vec2(full_rect.width(), margin),
                    ),
                    0.0,
                    ruler,
                );
                painter.rect_filled(
                    egui::Rect::from_min_size(
                        full_rect.min,
                        egui::vec2(margin, full_rect.height()),
                    ),
                    0.0,
                    ruler,
                );
            }
            if let Some(texture) = app.canvas_texture() {
                painter.image(
                    texture.id(),
                    canvas_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }

            let hover = ctx
                .pointer_hover_pos()
                .filter(|pos| canvas_rect.contains(*pos))
                .map(|pos| map_to_canvas(pos, canvas_rect.min, zoom));
            app.set_pointer_canvas_pos(hover);
        });
    });
}
