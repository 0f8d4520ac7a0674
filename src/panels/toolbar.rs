use crate::PaintApp;
use crate::export::ExportFormat;

/// Top toolbar: history, clipboard, zoom, save and print controls.
pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let can_undo = app.session().can_undo();
            let can_redo = app.session().can_redo();

            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.redo();
            }
            if ui.button("Clear").clicked() {
                app.clear_canvas();
            }

            ui.separator();

            if ui.button("Copy").clicked() {
                app.copy();
            }
            if ui.button("Cut").clicked() {
                app.cut();
            }
            if ui.button("Paste").clicked() {
                app.paste();
            }

            ui.separator();

            if ui.button("\u{2212}").clicked() {
                app.tool_state_mut().zoom_out();
            }
            ui.label(format!("{:.0}%", app.tool_state().zoom * 100.0));
            if ui.button("+").clicked() {
                app.tool_state_mut().zoom_in();
            }
            if ui.button("Fit").clicked() {
                app.tool_state_mut().fit_to_canvas();
            }
            if ui.button("Fullscreen").clicked() {
                app.toggle_fullscreen(ctx);
            }

            ui.separator();

            ui.menu_button("Save", |ui| {
                for format in ExportFormat::ALL {
                    if ui.button(format.label()).clicked() {
                        app.export(format);
                        ui.close_menu();
                    }
                }
            });
            if ui.button("Print").clicked() {
                app.print();
            }
        });
    });
}
