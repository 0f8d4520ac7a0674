use crate::PaintApp;
use crate::state::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::tools::ToolKind;

/// Left side panel: tool selection, color, brush size and view options.
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            for tool in ToolKind::ALL {
                let selected = app.tool_state().active_tool == tool;
                if ui.selectable_label(selected, tool.label()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.id());
                    app.tool_state_mut().active_tool = tool;
                    if tool == ToolKind::Text {
                        app.open_text_dialog();
                    }
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut app.tool_state_mut().color,
                    egui::color_picker::Alpha::Opaque,
                );
            });

            ui.horizontal(|ui| {
                ui.label("Size:");
                let mut size = app.tool_state().brush_size;
                if ui
                    .add(egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE))
                    .changed()
                {
                    app.tool_state_mut().set_brush_size(size);
                }
            });

            ui.separator();
            ui.heading("View");

            let mut show_grid = app.tool_state().show_grid;
            if ui.checkbox(&mut show_grid, "Grid").changed() {
                app.set_show_grid(show_grid);
            }
            ui.checkbox(&mut app.tool_state_mut().show_rulers, "Rulers");
            ui.checkbox(&mut app.tool_state_mut().show_status_bar, "Status bar");
        });
}
