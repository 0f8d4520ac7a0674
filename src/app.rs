use egui::{Key, TextureHandle, TextureOptions};

use crate::clipboard;
use crate::export::{self, ExportFormat};
use crate::input::InputHandler;
use crate::panels;
use crate::session::CanvasSession;
use crate::state::ToolState;

/// State of the text-insertion dialog.
pub struct TextDialog {
    pub open: bool,
    pub content: String,
    pub font_size: f32,
}

impl Default for TextDialog {
    fn default() -> Self {
        Self {
            open: false,
            content: String::new(),
            font_size: 24.0,
        }
    }
}

/// We derive Deserialize/Serialize so we can persist tool settings on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    tool_state: ToolState,
    // The canvas itself is in-memory only; every run starts from a blank page.
    #[serde(skip)]
    session: CanvasSession,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    canvas_texture: Option<TextureHandle>,
    #[serde(skip)]
    uploaded_version: Option<u64>,
    #[serde(skip)]
    text_dialog: TextDialog,
    #[serde(skip)]
    fullscreen: bool,
    #[serde(skip)]
    pointer_canvas_pos: Option<egui::Pos2>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            tool_state: ToolState::default(),
            session: CanvasSession::default(),
            input: InputHandler::new(),
            canvas_texture: None,
            uploaded_version: None,
            text_dialog: TextDialog::default(),
            fullscreen: false,
            pointer_canvas_pos: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: PaintApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        // The session starts fresh; only re-apply the persisted grid flag.
        app.session = CanvasSession::new(app.tool_state.show_grid);
        app
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool_state
    }

    pub fn tool_state_mut(&mut self) -> &mut ToolState {
        &mut self.tool_state
    }

    pub fn session(&self) -> &CanvasSession {
        &self.session
    }

    pub fn set_pointer_canvas_pos(&mut self, pos: Option<egui::Pos2>) {
        self.pointer_canvas_pos = pos;
    }

    pub fn undo(&mut self) {
        let _ = self.session.undo();
    }

    pub fn redo(&mut self) {
        let _ = self.session.redo();
    }

    pub fn clear_canvas(&mut self) {
        self.session.clear();
    }

    /// Repaint the page for the new grid flag (wipes the drawing — see the
    /// session docs) and remember the setting.
    pub fn set_show_grid(&mut self, show_grid: bool) {
        self.tool_state.show_grid = show_grid;
        self.session.set_show_grid(show_grid);
    }

    pub fn open_text_dialog(&mut self) {
        self.text_dialog.open = true;
    }

    /// Commit the text dialog's contents onto the canvas.
    pub fn confirm_text_dialog(&mut self) {
        let content = std::mem::take(&mut self.text_dialog.content);
        let font_size = self.text_dialog.font_size;
        if !self.session.insert_text(&content, font_size, &self.tool_state) {
            log::warn!("Text insertion skipped: no usable font");
        }
        self.text_dialog.open = false;
    }

    pub fn export(&mut self, format: ExportFormat) {
        let dir = std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir());
        if let Err(err) = export::export_surface(self.session.surface(), format, &dir) {
            log::error!("Export failed: {err}");
        }
    }

    pub fn print(&mut self) {
        if let Err(err) = export::print_surface(self.session.surface()) {
            log::error!("Print failed: {err}");
        }
    }

    pub fn copy(&mut self) {
        clipboard::copy_image(&self.session.copy_image());
    }

    pub fn cut(&mut self) {
        let copy = self.session.cut();
        clipboard::copy_image(&copy);
    }

    pub fn paste(&mut self) {
        if let Some(image) = clipboard::read_image() {
            self.session.paste_image(&image);
        }
    }

    pub fn toggle_fullscreen(&mut self, ctx: &egui::Context) {
        self.fullscreen = !self.fullscreen;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.fullscreen));
    }

    /// Route this frame's pointer input within the canvas rectangle into the
    /// session's gesture state machine.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        use crate::input::PointerEvent;

        let zoom = self.tool_state.zoom;
        for event in self.input.process(ctx, canvas_rect, zoom) {
            match event {
                PointerEvent::Down(point) => self.session.pointer_down(point, &self.tool_state),
                PointerEvent::Move(point) => self.session.pointer_move(point, &self.tool_state),
                PointerEvent::Up(point) => self.session.pointer_up(point, &self.tool_state),
                PointerEvent::Leave => self.session.pointer_leave(&self.tool_state),
            }
        }
    }

    /// Re-upload the canvas texture when the surface changed this frame.
    pub fn update_canvas_texture(&mut self, ctx: &egui::Context) {
        let version = self.session.version();
        if self.uploaded_version == Some(version) && self.canvas_texture.is_some() {
            return;
        }
        let image = self.session.surface().to_color_image();
        match &mut self.canvas_texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.canvas_texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_version = Some(version);
    }

    pub fn canvas_texture(&self) -> Option<&TextureHandle> {
        self.canvas_texture.as_ref()
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (undo, redo, copy, cut, paste) = ctx.input(|input| {
            let cmd = input.modifiers.command;
            (
                cmd && !input.modifiers.shift && input.key_pressed(Key::Z),
                cmd && (input.key_pressed(Key::Y)
                    || (input.modifiers.shift && input.key_pressed(Key::Z))),
                cmd && input.key_pressed(Key::C),
                cmd && input.key_pressed(Key::X),
                cmd && input.key_pressed(Key::V),
            )
        });

        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
        if copy {
            self.copy();
        }
        if cut {
            self.cut();
        }
        if paste {
            self.paste();
        }
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.tool_state.active_tool.label());
                ui.separator();
                match self.pointer_canvas_pos {
                    Some(pos) => ui.label(format!("{}, {}", pos.x as i32, pos.y as i32)),
                    None => ui.label("-"),
                };
                ui.separator();
                ui.label(format!("{:.0}%", self.tool_state.zoom * 100.0));
                ui.separator();
                ui.label(format!("{} snapshots", self.session.history_len()));
            });
        });
    }

    fn text_dialog_window(&mut self, ctx: &egui::Context) {
        if !self.text_dialog.open {
            return;
        }
        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Insert Text")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.text_edit_singleline(&mut self.text_dialog.content);
                ui.add(
                    egui::Slider::new(&mut self.text_dialog.font_size, 8.0..=72.0)
                        .text("Font size"),
                );
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });
        if confirmed {
            self.confirm_text_dialog();
        }
        if cancelled {
            self.text_dialog.open = false;
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::toolbar(self, ctx);
        panels::tools_panel(self, ctx);
        if self.tool_state.show_status_bar {
            self.status_bar(ctx);
        }
        panels::canvas_panel(self, ctx);

        self.text_dialog_window(ctx);
    }
}
