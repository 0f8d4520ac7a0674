mod canvas_panel;
mod toolbar;
mod tools_panel;

pub use canvas_panel::canvas_panel;
pub use toolbar::toolbar;
pub use tools_panel::tools_panel;
