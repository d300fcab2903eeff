//! Terminal front end: outline rendering and the interactive UI.

mod outline;
mod terminal_ui;

pub use outline::render_outline;
pub use terminal_ui::TerminalUi;
