//! Single owner of the path list and its tree, driven by UI commands.

mod command;
mod editor;
mod editor_ui;

pub use command::{Command, CommandParseError, HELP};
pub use editor::Editor;
pub use editor_ui::EditorUi;

#[cfg(test)]
pub(crate) use editor_ui::testing;
