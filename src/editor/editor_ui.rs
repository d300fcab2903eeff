use crate::tree::PathTree;

/// What the editor needs from whatever is showing the tree to the user.
pub trait EditorUi {
    /// Replaces the displayed tree. Called once on startup and after every change.
    fn redraw(&mut self, tree: &PathTree);
    /// Shows a message the user has to acknowledge.
    fn alert(&mut self, message: &str);
    /// Asks for a line of text, offering `default`. `None` means cancelled.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}
