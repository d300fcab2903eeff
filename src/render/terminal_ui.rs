use std::collections::HashSet;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use colored::Colorize;
use tracing::{debug, warn};

use crate::editor::EditorUi;
use crate::render::render_outline;
use crate::tree::{PathList, PathTree};

const ACCEPT_DEFAULT: &str = "=";

/// Line-oriented UI over a reader and a writer, stdin and stdout in practice.
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    collapsed: HashSet<String>,
    color: bool,
}

impl TerminalUi<StdinLock<'static>, Stdout> {
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            collapsed: HashSet::new(),
            color,
        }
    }

    /// Flips the collapsed state of a directory and returns the new state.
    pub fn toggle(&mut self, directory: &str) -> bool {
        if self.collapsed.remove(directory) {
            debug!("Expanded '{}'", directory);
            false
        } else {
            debug!("Collapsed '{}'", directory);
            self.collapsed.insert(directory.to_string());
            true
        }
    }

    #[cfg(test)]
    pub fn is_collapsed(&self, directory: &str) -> bool {
        self.collapsed.contains(directory)
    }

    /// Reads the next line without its line ending. `None` on end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
        }
    }

    pub fn print(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!("Failed to write to terminal: {}", err);
        }
    }

    pub fn print_paths(&mut self, paths: &PathList) {
        if paths.is_empty() {
            self.print("(no paths)");
        }
        for path in paths.iter() {
            self.print(path);
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn flush(&mut self) {
        if let Err(err) = self.output.flush() {
            warn!("Failed to flush terminal: {}", err);
        }
    }
}

impl<R: BufRead, W: Write> EditorUi for TerminalUi<R, W> {
    fn redraw(&mut self, tree: &PathTree) {
        // Directories renamed or deleted since they were collapsed.
        self.collapsed
            .retain(|directory| tree.node_at(directory).is_some());
        for line in render_outline(tree, &self.collapsed, self.color) {
            self.print(&line);
        }
        self.flush();
    }

    fn alert(&mut self, message: &str) {
        let line = if self.color {
            format!("{} {}", "!".red().bold(), message)
        } else {
            format!("! {message}")
        };
        self.print(&line);
        self.flush();
    }

    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        if let Err(err) = write!(
            self.output,
            "{message} [{default}] ('{ACCEPT_DEFAULT}' keeps it, empty cancels): "
        ) {
            warn!("Failed to write prompt: {}", err);
        }
        self.flush();

        let answer = match self.read_line() {
            Ok(Some(answer)) => answer,
            Ok(None) => return None,
            Err(err) => {
                warn!("Failed to read prompt answer: {}", err);
                return None;
            }
        };
        match answer.trim() {
            "" => None,
            ACCEPT_DEFAULT => Some(default.to_string()),
            answer => Some(answer.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn ui(input: &str) -> TerminalUi<&[u8], Vec<u8>> {
        TerminalUi::new(input.as_bytes(), Vec::new(), false)
    }

    fn written(ui: TerminalUi<&[u8], Vec<u8>>) -> String {
        String::from_utf8(ui.into_output()).unwrap()
    }

    #[rstest]
    #[case("renamed/file.txt\n", Some("renamed/file.txt"))]
    #[case("  padded.txt  \r\n", Some("padded.txt"))]
    #[case("=\n", Some("a/b.txt"))]
    #[case("\n", None)]
    #[case("", None)]
    fn test_prompt_answers(#[case] input: &str, #[case] expected: Option<&str>) {
        let mut ui = ui(input);
        let answer = ui.prompt("Enter new file path", "a/b.txt");
        assert_eq!(answer.as_deref(), expected);
        assert!(written(ui).starts_with("Enter new file path [a/b.txt]"));
    }

    #[test]
    fn test_alert_is_marked() {
        let mut ui = ui("");
        ui.alert("No path provided.");
        assert_eq!(written(ui), "! No path provided.\n");
    }

    #[test]
    fn test_redraw_respects_collapsed_directories() {
        let tree = PathTree::build(["a/b/c.txt", "d.txt"]);
        let mut ui = ui("");
        assert!(ui.toggle("a"));
        ui.redraw(&tree);
        assert_eq!(written(ui), "├── a/ +\n└── d.txt [edit] [delete]\n");
    }

    #[test]
    fn test_redraw_forgets_collapsed_directories_that_are_gone() {
        let mut ui = ui("");
        ui.toggle("old");
        ui.toggle("kept");
        ui.redraw(&PathTree::build(["kept/a.txt", "new/b.txt"]));
        assert!(!ui.is_collapsed("old"));
        assert!(ui.is_collapsed("kept"));

        // A directory coming back later starts expanded.
        ui.redraw(&PathTree::build(["old/c.txt"]));
        ui.redraw(&PathTree::build(["old/c.txt", "kept/a.txt"]));
        assert!(!ui.is_collapsed("old"));
        assert!(!ui.is_collapsed("kept"));
    }

    #[test]
    fn test_toggle_twice_expands_again() {
        let mut ui = ui("");
        assert!(ui.toggle("a/b"));
        assert!(ui.is_collapsed("a/b"));
        assert!(!ui.toggle("a/b"));
        assert!(!ui.is_collapsed("a/b"));
    }

    #[test]
    fn test_read_line_until_end_of_input() {
        let mut ui = ui("add x.txt\r\nquit\n");
        assert_eq!(ui.read_line().unwrap().as_deref(), Some("add x.txt"));
        assert_eq!(ui.read_line().unwrap().as_deref(), Some("quit"));
        assert_eq!(ui.read_line().unwrap(), None);
    }

    #[test]
    fn test_print_paths() {
        let mut ui = ui("");
        ui.print_paths(&PathList::new(["a.txt", "b/c.txt"]));
        ui.print_paths(&PathList::default());
        assert_eq!(written(ui), "a.txt\nb/c.txt\n(no paths)\n");
    }
}
