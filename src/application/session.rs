use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use crate::editor::{Command, Editor, EditorUi, HELP};
use crate::ext::SEGMENT_SEPARATOR;
use crate::render::TerminalUi;
use crate::tree::PathKind;

const GREETING: &str = "Type 'help' for the list of commands.";

/// Interactive loop feeding terminal lines to the editor.
pub struct Session<R: BufRead, W: Write> {
    editor: Editor<TerminalUi<R, W>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(editor: Editor<TerminalUi<R, W>>) -> Self {
        Self { editor }
    }

    pub fn into_editor(self) -> Editor<TerminalUi<R, W>> {
        self.editor
    }

    /// Runs commands until `quit` or the end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.editor.ui_mut().print(GREETING);

        while let Some(line) = self.editor.ui_mut().read_line()? {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    debug!("Executing '{}'", command);
                    if self.execute(command).is_break() {
                        info!("Session ended by user");
                        return Ok(());
                    }
                }
                Err(err) => {
                    warn!("Rejected input '{}': {}", line, err);
                    let ui = self.editor.ui_mut();
                    ui.print(&err.to_string());
                    ui.print(HELP);
                }
            }
        }

        info!("Input closed, ending session");
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Add(path) => {
                self.editor.add(&path);
            }
            Command::Edit(suffix) => {
                self.editor.edit(&suffix);
            }
            Command::Delete(suffix) => {
                self.editor.delete(&suffix);
            }
            Command::Toggle(directory) => self.toggle(&directory),
            Command::Show => self.editor.refresh(),
            Command::List => {
                let paths = self.editor.paths().clone();
                self.editor.ui_mut().print_paths(&paths);
            }
            Command::Help => self.editor.ui_mut().print(HELP),
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn toggle(&mut self, directory: &str) {
        let directory = directory.trim_end_matches(SEGMENT_SEPARATOR);
        let last_segment = directory
            .rsplit(SEGMENT_SEPARATOR)
            .next()
            .unwrap_or(directory);
        let kind = PathKind::classify(last_segment);
        debug!("Toggle target '{}' classified as {}", directory, kind);
        let is_directory =
            self.editor.tree().node_at(directory).is_some() && kind == PathKind::Directory;

        if is_directory {
            self.editor.ui_mut().toggle(directory);
            self.editor.refresh();
        } else {
            self.editor
                .ui_mut()
                .alert(&format!("No directory '{directory}' in the tree."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{PathList, PathTree};

    type TestSession<'a> = Session<&'a [u8], Vec<u8>>;

    fn session<'a>(paths: &[&str], input: &'a str) -> TestSession<'a> {
        let ui = TerminalUi::new(input.as_bytes(), Vec::new(), false);
        Session::new(Editor::new(PathList::new(paths.iter().copied()), ui))
    }

    fn finish(session: TestSession<'_>) -> (PathList, String) {
        let editor = session.into_editor();
        let paths = editor.paths().clone();
        let output = String::from_utf8(editor.into_ui().into_output()).unwrap();
        (paths, output)
    }

    #[test]
    fn test_session_applies_commands_in_order() {
        let mut session = session(
            &["path1/file1.txt", "path2/file2.txt", "path3/file3.txt"],
            "add newDir/new.txt\ndelete path2/file2.txt\nedit file1.txt\nrenamed/one.txt\nquit\nadd never.txt\n",
        );
        session.run().unwrap();
        let (paths, output) = finish(session);

        assert_eq!(
            paths.as_slice(),
            &["renamed/one.txt", "path3/file3.txt", "newDir/new.txt"]
        );
        assert!(output.contains("Enter new file path [path1/file1.txt]"));
        assert!(!paths.contains("never.txt"));
    }

    #[test]
    fn test_session_reports_errors_without_stopping() {
        let mut session = session(
            &["dc/aquaman/mmmmmmomoa.png"],
            "add\nadd dc/aquaman\nbogus\nadd dc/batman.txt\n",
        );
        session.run().unwrap();
        let (paths, output) = finish(session);

        assert!(output.contains("! No path provided."));
        assert!(output.contains("! This path conflicts with an existing path."));
        assert!(output.contains("Unknown command 'bogus'"));
        assert_eq!(
            paths.as_slice(),
            &["dc/aquaman/mmmmmmomoa.png", "dc/batman.txt"]
        );
    }

    #[test]
    fn test_session_toggle_collapses_directory() {
        let mut session = session(&["a/b/c.txt"], "");
        assert!(session.execute(Command::Toggle("a/b/".into())).is_continue());
        assert!(session.editor.ui().is_collapsed("a/b"));

        let (_, output) = finish(session);
        assert!(output.ends_with("└── a/\n    └── b/ +\n"));
    }

    #[test]
    fn test_session_toggle_rejects_files_and_unknown_paths() {
        let mut session = session(&["a/b/c.txt"], "");
        let _ = session.execute(Command::Toggle("a/b/c.txt".into()));
        let _ = session.execute(Command::Toggle("zzz".into()));
        assert!(!session.editor.ui().is_collapsed("a/b/c.txt"));

        let (_, output) = finish(session);
        assert!(output.contains("! No directory 'a/b/c.txt' in the tree."));
        assert!(output.contains("! No directory 'zzz' in the tree."));
    }

    #[test]
    fn test_session_list_prints_flat_paths() {
        let mut session = session(&["x/y.txt", "z"], "list\n");
        session.run().unwrap();
        let (_, output) = finish(session);
        assert!(output.contains("x/y.txt\nz\n"));
    }

    #[test]
    fn test_session_quit_breaks() {
        let mut session = session(&[], "");
        assert!(session.execute(Command::Quit).is_break());
        assert_eq!(session.into_editor().tree(), &PathTree::default());
    }
}
