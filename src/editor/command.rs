use std::str::FromStr;

use derive_more::Display;
use snafu::{OptionExt, Snafu, ensure};

pub const HELP: &str = "\
Commands:
  add <path>        add a file or directory path
  edit <suffix>     rename the path ending with <suffix>
  delete <suffix>   delete every path ending with <suffix>
  toggle <dir>      collapse or expand a directory
  show              redraw the tree
  list              print the flat path list
  help              show this help
  quit              leave the editor";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Command {
    #[display("add {_0}")]
    Add(String),
    #[display("edit {_0}")]
    Edit(String),
    #[display("delete {_0}")]
    Delete(String),
    #[display("toggle {_0}")]
    Toggle(String),
    #[display("show")]
    Show,
    #[display("list")]
    List,
    #[display("help")]
    Help,
    #[display("quit")]
    Quit,
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        ensure!(!line.is_empty(), EmptyCommandSnafu);

        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let required = |command: &'static str| {
            Some(argument)
                .filter(|argument| !argument.is_empty())
                .map(str::to_string)
                .context(MissingArgumentSnafu { command })
        };

        match name.to_ascii_lowercase().as_str() {
            // An empty `add` still reaches the editor so the user gets told off.
            "add" => Ok(Command::Add(argument.to_string())),
            "edit" | "rename" => required("edit").map(Command::Edit),
            "delete" | "rm" => required("delete").map(Command::Delete),
            "toggle" => required("toggle").map(Command::Toggle),
            "show" => Ok(Command::Show),
            "list" | "ls" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => UnknownCommandSnafu { name }.fail(),
        }
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum CommandParseError {
    #[snafu(display("Empty command"))]
    EmptyCommand,
    #[snafu(display("Unknown command '{}'", name))]
    UnknownCommand { name: String },
    #[snafu(display("'{}' needs an argument", command))]
    MissingArgument { command: String },
}
