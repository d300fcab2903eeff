use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Edit a list of slash-delimited paths as a tree.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// YAML file with the initial `paths` list. Defaults to a demo list.
    #[clap(long, short)]
    pub paths: Option<PathBuf>,

    /// Never color the tree
    #[clap(long)]
    pub no_color: bool,
}
