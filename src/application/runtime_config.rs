use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub seed_file: Option<PathBuf>,
    pub color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            seed_file: cli.paths,
            color: !cli.no_color,
        }
    }
}
