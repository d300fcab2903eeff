use snafu::Snafu;
use snafu::prelude::*;
use supports_color::Stream;
use tracing::{debug, info};

use crate::application::{RuntimeConfig, Session};
use crate::config::{SeedList, SeedListError};
use crate::editor::Editor;
use crate::render::TerminalUi;

pub struct Application;

impl Application {
    pub async fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        debug!("Runtime config: {:?}", runtime_config);

        let seed = SeedList::read(runtime_config.seed_file.as_deref())
            .await
            .context(SeedSnafu)?;
        info!("Starting with {} path(s)", seed.paths().len());

        let color = runtime_config.color && supports_color::on(Stream::Stdout).is_some();
        debug!("Colored output: {}", color);

        let editor = Editor::new(seed.into_path_list(), TerminalUi::stdio(color));
        Session::new(editor).run().context(InputSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the seed paths"))]
    SeedError { source: SeedListError },
    #[snafu(display("Failed to read from the terminal"))]
    InputError { source: std::io::Error },
}
