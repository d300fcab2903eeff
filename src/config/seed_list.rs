use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, info};

use crate::tree::PathList;

/// Paths the editor starts with when no seed file is given.
pub const DEMO_PATHS: [&str; 8] = [
    "marvel/black_widow/bw.png",
    "marvel/drdoom/the-doctor.png",
    "fact_marvel_beats_dc.txt",
    "dc/aquaman/mmmmmmomoa.png",
    "marvel/black_widow/why-the-widow-is-awesome.txt",
    "dc/aquaman/movie-review-collection.txt",
    "marvel/marvel_logo.png",
    "dc/character_list.txt",
];

const PATHS_KEY: &str = "paths";

/// Initial flat list of a session.
///
/// Seed files are YAML with a top-level `paths` sequence of strings:
///
/// ```yaml
/// paths:
///   - marvel/black_widow/bw.png
///   - dc/character_list.txt
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedList {
    paths: Vec<String>,
}

impl SeedList {
    pub fn demo() -> Self {
        Self {
            paths: DEMO_PATHS.iter().map(|path| path.to_string()).collect(),
        }
    }

    /// Reads the seed file if one is given, otherwise returns the demo list.
    pub async fn read(seed_file: Option<&Path>) -> Result<Self, SeedListError> {
        match seed_file {
            Some(path) => Self::from_path(path.to_path_buf()).await,
            None => {
                info!("No seed file given, starting from the demo paths");
                Ok(Self::demo())
            }
        }
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, SeedListError> {
        debug!("Reading seed file: {}", path.display());
        let bytes = compio::fs::read(&path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;

        let seed: Self = contents.as_str().try_into()?;
        debug!("Loaded {} seed path(s)", seed.paths.len());
        Ok(seed)
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn into_path_list(self) -> PathList {
        PathList::new(self.paths)
    }

    fn parse_paths(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<Vec<String>, SeedListError> {
        let Some(value) = top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(PATHS_KEY))))
        else {
            debug!("Seed has no '{}' section", PATHS_KEY);
            return Ok(Vec::new());
        };
        if let Yaml::Value(Scalar::Null) = value {
            return Ok(Vec::new());
        }

        value
            .as_sequence()
            .context(PathsNotSequenceSnafu)?
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .context(InvalidEntrySnafu { index })
            })
            .collect()
    }
}

impl TryFrom<&str> for SeedList {
    type Error = SeedListError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedSeedSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        Ok(SeedList {
            paths: Self::parse_paths(top_level)?,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum SeedListError {
    #[snafu(display("Failed to read the seed file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Seed file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the seed file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted seed file"))]
    MalformedSeed,
    #[snafu(display("Top level of the seed file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("The paths section should be a list"))]
    PathsNotSequence,
    #[snafu(display("Entry {} of the paths section is not a string", index))]
    InvalidEntry { index: usize },
}
