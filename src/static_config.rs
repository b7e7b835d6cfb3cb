use crate::allocations::allocations;
use crate::combinations::combinations;
use crate::error::CombinatoricsError;
use crate::generator::Generator;
use crate::permutations::permutations;
use crate::powerset::powerset;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::path::Path;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorConfig {
    Allocations {
        total: i64
    },
    Permutations,
    Combinations {
        n: i64
    },
    Powerset,
}

impl GeneratorConfig {
    /// Runs the same validation as the configuration functions.
    pub fn build(&self) -> Result<Generator, CombinatoricsError> {
        Ok(match *self {
            GeneratorConfig::Allocations { total } => allocations(total)?.into(),
            GeneratorConfig::Permutations => permutations().into(),
            GeneratorConfig::Combinations { n } => combinations(n)?.into(),
            GeneratorConfig::Powerset => powerset().into(),
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Default)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub generator: Option<GeneratorConfig>,
    pub limit: Option<usize>,
    pub pretty: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn read_static_config<P: AsRef<Path>>(path: P) -> Result<StaticConfig, ConfigError> {
    let config_file = std::fs::File::open(path.as_ref())?;
    let config: StaticConfig = serde_json::from_reader(std::io::BufReader::new(config_file))?;
    tracing::debug!(path = %path.as_ref().display(), ?config, "read static config");
    Ok(config)
}
