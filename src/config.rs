//! Agent configuration: which problem to build, which engine to run and
//! which heuristic to guide it with. Configurations are read from TOML files
//! or assembled from command line flags, and are validated before any search
//! runs.

use crate::grid::Position;
use crate::search::problem_formulations::{CostFunctionName, ProblemName};
use crate::search::{HeuristicName, SearchEngineName};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("heuristic {heuristic:?} cannot be used with the {problem:?} problem")]
    IncompatibleHeuristic {
        heuristic: HeuristicName,
        problem: ProblemName,
    },
    #[error("a {setting} has no effect on the {problem:?} problem")]
    UnusedSetting {
        setting: &'static str,
        problem: ProblemName,
    },
    #[error("failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
}

/// The cell a position problem searches for when no goal is configured.
pub const DEFAULT_GOAL: Position = Position::new(1, 1);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub engine: SearchEngineName,
    pub problem: ProblemName,
    #[serde(default = "default_heuristic")]
    pub heuristic: HeuristicName,
    /// Goal of the position problem, [`DEFAULT_GOAL`] if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Position>,
    /// Step costs of the position problem, and of the non-capsule steps of
    /// the capsule problem.
    #[serde(default)]
    pub cost: CostFunctionName,
    /// Wall-clock budget of the search, written like `"30s"` or `"2m"`.
    #[serde(
        default,
        with = "duration_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_limit: Option<Duration>,
}

fn default_heuristic() -> HeuristicName {
    HeuristicName::Zero
}

impl AgentConfig {
    pub fn new(engine: SearchEngineName, problem: ProblemName, heuristic: HeuristicName) -> Self {
        Self {
            engine,
            problem,
            heuristic,
            goal: None,
            cost: CostFunctionName::default(),
            time_limit: None,
        }
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn goal(&self) -> Position {
        self.goal.unwrap_or(DEFAULT_GOAL)
    }

    /// Reject combinations that cannot work, before any search runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.heuristic.supports(self.problem) {
            return Err(ConfigError::IncompatibleHeuristic {
                heuristic: self.heuristic,
                problem: self.problem,
            });
        }
        if self.goal.is_some() && self.problem != ProblemName::Position {
            return Err(ConfigError::UnusedSetting {
                setting: "goal",
                problem: self.problem,
            });
        }
        if self.cost != CostFunctionName::Unit
            && !matches!(self.problem, ProblemName::Position | ProblemName::Capsule)
        {
            return Err(ConfigError::UnusedSetting {
                setting: "cost function",
                problem: self.problem,
            });
        }
        if self.heuristic != HeuristicName::Zero && !self.engine.uses_heuristic() {
            warn!(
                engine = ?self.engine,
                heuristic = ?self.heuristic,
                "the engine ignores the heuristic"
            );
        }
        Ok(())
    }
}

mod duration_text {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => {
                serializer.serialize_str(&humantime::format_duration(*duration).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| humantime::parse_duration(&text).map_err(serde::de::Error::custom))
            .transpose()
    }
}
