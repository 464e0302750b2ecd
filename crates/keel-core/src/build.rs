//! Build context passed into the analysis layer.
//!
//! The build mode is an explicit input rather than a process-wide flag, so
//! the planner stays a pure function of its arguments.

use serde::{Deserialize, Serialize};

/// Target of the current build pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl std::str::FromStr for BuildMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(format!("Invalid build mode: {}", other)),
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildMode::Development => write!(f, "development"),
            BuildMode::Production => write!(f, "production"),
        }
    }
}

/// Per-build-pass context. Read-only for the duration of the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildContext {
    pub mode: BuildMode,
}

impl BuildContext {
    pub fn new(mode: BuildMode) -> Self {
        Self { mode }
    }

    pub fn development() -> Self {
        Self::new(BuildMode::Development)
    }

    pub fn production() -> Self {
        Self::new(BuildMode::Production)
    }

    pub fn is_production(&self) -> bool {
        self.mode == BuildMode::Production
    }
}
