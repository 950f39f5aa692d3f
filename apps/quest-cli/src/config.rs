// config.rs — Where the CLI keeps its working ledger.
//
// `for_project()` lays out a `.quest/` directory under the project root:
//
//   .quest/ledger.txt    the working ledger every command reads and writes
//   .quest/config.toml   optional overrides (see ConfigFile)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Default tracing filter when neither RUST_LOG nor config.toml set one.
pub const DEFAULT_LOG_FILTER: &str = "quest_ledger=warn,quest=info";

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct QuestConfig {
    /// Root directory of the project.
    pub project_root: PathBuf,

    /// The working ledger file.
    pub ledger_file: PathBuf,

    /// Path to the optional config file.
    pub config_file: PathBuf,

    /// tracing-subscriber filter directives.
    pub log_filter: String,
}

impl QuestConfig {
    /// Create a config with the standard `.quest/` layout for a project.
    pub fn for_project(project_root: impl AsRef<Path>) -> Self {
        let root = project_root.as_ref().to_path_buf();
        let state_dir = root.join(".quest");
        Self {
            project_root: root,
            ledger_file: state_dir.join("ledger.txt"),
            config_file: state_dir.join("config.toml"),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Apply overrides from `config.toml`, if the file exists.
    pub fn with_file_overrides(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        if !self.config_file.exists() {
            return Ok(self);
        }
        let file = ConfigFile::load(&self.config_file)?;
        if let Some(ledger_file) = file.ledger_file {
            // Relative paths are relative to the project root.
            self.ledger_file = self.project_root.join(ledger_file);
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
        Ok(self)
    }

    /// Build the tracing filter from `log_filter`.
    ///
    /// Bad directives fall back to DEFAULT_LOG_FILTER; the parse error is
    /// returned so it can be logged once the subscriber is up.
    pub fn env_filter(&self) -> (EnvFilter, Option<String>) {
        match EnvFilter::try_new(&self.log_filter) {
            Ok(filter) => (filter, None),
            Err(e) => (
                EnvFilter::new(DEFAULT_LOG_FILTER),
                Some(format!("invalid log_filter {:?}: {}", self.log_filter, e)),
            ),
        }
    }
}

/// Contents of `.quest/config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Alternate working ledger location.
    #[serde(default)]
    pub ledger_file: Option<PathBuf>,

    /// tracing filter directives, e.g. "quest_ledger=debug".
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
