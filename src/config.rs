use std::borrow::Cow;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::personality::Lexicon;
use crate::personality::TieBreak;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Export `RUST_BACKTRACE=1` at startup unless already set
    #[serde(default)]
    pub backtrace: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            backtrace: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Which trait wins a dimension when both totals are equal
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Replacement lexicon (TOML); the embedded one is used when unset
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try config.toml first, then config.example.toml, then built-in defaults
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            tracing::warn!("Using config.example.toml. Create config.toml to customise scoring.");
            Self::from_file("config.example.toml")
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Get log level
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    /// Get tie-break rule
    pub fn tie_break(&self) -> TieBreak {
        self.scoring.tie_break
    }

    /// Get custom lexicon path
    pub fn lexicon_path(&self) -> Option<&Path> {
        self.scoring.lexicon_path.as_deref()
    }

    /// Lexicon to score with: the configured file, or the embedded one
    pub fn lexicon(&self) -> crate::Result<Cow<'static, Lexicon>> {
        match self.lexicon_path() {
            Some(path) => {
                let lexicon = Lexicon::from_file(path).map_err(|e| {
                    crate::MbtiError::Config(format!(
                        "failed to load lexicon {}: {e}",
                        path.display()
                    ))
                })?;
                tracing::info!(
                    "Loaded lexicon from {} ({} entries)",
                    path.display(),
                    lexicon.len()
                );
                Ok(Cow::Owned(lexicon))
            }
            None => Ok(Cow::Borrowed(Lexicon::builtin())),
        }
    }
}
