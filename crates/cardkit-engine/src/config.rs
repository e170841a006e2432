use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static card metadata resolved once at builder construction: which
/// environment and project the notifications speak for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuilderConfig {
    #[serde(default)]
    pub environment: Option<String>,

    #[serde(default)]
    pub project_name: Option<String>,
}

impl BuilderConfig {
    /// Load from a TOML file, then let `CARDKIT_ENVIRONMENT` /
    /// `CARDKIT_PROJECT_NAME` override whatever the file said.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::load_from(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from a TOML file. A missing file is not an error: cards degrade
    /// to footers without environment/project lines.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: BuilderConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build purely from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = non_empty_var("CARDKIT_ENVIRONMENT") {
            self.environment = Some(value);
        }
        if let Some(value) = non_empty_var("CARDKIT_PROJECT_NAME") {
            self.project_name = Some(value);
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
