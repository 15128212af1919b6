//! Configuration types and parsing for schemareset.yml

use crate::error::{CoreError, CoreResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Config file names probed in a project directory, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["schemareset.yml", "schemareset.yaml"];

/// Regex pattern for lowercase unquoted schema identifiers
static SCHEMA_NAME_RE: OnceLock<Regex> = OnceLock::new();

/// Get the compiled schema-name regex (built once, reused)
fn schema_name_regex() -> &'static Regex {
    SCHEMA_NAME_RE.get_or_init(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid regex"))
}

/// Project configuration from schemareset.yml
///
/// Every field has a default, so a project without a config file behaves
/// like one with an empty file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the `*.sql` migrations, relative to the project root
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,

    /// Destination of the generated reset script, relative to the project root
    #[serde(default = "default_output")]
    pub output: String,

    /// Schema whose tables, routines and enum types are dropped
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Extensions enabled after the teardown block
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Project label printed in the header
    #[serde(default)]
    pub project: Option<String>,

    /// Target database label printed in the header
    #[serde(default)]
    pub target: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            migrations_dir: default_migrations_dir(),
            output: default_output(),
            schema: default_schema(),
            extensions: default_extensions(),
            project: None,
            target: None,
        }
    }
}

fn default_migrations_dir() -> String {
    "supabase/migrations".to_string()
}

fn default_output() -> String {
    "reset-supabase.sql".to_string()
}

fn default_schema() -> String {
    "public".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["uuid-ossp".to_string(), "pgcrypto".to_string()]
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_yaml(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory, falling back to defaults
    /// when neither schemareset.yml nor schemareset.yaml exists
    pub fn load_or_default(dir: &Path) -> CoreResult<Self> {
        match CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.exists())
        {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.migrations_dir.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migrations_dir cannot be empty".to_string(),
            });
        }

        if self.output.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "output cannot be empty".to_string(),
            });
        }

        if !schema_name_regex().is_match(&self.schema) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "schema '{}' must be a lowercase unquoted identifier ([a-z_][a-z0-9_]*)",
                    self.schema
                ),
            });
        }

        for ext in &self.extensions {
            if ext.is_empty() || ext.contains('"') || ext.chars().any(char::is_control) {
                return Err(CoreError::ConfigInvalid {
                    message: format!("invalid extension name {:?}", ext),
                });
            }
        }

        for (field, value) in [("project", &self.project), ("target", &self.target)] {
            if value.as_deref().is_some_and(|v| v.contains(['\n', '\r'])) {
                return Err(CoreError::ConfigInvalid {
                    message: format!("{} must be a single line", field),
                });
            }
        }

        Ok(())
    }

    /// Get absolute migrations directory relative to a project root
    pub fn migrations_dir_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.migrations_dir)
    }

    /// Get absolute output path relative to a project root
    pub fn output_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
