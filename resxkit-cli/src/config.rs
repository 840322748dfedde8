//! Optional `resxkit.toml` settings shared by every subcommand.

use std::path::{Path, PathBuf};

use resxkit::SessionOptions;
use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "resxkit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Refuse inputs whose name does not end in `.resx`.
    pub strict_extension: bool,
    /// Trim names, values and comments passed to `edit`.
    pub trim_input: bool,
    /// Print values untruncated in `view`.
    pub full: bool,
    /// Same as passing `--verbose`.
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            strict_extension: false,
            trim_input: true,
            full: false,
            verbose: false,
        }
    }
}

impl CliConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Loads `explicit` if given, otherwise `resxkit.toml` in the working
    /// directory if it exists, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions::new()
            .with_strict_extension(self.strict_extension)
            .with_trim_input(self.trim_input)
    }
}
