//! Configuration management for the prompt generator.
//!
//! Every path has a compiled-in default rooted at the crate directory, so a
//! bare invocation behaves exactly like the fixed-constant script. Environment
//! variables (optionally from a `.env` file) can relocate the run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use super::error::{Error, Result};

/// Subdirectory of the base directory holding the markdown templates.
pub const TEMPLATES_SUBDIR: &str = "prompts";

/// Location of the generated module, relative to the base directory.
pub const TARGET_RELATIVE_PATH: &str = "frontend/src/data/prompts.js";

/// Main configuration structure for the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input and output locations.
    pub generator: GeneratorConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Filesystem locations used by a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root of the project the generated module belongs to.
    pub base_dir: PathBuf,

    /// Directory the template `filename`s are resolved against.
    pub templates_dir: PathBuf,

    /// File overwritten with the generated module.
    pub target_file: PathBuf,
}

impl GeneratorConfig {
    /// Derive the templates directory and target file from a base directory.
    pub fn rooted_at(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            templates_dir: base_dir.join(TEMPLATES_SUBDIR),
            target_file: base_dir.join(TARGET_RELATIVE_PATH),
            base_dir,
        }
    }

    /// Resolve a template filename against the templates directory.
    pub fn template_path(&self, filename: &str) -> PathBuf {
        self.templates_dir.join(filename)
    }

    /// Reject configurations that can never produce an output file.
    pub fn validate(&self) -> Result<()> {
        if self.target_file.file_name().is_none() {
            return Err(Error::config(format!(
                "target file '{}' does not name a file",
                self.target_file.display()
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::rooted_at(Path::new(env!("CARGO_MANIFEST_DIR")))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `PROMPTS_BASE_DIR`: re-roots both the templates directory and the target file
    /// - `PROMPTS_TEMPLATES_DIR`: overrides the templates directory
    /// - `PROMPTS_TARGET_FILE`: overrides the generated file path
    /// - `PROMPTS_LOG_LEVEL`: log level filter
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(base_dir) = std::env::var("PROMPTS_BASE_DIR") {
            config.generator = GeneratorConfig::rooted_at(base_dir);
            info!("Base directory set to {:?}", config.generator.base_dir);
        }

        if let Ok(templates_dir) = std::env::var("PROMPTS_TEMPLATES_DIR") {
            config.generator.templates_dir = PathBuf::from(templates_dir);
        }

        if let Ok(target_file) = std::env::var("PROMPTS_TARGET_FILE") {
            config.generator.target_file = PathBuf::from(target_file);
        }

        if let Ok(level) = std::env::var("PROMPTS_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("PROMPTS_BASE_DIR");
            std::env::remove_var("PROMPTS_TEMPLATES_DIR");
            std::env::remove_var("PROMPTS_TARGET_FILE");
            std::env::remove_var("PROMPTS_LOG_LEVEL");
        }
    }

    #[test]
    fn test_default_paths_follow_fixed_layout() {
        let config = GeneratorConfig::rooted_at("/srv/evaluator");
        assert_eq!(config.templates_dir, PathBuf::from("/srv/evaluator/prompts"));
        assert_eq!(
            config.target_file,
            PathBuf::from("/srv/evaluator/frontend/src/data/prompts.js")
        );
        assert_eq!(
            config.template_path("a.md"),
            PathBuf::from("/srv/evaluator/prompts/a.md")
        );
    }

    #[test]
    fn test_default_base_dir_is_crate_root() {
        let config = Config::default();
        assert_eq!(
            config.generator.base_dir,
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        );
    }

    #[test]
    fn test_base_dir_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("PROMPTS_BASE_DIR", "/tmp/evaluator");
        }
        let config = Config::from_env();
        assert_eq!(
            config.generator.templates_dir,
            PathBuf::from("/tmp/evaluator/prompts")
        );
        clear_env();
    }

    #[test]
    fn test_path_overrides_win_over_base_dir() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("PROMPTS_BASE_DIR", "/tmp/evaluator");
            std::env::set_var("PROMPTS_TARGET_FILE", "/tmp/out/prompts.js");
            std::env::set_var("PROMPTS_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        assert_eq!(
            config.generator.target_file,
            PathBuf::from("/tmp/out/prompts.js")
        );
        assert_eq!(
            config.generator.templates_dir,
            PathBuf::from("/tmp/evaluator/prompts")
        );
        assert_eq!(config.logging.level, "debug");
        clear_env();
    }

    #[test]
    fn test_validate_rejects_target_without_file_name() {
        let mut config = GeneratorConfig::rooted_at("/srv/evaluator");
        config.target_file = PathBuf::from("/");
        assert!(config.validate().is_err());

        assert!(GeneratorConfig::rooted_at("/srv/evaluator").validate().is_ok());
    }
}
