//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it, it only receives
//! the [`CampusSettings`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CAMPUS_RULES__UPDATE_MODE=replace`,
//!    `CAMPUS_RULES__UNIQUE_KEYS=student,course`, `CAMPUS_OUTPUT__NO_COLOR=true`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`] if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use campus_adapters::CampusSettings;
use campus_core::domain::{EntityKind, UpdateMode};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Business rules applied when wiring the layered chain.
    pub rules: RulesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Entity kinds whose service rejects a second record with the same id.
    pub unique_keys: Vec<EntityKind>,
    /// Repository `update` contract.
    pub update_mode: UpdateMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Listing format used when `--format` is not given: table, json or csv.
    pub format: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            unique_keys: EntityKind::ALL.to_vec(),
            update_mode: UpdateMode::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "table".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the TOML file, then `CAMPUS_*`
    /// environment variables.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::from_sources(&path, required, true)
    }

    fn from_sources(path: &Path, required: bool, with_env: bool) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).format(FileFormat::Toml).required(required));

        if with_env {
            builder = builder.add_source(
                Environment::with_prefix("CAMPUS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("rules.unique_keys"),
            );
        }

        builder
            .build()
            .with_context(|| format!("failed to read {}", path.display()))?
            .try_deserialize()
            .context("invalid configuration value")
    }

    /// Settings handed to the composition root.
    pub fn settings(&self) -> CampusSettings {
        CampusSettings::unique_for(&self.rules.unique_keys, self.rules.update_mode)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.campus.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "campus", "campus")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".campus.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::domain::KeyPolicy;
    use std::io::Write as _;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_enforce_uniqueness_for_every_kind() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.rules.unique_keys, EntityKind::ALL);
        assert_eq!(cfg.settings(), CampusSettings::default());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
        assert_eq!(AppConfig::default().output.format, "table");
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::from_sources(&dir.path().join("absent.toml"), false, false).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_config(
            r#"
[rules]
unique_keys = ["student"]
update_mode = "replace"

[output]
format = "json"
"#,
        );

        let cfg = AppConfig::from_sources(file.path(), true, false).unwrap();
        let settings = cfg.settings();

        assert_eq!(settings.students, KeyPolicy::Unique);
        assert_eq!(settings.courses, KeyPolicy::Permissive);
        assert_eq!(settings.trainers, KeyPolicy::Permissive);
        assert_eq!(settings.update_mode, UpdateMode::Replace);
        assert_eq!(cfg.output.format, "json");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_values_use_the_domain_parsers() {
        let file = write_config("[rules]\nunique_keys = [\"Trainers\"]\nupdate_mode = \"noop\"\n");

        let cfg = AppConfig::from_sources(file.path(), true, false).unwrap();

        assert_eq!(cfg.rules.unique_keys, vec![EntityKind::Trainer]);
        assert_eq!(cfg.rules.update_mode, UpdateMode::Passthrough);
    }

    #[test]
    fn unknown_entity_kind_is_rejected() {
        let file = write_config("[rules]\nunique_keys = [\"lecturer\"]\n");
        assert!(AppConfig::from_sources(file.path(), true, false).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
