//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/agenda/agenda.toml`
//! 3. Explicit config file passed via `--config`
//! 4. Environment variables: `AGENDA_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// How terminal colors are applied.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal (the `colored` default)
    #[default]
    Auto,
    /// Force colors on
    Always,
    /// Force colors off
    Never,
}

impl ColorMode {
    /// Apply the mode process-wide.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode: {other:?} (expected auto, always or never)"
            )),
        }
    }
}

/// Table rendering preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableSettings {
    /// Draw borders with ASCII characters instead of Unicode box drawing
    pub ascii: bool,
    /// Print the entry count below the table
    pub show_count: bool,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            ascii: false,
            show_count: true,
        }
    }
}

/// Unified configuration for agenda.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Terminal color handling
    pub color: ColorMode,
    /// Table rendering preferences
    pub table: TableSettings,
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so a file only overrides what it mentions).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    color: Option<ColorMode>,
    table: RawTableSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawTableSettings {
    ascii: Option<bool>,
    show_count: Option<bool>,
}

/// Get the XDG config directory for agenda.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "agenda").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("agenda.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: config::ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins where specified,
    /// otherwise the base value is kept.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            color: overlay.color.unwrap_or(self.color),
            table: TableSettings {
                ascii: overlay.table.ascii.unwrap_or(self.table.ascii),
                show_count: overlay.table.show_count.unwrap_or(self.table.show_count),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file from `--config`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/agenda/agenda.toml`
    /// 3. Explicit config file (must exist, unlike the global one)
    /// 4. Environment variables: `AGENDA_*` prefix
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Merge global config if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Merge explicitly requested config; a missing file is an error here
        if let Some(path) = explicit {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Apply environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply `AGENDA_*` environment variables as explicit overrides.
    ///
    /// Nesting uses `__`: `AGENDA_TABLE__ASCII=true` sets `table.ascii`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use the config crate just for env var parsing
        let builder =
            Config::builder().add_source(Environment::with_prefix("AGENDA").separator("__"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("color") {
            settings.color = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_bool("table.ascii") {
            settings.table.ascii = val;
        }
        if let Ok(val) = config.get_bool("table.show_count") {
            settings.table.show_count = val;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_created_then_expected_values() {
        let settings = Settings::default();
        assert_eq!(settings.color, ColorMode::Auto);
        assert!(!settings.table.ascii);
        assert!(settings.table.show_count);
    }

    #[test]
    fn given_known_values_when_parsing_color_mode_then_succeeds() {
        assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert!("rainbow".parse::<ColorMode>().is_err());
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_base_values() {
        let base = Settings::default();
        let overlay: RawSettings = toml::from_str(
            r#"
color = "never"

[table]
ascii = true
"#,
        )
        .unwrap();

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.color, ColorMode::Never);
        assert!(merged.table.ascii);
        assert!(merged.table.show_count, "unspecified field keeps base value");
    }
}
