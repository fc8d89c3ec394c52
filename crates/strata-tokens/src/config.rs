//! Theme configuration file.
//!
//! ```json
//! { "mode": "dark", "icon_library": "filled", "density": "compact", "reduced_motion": true }
//! ```
//!
//! Every field is optional. The default location is
//! `<config_dir>/strata/theme.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::contextual::Mode;
use crate::domain::Density;
use crate::error::TokenResult;
use crate::icons::IconLibrary;
use crate::resolve::TokenSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: Mode,
    pub icon_library: IconLibrary,
    pub density: Density,
    pub reduced_motion: bool,
}

impl ThemeConfig {
    /// Default config file path, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("strata").join("theme.json"))
    }

    pub fn from_json(json: &str) -> TokenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> TokenResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), mode = %config.mode, "loaded theme config");
        Ok(config)
    }

    /// Load `path` if given, else the default path if that file exists,
    /// else defaults. An explicit path that cannot be read is an error.
    pub fn load_or_default(path: Option<&Path>) -> TokenResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> TokenResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolve the token set this configuration describes.
    pub fn resolve(&self) -> TokenSet {
        let set = TokenSet::resolve(self.mode);
        if self.reduced_motion {
            set.with_reduced_motion(true)
        } else {
            set
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use tempfile::TempDir;

    #[test]
    fn empty_object_is_default() {
        let config = ThemeConfig::from_json("{}").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.mode, Mode::Light);
        assert_eq!(config.icon_library, IconLibrary::Outlined);
        assert_eq!(config.density, Density::Standard);
        assert!(!config.reduced_motion);
    }

    #[test]
    fn parses_every_field() {
        let config = ThemeConfig::from_json(
            r#"{"mode":"high-contrast","icon_library":"filled","density":"compact","reduced_motion":true}"#,
        )
        .unwrap();
        assert_eq!(config.mode, Mode::HighContrast);
        assert_eq!(config.icon_library, IconLibrary::Filled);
        assert_eq!(config.density, Density::Compact);
        assert!(config.reduced_motion);
    }

    #[test]
    fn bad_mode_is_config_error() {
        let result = ThemeConfig::from_json(r#"{"mode":"sepia"}"#);
        assert!(matches!(result, Err(TokenError::Config(_))));
    }

    #[test]
    fn save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("theme.json");
        let config = ThemeConfig {
            mode: Mode::Dark,
            ..ThemeConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(ThemeConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_explicit_path_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = ThemeConfig::load_or_default(Some(&temp.path().join("absent.json")));
        assert!(matches!(result, Err(TokenError::Io(_))));
    }

    #[test]
    fn reduced_motion_resolves_instant() {
        let config = ThemeConfig {
            reduced_motion: true,
            ..ThemeConfig::default()
        };
        let set = config.resolve();
        assert!(set.reduced_motion());
        assert_eq!(set.semantic().motion.hover.duration.get(), 0);
    }
}
