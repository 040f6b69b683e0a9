use crate::consts;
use crate::game::Grid;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    /// Board dimensions
    pub(crate) grid: GridConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("tapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Validated board dimensions.  Both must be at least
/// [`MIN_GRID_SIZE`][consts::MIN_GRID_SIZE] so that the wall ring, the
/// fixed spawn cell, and at least one food cell all fit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawGridConfig")]
pub(crate) struct GridConfig {
    width: u16,
    height: u16,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: consts::GRID_WIDTH,
            height: consts::GRID_HEIGHT,
        }
    }
}

impl From<GridConfig> for Grid {
    fn from(cfg: GridConfig) -> Grid {
        Grid::new(cfg.width, cfg.height)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGridConfig {
    width: u16,
    height: u16,
}

impl Default for RawGridConfig {
    fn default() -> RawGridConfig {
        RawGridConfig {
            width: consts::GRID_WIDTH,
            height: consts::GRID_HEIGHT,
        }
    }
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = GridSizeError;

    fn try_from(value: RawGridConfig) -> Result<GridConfig, GridSizeError> {
        if value.width < consts::MIN_GRID_SIZE || value.height < consts::MIN_GRID_SIZE {
            return Err(GridSizeError);
        }
        Ok(GridConfig {
            width: value.width,
            height: value.height,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "grid dimensions must be at least {min}x{min}",
    min = consts::MIN_GRID_SIZE
)]
pub(crate) struct GridSizeError;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_empty() {
        let config = toml::from_str::<Config>("").expect("empty config should parse");
        assert_eq!(config, Config::default());
        assert_eq!(Grid::from(config.grid), Grid::new(20, 30));
    }

    #[test]
    fn parse_grid() {
        let config = toml::from_str::<Config>("[grid]\nwidth = 12\nheight = 16\n")
            .expect("config should parse");
        assert_eq!(Grid::from(config.grid), Grid::new(12, 16));
    }

    #[test]
    fn reject_tiny_grid() {
        assert!(toml::from_str::<Config>("[grid]\nwidth = 4\n").is_err());
    }

    #[test]
    fn load_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[grid]\nwidth = 10\nheight = 10\n")
            .expect("config file should be written");
        let config = Config::load(&path, false).expect("config should load");
        assert_eq!(Grid::from(config.grid), Grid::new(10, 10));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.toml");
        let config = Config::load(&path, true).expect("missing config should default");
        assert_eq!(config, Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }
}
