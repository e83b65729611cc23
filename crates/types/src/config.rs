//! Game configuration
//!
//! All values are constants for the lifetime of a game. They can be overridden
//! through environment variables when the binary starts:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `BLOCKFALL_WIDTH` | `width` | 10 |
//! | `BLOCKFALL_HEIGHT` | `height` | 20 |
//! | `BLOCKFALL_CELL_SIZE` | `cell_size` | 2 |
//! | `BLOCKFALL_GRAVITY_MS` | `gravity_interval_ms` | 500 |

use std::fmt;
use std::str::FromStr;

use crate::{BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, GRAVITY_INTERVAL_MS, MAX_SHAPE_SIZE};

/// Board and timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board columns
    pub width: u16,
    /// Board rows
    pub height: u16,
    /// Renderer units per board cell (terminal columns for the terminal view)
    pub cell_size: u16,
    /// Milliseconds between gravity down-moves
    pub gravity_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Check every field, returning the config unchanged when it is usable.
    pub fn validate(self) -> Result<Self, ConfigError> {
        check_board_size(self.width, self.height)?;
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::ZeroGravityInterval);
        }
        // Board plus its border must be addressable in terminal coordinates.
        let frame_w = u32::from(self.width) * u32::from(self.cell_size) + 2;
        let frame_h = u32::from(self.height) + 2;
        if frame_w > u32::from(u16::MAX) || frame_h > u32::from(u16::MAX) {
            return Err(ConfigError::FrameTooLarge {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        Ok(self)
    }

    /// Create from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`GameConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            width: read_var(&lookup, "BLOCKFALL_WIDTH", defaults.width)?,
            height: read_var(&lookup, "BLOCKFALL_HEIGHT", defaults.height)?,
            cell_size: read_var(&lookup, "BLOCKFALL_CELL_SIZE", defaults.cell_size)?,
            gravity_interval_ms: read_var(
                &lookup,
                "BLOCKFALL_GRAVITY_MS",
                defaults.gravity_interval_ms,
            )?,
        };
        config.validate()
    }
}

/// Validate board dimensions on their own (used when building a bare board).
pub fn check_board_size(width: u16, height: u16) -> Result<(), ConfigError> {
    if width == 0 {
        return Err(ConfigError::ZeroWidth);
    }
    if height == 0 {
        return Err(ConfigError::ZeroHeight);
    }
    if width < MAX_SHAPE_SIZE || height < MAX_SHAPE_SIZE {
        return Err(ConfigError::BoardTooSmall { width, height });
    }
    Ok(())
}

fn read_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse().map_err(|_| ConfigError::InvalidEnv {
        name,
        value: raw.to_string(),
    })
}

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    BoardTooSmall { width: u16, height: u16 },
    FrameTooLarge { width: u16, height: u16, cell_size: u16 },
    ZeroCellSize,
    ZeroGravityInterval,
    InvalidEnv { name: &'static str, value: String },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroWidth
            | ConfigError::ZeroHeight
            | ConfigError::BoardTooSmall { .. }
            | ConfigError::FrameTooLarge { .. } => "invalid_board",
            ConfigError::ZeroCellSize => "invalid_cell_size",
            ConfigError::ZeroGravityInterval => "invalid_gravity",
            ConfigError::InvalidEnv { .. } => "invalid_env",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfigError::ZeroWidth => "board width must be positive",
            ConfigError::ZeroHeight => "board height must be positive",
            ConfigError::BoardTooSmall { .. } => "board must fit the largest piece mask",
            ConfigError::FrameTooLarge { .. } => "board frame exceeds terminal coordinates",
            ConfigError::ZeroCellSize => "cell size must be positive",
            ConfigError::ZeroGravityInterval => "gravity interval must be positive",
            ConfigError::InvalidEnv { .. } => "environment variable is not a valid number",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooSmall { width, height } => {
                write!(f, "{} (got {}x{})", self.message(), width, height)
            }
            ConfigError::FrameTooLarge {
                width,
                height,
                cell_size,
            } => write!(
                f,
                "{} (got {}x{} at cell size {})",
                self.message(),
                width,
                height,
                cell_size
            ),
            ConfigError::InvalidEnv { name, value } => {
                write!(f, "{}: {}={:?}", self.message(), name, value)
            }
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let owned: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| {
            owned
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(config));
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.gravity_interval_ms, 500);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let config = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWidth));

        let config = GameConfig {
            height: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHeight));
    }

    #[test]
    fn boards_narrower_than_a_mask_are_rejected() {
        let err = check_board_size(3, 20).unwrap_err();
        assert_eq!(err, ConfigError::BoardTooSmall { width: 3, height: 20 });
        assert_eq!(err.code(), "invalid_board");
        assert!(err.to_string().contains("3x20"));
    }

    #[test]
    fn zero_timing_is_rejected() {
        let config = GameConfig {
            gravity_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGravityInterval));

        let config = GameConfig {
            cell_size: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = GameConfig::from_lookup(vars(&[
            ("BLOCKFALL_WIDTH", "12"),
            ("BLOCKFALL_GRAVITY_MS", " 250 "),
        ]))
        .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 20);
        assert_eq!(config.gravity_interval_ms, 250);
    }

    #[test]
    fn oversized_frames_are_rejected() {
        let err = GameConfig::from_lookup(vars(&[("BLOCKFALL_WIDTH", "40000")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::FrameTooLarge {
                width: 40000,
                height: 20,
                cell_size: 2
            }
        );
        assert_eq!(err.code(), "invalid_board");

        let err = GameConfig::from_lookup(vars(&[("BLOCKFALL_HEIGHT", "65534")])).unwrap_err();
        assert!(matches!(err, ConfigError::FrameTooLarge { height: 65534, .. }));

        // Largest width that still fits with two columns per cell and a border.
        let config = GameConfig::from_lookup(vars(&[("BLOCKFALL_WIDTH", "32766")])).unwrap();
        assert_eq!(config.width, 32766);
    }

    #[test]
    fn lookup_rejects_garbage() {
        let err = GameConfig::from_lookup(vars(&[("BLOCKFALL_HEIGHT", "tall")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnv {
                name: "BLOCKFALL_HEIGHT",
                value: "tall".to_string()
            }
        );
    }

    #[test]
    fn lookup_still_validates() {
        let err = GameConfig::from_lookup(vars(&[("BLOCKFALL_WIDTH", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroWidth);
    }
}
