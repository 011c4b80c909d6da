use std::path::Path;

use serde::Deserialize;

use crate::catalog::spawn_cells;
use crate::error::ConfigError;
use crate::types::{
    Bounds, Coord, TetrominoKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH,
    DEFAULT_SPAWN_ANCHOR, MAX_BOARD_DIMENSION,
};

/// Board dimensions, spawn anchor and seed, loadable from TOML.
///
/// ```toml
/// width = 10
/// height = 20
/// spawn_anchor = { x = -1, y = 8 }
/// seed = 12345
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub spawn_anchor: Coord,
    /// Seed for the deterministic randomizer; unset means "pick one at startup"
    pub seed: Option<u32>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            spawn_anchor: DEFAULT_SPAWN_ANCHOR,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.width, self.height)
    }

    /// Validate configuration values.
    ///
    /// Every tetromino must fit inside the board at the spawn anchor, so a
    /// spawn onto an empty board always succeeds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::Validation("width must be > 0".into()));
        }
        if self.height <= 0 {
            return Err(ConfigError::Validation("height must be > 0".into()));
        }
        if self.width > MAX_BOARD_DIMENSION || self.height > MAX_BOARD_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board {}x{} exceeds the {MAX_BOARD_DIMENSION} cell limit per side",
                self.width, self.height
            )));
        }

        let bounds = self.bounds();
        let anchor = self.spawn_anchor;
        if !bounds.contains(anchor) {
            return Err(ConfigError::Validation(format!(
                "spawn_anchor ({}, {}) lies outside the {}x{} board",
                anchor.x, anchor.y, self.width, self.height
            )));
        }
        for kind in TetrominoKind::ALL {
            if let Some(cell) = spawn_cells(kind)
                .into_iter()
                .map(|offset| offset + anchor)
                .find(|&cell| !bounds.contains(cell))
            {
                return Err(ConfigError::Validation(format!(
                    "{} piece at spawn_anchor ({}, {}) reaches ({}, {}) outside the {}x{} board",
                    kind.as_str(),
                    anchor.x,
                    anchor.y,
                    cell.x,
                    cell.y,
                    self.width,
                    self.height
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bounds(), Bounds::centered(10, 20));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = BoardConfig::from_toml("seed = 7\nheight = 24").unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 24);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.spawn_anchor, DEFAULT_SPAWN_ANCHOR);
    }

    #[test]
    fn test_spawn_anchor_table() {
        let config =
            BoardConfig::from_toml("width = 6\nheight = 12\nspawn_anchor = { x = 0, y = 4 }")
                .unwrap();
        assert_eq!(config.spawn_anchor, Coord::new(0, 4));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let err = BoardConfig::from_toml("width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_anchor_outside_board() {
        let err = BoardConfig::from_toml("spawn_anchor = { x = 0, y = 10 }").unwrap_err();
        assert!(err.to_string().contains("spawn_anchor"));
    }

    #[test]
    fn test_rejects_anchor_where_pieces_overhang() {
        // anchor on the top row: every piece has a cell one row higher
        let err = BoardConfig::from_toml("spawn_anchor = { x = -1, y = 9 }").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("spawn_anchor (-1, 9)"));

        // one column is too narrow for any piece
        let err = BoardConfig::from_toml("width = 1\nspawn_anchor = { x = 0, y = 8 }").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_accepts_smallest_board_that_fits_every_piece() {
        // I spans x -1..=2 and every piece spans y 0..=1 from the anchor
        let config =
            BoardConfig::from_toml("width = 4\nheight = 2\nspawn_anchor = { x = -1, y = -1 }")
                .unwrap();
        assert_eq!(config.bounds(), Bounds::centered(4, 2));
    }

    #[test]
    fn test_rejects_oversized_board() {
        let err = BoardConfig::from_toml("width = 70000\nheight = 70000").unwrap_err();
        assert!(err.to_string().contains("limit"));

        let config = BoardConfig::from_toml(&format!(
            "width = {MAX_BOARD_DIMENSION}\nheight = {MAX_BOARD_DIMENSION}\nspawn_anchor = {{ x = 0, y = 0 }}"
        ))
        .unwrap();
        assert_eq!(config.width, MAX_BOARD_DIMENSION);
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = BoardConfig::from_toml("width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config =
            BoardConfig::load_or_default(Path::new("/nonexistent/tetris-board.toml")).unwrap();
        assert_eq!(config, BoardConfig::default());
    }
}
