use anyhow::{bail, Result};
use common::{Config, ConfigLoader};

use super::constants::DEFAULT_BOARD_SIZE;

#[derive(Clone, Debug, PartialEq)]
pub struct SearchOptions {
    pub max_depth: usize,
    pub wall_weight: f32,
    pub proximity_bonus: f32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: 2,
            wall_weight: 0.1,
            proximity_bonus: 50.0,
        }
    }
}

impl Config for SearchOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        let options = Self {
            max_depth: config
                .get("max_depth")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.max_depth),
            wall_weight: config
                .get("wall_weight")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.wall_weight),
            proximity_bonus: config
                .get("proximity_bonus")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.proximity_bonus),
        };

        if options.max_depth == 0 {
            bail!("max_depth must be at least 1");
        }

        Ok(options)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOptions {
    pub board_size: usize,
    pub num_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            num_players: 2,
        }
    }
}

impl Config for GameOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            board_size: config
                .get("board_size")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.board_size),
            num_players: config
                .get("num_players")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.num_players),
        })
    }
}
