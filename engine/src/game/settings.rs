use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::search::SearchConfig;
use crate::session_rng::SessionRng;
use crate::types::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Ai,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Random,
    A,
    B,
}

impl FirstPlayerMode {
    pub fn pick(&self, rng: &mut SessionRng) -> Player {
        match self {
            FirstPlayerMode::A => Player::A,
            FirstPlayerMode::B => Player::B,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Player::A
                } else {
                    Player::B
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub search: SearchConfig,
    pub player_a: PlayerKind,
    pub player_b: PlayerKind,
    pub first_player: FirstPlayerMode,
}

impl GameConfig {
    pub fn kind_of(&self, player: Player) -> PlayerKind {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            player_a: PlayerKind::Human,
            player_b: PlayerKind::Ai,
            first_player: FirstPlayerMode::Random,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.search.validate()
    }
}
