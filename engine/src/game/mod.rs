mod game_state;
mod runner;
mod settings;

pub use game_state::{Game, GameOverSink};
pub use runner::{GameRunner, MoveSource};
pub use settings::{FirstPlayerMode, GameConfig, PlayerKind};
