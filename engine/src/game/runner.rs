use crate::log;
use crate::search::{SearchEngine, SearchFrame};
use crate::session_rng::SessionRng;
use crate::types::{GameOutcome, MoveError, Player};

use super::game_state::{Game, GameOverSink};
use super::settings::{GameConfig, PlayerKind};

/// Where human moves come from.
pub trait MoveSource {
    /// Next cell for the player to move, or `None` to abandon the game.
    fn choose_move(&mut self, game: &Game) -> Option<usize>;

    fn on_rejected(&mut self, _error: MoveError) {}
}

/// Plays complete games between any mix of human and engine players.
pub struct GameRunner {
    config: GameConfig,
    engine: SearchEngine,
    rng: SessionRng,
}

impl GameRunner {
    pub fn new(config: GameConfig, mut rng: SessionRng) -> Self {
        let engine = SearchEngine::with_rng(config.search.clone(), rng.fork());
        Self {
            config,
            engine,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn pick_first_player(&mut self) -> Player {
        self.config.first_player.pick(&mut self.rng)
    }

    /// Runs `game` until it ends or a human abandons it. The sink hears about
    /// finished games only. `on_frame` sees every frame of a stepped search
    /// and is where any pacing happens.
    pub fn run<M, S, F>(
        &mut self,
        game: &mut Game,
        moves: &mut M,
        sink: &mut S,
        mut on_frame: F,
    ) -> Option<GameOutcome>
    where
        M: MoveSource,
        S: GameOverSink,
        F: FnMut(&SearchFrame),
    {
        while !game.outcome().is_over() {
            let player = game.to_move();
            let cell = match self.config.kind_of(player) {
                PlayerKind::Ai => {
                    let result = self.engine.decide(game.board(), player, &mut on_frame);
                    match result.cell {
                        Some(cell) => cell,
                        None => {
                            log!("Engine found no move for {} on an unfinished board", player);
                            return None;
                        }
                    }
                }
                PlayerKind::Human => match moves.choose_move(game) {
                    Some(cell) => cell,
                    None => {
                        log!("{} abandoned the game", player);
                        return None;
                    }
                },
            };

            match game.play(cell) {
                Ok(_) => log!("{} plays {}", player, cell),
                Err(error) => moves.on_rejected(error),
            }
        }

        let outcome = game.outcome();
        sink.on_game_over(outcome, game.winning_line());
        Some(outcome)
    }
}
