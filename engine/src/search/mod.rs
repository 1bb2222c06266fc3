mod engine;
mod settings;
mod shortcuts;
mod stepper;
mod types;

pub use engine::SearchEngine;
pub use settings::{MAX_STEP_DELAY_MS, SearchConfig};
pub use shortcuts::{CENTER, CORNERS, opening_move};
pub use stepper::SearchStepper;
pub use types::{FramePhase, SearchFrame, SearchResult, SearchStep, WIN_SCORE_BASE, win_score};

use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::types::Player;

/// Synchronous entry point: the best cell for `player`, or none on a full board.
pub fn decide_move(board: &Board, player: Player, config: &SearchConfig) -> SearchResult {
    SearchEngine::new(config.clone()).search(board, player)
}

/// Stepped entry point. The returned iterator yields frames and ends with
/// `SearchStep::Finished`; the caller decides how fast to pull it.
pub fn step_decide_move(board: &Board, player: Player, config: &SearchConfig) -> SearchStepper {
    SearchStepper::new(
        board,
        player,
        config.use_opening_shortcuts,
        &mut SessionRng::from_random(),
    )
}
