use crate::board::Board;
use crate::log;
use crate::session_rng::SessionRng;
use crate::types::Player;
use crate::win_detector::placement_wins;

use super::settings::SearchConfig;
use super::shortcuts::opening_move;
use super::stepper::SearchStepper;
use super::types::{BestMove, SearchFrame, SearchResult, win_score};

pub struct SearchEngine {
    config: SearchConfig,
    rng: SessionRng,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, SessionRng::from_random())
    }

    pub fn with_rng(config: SearchConfig, rng: SessionRng) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the full search to completion. The caller's board is copied and
    /// never touched.
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        if board.is_full() {
            return SearchResult::draw();
        }

        if let Some(result) = self.shortcut(board) {
            log!("Opening shortcut for {}: cell {:?}", player, result.cell);
            return result;
        }

        let mut scratch = *board;
        let mut nodes = 0u64;
        let result = minimax(&mut scratch, player, 1, &mut nodes);

        log!(
            "Search for {} with {} empty cells: cell {:?}, score {}, {} nodes",
            player,
            board.empty_count(),
            result.cell,
            result.score,
            nodes
        );
        result
    }

    /// Starts a stepped search over a private copy of `board`.
    pub fn stepper(&mut self, board: &Board, player: Player) -> SearchStepper {
        SearchStepper::new(board, player, self.config.use_opening_shortcuts, &mut self.rng)
    }

    /// Picks a move the way the configuration asks for: batch, or stepped with
    /// `on_frame` invoked for every frame.
    pub fn decide<F>(&mut self, board: &Board, player: Player, mut on_frame: F) -> SearchResult
    where
        F: FnMut(&SearchFrame),
    {
        if !self.config.visualize {
            return self.search(board, player);
        }

        let mut stepper = self.stepper(board, player);
        let mut result = SearchResult::draw();
        for step in stepper.by_ref() {
            match step.into_frame() {
                Some(frame) => on_frame(&frame),
                None => result = step.into_result().unwrap_or(result),
            }
        }
        log!(
            "Stepped search for {}: cell {:?}, score {}, {} nodes",
            player,
            result.cell,
            result.score,
            stepper.nodes()
        );
        result
    }

    fn shortcut(&mut self, board: &Board) -> Option<SearchResult> {
        if !self.config.use_opening_shortcuts {
            return None;
        }
        opening_move(board, &mut self.rng).map(|cell| SearchResult::new(0, Some(cell)))
    }
}

/// Depth-first, full-width minimax. `depth` is the ply of the placement made
/// at this level, 1 for the root.
pub(crate) fn minimax(board: &mut Board, player: Player, depth: u32, nodes: &mut u64) -> SearchResult {
    if board.is_full() {
        return SearchResult::draw();
    }

    let mark = player.mark();
    let mut best = BestMove::new(player);

    for cell in 0..board.cells().len() {
        if !board.is_free(cell) {
            continue;
        }

        board.set(cell, mark);
        *nodes += 1;

        let won = placement_wins(board, mark);
        let score = if won {
            win_score(player, depth)
        } else if !board.is_full() {
            minimax(board, player.opponent(), depth + 1, nodes).score
        } else {
            0
        };

        board.clear(cell);
        best.offer(cell, score);

        if won {
            break;
        }
    }

    best.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn engine(use_opening_shortcuts: bool) -> SearchEngine {
        let config = SearchConfig {
            use_opening_shortcuts,
            ..SearchConfig::default()
        };
        SearchEngine::with_rng(config, SessionRng::new(11))
    }

    #[test]
    fn test_full_board_is_a_draw_without_move() {
        let board = Board::from_layout("XOX XOO OXX").unwrap();
        assert_eq!(engine(true).search(&board, Player::A), SearchResult::draw());
        assert_eq!(engine(false).search(&board, Player::B), SearchResult::draw());
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_layout("XX. OO. ...").unwrap();
        let result = engine(false).search(&board, Player::A);
        assert_eq!(result, SearchResult::new(9, Some(2)));
    }

    #[test]
    fn test_takes_immediate_win_as_b() {
        let board = Board::from_layout("XX. OO. X..").unwrap();
        let result = engine(false).search(&board, Player::B);
        assert_eq!(result, SearchResult::new(-9, Some(5)));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // B threatens the top row; blocking at 2 also gives A a fork.
        let board = Board::from_layout("OO. .X. ..X").unwrap();
        let result = engine(false).search(&board, Player::A);
        assert_eq!(result.cell, Some(2));
        assert!(result.score > 0);
    }

    #[test]
    fn test_blocks_as_b() {
        let board = Board::from_layout("X.. .X. ..O").unwrap();
        let result = engine(false).search(&board, Player::B);
        // Center plus corner against the opposite corner is held by a corner
        // reply; B must not pick a move that lets A force a win.
        assert!(result.score <= 0);
        let cell = result.cell.unwrap();
        let mut board = board;
        board.place(cell, Mark::B).unwrap();
        let reply = engine(false).search(&board, Player::A);
        assert!(reply.score <= 0, "A should not force a win after {}", cell);
    }

    #[test]
    fn test_depth_example_position() {
        // X at 1, 5, 8; O at 6, 7; O to move. O has to block at 2, after
        // which X forks from the center and wins on ply 4.
        let board = Board::from_layout(".X. ..X OOX").unwrap();
        let result = engine(false).search(&board, Player::B);
        assert_eq!(result.cell, Some(2));
        assert_eq!(result.score, 6);
    }

    #[test]
    fn test_prefers_faster_win() {
        // Cells 1 and 2 fork and win on ply 3, cell 5 wins right away.
        let board = Board::from_layout("O.. XX. ..O").unwrap();
        let result = engine(false).search(&board, Player::A);
        assert_eq!(result.cell, Some(5));
        assert_eq!(result.score, 9);
    }

    #[test]
    fn test_shortcut_for_empty_board_picks_corner() {
        let mut engine = engine(true);
        for _ in 0..20 {
            let cell = engine.search(&Board::new(), Player::A).cell.unwrap();
            assert!([0, 2, 6, 8].contains(&cell));
        }
    }

    #[test]
    fn test_shortcut_reply() {
        let mut engine = engine(true);
        for opening in 0..9 {
            let mut board = Board::new();
            board.place(opening, Mark::A).unwrap();
            let cell = engine.search(&board, Player::B).cell.unwrap();
            if opening == 4 {
                assert!([0, 2, 6, 8].contains(&cell));
            } else {
                assert_eq!(cell, 4);
            }
        }
    }

    #[test]
    fn test_empty_board_without_shortcuts_is_a_draw() {
        let result = engine(false).search(&Board::new(), Player::A);
        assert_eq!(result.score, 0);
        assert_eq!(result.cell, Some(0));
    }

    #[test]
    fn test_search_does_not_modify_caller_board() {
        let board = Board::from_layout("X.. .O. ...").unwrap();
        let before = board;
        engine(false).search(&board, Player::A);
        assert_eq!(board, before);
    }

    #[test]
    fn test_decide_in_batch_mode_emits_no_frames() {
        let board = Board::from_layout("XX. OO. ...").unwrap();
        let mut frames = 0;
        let result = engine(false).decide(&board, Player::A, |_| frames += 1);
        assert_eq!(frames, 0);
        assert_eq!(result.cell, Some(2));
    }

    #[test]
    fn test_decide_in_visual_mode_emits_frames() {
        let config = SearchConfig {
            use_opening_shortcuts: false,
            visualize: true,
            step_delay_ms: 0,
        };
        let board = Board::from_layout("XX. OO. ...").unwrap();
        let mut frames = Vec::new();
        let result =
            SearchEngine::with_rng(config, SessionRng::new(1)).decide(&board, Player::A, |frame| {
                frames.push(*frame)
            });
        assert_eq!(result, SearchResult::new(9, Some(2)));
        assert!(!frames.is_empty());
    }
}
