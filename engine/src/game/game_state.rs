use crate::board::Board;
use crate::log;
use crate::types::{GameOutcome, MoveError, Player};
use crate::win_detector::{WinningLine, check_win};

/// Receives the result of every finished game.
pub trait GameOverSink {
    fn on_game_over(&mut self, outcome: GameOutcome, winning_line: Option<WinningLine>);
}

impl<F> GameOverSink for F
where
    F: FnMut(GameOutcome, Option<WinningLine>),
{
    fn on_game_over(&mut self, outcome: GameOutcome, winning_line: Option<WinningLine>) {
        self(outcome, winning_line)
    }
}

/// The authoritative board of one game plus turn bookkeeping. Marks are only
/// ever added here; searches work on copies.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: GameOutcome,
    winning_line: Option<WinningLine>,
    moves: Vec<usize>,
}

impl Game {
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            outcome: GameOutcome::InProgress,
            winning_line: None,
            moves: Vec::new(),
        }
    }

    pub fn reset(&mut self, first: Player) {
        *self = Self::new(first);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn moves_played(&self) -> &[usize] {
        &self.moves
    }

    pub fn play(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        self.board.place(index, player.mark())?;
        self.moves.push(index);

        if let Some(cells) = check_win(&self.board, player.mark()) {
            self.outcome = GameOutcome::Win(player);
            self.winning_line = Some(WinningLine::new(player, cells));
            log!("{} wins with line {:?}", player, cells);
        } else if self.board.is_full() {
            self.outcome = GameOutcome::Draw;
            log!("Game drawn after {} moves", self.moves.len());
        } else {
            self.to_move = player.opponent();
        }

        Ok(self.outcome)
    }
}
