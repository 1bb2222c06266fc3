use super::board::{Board, CELL_COUNT};
use super::types::{Mark, Player};

pub type Line = [usize; 3];

/// Rows, columns, then diagonals. The order decides which line is reported
/// when several are complete.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// No line can be complete while more cells than this are empty.
pub const MAX_EMPTY_FOR_WIN: usize = CELL_COUNT - 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: Line,
}

impl WinningLine {
    pub fn new(player: Player, cells: Line) -> Self {
        Self { player, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

pub fn check_win(board: &Board, mark: Mark) -> Option<Line> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .find(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
        .copied()
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Player::A, Player::B].into_iter().find_map(|player| {
        check_win(board, player.mark()).map(|cells| WinningLine::new(player, cells))
    })
}

/// Win probe used after a placement, skipped while a win is impossible.
pub fn placement_wins(board: &Board, mark: Mark) -> bool {
    if board.empty_count() > MAX_EMPTY_FOR_WIN {
        return false;
    }
    check_win(board, mark).is_some()
}
