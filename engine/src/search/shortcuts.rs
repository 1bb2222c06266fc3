use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::types::Mark;

pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const CENTER: usize = 4;

/// Canned replies for the first two plies. Every corner opening and the
/// center (or a corner against a center opening) are equally good, so these
/// never change the value of the game.
pub fn opening_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    match board.empty_count() {
        9 => Some(random_corner(rng)),
        8 => {
            if board.get(CENTER) == Some(Mark::Empty) {
                Some(CENTER)
            } else {
                Some(random_corner(rng))
            }
        }
        _ => None,
    }
}

fn random_corner(rng: &mut SessionRng) -> usize {
    CORNERS[rng.random_range(0..CORNERS.len())]
}
