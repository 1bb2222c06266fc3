use crate::board::Board;
use crate::types::{Mark, Player};

/// Magnitude of a win found on the first ply; each extra ply costs one point.
pub const WIN_SCORE_BASE: i32 = 10;

pub fn win_score(player: Player, depth: u32) -> i32 {
    player.sign() * (WIN_SCORE_BASE - depth as i32)
}

/// `score` is positive when A is winning, negative when B is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub cell: Option<usize>,
}

impl SearchResult {
    pub fn new(score: i32, cell: Option<usize>) -> Self {
        Self { score, cell }
    }

    pub fn draw() -> Self {
        Self::new(0, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// The mark has just been placed; its subtree is not searched yet.
    Exploring,
    Scored(i32),
}

/// Snapshot of a stepped search. `board` holds the hypothetical mark at `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFrame {
    pub board: Board,
    pub depth: u32,
    pub cell: usize,
    pub mark: Mark,
    pub phase: FramePhase,
}

impl SearchFrame {
    pub fn score(&self) -> Option<i32> {
        match self.phase {
            FramePhase::Exploring => None,
            FramePhase::Scored(score) => Some(score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    Frame(SearchFrame),
    Finished(SearchResult),
}

impl SearchStep {
    pub fn into_frame(self) -> Option<SearchFrame> {
        match self {
            SearchStep::Frame(frame) => Some(frame),
            SearchStep::Finished(_) => None,
        }
    }

    pub fn into_result(self) -> Option<SearchResult> {
        match self {
            SearchStep::Frame(_) => None,
            SearchStep::Finished(result) => Some(result),
        }
    }
}

/// Running best of one node. A maximizes and B minimizes; only a strict
/// improvement replaces the current best, so ties keep the lower cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BestMove {
    player: Player,
    score: i32,
    cell: Option<usize>,
}

impl BestMove {
    pub(crate) fn new(player: Player) -> Self {
        let score = match player {
            Player::A => i32::MIN,
            Player::B => i32::MAX,
        };
        Self {
            player,
            score,
            cell: None,
        }
    }

    pub(crate) fn offer(&mut self, cell: usize, score: i32) {
        let improves = match self.player {
            Player::A => score > self.score,
            Player::B => score < self.score,
        };
        if improves {
            self.score = score;
            self.cell = Some(cell);
        }
    }

    pub(crate) fn into_result(self) -> SearchResult {
        match self.cell {
            Some(cell) => SearchResult::new(self.score, Some(cell)),
            None => SearchResult::draw(),
        }
    }
}
