use crate::board::{Board, CELL_COUNT};
use crate::session_rng::SessionRng;
use crate::types::Player;
use crate::win_detector::placement_wins;

use super::shortcuts::opening_move;
use super::types::{BestMove, FramePhase, SearchFrame, SearchResult, SearchStep, win_score};

#[derive(Debug, Clone, Copy)]
enum NodeState {
    Scanning,
    Placed(usize),
    Recursing(usize),
    Scored { cell: usize, score: i32, terminal: bool },
    Reverting { cell: usize, terminal: bool },
}

#[derive(Debug)]
struct Node {
    player: Player,
    depth: u32,
    next_cell: usize,
    best: BestMove,
    state: NodeState,
}

impl Node {
    fn new(player: Player, depth: u32) -> Self {
        Self {
            player,
            depth,
            next_cell: 0,
            best: BestMove::new(player),
            state: NodeState::Scanning,
        }
    }
}

/// The minimax recursion unrolled onto an explicit stack so it can be
/// advanced one frame at a time.
///
/// Each explored cell yields an `Exploring` frame right after its
/// hypothetical mark is placed, so the frame's board already holds that mark
/// at `cell`. A `Scored` frame for the same cell follows before the mark is
/// taken back. The last
/// item is always `SearchStep::Finished`; after that the iterator is spent.
/// The search runs on its own copy of the board, so dropping a stepper
/// half-way leaves nothing behind.
#[derive(Debug)]
pub struct SearchStepper {
    board: Board,
    stack: Vec<Node>,
    early_result: Option<SearchResult>,
    nodes: u64,
}

impl SearchStepper {
    pub fn new(board: &Board, player: Player, use_opening_shortcuts: bool, rng: &mut SessionRng) -> Self {
        let mut stepper = Self {
            board: *board,
            stack: Vec::with_capacity(CELL_COUNT),
            early_result: None,
            nodes: 0,
        };

        if board.is_full() {
            stepper.early_result = Some(SearchResult::draw());
        } else if let Some(cell) = use_opening_shortcuts
            .then(|| opening_move(board, rng))
            .flatten()
        {
            stepper.early_result = Some(SearchResult::new(0, Some(cell)));
        } else {
            stepper.stack.push(Node::new(player, 1));
        }
        stepper
    }

    /// Number of hypothetical placements made so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Depth of the node currently being scanned, 0 once finished.
    pub fn current_depth(&self) -> u32 {
        self.stack.last().map_or(0, |node| node.depth)
    }

    /// Drains the remaining frames and returns the final result.
    pub fn finish(self) -> SearchResult {
        self.filter_map(SearchStep::into_result)
            .last()
            .unwrap_or_else(SearchResult::draw)
    }

    fn finish_node(&mut self) -> Option<SearchStep> {
        let node = self.stack.pop()?;
        let result = node.best.into_result();

        match self.stack.last_mut() {
            Some(parent) => {
                if let NodeState::Recursing(cell) = parent.state {
                    parent.state = NodeState::Scored {
                        cell,
                        score: result.score,
                        terminal: false,
                    };
                }
                None
            }
            None => Some(SearchStep::Finished(result)),
        }
    }
}

impl Iterator for SearchStepper {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        if let Some(result) = self.early_result.take() {
            return Some(SearchStep::Finished(result));
        }

        loop {
            let node = self.stack.last_mut()?;
            let mark = node.player.mark();
            let state = node.state;

            match state {
                NodeState::Scanning => {
                    let board = &self.board;
                    match (node.next_cell..CELL_COUNT).find(|&cell| board.is_free(cell)) {
                        Some(cell) => {
                            self.board.set(cell, mark);
                            self.nodes += 1;
                            node.state = NodeState::Placed(cell);
                            return Some(SearchStep::Frame(SearchFrame {
                                board: self.board,
                                depth: node.depth,
                                cell,
                                mark,
                                phase: FramePhase::Exploring,
                            }));
                        }
                        None => {
                            if let Some(step) = self.finish_node() {
                                return Some(step);
                            }
                        }
                    }
                }
                NodeState::Placed(cell) => {
                    if placement_wins(&self.board, mark) {
                        node.state = NodeState::Scored {
                            cell,
                            score: win_score(node.player, node.depth),
                            terminal: true,
                        };
                    } else if self.board.is_full() {
                        node.state = NodeState::Scored {
                            cell,
                            score: 0,
                            terminal: false,
                        };
                    } else {
                        node.state = NodeState::Recursing(cell);
                        let child = Node::new(node.player.opponent(), node.depth + 1);
                        self.stack.push(child);
                    }
                }
                NodeState::Recursing(_) => {
                    unreachable!("a recursing node always has a child above it")
                }
                NodeState::Scored { cell, score, terminal } => {
                    node.best.offer(cell, score);
                    node.state = NodeState::Reverting { cell, terminal };
                    return Some(SearchStep::Frame(SearchFrame {
                        board: self.board,
                        depth: node.depth,
                        cell,
                        mark,
                        phase: FramePhase::Scored(score),
                    }));
                }
                NodeState::Reverting { cell, terminal } => {
                    self.board.clear(cell);
                    // A win ends the node without trying the remaining cells.
                    node.next_cell = if terminal { CELL_COUNT } else { cell + 1 };
                    node.state = NodeState::Scanning;
                }
            }
        }
    }
}

impl std::iter::FusedIterator for SearchStepper {}
