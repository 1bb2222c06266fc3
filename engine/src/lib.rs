pub mod board;
pub mod config;
pub mod game;
pub mod logger;
pub mod search;
pub mod session_rng;
pub mod types;
pub mod win_detector;

pub use board::Board;
pub use game::{FirstPlayerMode, Game, GameConfig, GameOverSink, GameRunner, MoveSource, PlayerKind};
pub use search::{
    FramePhase, SearchConfig, SearchEngine, SearchFrame, SearchResult, SearchStep, SearchStepper,
    decide_move, step_decide_move,
};
pub use session_rng::SessionRng;
pub use types::{GameOutcome, Mark, MoveError, Player};
pub use win_detector::{Line, WinningLine, check_win, check_win_with_line};
