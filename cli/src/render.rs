use tictactoe_engine::board::SIDE;
use tictactoe_engine::{Board, FramePhase, GameOutcome, Mark, SearchFrame, WinningLine};

fn cell_text(board: &Board, index: usize) -> String {
    match board.get(index) {
        Some(Mark::Empty) | None => format!("{}", index + 1),
        Some(mark) => mark.symbol().to_string(),
    }
}

/// Board with free cells numbered 1-9 the way humans type them. Cells of a
/// winning line are bracketed.
pub fn render_board(board: &Board, winning_line: Option<&WinningLine>) -> String {
    let mut rows = Vec::with_capacity(SIDE);
    for row in 0..SIDE {
        let cells: Vec<String> = (0..SIDE)
            .map(|col| {
                let index = row * SIDE + col;
                let text = cell_text(board, index);
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", text)
                } else {
                    format!(" {} ", text)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

/// One search frame: the hypothetical mark is shown in lower case with its
/// depth, and its points once scored.
pub fn render_frame(frame: &SearchFrame) -> String {
    let mut lines = Vec::with_capacity(SIDE + 1);
    for row in 0..SIDE {
        let cells: Vec<String> = (0..SIDE)
            .map(|col| {
                let index = row * SIDE + col;
                if index == frame.cell {
                    format!(" {} ", frame.mark.symbol().to_ascii_lowercase())
                } else {
                    format!(" {} ", cell_text(&frame.board, index))
                }
            })
            .collect();
        lines.push(cells.join("|"));
    }

    let label = match frame.phase {
        FramePhase::Exploring => format!("Cell {} - Depth: {}", frame.cell + 1, frame.depth),
        FramePhase::Scored(score) => format!(
            "Cell {} - Depth: {} - {} Points",
            frame.cell + 1,
            frame.depth,
            score
        ),
    };
    lines.push(label);
    lines.join("\n")
}

pub fn render_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{} wins!", player),
        GameOutcome::Draw => "Draw!".to_string(),
        GameOutcome::InProgress => "Game in progress".to_string(),
    }
}
