use std::io::{BufRead, Write};

use tictactoe_engine::{Game, MoveError, MoveSource};

use crate::render::render_board;

/// Human moves typed as 1-9; `q` or end of input abandons the game.
pub struct ConsoleMoves<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleMoves<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    pub fn confirm(&mut self, question: &str) -> bool {
        let _ = write!(self.output, "{} [y/N] ", question);
        let _ = self.output.flush();
        self.read_line()
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y"))
    }
}

pub fn parse_cell(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(number @ 1..=9) => Ok(number - 1),
        _ => Err(format!("'{}' is not a cell between 1 and 9", text)),
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleMoves<R, W> {
    fn choose_move(&mut self, game: &Game) -> Option<usize> {
        let _ = writeln!(self.output, "\n{}", render_board(game.board(), None));
        loop {
            let _ = write!(self.output, "{} to move (1-9, q to quit): ", game.to_move());
            let _ = self.output.flush();

            let line = self.read_line()?;
            if line.eq_ignore_ascii_case("q") {
                return None;
            }
            match parse_cell(&line) {
                Ok(cell) => return Some(cell),
                Err(message) => {
                    let _ = writeln!(self.output, "{}", message);
                }
            }
        }
    }

    fn on_rejected(&mut self, error: MoveError) {
        let _ = writeln!(self.output, "{}", error);
    }
}
