use super::types::{Mark, MoveError};

pub const CELL_COUNT: usize = 9;
pub const SIDE: usize = 3;

/// Row-major 3x3 grid, indices 0..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from a 9-character layout: `X`/`x` for A, `O`/`o` for B,
    /// anything else is empty. Whitespace is skipped so rows can be split up.
    pub fn from_layout(layout: &str) -> Result<Self, String> {
        let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELL_COUNT {
            return Err(format!(
                "Board layout must have {} cells, got {}",
                CELL_COUNT,
                symbols.len()
            ));
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                'X' | 'x' => Mark::A,
                'O' | 'o' => Mark::B,
                _ => Mark::Empty,
            };
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_free(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cells.get(index) {
            None => Err(MoveError::OutOfRange(index)),
            Some(Mark::Empty) => {
                self.cells[index] = mark;
                Ok(())
            }
            Some(_) => Err(MoveError::Occupied(index)),
        }
    }

    /// Undoes a placement made by the caller.
    pub fn clear(&mut self, index: usize) {
        debug_assert!(
            self.cells[index] != Mark::Empty,
            "clearing cell {} that was never set",
            index
        );
        self.cells[index] = Mark::Empty;
    }

    /// Search-internal placement on a cell already known to be empty.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.cells[index] == Mark::Empty, "cell {} is occupied", index);
        self.cells[index] = mark;
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn available_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = chunk.iter().map(|cell| cell.symbol()).collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
