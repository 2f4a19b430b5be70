use crate::error::GameError;
use crate::types::*;

/// Cell occupancy of the 9x7 grid, indexed `[column][row]`.
///
/// Boards are plain values: every write returns a new board and leaves the
/// receiver untouched, so a board held by one search node can never be
/// changed through another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; ROWS]; COLUMNS],
}

impl Board {
    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; ROWS]; COLUMNS],
        }
    }

    /// The fixed starting layout: White on (3,3) and (4,4), Black on (4,3)
    /// and (3,4).
    pub fn initial() -> Self {
        let mut b = Self::empty();
        b.put(Position::new(3, 3), Cell::White);
        b.put(Position::new(4, 4), Cell::White);
        b.put(Position::new(4, 3), Cell::Black);
        b.put(Position::new(3, 4), Cell::Black);
        b
    }

    /// Bounds-checked read.
    pub fn get(&self, pos: Position) -> Result<Cell, GameError> {
        self.cell(pos).ok_or(GameError::OutOfBounds {
            col: pos.col,
            row: pos.row,
        })
    }

    /// Read that yields `None` off the board. Direction walks use this to
    /// detect the edge.
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.is_on_board() {
            Some(self.cells[pos.col as usize][pos.row as usize])
        } else {
            None
        }
    }

    /// A copy of this board with `pos` set to `cell`.
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Result<Board, GameError> {
        self.get(pos)?;
        let mut next = *self;
        next.put(pos, cell);
        Ok(next)
    }

    /// In-place write on a board the caller owns exclusively. Only used while
    /// building a fresh board value.
    pub(crate) fn put(&mut self, pos: Position, cell: Cell) {
        debug_assert!(pos.is_on_board());
        self.cells[pos.col as usize][pos.row as usize] = cell;
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Number of pawns owned by `player`.
    pub fn score(&self, player: Player) -> usize {
        self.count(player.cell())
    }

    /// Corners held by `player`.
    pub fn corners(&self, player: Player) -> usize {
        CORNERS
            .iter()
            .filter(|&&c| self.cell(c) == Some(player.cell()))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |p| (p, self.cells[p.col as usize][p.row as usize]))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    /// Text diagram, one row per line: `.` empty, `W` white, `B` black.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let ch = match self.cells[col][row] {
                    Cell::Empty => '.',
                    Cell::White => 'W',
                    Cell::Black => 'B',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = GameError;

    /// Parse the diagram produced by `Display`. Whitespace around rows is
    /// ignored, which keeps test fixtures readable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != ROWS {
            return Err(GameError::MalformedSaveData(format!(
                "expected {ROWS} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != COLUMNS {
                return Err(GameError::MalformedSaveData(format!(
                    "row {row} has {} cells, expected {COLUMNS}",
                    chars.len()
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    'W' => Cell::White,
                    'B' => Cell::Black,
                    other => {
                        return Err(GameError::MalformedSaveData(format!(
                            "unknown cell character '{other}'"
                        )));
                    }
                };
                board.put(Position::new(col as i8, row as i8), cell);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
