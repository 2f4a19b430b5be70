use serde::{Deserialize, Serialize};

/// Board width. The board is deliberately not square.
pub const COLUMNS: usize = 9;
/// Board height.
pub const ROWS: usize = 7;
/// Total number of cells on the board.
pub const CELL_COUNT: usize = COLUMNS * ROWS;

/// The eight compass directions as `(d_col, d_row)` steps.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The four corner squares of the 9x7 grid.
pub const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, ROWS as i8 - 1),
    Position::new(COLUMNS as i8 - 1, 0),
    Position::new(COLUMNS as i8 - 1, ROWS as i8 - 1),
];

/// One of the two sides. White is player A and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// The cell state a pawn of this player occupies.
    pub fn cell(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }

    pub fn from_is_white(is_white: bool) -> Player {
        if is_white { Player::White } else { Player::Black }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Player::White),
            Cell::Black => Some(Player::Black),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A `(column, row)` coordinate. Values may lie off the board; every board
/// access checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    pub fn is_on_board(self) -> bool {
        (0..COLUMNS as i8).contains(&self.col) && (0..ROWS as i8).contains(&self.row)
    }

    /// The neighbouring coordinate one step along `(d_col, d_row)`.
    #[inline]
    pub fn step(self, (d_col, d_row): (i8, i8)) -> Position {
        Position::new(self.col + d_col, self.row + d_row)
    }

    /// Build a position from presentation-layer integers, rejecting anything
    /// that cannot name a cell.
    pub fn from_coords(col: i32, row: i32) -> Option<Position> {
        let pos = Position::new(i8::try_from(col).ok()?, i8::try_from(row).ok()?);
        pos.is_on_board().then_some(pos)
    }

    /// Every cell in row-major scan order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS as i8).flat_map(|row| (0..COLUMNS as i8).map(move |col| Position::new(col, row)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
