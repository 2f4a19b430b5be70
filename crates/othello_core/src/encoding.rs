//! Integer encoding of cells for the presentation and persistence layers.
//!
//! The only encoding used at the outer boundary:
//!
//! | Cell  | Code |
//! |-------|------|
//! | Empty | 0    |
//! | White | 1    |
//! | Black | 2    |
//!
//! Rules, game and search code work on [`Cell`] and never see these numbers.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::GameError;
use crate::types::*;

pub const EMPTY_CODE: u8 = 0;
pub const WHITE_CODE: u8 = 1;
pub const BLACK_CODE: u8 = 2;

/// Full board snapshot indexed `[column][row]`.
pub type Grid = [[u8; ROWS]; COLUMNS];

pub fn encode_cell(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => EMPTY_CODE,
        Cell::White => WHITE_CODE,
        Cell::Black => BLACK_CODE,
    }
}

pub fn decode_cell(code: u8) -> Result<Cell, GameError> {
    match code {
        EMPTY_CODE => Ok(Cell::Empty),
        WHITE_CODE => Ok(Cell::White),
        BLACK_CODE => Ok(Cell::Black),
        other => Err(GameError::MalformedSaveData(format!(
            "unknown cell status {other}"
        ))),
    }
}

/// One entry of a full cell listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub col: u8,
    pub row: u8,
    pub status: u8,
}

impl Board {
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[EMPTY_CODE; ROWS]; COLUMNS];
        for (pos, cell) in self.iter() {
            grid[pos.col as usize][pos.row as usize] = encode_cell(cell);
        }
        grid
    }

    pub fn from_grid(grid: &Grid) -> Result<Board, GameError> {
        let mut board = Board::empty();
        for (col, column) in grid.iter().enumerate() {
            for (row, &code) in column.iter().enumerate() {
                board.put(Position::new(col as i8, row as i8), decode_cell(code)?);
            }
        }
        Ok(board)
    }

    /// Every cell, column by column.
    pub fn cell_listing(&self) -> Vec<CellRecord> {
        let mut listing = Vec::with_capacity(CELL_COUNT);
        for col in 0..COLUMNS {
            for row in 0..ROWS {
                let pos = Position::new(col as i8, row as i8);
                let cell = self.cell(pos).unwrap_or_default();
                listing.push(CellRecord {
                    col: col as u8,
                    row: row as u8,
                    status: encode_cell(cell),
                });
            }
        }
        listing
    }

    /// Rebuild a board from a listing naming every cell exactly once, in any
    /// order.
    pub fn from_cell_listing(listing: &[CellRecord]) -> Result<Board, GameError> {
        if listing.len() != CELL_COUNT {
            return Err(GameError::MalformedSaveData(format!(
                "expected {CELL_COUNT} cells, found {}",
                listing.len()
            )));
        }

        let mut seen = [[false; ROWS]; COLUMNS];
        let mut board = Board::empty();
        for rec in listing {
            let pos = Position::new(rec.col as i8, rec.row as i8);
            if rec.col as usize >= COLUMNS || rec.row as usize >= ROWS {
                return Err(GameError::MalformedSaveData(format!(
                    "cell ({}, {}) is outside the board",
                    rec.col, rec.row
                )));
            }
            let slot = &mut seen[rec.col as usize][rec.row as usize];
            if *slot {
                return Err(GameError::MalformedSaveData(format!(
                    "cell {pos} listed twice"
                )));
            }
            *slot = true;
            board.put(pos, decode_cell(rec.status)?);
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod encoding_tests;
