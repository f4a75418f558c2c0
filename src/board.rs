use std::fmt::{Display, Formatter};
use std::path::Path;

use ndarray::Array2;
use thiserror::Error;

use crate::cell::Cell;
use crate::io;

/// Reasons a board cannot be constructed or loaded at all.
///
/// These are fatal: no verdict exists for such input. Rule violations on a
/// well-formed board are reported through [`Verdict`](crate::Verdict) instead.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Fewer than four rows were given; no frame plus interior fits in less.
    #[error("a board needs at least 4 rows, got {rows}")]
    TooSmall {
        /// Number of rows in the input.
        rows: usize,
    },
    /// A row whose length does not match the row count.
    #[error("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Expected row length, equal to the number of rows.
        expected: usize,
        /// Actual length of the row.
        found: usize,
    },
    /// A character other than `'1'`-`'9'`, `'*'` or `'?'`.
    #[error("unexpected character {found:?} at row {row}, column {column}")]
    UnexpectedCharacter {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        column: usize,
        /// The character itself.
        found: char,
    },
    /// The board file could not be read.
    #[error("failed to read board file")]
    Io(#[from] std::io::Error),
}

/// A square Skyscrapers board: hint cells on the frame, building heights inside.
///
/// Boards only exist in a well-formed state: square, at least 4x4, and made of height digits,
/// `'*'` blanks, and `'?'` placeholders. Anything else is rejected during construction, so the
/// checking routines are total over constructed boards and report plain booleans or a
/// [`Verdict`](crate::Verdict) rather than errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) cells: Array2<Cell>,
}

impl Board {
    /// Parse a board from one string per row.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, BoardError> {
        let size = lines.len();
        if size < 4 {
            return Err(BoardError::TooSmall { rows: size });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != size {
                return Err(BoardError::NotSquare {
                    row,
                    expected: size,
                    found,
                });
            }

            for (column, ch) in line.chars().enumerate() {
                cells.push(Cell::try_from(ch).map_err(|found| {
                    BoardError::UnexpectedCharacter { row, column, found }
                })?);
            }
        }

        // every row was measured against size above, so the shape holds
        Ok(Self {
            size,
            cells: Array2::from_shape_vec((size, size), cells).unwrap(),
        })
    }

    /// Read and parse the board file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BoardError> {
        Self::from_lines(&io::read_board(path)?)
    }

    /// Edge length of this board, frame included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The same board with rows and columns swapped.
    ///
    /// The top hint row becomes the left hint column and the bottom hint row the right hint
    /// column, so every row-wise routine applies to columns unchanged. The copy is private to
    /// the caller; `self` is left untouched.
    pub fn transposed(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.t().to_owned(),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.size * (self.size + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(cell.as_char());
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
