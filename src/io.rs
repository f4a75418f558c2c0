use std::fs;
use std::path::Path;

use crate::board::BoardError;

/// Read a board file into one trimmed string per row.
///
/// Performs no interpretation beyond trimming surrounding whitespace from each line; dimension
/// and character checks happen in [`Board::from_lines`](crate::Board::from_lines). A missing or
/// unreadable file surfaces as [`BoardError::Io`].
pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Vec<String>, BoardError> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(|line| line.trim().to_string())
        .collect())
}
