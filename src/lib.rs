#![warn(missing_docs)]

//! # `belvedere`
//!
//! A validity checker for solved [Skyscrapers](https://en.wikipedia.org/wiki/Skyscrapers_(puzzle)) boards.
//! A board arrives as N lines of N characters: building heights `'1'`-`'9'` in the interior,
//! visibility hints (or `'*'` for "no hint here") on the frame, and `'?'` for interior cells an
//! unfinished board has not filled in yet.
//! Build a [`Board`] with [`Board::from_lines`] or [`Board::from_path`], then ask for a
//! [`Verdict`] with [`Board::check`], or for the bare boolean with [`Board::validate`].
//!
//! # Internals
//! Three rule classes are checked in order: completeness (no `'?'` left in the interior),
//! uniqueness (no repeated height in any interior row or column), and visibility (every hint
//! digit equals the number of buildings visible from its edge, where a building is visible iff
//! it is strictly taller than everything before it in scan order).
//! Columns are never special-cased: the board is transposed and the row routines run again,
//! and right/bottom hints reuse the left-to-right rule on reversed lines.
//! See [`Viewpoint`] for the four scan directions and [`hint_satisfied`] for the
//! record-counting rule itself.

pub use board::{Board, BoardError};
pub use check::{check_file, Verdict};
pub use io::read_board;
pub use rules::hint_satisfied;
pub use viewpoint::Viewpoint;

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod check;
pub(crate) mod io;
pub(crate) mod rules;
pub(crate) mod viewpoint;
#[cfg(feature = "wasm")]
pub mod wasm;
