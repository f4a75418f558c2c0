use std::path::Path;

use log::debug;
use strum::VariantArray;

use crate::board::{Board, BoardError};
use crate::viewpoint::Viewpoint;

/// The outcome of checking a well-formed board.
///
/// Everything short of [`Valid`](Self::Valid) collapses to `false` through
/// [`is_valid`](Self::is_valid); callers that care which rule class broke first can match on
/// the variant instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq, strum::Display)]
pub enum Verdict {
    /// Every rule holds.
    Valid,
    /// At least one interior cell is still `'?'`.
    Unfinished,
    /// Some interior row or column repeats a height.
    DuplicateHeight,
    /// Some hint disagrees with the number of buildings visible from its edge.
    VisibilityMismatch,
}

impl Verdict {
    /// Collapse this verdict to the single-boolean contract.
    pub fn is_valid(&self) -> bool {
        *self == Self::Valid
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_valid()
    }
}

impl Board {
    /// Check every rule class in order and report the first one that fails.
    ///
    /// An unfinished board is reported as [`Verdict::Unfinished`] without looking at
    /// uniqueness or visibility; a board can only be judged against its hints once every cell
    /// is known.
    pub fn check(&self) -> Verdict {
        if !self.is_finished() {
            debug!("board has unresolved interior cells");
            return Verdict::Unfinished;
        }

        if !self.rows_are_unique() || !self.columns_are_unique() {
            debug!("a row or column repeats a height");
            return Verdict::DuplicateHeight;
        }

        for viewpoint in Viewpoint::VARIANTS {
            if !self.visible_from(*viewpoint) {
                debug!("visibility mismatch looking from {:?}", viewpoint);
                return Verdict::VisibilityMismatch;
            }
        }

        Verdict::Valid
    }

    /// Whether the board satisfies every rule.
    pub fn validate(&self) -> bool {
        self.check().is_valid()
    }
}

/// Load the board file at `path` and check it.
///
/// Malformed input (a missing file, wrong dimensions, a stray character) is a [`BoardError`];
/// rule violations on a well-formed board are a [`Verdict`].
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<Verdict, BoardError> {
    Ok(Board::from_path(path)?.check())
}
