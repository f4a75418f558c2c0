use strum::VariantArray;

/// An edge of the board from which a hint looks down its line of buildings.
///
/// [`Left`](Self::Left) and [`Right`](Self::Right) read rows; [`Top`](Self::Top) and
/// [`Bottom`](Self::Bottom) read columns by way of a transposed copy. `Right` and `Bottom`
/// scan their lines in reverse, so a single left-to-right rule covers all four hint positions.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, VariantArray)]
pub enum Viewpoint {
    /// Hints in the first column, read along rows.
    Left,
    /// Hints in the last column, read along rows back to front.
    Right,
    /// Hints in the first row, read down columns.
    Top,
    /// Hints in the last row, read up columns.
    Bottom,
}

impl Viewpoint {
    pub(crate) fn is_vertical(&self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    pub(crate) fn scans_reversed(&self) -> bool {
        matches!(self, Self::Right | Self::Bottom)
    }
}
