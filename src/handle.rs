/// Stable position of a piece inside one [`PieceList`](crate::PieceList).
///
/// Ids are never reused, so a handle to a deleted piece stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) usize);

impl Handle {
    /// Returns the raw numeric identifier for debugging or external maps.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}
