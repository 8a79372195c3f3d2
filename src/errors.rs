/// Errors returned when a cursor operation's precondition does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceListError {
    /// The cursor already moved past the last piece.
    CursorPastEnd,

    /// There is no piece after the cursor to delete.
    NoSuccessor,
}
impl core::fmt::Display for PieceListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceListError::CursorPastEnd => f.write_str("cursor is past the end of the list"),
            PieceListError::NoSuccessor => f.write_str("no piece follows the cursor"),
        }
    }
}
impl std::error::Error for PieceListError {}
