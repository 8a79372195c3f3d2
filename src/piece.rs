/// A payload segment stored in a [`PieceList`](crate::PieceList).
///
/// The list keeps the chain links itself, so an implementor only supplies the
/// per-point update.
pub trait Piece {
    type Point;

    /// Fold `point` and its penalty into this piece.
    fn add_point_and_penalty(&mut self, point: &Self::Point);
}
