//! Admission of pieces against an edge constraint.

/// What survives of a single piece once a constraint has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission<P> {
    /// Nothing of the piece survives.
    Reject,
    /// The piece survives whole, possibly relabelled.
    Keep(P),
    /// Only these sub-pieces survive, in chain order.
    Split(Vec<P>),
}

impl<P> Admission<P> {
    /// Number of pieces this outcome contributes.
    pub fn count(&self) -> usize {
        match self {
            Admission::Reject => 0,
            Admission::Keep(_) => 1,
            Admission::Split(ps) => ps.len(),
        }
    }
}

/// An edge constraint that decides, piece by piece, what survives.
///
/// The geometry lives entirely in the implementor; the list only drives the walk
/// and collects the survivors.
pub trait EdgeConstraint<P> {
    type Bound;

    /// Decide the fate of `piece` under this edge and `bound`, tagging survivors
    /// with `label` where the piece type records one.
    fn admit(&self, piece: &P, label: i32, bound: &Self::Bound) -> Admission<P>;
}
