use crate::{
    constraint::{Admission, EdgeConstraint},
    errors::PieceListError,
    handle::Handle,
    node::Node,
    piece::Piece,
};
use std::collections::HashMap;

/// A singly-linked list of pieces behind a permanent sentinel, with an
/// independent cursor for prune-while-iterate passes.
#[derive(Debug)]
pub struct PieceList<P> {
    nodes: HashMap<usize, Node<P>>,
    next_id: usize,
    head: usize,
    tail: usize,
    current: Option<usize>,
    len: usize,
}

/// Iterator over pieces in chain order.
pub struct Iter<'a, P> {
    next: Option<usize>,
    remaining: usize,
    list: &'a PieceList<P>,
}

/// Iterator over (Handle, &P) in chain order.
pub struct IterHandles<'a, P> {
    inner: Iter<'a, P>,
}

impl<P> Default for PieceList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> PieceList<P> {
    /// Create an empty list holding only the sentinel.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` pieces before rehashing.
    pub fn with_capacity(capacity: usize) -> Self {
        let head_id = 0usize;
        let mut nodes = HashMap::with_capacity(capacity + 1);
        nodes.insert(head_id, Node::sentinel(head_id));

        Self {
            nodes,
            next_id: 1,
            head: head_id,
            tail: head_id,
            current: Some(head_id),
            len: 0,
        }
    }

    /// Number of pieces, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a piece after the current tail and return its handle.
    pub fn push(&mut self, piece: P) -> Handle {
        let id = self.next_id;
        self.next_id += 1;

        self.nodes.insert(
            id,
            Node {
                id,
                next: None,
                value: Some(piece),
            },
        );

        let tail = self.nodes.get_mut(&self.tail).expect("tail is linked");
        debug_assert!(tail.next.is_none(), "tail must end the chain");
        tail.next = Some(id);
        self.tail = id;
        self.len += 1;
        Handle(id)
    }

    /// Put the cursor back on the sentinel. Advance once before reading.
    pub fn reset_cursor(&mut self) {
        self.current = Some(self.head);
    }

    /// Move the cursor to its successor.
    ///
    /// Stepping off the last piece leaves the cursor past the end; advancing
    /// from there is an error and leaves the cursor untouched.
    pub fn advance(&mut self) -> Result<(), PieceListError> {
        let id = self.current.ok_or(PieceListError::CursorPastEnd)?;
        self.current = self.nodes[&id].next;
        Ok(())
    }

    /// Has the cursor moved past the last piece?
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// The piece under the cursor; `None` on the sentinel or past the end.
    pub fn current(&self) -> Option<&P> {
        self.current
            .and_then(|id| self.nodes.get(&id))
            .and_then(|n| n.value.as_ref())
    }

    pub fn current_mut(&mut self) -> Option<&mut P> {
        let id = self.current?;
        self.nodes.get_mut(&id).and_then(|n| n.value.as_mut())
    }

    pub fn current_handle(&self) -> Option<Handle> {
        let id = self.current?;
        (id != self.head).then_some(Handle(id))
    }

    /// The piece right after the cursor, i.e. the one
    /// [`delete_next_and_advance`](Self::delete_next_and_advance) would remove.
    pub fn peek_next(&self) -> Option<&P> {
        let id = self.current?;
        let next = self.nodes[&id].next?;
        self.nodes[&next].value.as_ref()
    }

    /// Unlink the piece after the cursor and hand it back.
    ///
    /// The cursor stays where it is, so its new successor is the piece that
    /// followed the removed one. If the removed piece was the tail, the cursor's
    /// node becomes the tail.
    pub fn delete_next_and_advance(&mut self) -> Result<P, PieceListError> {
        let cur = self.current.ok_or(PieceListError::CursorPastEnd)?;
        let victim = self.nodes[&cur].next.ok_or(PieceListError::NoSuccessor)?;

        let mut node = self.nodes.remove(&victim).expect("linked node exists");
        debug_assert!(node.is_live(), "sentinel is never a successor");
        self.nodes.get_mut(&cur).expect("cursor node exists").next = node.next;

        if self.tail == victim {
            debug_assert!(node.next.is_none());
            self.tail = cur;
        }
        self.len -= 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(removed = victim, len = self.len, "deleted piece after cursor");

        Ok(node.value.take().expect("live node has value"))
    }

    /// Build a new list from the pieces that survive `edge` under `bound`.
    ///
    /// The receiver is only read; survivors keep their relative order and
    /// split pieces are inserted where the original stood.
    pub fn apply_edge_constraint<E>(&self, edge: &E, label: i32, bound: &E::Bound) -> PieceList<P>
    where
        E: EdgeConstraint<P> + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("apply_edge_constraint", label, len = self.len);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut out = PieceList::with_capacity(self.len);
        for piece in self.iter() {
            match edge.admit(piece, label, bound) {
                Admission::Reject => {}
                Admission::Keep(p) => {
                    out.push(p);
                }
                Admission::Split(ps) => out.extend(ps),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(survivors = out.len, "edge constraint applied");

        out
    }

    /// Get a reference by handle (if live).
    pub fn get(&self, h: Handle) -> Option<&P> {
        self.nodes.get(&h.0).and_then(|n| n.value.as_ref())
    }

    /// Get a mutable reference by handle (if live).
    pub fn get_mut(&mut self, h: Handle) -> Option<&mut P> {
        self.nodes.get_mut(&h.0).and_then(|n| n.value.as_mut())
    }

    pub fn first(&self) -> Option<&P> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<&P> {
        self.nodes[&self.tail].value.as_ref()
    }

    /// Iterate pieces in chain order.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            next: self.nodes[&self.head].next,
            remaining: self.len,
            list: self,
        }
    }

    /// Iterate `(Handle, &P)` in chain order.
    pub fn iter_handles(&self) -> IterHandles<'_, P> {
        IterHandles { inner: self.iter() }
    }
}

impl<P: Piece> PieceList<P> {
    /// Fold `point` into every piece, front to back.
    ///
    /// Leaves the cursor past the end.
    pub fn broadcast_point_penalty(&mut self, point: &P::Point) {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("broadcast_point_penalty", len = self.len);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        // sentinel is skipped
        self.current = self.nodes[&self.head].next;
        while let Some(id) = self.current {
            let node = self.nodes.get_mut(&id).expect("linked node exists");
            if let Some(piece) = node.value.as_mut() {
                piece.add_point_and_penalty(point);
            }
            self.current = node.next;
        }
    }
}

impl<P> Drop for PieceList<P> {
    fn drop(&mut self) {
        let mut cur = Some(self.head);
        while let Some(id) = cur {
            cur = self.nodes.remove(&id).and_then(|n| n.next);
        }
    }
}

impl<P> Extend<P> for PieceList<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for piece in iter {
            self.push(piece);
        }
    }
}

impl<P> FromIterator<P> for PieceList<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut list = PieceList::new();
        list.extend(iter);
        list
    }
}

impl<'a, P> IntoIterator for &'a PieceList<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, P> Iter<'a, P> {
    fn next_node(&mut self) -> Option<&'a Node<P>> {
        let id = self.next?;
        let node = &self.list.nodes[&id];
        self.next = node.next;
        self.remaining -= 1;
        Some(node)
    }
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().and_then(|n| n.value.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P> ExactSizeIterator for Iter<'_, P> {}

impl<'a, P> Iterator for IterHandles<'a, P> {
    type Item = (Handle, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.inner.next_node()?;
        node.value.as_ref().map(|v| (Handle(node.id), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
