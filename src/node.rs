#[derive(Debug)]
pub(crate) struct Node<P> {
    pub(crate) id: usize,
    pub(crate) next: Option<usize>,
    pub(crate) value: Option<P>,
}

impl<P> Node<P> {
    pub(crate) fn sentinel(id: usize) -> Self {
        Node {
            id,
            next: None,
            value: None,
        }
    }

    /// Does this node carry a payload (i.e. is it not the sentinel)?
    pub(crate) fn is_live(&self) -> bool {
        self.value.is_some()
    }
}
