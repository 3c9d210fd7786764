use std::fmt;

use crate::traits::NodeView;

/// Edge to the successor together with the successor's arena index.
///
/// Keeping both in one value means a node either has a successor and the
/// relation to it, or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Link<R> {
    pub(crate) relation: R,
    pub(crate) next: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T, R> {
    pub(crate) data: T,
    pub(crate) link: Option<Link<R>>,
}

impl<T, R> Node<T, R> {
    pub(crate) fn new(data: T) -> Self {
        Self { data, link: None }
    }
}

/// Borrowed view of a node, yielded by chain traversal.
pub struct NodeRef<'a, T, R> {
    node: &'a Node<T, R>,
    nodes: &'a [Node<T, R>],
}

impl<'a, T, R> NodeRef<'a, T, R> {
    pub(crate) fn new(node: &'a Node<T, R>, nodes: &'a [Node<T, R>]) -> Self {
        Self { node, nodes }
    }
}

impl<'a, T, R> NodeView<'a, T, R> for NodeRef<'a, T, R> {
    fn data(&self) -> &'a T {
        &self.node.data
    }

    fn relation_to_next(&self) -> Option<&'a R> {
        self.node.link.as_ref().map(|link| &link.relation)
    }

    fn next_data(&self) -> Option<&'a T> {
        let nodes = self.nodes;
        self.node
            .link
            .as_ref()
            .and_then(|link| nodes.get(link.next))
            .map(|next| &next.data)
    }
}

impl<T, R> Clone for NodeRef<'_, T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R> Copy for NodeRef<'_, T, R> {}

impl<T: fmt::Debug, R: fmt::Debug> fmt::Debug for NodeRef<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("data", &self.node.data)
            .field("relation_to_next", &self.relation_to_next())
            .finish()
    }
}
