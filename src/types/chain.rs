use std::fmt;
use std::iter::FusedIterator;

use crate::traits::{Chain, Fingerprinted, NodeView};
use crate::types::node::{Link, Node, NodeRef};
use crate::types::{ChainError, ChainResult, Fingerprint, EMPTY_CHAIN};
use crate::utils::{genesis_digest, link_digest};

/// Singly linked [`Chain`] stored in an arena.
///
/// Nodes are pushed in order and never removed, so an arena index stays
/// valid for the lifetime of the chain and `tail` gives O(1) append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedChain<T, R> {
    nodes: Vec<Node<T, R>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T, R> Default for LinkedChain<T, R> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }
}

impl<T, R> LinkedChain<T, R> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<T, R> Chain<T, R> for LinkedChain<T, R> {
    type Node<'a>
        = NodeRef<'a, T, R>
    where
        Self: 'a,
        T: 'a,
        R: 'a;

    type Iter<'a>
        = Iter<'a, T, R>
    where
        Self: 'a,
        T: 'a,
        R: 'a;

    fn start(&mut self, data: T) -> ChainResult<()> {
        if self.head.is_some() {
            return Err(ChainError::AlreadyStarted);
        }

        let index = self.nodes.len();
        self.nodes.push(Node::new(data));
        self.head = Some(index);
        self.tail = Some(index);

        tracing::trace!(len = self.nodes.len(), "chain started");
        Ok(())
    }

    fn append(&mut self, relation: R, data: T) -> ChainResult<()> {
        let tail = self.tail.ok_or(ChainError::NotStarted)?;

        let index = self.nodes.len();
        self.nodes.push(Node::new(data));
        // the only write a node ever sees after creation
        self.nodes[tail].link = Some(Link {
            relation,
            next: index,
        });
        self.tail = Some(index);

        tracing::trace!(len = self.nodes.len(), "node appended");
        Ok(())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn head(&self) -> Option<&T> {
        self.head
            .and_then(|index| self.nodes.get(index))
            .map(|node| &node.data)
    }

    fn tail(&self) -> Option<&T> {
        self.tail
            .and_then(|index| self.nodes.get(index))
            .map(|node| &node.data)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
        R: 'a,
    {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.nodes.len(),
        }
    }
}

impl<'a, T, R> IntoIterator for &'a LinkedChain<T, R> {
    type Item = NodeRef<'a, T, R>;
    type IntoIter = Iter<'a, T, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `<d1> --[<r1>]--> <d2> ... <dN>`, or `[]` when empty.
impl<T: fmt::Display, R: fmt::Display> fmt::Display for LinkedChain<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_CHAIN);
        }

        for node in self.iter() {
            write!(f, "{}", node.data())?;
            if let Some(relation) = node.relation_to_next() {
                write!(f, " --[{}]--> ", relation)?;
            }
        }

        Ok(())
    }
}

impl<T: fmt::Debug, R: fmt::Debug> Fingerprinted for LinkedChain<T, R> {
    fn fingerprint(&self) -> Fingerprint {
        let digest = self.iter().fold(genesis_digest(), |prev, node| {
            link_digest(&prev, node.data(), node.relation_to_next())
        });

        hex::encode(digest)
    }
}

/// Forward traversal over a [`LinkedChain`], head first.
pub struct Iter<'a, T, R> {
    nodes: &'a [Node<T, R>],
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T, R> Iterator for Iter<'a, T, R> {
    type Item = NodeRef<'a, T, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = self.next.take().and_then(|index| nodes.get(index))?;
        self.next = node.link.as_ref().map(|link| link.next);
        self.remaining = self.remaining.saturating_sub(1);

        Some(NodeRef::new(node, nodes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, R> ExactSizeIterator for Iter<'_, T, R> {}

impl<T, R> FusedIterator for Iter<'_, T, R> {}

impl<T, R> Clone for Iter<'_, T, R> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}
