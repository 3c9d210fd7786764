use std::convert::Infallible;

use crate::types::{ChainResult, Fingerprint};

/// Read-only projection of one position in a chain.
///
/// `'a` is the lifetime of the borrowed chain, so payloads handed out by a
/// view outlive the view itself.
pub trait NodeView<'a, T: 'a, R: 'a> {
    fn data(&self) -> &'a T;

    /// Edge leading to the following node, `None` on the last node.
    fn relation_to_next(&self) -> Option<&'a R>;

    fn has_next(&self) -> bool {
        self.relation_to_next().is_some()
    }

    /// Payload of the following node. A peek only: traversal never
    /// advances through it.
    fn next_data(&self) -> Option<&'a T>;
}

/// An append-only sequence of payloads where every pair of neighbours is
/// joined by an explicit relation value.
///
/// A chain is empty until [`Chain::start`] installs the first payload; after
/// that it only grows at the tail through [`Chain::append`].
pub trait Chain<T, R> {
    type Node<'a>: NodeView<'a, T, R>
    where
        Self: 'a,
        T: 'a,
        R: 'a;

    type Iter<'a>: Iterator<Item = Self::Node<'a>>
    where
        Self: 'a,
        T: 'a,
        R: 'a;

    /// Installs the first node. Fails with `AlreadyStarted` on a non-empty chain.
    fn start(&mut self, data: T) -> ChainResult<()>;

    /// Links `data` after the current tail through `relation`.
    /// Fails with `NotStarted` on an empty chain.
    fn append(&mut self, relation: R, data: T) -> ChainResult<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn head(&self) -> Option<&T>;

    fn tail(&self) -> Option<&T>;

    /// Forward traversal from the head. Every call starts over.
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
        R: 'a;

    /// Applies `predicate` to every `(left, relation, right)` triple in order
    /// and stops at the first one that returns `false`.
    ///
    /// Empty and single-node chains are vacuously valid.
    fn validate<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, &R, &T) -> bool,
    {
        let checked = self.try_validate(|left, relation, right| {
            Ok::<_, Infallible>(predicate(left, relation, right))
        });
        match checked {
            Ok(valid) => valid,
            Err(never) => match never {},
        }
    }

    /// Fallible form of [`Chain::validate`]. The first `Err` aborts the walk
    /// and is returned as is.
    fn try_validate<E, F>(&self, mut predicate: F) -> Result<bool, E>
    where
        F: FnMut(&T, &R, &T) -> Result<bool, E>,
    {
        let mut nodes = self.iter();
        let mut left = match nodes.next() {
            Some(node) => node,
            None => return Ok(true),
        };

        for (position, right) in nodes.enumerate() {
            // every node followed by another one carries the edge to it
            debug_assert!(
                left.has_next(),
                "node {} has a successor but no relation",
                position
            );
            if let Some(relation) = left.relation_to_next() {
                match predicate(left.data(), relation, right.data()) {
                    Ok(true) => {}
                    Ok(false) => {
                        tracing::debug!(position, "transition rejected by validator");
                        return Ok(false);
                    }
                    Err(err) => {
                        tracing::debug!(position, "validator failed");
                        return Err(err);
                    }
                }
            }
            left = right;
        }

        Ok(true)
    }
}

/// Content digest of a whole structure.
pub trait Fingerprinted {
    fn fingerprint(&self) -> Fingerprint;
}
