//! Chain records: value-bearing nodes and the value-less head anchor.

use crate::arena::{Arena, ArenaId};

/// Id of a node living in a sequence's arena.
pub(crate) type NodeId<T> = ArenaId<Node<T>>;

/// Node storage of one sequence.
pub(crate) type NodeArena<T> = Arena<Node<T>>;

/// One element of the chain and the link to the element after it.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeId<T>>,
}

/// The "before begin" sentinel. It only carries the head link.
#[derive(Debug)]
pub(crate) struct Anchor<T> {
    pub(crate) next: Option<NodeId<T>>,
}

impl<T> Anchor<T> {
    pub(crate) const fn new() -> Self {
        Self { next: None }
    }
}
