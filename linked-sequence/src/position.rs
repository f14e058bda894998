//! # Positions
//!
//! A [`Position`] names a location in one sequence's chain: the head anchor
//! ("before begin"), a node, or past-the-end. It is a non-owning `Copy`
//! handle; reading or writing through it always goes through the sequence,
//! so what a caller may do with the element depends only on whether it holds
//! `&LinkedSequence` or `&mut LinkedSequence`.
//!
//! Two positions of the same sequence are equal iff they denote the same
//! location. A node position keeps its slot generation and the arena epoch,
//! so it never compares equal to a node that later reuses the same slot, nor
//! to one inserted after a [`clear`](crate::LinkedSequence::clear).
//!
//! A position carries no identity of the sequence it came from. Every
//! sequence has the same before-begin and end positions, and a node position
//! from one sequence may resolve in another whose arena has a live node at
//! the same slot, generation and epoch. Only pass a position back to the
//! sequence that produced it, or to the one it followed through a
//! [`swap`](crate::LinkedSequence::swap). Comparing positions of different
//! sequences tells you nothing.
//!
//! ## Example
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::from([1, 2]);
//! let first = seq.begin();
//! assert_eq!(seq.get(first), Some(&1));
//!
//! let second = seq.next_position(first);
//! assert_eq!(seq.next_position(second), seq.end());
//!
//! *seq.get_mut(second).unwrap() = 20;
//! assert_eq!(seq, [1, 20]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::node::NodeId;

/// What a position points at.
pub(crate) enum Link<T> {
    Anchor,
    Node(NodeId<T>),
    End,
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Link<T> {}

/// A location in a [`LinkedSequence`](crate::LinkedSequence).
pub struct Position<T> {
    link: Link<T>,
}

impl<T> Position<T> {
    pub(crate) const fn anchor() -> Self {
        Self { link: Link::Anchor }
    }

    pub(crate) const fn node(id: NodeId<T>) -> Self {
        Self {
            link: Link::Node(id),
        }
    }

    pub(crate) const fn end() -> Self {
        Self { link: Link::End }
    }

    /// Position for whatever a link leads to: a node, or past-the-end.
    pub(crate) fn following(next: Option<NodeId<T>>) -> Self {
        match next {
            Some(id) => Self::node(id),
            None => Self::end(),
        }
    }

    pub(crate) fn link(self) -> Link<T> {
        self.link
    }

    /// True for the head anchor returned by `before_begin`.
    #[must_use]
    pub fn is_before_begin(self) -> bool {
        matches!(self.link, Link::Anchor)
    }

    /// True for the past-the-end position.
    #[must_use]
    pub fn is_end(self) -> bool {
        matches!(self.link, Link::End)
    }

    /// True if the position names an element (which may since have been removed).
    #[must_use]
    pub fn is_element(self) -> bool {
        matches!(self.link, Link::Node(_))
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.link, other.link) {
            (Link::Anchor, Link::Anchor) | (Link::End, Link::End) => true,
            (Link::Node(a), Link::Node(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

impl<T> Hash for Position<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.link {
            Link::Anchor => state.write_u8(0),
            Link::Node(id) => {
                state.write_u8(1);
                id.hash(state);
            }
            Link::End => state.write_u8(2),
        }
    }
}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.link {
            Link::Anchor => f.write_str("Position::BeforeBegin"),
            Link::Node(id) => write!(f, "Position::Element({}@{})", id.index(), id.generation()),
            Link::End => f.write_str("Position::End"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::node::Node;

    #[test]
    fn test_identity_equality() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node { value: 1, next: None });
        let b = arena.alloc(Node { value: 1, next: None });

        assert_eq!(Position::node(a), Position::node(a));
        assert_ne!(Position::node(a), Position::node(b));
        assert_eq!(Position::<i32>::end(), Position::end());
        assert_eq!(Position::<i32>::anchor(), Position::anchor());
        assert_ne!(Position::<i32>::anchor(), Position::end());
        assert_ne!(Position::node(a), Position::end());
    }

    #[test]
    fn test_reused_slot_is_a_different_position() {
        let mut arena = Arena::new();
        let old = arena.alloc(Node { value: 'x', next: None });
        arena.remove(old);
        let new = arena.alloc(Node { value: 'x', next: None });

        assert_eq!(old.index(), new.index());
        assert_ne!(Position::node(old), Position::node(new));
    }

    #[test]
    fn test_following_and_predicates() {
        assert!(Position::<u8>::following(None).is_end());
        assert!(Position::<u8>::anchor().is_before_begin());

        let mut arena = Arena::new();
        let id = arena.alloc(Node { value: 0u8, next: None });
        let pos = Position::following(Some(id));
        assert!(pos.is_element());
        assert!(!pos.is_end());
        assert_eq!(format!("{pos:?}"), "Position::Element(0@0)");
    }
}
