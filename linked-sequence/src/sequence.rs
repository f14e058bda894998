//! # Linked Sequence
//!
//! The container itself: a head anchor, an arena of nodes, and the
//! insert/erase-after primitives everything else is built on.
//!
//! ## Positional editing
//!
//! All edits happen *after* a position. [`LinkedSequence::before_begin`] is the
//! anchor one step before the first element, so editing at the front is the
//! same operation as editing anywhere else.
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::from(['b', 'd']);
//!
//! let a = seq.insert_after(seq.before_begin(), 'a');
//! let b = seq.next_position(a);
//! seq.insert_after(b, 'c');
//! assert_eq!(seq, ['a', 'b', 'c', 'd']);
//!
//! let after = seq.erase_after(a);
//! assert_eq!(seq.get(after), Some(&'c'));
//! assert_eq!(seq, ['a', 'c', 'd']);
//! ```
//!
//! ## Value semantics
//!
//! `Clone` produces an independent chain. `clone_from` builds the complete
//! replacement before touching the target, then swaps it in, so a panicking
//! element clone leaves the target exactly as it was.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::error::{Result, SequenceError};
use crate::node::{Anchor, Node, NodeArena, NodeId};
use crate::position::{Link, Position};

/// A singly linked sequence of `T`.
///
/// Elements are kept in an arena owned by the sequence and linked through
/// generation-checked ids, which makes insertion and removal after a known
/// [`Position`] O(1) without any raw pointers.
pub struct LinkedSequence<T> {
    /// Head anchor; its link is the first element.
    pub(crate) anchor: Anchor<T>,
    /// Every node reachable from the anchor, and nothing else.
    pub(crate) nodes: NodeArena<T>,
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            anchor: Anchor::new(),
            nodes: NodeArena::new(),
        }
    }

    /// Creates an empty sequence with node storage for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            anchor: Anchor::new(),
            nodes: NodeArena::with_capacity(capacity),
        }
    }

    /// Number of elements the sequence can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves node storage for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Fallible form of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// [`SequenceError::Alloc`] if storage cannot grow; the sequence is unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        Ok(self.nodes.try_reserve(additional)?)
    }

    /// Shrinks node storage as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -------------------------------------------------------------------------
    // Positions
    // -------------------------------------------------------------------------

    /// The anchor one step before the first element.
    ///
    /// Always valid; use it to insert or erase at the front.
    #[must_use]
    pub fn before_begin(&self) -> Position<T> {
        Position::anchor()
    }

    /// The first element, or [`end`](Self::end) if the sequence is empty.
    #[must_use]
    pub fn begin(&self) -> Position<T> {
        Position::following(self.anchor.next)
    }

    /// The past-the-end position.
    #[must_use]
    pub fn end(&self) -> Position<T> {
        Position::end()
    }

    /// The position following `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past-the-end or no longer in the sequence.
    #[must_use]
    pub fn next_position(&self, pos: Position<T>) -> Position<T> {
        match self.try_next_position(pos) {
            Ok(next) => next,
            Err(err) => panic!("next_position: {err}"),
        }
    }

    /// The position following `pos`, or why there is none.
    ///
    /// # Errors
    ///
    /// [`SequenceError::PastTheEnd`] or [`SequenceError::StalePosition`].
    pub fn try_next_position(&self, pos: Position<T>) -> Result<Position<T>> {
        self.successor(pos).map(Position::following)
    }

    /// Returns the element at `pos`.
    ///
    /// `None` for the anchor, past-the-end, and removed elements.
    #[must_use]
    pub fn get(&self, pos: Position<T>) -> Option<&T> {
        match pos.link() {
            Link::Node(id) => self.nodes.try_get(id).map(|node| &node.value),
            Link::Anchor | Link::End => None,
        }
    }

    /// Returns the element at `pos` for modification.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position<T>) -> Option<&mut T> {
        match pos.link() {
            Link::Node(id) => self.nodes.try_get_mut(id).map(|node| &mut node.value),
            Link::Anchor | Link::End => None,
        }
    }

    /// Returns the first element.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(self.begin())
    }

    /// Returns the first element for modification.
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.begin())
    }

    /// Position of the last element, or the anchor when empty. Linear.
    pub(crate) fn back_position(&self) -> Position<T> {
        let mut pos = Position::anchor();
        let mut link = self.anchor.next;
        while let Some(id) = link {
            pos = Position::node(id);
            link = self.nodes.get(id).next;
        }
        pos
    }

    // -------------------------------------------------------------------------
    // Chain primitives
    // -------------------------------------------------------------------------

    /// The link stored at `pos`: the anchor's head or a node's `next`.
    fn successor(&self, pos: Position<T>) -> Result<Option<NodeId<T>>> {
        match pos.link() {
            Link::Anchor => Ok(self.anchor.next),
            Link::Node(id) => self
                .nodes
                .try_get(id)
                .map(|node| node.next)
                .ok_or(SequenceError::StalePosition),
            Link::End => Err(SequenceError::PastTheEnd),
        }
    }

    fn successor_mut(&mut self, pos: Position<T>) -> Result<&mut Option<NodeId<T>>> {
        match pos.link() {
            Link::Anchor => Ok(&mut self.anchor.next),
            Link::Node(id) => self
                .nodes
                .try_get_mut(id)
                .map(|node| &mut node.next)
                .ok_or(SequenceError::StalePosition),
            Link::End => Err(SequenceError::PastTheEnd),
        }
    }

    /// Single point of node creation. `pos` is validated before anything is allocated.
    fn link_after(&mut self, pos: Position<T>, value: T) -> Result<Position<T>> {
        let next = self.successor(pos)?;
        let id = self.nodes.alloc(Node { value, next });
        *self.successor_mut(pos)? = Some(id);
        Ok(Position::node(id))
    }

    fn unlink_after(&mut self, pos: Position<T>) -> Result<Node<T>> {
        let target = self.successor(pos)?.ok_or(SequenceError::NoSuccessor)?;
        let node = self
            .nodes
            .remove(target)
            .ok_or(SequenceError::StalePosition)?;
        *self.successor_mut(pos)? = node.next;
        Ok(node)
    }

    /// Inserts `value` right after `pos` and returns the new element's position.
    ///
    /// The element previously after `pos` now follows the new one.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past-the-end or no longer in the sequence.
    pub fn insert_after(&mut self, pos: Position<T>, value: T) -> Position<T> {
        match self.link_after(pos, value) {
            Ok(inserted) => inserted,
            Err(err) => panic!("insert_after: {err}"),
        }
    }

    /// Fallible form of [`insert_after`](Self::insert_after).
    ///
    /// On error the sequence is unchanged and `value` is dropped.
    ///
    /// # Errors
    ///
    /// [`SequenceError::PastTheEnd`], [`SequenceError::StalePosition`], or
    /// [`SequenceError::Alloc`] if node storage cannot grow.
    pub fn try_insert_after(&mut self, pos: Position<T>, value: T) -> Result<Position<T>> {
        self.successor(pos)?;
        self.nodes.try_reserve(1)?;
        self.link_after(pos, value)
    }

    /// Removes the element after `pos` and returns the position that now follows `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` has no following element, is past-the-end, or is stale.
    pub fn erase_after(&mut self, pos: Position<T>) -> Position<T> {
        match self.unlink_after(pos) {
            Ok(node) => Position::following(node.next),
            Err(err) => panic!("erase_after: {err}"),
        }
    }

    /// Removes the element after `pos` and returns it.
    ///
    /// # Errors
    ///
    /// [`SequenceError::NoSuccessor`] if `pos` is the last position,
    /// [`SequenceError::PastTheEnd`] or [`SequenceError::StalePosition`] for
    /// invalid positions. The sequence is unchanged on error.
    pub fn remove_after(&mut self, pos: Position<T>) -> Result<T> {
        self.unlink_after(pos).map(|node| node.value)
    }

    /// Prepends `value`.
    pub fn push_front(&mut self, value: T) {
        self.insert_after(Position::anchor(), value);
    }

    /// Prepends `value`, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Alloc`]; the sequence is unchanged.
    pub fn try_push_front(&mut self, value: T) -> Result<()> {
        self.try_insert_after(Position::anchor(), value).map(drop)
    }

    /// Removes and returns the first element; `None` (and no change) when empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(Position::anchor())
            .ok()
            .map(|node| node.value)
    }

    /// Drops every element, front to back, and releases the node slots.
    ///
    /// The sequence stays usable. Positions taken before the clear are stale
    /// afterwards, even once new elements land in the same slots. Capacity is
    /// kept; see [`shrink_to_fit`](Self::shrink_to_fit).
    pub fn clear(&mut self) {
        if !self.is_empty() {
            trace!(len = self.len(), "clearing linked sequence");
            while self.pop_front().is_some() {}
        }
        self.nodes.clear();
    }

    /// Exchanges the contents of two sequences in O(1). No node is copied or moved.
    ///
    /// Positions keep naming the same elements, which now belong to the other sequence.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Returns true if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }
}

impl<T: Clone> LinkedSequence<T> {
    /// Deep copy that reports allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Alloc`] if storage for the copy cannot be reserved.
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::new();
        copy.try_reserve(self.len())?;
        copy.extend(self.iter().cloned());
        Ok(copy)
    }

    /// Copy assignment with the strong guarantee.
    ///
    /// The replacement is built in full first and swapped in afterwards; on
    /// error `self` is untouched.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Alloc`] if storage for the copy cannot be reserved.
    pub fn assign_from(&mut self, source: &Self) -> Result<()> {
        match source.try_clone() {
            Ok(mut replacement) => {
                self.swap(&mut replacement);
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, len = source.len(), "copy assignment failed, target unchanged");
                Err(err)
            }
        }
    }
}

/// Exchanges the contents of two sequences. Same as [`LinkedSequence::swap`].
pub fn swap<T>(lhs: &mut LinkedSequence<T>, rhs: &mut LinkedSequence<T>) {
    lhs.swap(rhs);
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        trace!(
            old_len = self.len(),
            new_len = replacement.len(),
            "swapping in copied sequence"
        );
        self.swap(&mut replacement);
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut seq = Self::with_capacity(iter.size_hint().0);
        seq.extend(iter);
        seq
    }
}

/// Appends at the back, keeping iteration order.
impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.back_position();
        for value in iter {
            tail = self.insert_after(tail, value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedSequence<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for LinkedSequence<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T> From<Vec<T>> for LinkedSequence<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for LinkedSequence<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for LinkedSequence<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for LinkedSequence<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        *self == other[..]
    }
}

/// Lexicographic; a strict prefix orders first.
impl<T: PartialOrd> PartialOrd for LinkedSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for LinkedSequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash(state);
        }
    }
}
