//! # Iteration
//!
//! Front-to-back iterators over a [`LinkedSequence`]: shared ([`Iter`]),
//! exclusive ([`IterMut`]) and owning ([`IntoIter`]). All three know their
//! exact length.
//!
//! ## Example
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::from([1, 2, 3]);
//! for value in seq.iter_mut() {
//!     *value *= 10;
//! }
//!
//! let total: i32 = seq.iter().sum();
//! assert_eq!(total, 60);
//!
//! let owned: Vec<i32> = seq.into_iter().collect();
//! assert_eq!(owned, vec![10, 20, 30]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::node::{Node, NodeArena, NodeId};
use crate::sequence::LinkedSequence;

impl<T> LinkedSequence<T> {
    /// Iterates over shared references, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.anchor.next,
            remaining: self.len(),
        }
    }

    /// Iterates over mutable references, front to back.
    ///
    /// Collects the chain's ids and borrows their nodes up front, so creating
    /// the iterator costs O(n log n) in the current length, however many
    /// slots earlier edits left behind.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let mut ids = Vec::with_capacity(self.len());
        let mut link = self.anchor.next;
        while let Some(id) = link {
            ids.push(id);
            link = self.nodes.get(id).next;
        }
        let nodes = match self.nodes.get_disjoint_mut(&ids) {
            Some(nodes) => nodes,
            None => unreachable!("chain holds a stale or repeated node id"),
        };
        IterMut {
            nodes: nodes.into_iter(),
        }
    }
}

/// Shared iterator returned by [`LinkedSequence::iter`].
pub struct Iter<'a, T> {
    nodes: &'a NodeArena<T>,
    next: Option<NodeId<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.nodes.get(id);
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Exclusive iterator returned by [`LinkedSequence::iter_mut`].
pub struct IterMut<'a, T> {
    /// In chain order.
    nodes: std::vec::IntoIter<&'a mut Node<T>>,
}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.nodes.len())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator; pops elements from the front.
pub struct IntoIter<T> {
    seq: LinkedSequence<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.seq).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_follows_links_not_slots() {
        let mut seq = LinkedSequence::from([2, 3]);
        seq.push_front(1);
        // slot order is 2, 3, 1
        assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_iter_exact_size_and_fused() {
        let seq = LinkedSequence::from(['a', 'b', 'c']);
        let mut iter = seq.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        iter.next();
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_iter_mut_after_slot_reuse() {
        let mut seq = LinkedSequence::from([1, 2, 3, 4]);
        seq.erase_after(seq.begin());
        seq.push_front(0);

        for value in &mut seq {
            *value += 100;
        }
        assert_eq!(seq, [100, 101, 103, 104]);
        assert_eq!(seq.iter_mut().len(), 4);
    }

    #[test]
    fn test_iter_mut_is_sized_by_length_not_slots() {
        let mut seq: LinkedSequence<u32> = (0..1000).collect();
        while seq.len() > 1 {
            seq.pop_front();
        }
        assert_eq!(seq.nodes.slot_count(), 1000);

        let iter = seq.iter_mut();
        assert_eq!(iter.nodes.as_slice().len(), 1);
        assert_eq!(iter.map(|v| *v).collect::<Vec<_>>(), vec![999]);

        seq.clear();
        seq.push_front(5);
        assert_eq!(seq.nodes.slot_count(), 1);
        assert_eq!(seq.iter_mut().nodes.as_slice().len(), 1);
    }

    #[test]
    fn test_iter_mut_on_empty() {
        let mut seq: LinkedSequence<String> = LinkedSequence::new();
        assert_eq!(seq.iter_mut().next(), None);
    }

    #[test]
    fn test_into_iter_consumes_front_to_back() {
        let seq = LinkedSequence::from(vec!["x".to_string(), "y".to_string()]);
        let mut iter = seq.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next().as_deref(), Some("x"));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next().as_deref(), Some("y"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let seq = LinkedSequence::from([1, 2, 3]);
        let mut seen = Vec::new();
        for value in &seq {
            seen.push(*value);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(format!("{:?}", seq.iter()), "[1, 2, 3]");
    }
}
