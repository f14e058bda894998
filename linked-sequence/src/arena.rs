//! # Slot Arena
//!
//! Generation-checked slot storage with index-based references. The sequence
//! keeps every node here instead of behind raw pointers, so positions are plain
//! `Copy` handles and no node can be freed twice.
//!
//! ## Slot reuse
//!
//! Removing an element turns its slot vacant and pushes it on an intrusive
//! free-list; the next allocation takes it back. Each slot carries a
//! generation that is bumped on removal, so an [`ArenaId`] minted before the
//! removal no longer resolves. A slot whose generation has reached
//! `u32::MAX` is retired instead of reused, so generations never wrap.
//!
//! ## Epochs
//!
//! [`Arena::clear`] drops every slot and starts a new epoch. Ids carry the
//! epoch they were minted in, so an id from before the clear is rejected even
//! when its slot index is handed out again.
//!
//! ## Example
//!
//! ```
//! use linked_sequence::arena::Arena;
//!
//! let mut arena = Arena::new();
//! let first = arena.alloc("first");
//! assert_eq!(arena.remove(first), Some("first"));
//!
//! // The slot is reused, the old id is rejected.
//! let second = arena.alloc("second");
//! assert_eq!(first.index(), second.index());
//! assert_eq!(arena.try_get(first), None);
//! assert_eq!(arena.get(second), &"second");
//! ```

use std::collections::TryReserveError;
use std::fmt;
use std::marker::PhantomData;

/// A type-safe, generation-checked index into an [`Arena`].
///
/// `fn() -> T` keeps the handle `Send + Sync` regardless of `T`; it is only
/// plain integers.
pub struct ArenaId<T> {
    index: usize,
    generation: u32,
    epoch: u64,
    _marker: PhantomData<fn() -> T>,
}

// Manual implementations to avoid requiring T: Clone/Copy/etc.
impl<T> Clone for ArenaId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaId<T> {}

impl<T> PartialEq for ArenaId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.generation == other.generation
            && self.epoch == other.epoch
    }
}

impl<T> Eq for ArenaId<T> {}

impl<T> std::hash::Hash for ArenaId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
        self.epoch.hash(state);
    }
}

impl<T> fmt::Debug for ArenaId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArenaId({}@{})", self.index, self.generation)
    }
}

impl<T> ArenaId<T> {
    fn new(index: usize, generation: u32, epoch: u64) -> Self {
        Self {
            index,
            generation,
            epoch,
            _marker: PhantomData,
        }
    }

    /// Returns the raw slot index of this id.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the generation the slot had when this id was minted.
    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }

    /// Returns the arena epoch this id was minted in.
    #[must_use]
    pub fn epoch(self) -> u64 {
        self.epoch
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<usize> },
}

/// Slot storage for values of type `T`, addressed by [`ArenaId<T>`].
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
    /// Vacant slots whose generation is exhausted; never on the free list.
    retired: usize,
    epoch: u64,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates a new empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
            retired: 0,
            epoch: 0,
        }
    }

    /// Creates a new arena with room for `capacity` values before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
            retired: 0,
            epoch: 0,
        }
    }

    /// Number of values the arena can hold without growing, vacant slots included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of slots created since the last clear (occupied, vacant or retired).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Vacant slots that `alloc` can still hand out.
    fn vacant(&self) -> usize {
        self.slots.len() - self.len - self.retired
    }

    /// Returns the current epoch, bumped by every [`clear`](Self::clear).
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Makes room for at least `additional` more values, counting vacant slots.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional.saturating_sub(self.vacant()));
    }

    /// Fallible form of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns the allocator's error if the slot vector cannot grow.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.slots.try_reserve(additional.saturating_sub(self.vacant()))
    }

    /// Stores `value` and returns its id, reusing a vacant slot if there is one.
    pub fn alloc(&mut self, value: T) -> ArenaId<T> {
        self.len += 1;
        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index];
            let Slot::Vacant {
                generation,
                next_free,
            } = *slot
            else {
                unreachable!("free list points at an occupied slot");
            };
            *slot = Slot::Occupied { generation, value };
            self.free_head = next_free;
            ArenaId::new(index, generation, self.epoch)
        } else {
            let index = self.slots.len();
            self.slots.push(Slot::Occupied {
                generation: 0,
                value,
            });
            ArenaId::new(index, 0, self.epoch)
        }
    }

    /// Removes the value behind `id`, returning it.
    ///
    /// Returns `None` if `id` is stale or was never issued by this arena.
    /// A slot whose generation cannot be bumped any further is retired rather
    /// than put back on the free list.
    pub fn remove(&mut self, id: ArenaId<T>) -> Option<T> {
        if id.epoch != self.epoch {
            return None;
        }
        let slot = self.slots.get_mut(id.index)?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == id.generation => {}
            _ => return None,
        }
        let vacant = match id.generation.checked_add(1) {
            Some(generation) => Slot::Vacant {
                generation,
                next_free: self.free_head,
            },
            None => Slot::Vacant {
                generation: id.generation,
                next_free: None,
            },
        };
        let Slot::Occupied { value, .. } = std::mem::replace(slot, vacant) else {
            unreachable!("slot was checked to be occupied");
        };
        if id.generation == u32::MAX {
            self.retired += 1;
        } else {
            self.free_head = Some(id.index);
        }
        self.len -= 1;
        Some(value)
    }

    /// Drops every value, releases all slots and starts a new epoch.
    ///
    /// Ids issued before the clear never resolve again. Capacity is kept; see
    /// [`shrink_to_fit`](Self::shrink_to_fit).
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
        self.retired = 0;
        self.epoch += 1;
    }

    /// Shrinks the slot vector's capacity as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
    }

    /// Returns a reference to the value behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if the id is stale or out of bounds.
    #[must_use]
    pub fn get(&self, id: ArenaId<T>) -> &T {
        match self.try_get(id) {
            Some(value) => value,
            None => panic!("stale or foreign arena id {id:?}"),
        }
    }

    /// Returns a mutable reference to the value behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if the id is stale or out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, id: ArenaId<T>) -> &mut T {
        match self.try_get_mut(id) {
            Some(value) => value,
            None => panic!("stale or foreign arena id {id:?}"),
        }
    }

    /// Tries to get a reference to the value, returning `None` if `id` is stale.
    #[must_use]
    pub fn try_get(&self, id: ArenaId<T>) -> Option<&T> {
        if id.epoch != self.epoch {
            return None;
        }
        match self.slots.get(id.index)? {
            Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    /// Tries to get a mutable reference to the value, returning `None` if `id` is stale.
    #[must_use]
    pub fn try_get_mut(&mut self, id: ArenaId<T>) -> Option<&mut T> {
        if id.epoch != self.epoch {
            return None;
        }
        match self.slots.get_mut(id.index)? {
            Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    /// Returns true if `id` currently resolves.
    #[must_use]
    pub fn contains(&self, id: ArenaId<T>) -> bool {
        self.try_get(id).is_some()
    }

    /// Returns the number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no value is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mutable references to the values behind `ids`, in the order given.
    ///
    /// Returns `None` if any id is stale or an id appears twice. Runs in
    /// O(k log k) for k ids, independent of how many slots the arena holds.
    pub fn get_disjoint_mut(&mut self, ids: &[ArenaId<T>]) -> Option<Vec<&mut T>> {
        let epoch = self.epoch;
        let mut order: Vec<(usize, usize)> = ids
            .iter()
            .enumerate()
            .map(|(rank, id)| (id.index, rank))
            .collect();
        order.sort_unstable();

        let mut found: Vec<Option<&mut T>> = Vec::with_capacity(ids.len());
        found.resize_with(ids.len(), || None);
        let mut rest: &mut [Slot<T>] = &mut self.slots;
        let mut offset = 0;
        for (index, rank) in order {
            let id = ids[rank];
            if id.epoch != epoch {
                return None;
            }
            // A repeated index sorts adjacent and lands below the offset.
            let skip = index.checked_sub(offset)?;
            let tail = std::mem::take(&mut rest).get_mut(skip..)?;
            let (slot, after) = tail.split_first_mut()?;
            rest = after;
            offset = index + 1;
            match slot {
                Slot::Occupied { generation, value } if *generation == id.generation => {
                    found[rank] = Some(value);
                }
                _ => return None,
            }
        }
        found.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reused_slot_resolves_only_new_id() {
        let mut arena = Arena::new();
        let keep = arena.alloc(10);
        let gone = arena.alloc(20);
        arena.remove(gone);
        let reused = arena.alloc(30);

        assert_eq!(reused.index(), gone.index());
        assert_eq!(arena.get(keep), &10);
        assert_eq!(arena.get(reused), &30);
        assert_eq!(arena.try_get(gone), None);
    }

    #[test]
    fn test_get_mut_through_reused_slot() {
        let mut arena = Arena::new();
        let old = arena.alloc(String::from("old"));
        arena.remove(old);
        let new = arena.alloc(String::from("new"));

        arena.get_mut(new).push_str(" value");
        assert_eq!(arena.get(new), "new value");
        assert!(arena.try_get_mut(old).is_none());
    }

    #[test]
    fn test_remove_bumps_generation() {
        let mut arena = Arena::new();
        let old = arena.alloc('a');
        assert_eq!(arena.remove(old), Some('a'));
        assert_eq!(arena.remove(old), None);

        let new = arena.alloc('b');
        assert_eq!(new.index(), old.index());
        assert_eq!(new.generation(), old.generation() + 1);
        assert_ne!(old, new);
        assert!(!arena.contains(old));
        assert_eq!(arena.try_get_mut(old), None);
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..4).map(|n| arena.alloc(n)).collect();
        arena.remove(ids[1]);
        arena.remove(ids[3]);

        assert_eq!(arena.alloc(30).index(), 3);
        assert_eq!(arena.alloc(10).index(), 1);
        assert_eq!(arena.alloc(40).index(), 4);
        assert_eq!(arena.slot_count(), 5);
    }

    #[test]
    #[should_panic(expected = "stale or foreign arena id")]
    fn test_get_stale_panics() {
        let mut arena = Arena::new();
        let id = arena.alloc(1u8);
        arena.remove(id);
        let _ = arena.get(id);
    }

    #[test]
    fn test_len_counts_live_values_not_slots() {
        let mut arena: Arena<i64> = Arena::new();
        let first = arena.alloc(1);
        arena.alloc(2);
        arena.remove(first);
        assert_eq!((arena.len(), arena.slot_count()), (1, 2));

        // A stale remove changes nothing.
        assert_eq!(arena.remove(first), None);
        assert_eq!(arena.len(), 1);

        arena.alloc(3);
        assert_eq!((arena.len(), arena.slot_count()), (2, 2));
        assert!(!arena.is_empty());
    }

    #[test]
    fn test_reserve_counts_vacant_slots() {
        let mut arena = Arena::with_capacity(2);
        let a = arena.alloc(1);
        arena.alloc(2);
        arena.remove(a);

        let before = arena.capacity();
        arena.reserve(1);
        assert_eq!(arena.capacity(), before);
        assert!(arena.try_reserve(8).is_ok());
        assert!(arena.capacity() >= 9);
        assert!(arena.try_reserve(usize::MAX).is_err());
    }

    #[test]
    fn test_exhausted_generation_retires_slot() {
        let mut arena = Arena::new();
        let first = arena.alloc('a');
        arena.slots[first.index] = Slot::Occupied {
            generation: u32::MAX,
            value: 'a',
        };
        let last = ArenaId::new(first.index, u32::MAX, arena.epoch);

        assert_eq!(arena.remove(last), Some('a'));
        assert_eq!(arena.free_head, None);
        let next = arena.alloc('b');
        assert_ne!(next.index(), last.index());
        assert_eq!(arena.try_get(last), None);

        // Retired slots are not counted as room for reserve.
        let before = arena.capacity();
        arena.reserve(before - arena.slot_count() + 1);
        assert!(arena.capacity() > before);
    }

    #[test]
    fn test_clear_releases_slots_and_rejects_old_ids() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..100).map(|n| arena.alloc(n)).collect();
        arena.clear();
        assert_eq!(arena.slot_count(), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.epoch(), 1);

        let fresh = arena.alloc(7);
        assert_eq!(fresh.index(), ids[0].index());
        assert_eq!(fresh.generation(), ids[0].generation());
        assert_ne!(fresh, ids[0]);
        assert_eq!(arena.try_get(ids[0]), None);
        assert_eq!(arena.remove(ids[0]), None);
        assert_eq!(arena.get(fresh), &7);

        arena.shrink_to_fit();
        assert!(arena.capacity() < 100);
    }

    #[test]
    fn test_get_disjoint_mut_follows_given_order() {
        let mut arena = Arena::new();
        let ids: Vec<_> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|s| arena.alloc(s.to_string()))
            .collect();
        arena.remove(ids[1]);

        let wanted = [ids[3], ids[0], ids[2]];
        let values = arena.get_disjoint_mut(&wanted).unwrap_or_default();
        assert_eq!(values.len(), 3);
        for (value, suffix) in values.into_iter().zip(["1", "2", "3"]) {
            value.push_str(suffix);
        }
        assert_eq!(arena.get(ids[0]), "a2");
        assert_eq!(arena.get(ids[2]), "c3");
        assert_eq!(arena.get(ids[3]), "d1");
    }

    #[test]
    fn test_get_disjoint_mut_rejects_stale_and_repeated() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        assert!(arena.get_disjoint_mut(&[a, a]).is_none());
        assert!(arena.get_disjoint_mut(&[]).is_some_and(|v| v.is_empty()));

        arena.remove(b);
        assert!(arena.get_disjoint_mut(&[a, b]).is_none());
        arena.clear();
        assert!(arena.get_disjoint_mut(&[a]).is_none());
    }
}
