//! # Cursors
//!
//! A [`Cursor`] pairs a [`Position`] with a borrow of its sequence. The borrow
//! kind is the only thing that varies:
//!
//! - [`CursorRef`] holds `&LinkedSequence<T>` and can only read.
//! - [`CursorMut`] holds `&mut LinkedSequence<T>` and can also write, insert
//!   and erase after the current position.
//!
//! Movement, comparison and reading are written once for both. A `CursorMut`
//! can be widened into a `CursorRef`; the reverse is impossible.
//!
//! ## Example
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::from([1, 3]);
//!
//! let mut cursor = seq.cursor_mut();
//! cursor.move_next();
//! cursor.insert_after(2);
//! cursor.move_next();
//! *cursor.current_mut().unwrap() *= 10;
//!
//! assert_eq!(seq, [1, 20, 3]);
//! ```

use std::fmt;
use std::ops::Deref;

use crate::error::Result;
use crate::position::Position;
use crate::sequence::LinkedSequence;

/// A position bound to the sequence it belongs to.
///
/// `L` is `&LinkedSequence<T>` or `&mut LinkedSequence<T>`.
pub struct Cursor<T, L> {
    seq: L,
    position: Position<T>,
}

/// Read-only cursor.
pub type CursorRef<'a, T> = Cursor<T, &'a LinkedSequence<T>>;

/// Read-write cursor.
pub type CursorMut<'a, T> = Cursor<T, &'a mut LinkedSequence<T>>;

impl<T> LinkedSequence<T> {
    /// Read-only cursor on the before-begin anchor.
    pub fn cursor(&self) -> CursorRef<'_, T> {
        self.cursor_at(Position::anchor())
    }

    /// Read-only cursor on `position`.
    pub fn cursor_at(&self, position: Position<T>) -> CursorRef<'_, T> {
        Cursor {
            seq: self,
            position,
        }
    }

    /// Read-write cursor on the before-begin anchor.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        self.cursor_mut_at(Position::anchor())
    }

    /// Read-write cursor on `position`.
    pub fn cursor_mut_at(&mut self, position: Position<T>) -> CursorMut<'_, T> {
        Cursor {
            seq: self,
            position,
        }
    }
}

impl<T, L> Cursor<T, L>
where
    L: Deref<Target = LinkedSequence<T>>,
{
    /// The position the cursor is on.
    #[must_use]
    pub fn position(&self) -> Position<T> {
        self.position
    }

    /// The sequence the cursor walks.
    #[must_use]
    pub fn sequence(&self) -> &LinkedSequence<T> {
        &self.seq
    }

    /// The element under the cursor; `None` on the anchor or past-the-end.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.seq.get(self.position)
    }

    /// The element after the cursor, without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<&T> {
        let next = self.seq.try_next_position(self.position).ok()?;
        self.seq.get(next)
    }

    /// True when the cursor is past-the-end.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Advances one step.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past-the-end or its element was removed.
    pub fn move_next(&mut self) {
        self.position = self.seq.next_position(self.position);
    }

    /// Advances one step, or reports why it cannot.
    ///
    /// # Errors
    ///
    /// Same conditions as [`LinkedSequence::try_next_position`]; the cursor
    /// does not move on error.
    pub fn try_move_next(&mut self) -> Result<()> {
        self.position = self.seq.try_next_position(self.position)?;
        Ok(())
    }

    /// Moves to `position`, which must belong to the same sequence.
    pub fn seek(&mut self, position: Position<T>) {
        self.position = position;
    }
}

impl<'a, T> CursorMut<'a, T> {
    /// The element under the cursor, writable.
    #[must_use]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.seq.get_mut(self.position)
    }

    /// Inserts after the cursor without moving it; returns the new element's position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past-the-end or its element was removed.
    pub fn insert_after(&mut self, value: T) -> Position<T> {
        self.seq.insert_after(self.position, value)
    }

    /// Erases the element after the cursor without moving it; returns the new successor.
    ///
    /// # Panics
    ///
    /// Panics if there is no element after the cursor.
    pub fn erase_after(&mut self) -> Position<T> {
        self.seq.erase_after(self.position)
    }

    /// Removes and returns the element after the cursor.
    ///
    /// # Errors
    ///
    /// Same conditions as [`LinkedSequence::remove_after`].
    pub fn remove_after(&mut self) -> Result<T> {
        self.seq.remove_after(self.position)
    }

    /// Read-only view at the same position, borrowing this cursor.
    #[must_use]
    pub fn as_cursor(&self) -> CursorRef<'_, T> {
        self.seq.cursor_at(self.position)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for CursorRef<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor {
            seq: cursor.seq,
            position: cursor.position,
        }
    }
}

impl<T> Clone for CursorRef<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            seq: self.seq,
            position: self.position,
        }
    }
}

impl<T> Copy for CursorRef<'_, T> {}

/// Cursors are equal when they stand on the same position, whatever their borrow kind.
/// Only meaningful for cursors over the same sequence.
impl<T, L, M> PartialEq<Cursor<T, M>> for Cursor<T, L> {
    fn eq(&self, other: &Cursor<T, M>) -> bool {
        self.position == other.position
    }
}

impl<T, L> fmt::Debug for Cursor<T, L>
where
    T: fmt::Debug,
    L: Deref<Target = LinkedSequence<T>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("current", &self.current())
            .finish()
    }
}
