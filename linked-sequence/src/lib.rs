//! # Linked Sequence
//!
//! A generic singly linked sequence with forward traversal, insertion and
//! removal after a given position, front insertion and removal, and value
//! semantics (deep `Clone`, comparison, hashing).
//!
//! ## Modules
//!
//! - [`arena`]: Generation-checked slot storage the nodes live in
//! - [`position`]: Copyable, non-owning positions into a sequence
//! - [`cursor`]: Positions bound to a shared or exclusive borrow of their sequence
//! - [`iter`]: Front-to-back iterators
//! - [`error`]: Errors reported by the `try_*` operations
//!
//! ## Design Principles
//!
//! 1. **No raw pointers**: nodes are arena slots linked by ids, so insert and
//!    erase after a position stay O(1) without unsafe code
//! 2. **Anchor-relative editing**: a value-less head anchor sits before the
//!    first element, so editing the front is not a special case
//! 3. **Build, then swap**: copy assignment never leaves a half-written target
//! 4. **Panics for misuse, `Result` on request**: every position-taking
//!    operation has a `try_*` form that reports instead of panicking
//!
//! ## Example
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::new();
//! seq.push_front(3);
//! seq.push_front(1);
//!
//! let one = seq.begin();
//! seq.insert_after(one, 2);
//! assert_eq!(seq, [1, 2, 3]);
//!
//! let copy = seq.clone();
//! seq.pop_front();
//! assert_eq!(copy, [1, 2, 3]);
//! assert!(seq > copy);
//! ```

pub mod arena;
pub mod cursor;
pub mod error;
pub mod iter;
mod node;
pub mod position;
mod sequence;
#[cfg(feature = "serde")]
mod serde_impl;

// Re-export main types for convenience
pub use cursor::{Cursor, CursorMut, CursorRef};
pub use error::{Result, SequenceError};
pub use iter::{IntoIter, Iter, IterMut};
pub use position::Position;
pub use sequence::{LinkedSequence, swap};
