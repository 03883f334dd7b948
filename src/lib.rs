//! This crate provides a double-ended queue built from a doubly-linked chain of
//! owned, heap-allocated nodes.
//!
//! The [`Deque`] pushes, peeks and deletes at both ends in constant time, and
//! splices another deque onto its back in constant time by relinking nodes
//! instead of copying them.
//!
//! Here is a quick example showing how the deque works.
//!
//! ```
//! use linked_deque::{Deque, DequeError};
//!
//! let mut deque = Deque::from([1, 2, 3]);
//!
//! deque.push_front(0);
//! deque.push_back(4);
//! assert_eq!(deque.to_string(), "0 1 2 3 4");
//!
//! // Peeking never removes; deleting does.
//! assert_eq!(deque.peek_front(), Ok(&0));
//! assert_eq!(deque.peek_front(), Ok(&0));
//! deque.delete_front();
//! assert_eq!(deque.peek_front(), Ok(&1));
//!
//! deque.clear();
//! assert_eq!(deque.peek_back(), Err(DequeError::EmptyDeque));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the deque is like the following graph:
//! ```text
//!   Deque               Node 0            Node 1                  Node N-1
//! ╔════════╗       ╔═══════════╗      ╔═══════════╗           ╔═══════════╗
//! ║  head  ║ ────→ ║   next    ║ ───→ ║   next    ║ ───→ ┄┄ → ║   next    ║ ──→ ∅
//! ╟────────╢       ╟───────────╢      ╟───────────╢           ╟───────────╢
//! ║  tail  ║ ─┐ ∅← ║   prev    ║ ←─── ║   prev    ║ ←─── ┄┄ ← ║   prev    ║
//! ╟────────╢  │    ╟───────────╢      ╟───────────╢           ╟───────────╢
//! ║ (len)  ║  │    ║ element T ║      ║ element T ║           ║ element T ║
//! ╚════════╝  │    ╚═══════════╝      ╚═══════════╝           ╚═══════════╝
//!             │                                                     ↑
//!             └─────────────────────────────────────────────────────┘
//! ```
//! The `Deque` contains:
//! - a pointer `head` to the first node, or nothing if the deque is empty;
//! - a pointer `tail` to the last node, or nothing if the deque is empty;
//! - a length field `len` indicating the length of the deque. It can be disabled
//!   by disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! linked_deque = { default-features = false }
//! ```
//!
//! Each node of the deque `Deque<T>` is a single heap allocation, which contains:
//! - the `next` pointer to the next node (nothing for the last node);
//! - the `prev` pointer to the previous node (nothing for the first node);
//! - the element `T`.
//!
//! # Iteration
//!
//! Iterating over a deque is by the [`Iter`], [`IterMut`] and [`IntoIter`]
//! iterators. These are double-ended, fused iterators.
//!
//! ## Examples
//!
//! ```
//! use linked_deque::Deque;
//!
//! let mut deque = Deque::from([1, 2, 3]);
//! let mut iter = deque.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! deque.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(deque), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] is a position in the deque: either a node, or the end
//! sentinel one past the tail. It moves with [`advance`] and [`retreat`],
//! reads with [`get`], and compares by position, not by value. Moving or
//! reading at the end sentinel is an error rather than undefined behavior.
//!
//! ```
//! use linked_deque::{Deque, DequeError};
//!
//! let deque = Deque::from([1, 2, 3]);
//! let mut cursor = deque.cursor_front();
//! let mut seen = Vec::new();
//! while cursor != deque.cursor_end() {
//!     seen.push(*cursor.get()?);
//!     cursor.advance()?;
//! }
//! assert_eq!(seen, [1, 2, 3]);
//! assert_eq!(cursor.advance(), Err(DequeError::NullIterator));
//! # Ok::<(), DequeError>(())
//! ```
//!
//! # Concatenation
//!
//! - [`concat`] (or `deque + &other`) appends copies of another deque's
//!   elements, leaving it untouched; [`concat_self`] appends a copy of the
//!   deque to itself.
//! - [`splice`] (or `deque + other`) takes another deque by value and links
//!   its nodes in, in constant time.
//!
//! ```
//! use linked_deque::Deque;
//!
//! let mut deque = Deque::from(['a', 'b']);
//! let other = Deque::from(['c']);
//!
//! deque.concat(&other);
//! assert_eq!(deque.to_string(), "a b c");
//!
//! deque.concat_self();
//! assert_eq!(deque.to_string(), "a b c a b c");
//!
//! let deque = deque + other + 'd';
//! assert_eq!(deque.to_string(), "a b c a b c c d");
//! ```
//!
//! # Features
//!
//! - `length` (default): keep an *O*(1) length;
//! - `tracing`: emit `tracing` events for bulk operations and allocation
//!   failures.
//!
//! [`Deque`]: crate::Deque
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`IntoIter`]: crate::IntoIter
//! [`Cursor`]: crate::deque::cursor::Cursor
//! [`advance`]: crate::deque::cursor::Cursor::advance
//! [`retreat`]: crate::deque::cursor::Cursor::retreat
//! [`get`]: crate::deque::cursor::Cursor::get
//! [`concat`]: crate::Deque::concat
//! [`concat_self`]: crate::Deque::concat_self
//! [`splice`]: crate::Deque::splice

#[macro_use]
mod macros;

#[doc(inline)]
pub use deque::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use deque::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use deque::Deque;
pub use error::{DequeError, Result};

pub mod deque;
pub mod error;
