//! This crate provides two linked lists behind one contract, plus a few
//! structures built beside them.
//!
//! - [`SinglyLinkedList`]: each node owns its successor. Pushing to the
//!   front is *O*(1), pushing to the back walks the list.
//! - [`DoublyLinkedList`]: a cyclic list closed by a ghost node. Both ends,
//!   and any node a cursor sits on, can be edited in *O*(1) time.
//! - [`LinkedSequence`]: what both lists offer (`insert_first`,
//!   `insert_last`, `delete`, `search`, `forward`). [`BackwardTraversal`]
//!   adds `backward`, which only the doubly-linked list has.
//! - [`Stack`], [`SparseArray`] and [`Graph`]: a LIFO stack on the singly
//!   linked list, an index map that shifts on delete, and an undirected
//!   adjacency-list graph.
//!
//! Here is a quick example showing how the shared contract works.
//!
//! ```
//! use linked_seq::{BackwardTraversal, DoublyLinkedList, LinkedSequence};
//!
//! let mut list = DoublyLinkedList::new();
//! list.insert_first(3);
//! list.insert_first(2);
//! list.insert_first(1);
//! list.insert_last(4);
//! list.insert_last(5);
//!
//! assert!(list.forward().eq([1, 2, 3, 4, 5].iter()));
//! assert!(list.backward().eq([5, 4, 3, 2, 1].iter()));
//!
//! assert_eq!(LinkedSequence::delete(&mut list, &3), Some(3));
//! assert_eq!(LinkedSequence::delete(&mut list, &3), None);
//! assert!(list.search(&4));
//! assert!(!list.search(&6));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the doubly-linked list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊ no value  ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║   (len)   ║
//! ╚═══════════╝
//!  DoublyLinkedList
//! ```
//!
//! The ghost node's `next` is the head and its `prev` is the tail. The
//! ghost's payload slot is never initialized. In an empty list the ghost
//! points to itself in both directions.
//!
//! The singly-linked list is a plain chain:
//! ```text
//! ╔═══════════╗     ┌───────────┐     ┌───────────┐
//! ║   head    ║ ──→ │   next    │ ──→ │   next    │ ──→ None
//! ╟───────────╢     ├───────────┤     ├───────────┤
//! ║   (len)   ║     │ payload T │     │ payload T │
//! ╚═══════════╝     └───────────┘     └───────────┘
//! SinglyLinkedList      Node 0            Node 1
//! ```
//!
//! Both lists track `len` when the `length` feature is on (the default).
//! Without it, `len()` counts the nodes.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1,
//! ..., *n* - 1, and the ghost node of the doubly-linked list is always
//! indexed by *n*.
//!
//! # Cursors
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] walk a
//! doubly-linked list in both directions and edit it in place.
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//! - [`split`]: split the list into a new one, from the cursor position to the end.
//!
//! ## Examples
//!
//! ```
//! use linked_seq::DoublyLinkedList;
//! use std::iter::FromIterator;
//!
//! let mut list = DoublyLinkedList::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! [`Cursor`]: crate::doubly::cursor::Cursor
//! [`CursorMut`]: crate::doubly::cursor::CursorMut
//! [`insert`]: crate::doubly::cursor::CursorMut::insert
//! [`remove`]: crate::doubly::cursor::CursorMut::remove
//! [`backspace`]: crate::doubly::cursor::CursorMut::backspace
//! [`split`]: crate::doubly::cursor::CursorMut::split

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use graph::Graph;
#[doc(inline)]
pub use sequence::{BackwardTraversal, LinkedSequence};
#[doc(inline)]
pub use singly::SinglyLinkedList;
#[doc(inline)]
pub use sparse::SparseArray;
#[doc(inline)]
pub use stack::Stack;

pub mod doubly;
pub mod error;
pub mod graph;
pub mod sequence;
pub mod singly;
pub mod sparse;
pub mod stack;
