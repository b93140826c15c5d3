use crate::doubly::{DoublyLinkedList, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `DoublyLinkedList`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the ghost node of the list.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use linked_seq::DoublyLinkedList;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = DoublyLinkedList::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.move_next().is_err());
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a DoublyLinkedList<T>,
}

/// A cursor over a `DoublyLinkedList` with editing operations.
///
/// The references it yields borrow from the cursor itself, so an element can
/// not outlive a later `remove` through the same cursor.
///
/// ```compile_fail
/// use linked_seq::DoublyLinkedList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// let first = cursor.current();
/// cursor.remove();
/// println!("{:?}", first);
/// ```
pub struct CursorMut<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut DoublyLinkedList<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == self.list.ghost_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.ghost_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid since the list is a ring.
                unsafe { self.current.as_ref().next }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid since the list is a ring.
                unsafe { self.current.as_ref().prev }
            }

            /// Move forward by `steps` without checking the ghost boundary.
            ///
            /// It is unsafe because if the moving passes through the ghost node,
            /// the index will be invalid.
            #[cfg(feature = "length")]
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                self.index = self.index.saturating_add(steps);
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Move backward by `steps` without checking the ghost boundary.
            ///
            /// It is unsafe because if the moving passes through the ghost node,
            /// the index will be invalid.
            #[cfg(feature = "length")]
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                self.index = self.index.saturating_sub(steps);
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            #[cfg(feature = "length")]
            /// Return the index of the cursor
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the list is empty.
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_next_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                #[cfg(feature = "length")]
                if self.is_ghost_node() {
                    self.index = 0;
                } else {
                    self.index += 1;
                }
                self.current = self.next_node();
            }

            /// Move the cursor to the previous position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_prev_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                #[cfg(feature = "length")]
                if self.is_front_node() {
                    self.index = self.list.len();
                } else {
                    self.index -= 1;
                }
                self.current = self.prev_node();
            }

            /// Move the cursor to the next position, or return an error
            /// when it would pass through the ghost node.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if !self.is_empty() && !self.is_ghost_node() {
                    self.move_next_cyclic();
                    return Ok(());
                }
                Err("`move_next` across ghost boundary")
            }

            /// Move the cursor to the previous position, or return an error
            /// when it would pass through the ghost node.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_prev(&mut self) -> Result<(), &'static str> {
                if !self.is_empty() && !self.is_front_node() {
                    self.move_prev_cyclic();
                    return Ok(());
                }
                Err("`move_prev` across ghost boundary")
            }

            /// Move forward the cursor by given steps, or return the number of
            /// steps taken when the ghost node stops it.
            ///
            /// This operation should compute in *O*(*n*) time.
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }

            /// Move backward the cursor by given steps, or return the number of
            /// steps taken when the front node stops it.
            ///
            /// This operation should compute in *O*(*n*) time.
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_prev().map_err(|_| i))
            }

            /// Move the cursor to the given position `target`, or return an error
            /// when `target > len`.
            ///
            /// If an error occurs, the cursor will stay put.
            ///
            /// # Examples
            ///
            /// ```
            /// use linked_seq::DoublyLinkedList;
            /// use std::iter::FromIterator;
            ///
            /// let list = DoublyLinkedList::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// assert!(cursor.seek_to(5).is_err());
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                #[cfg(not(feature = "length"))]
                {
                    let current = self.current;
                    self.move_to_start();
                    if let Err(taken) = self.seek_forward(target) {
                        self.current = current;
                        return Err(target - taken);
                    }
                }
                #[cfg(feature = "length")]
                {
                    if target == self.index {
                        return Ok(());
                    }
                    let len = self.list.len();
                    match target {
                        target if target > len => return Err(target - len),
                        0 => self.move_to_start(),
                        target if target == len => self.move_to_end(),
                        // SAFETY: `0 < target < len`, so walking from either the
                        // current node or the nearer end never crosses the ghost.
                        _ => unsafe {
                            if target > self.index {
                                if target - self.index <= len - target {
                                    self.seek_forward_fast(target - self.index);
                                } else {
                                    self.move_to_end();
                                    self.seek_backward_fast(len - target);
                                }
                            } else if self.index - target <= target {
                                self.seek_backward_fast(self.index - target);
                            } else {
                                self.move_to_start();
                                self.seek_forward_fast(target);
                            }
                        },
                    }
                }
                Ok(())
            }

            /// Set the cursor to the head node (or the ghost node of an empty list).
            #[inline]
            pub fn move_to_start(&mut self) {
                #[cfg(feature = "length")]
                {
                    self.index = 0;
                }
                self.current = self.list.front_node();
            }

            /// Set the cursor to the ghost node.
            #[inline]
            pub fn move_to_end(&mut self) {
                #[cfg(feature = "length")]
                {
                    self.index = self.list.len();
                }
                self.current = self.list.ghost_node();
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut f = f.debug_struct(stringify!($CURSOR));
                f.field("list", &self.list).field("current", &self.current());
                #[cfg(feature = "length")]
                f.field("index", &self.index);
                f.finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(
        list: &'a DoublyLinkedList<T>,
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            list,
        }
    }

    /// Return a reference to the element under the cursor, or `None` at
    /// the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(0).current(), Some(&1));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: non-ghost nodes hold a valid element, and the list is
        // borrowed for `'a`.
        unsafe { Some(&(*self.current.as_ptr()).element) }
    }

    /// Return a reference to the element before the cursor, or `None` if
    /// the cursor is at the head node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(0).previous(), None);
    /// assert_eq!(list.cursor(3).previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the node before a non-front node is never the ghost node.
        unsafe { Some(&(*self.prev_node().as_ptr()).element) }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut DoublyLinkedList<T>,
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            list,
        }
    }

    /// Return a reference to the element under the cursor, or `None` at
    /// the ghost node.
    pub fn current(&self) -> Option<&T> {
        self.as_cursor().current()
    }

    /// Return a reference to the element before the cursor, or `None` if
    /// the cursor is at the head node.
    pub fn previous(&self) -> Option<&T> {
        self.as_cursor().previous()
    }

    /// Return a mutable reference to the element under the cursor, or
    /// `None` at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(0);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// assert!(list.cursor_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: non-ghost nodes hold a valid element; the borrow is tied
        // to `&mut self`.
        unsafe { Some(&mut (*self.current.as_ptr()).element) }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(
            self.list,
            self.current,
            #[cfg(feature = "length")]
            self.index,
        )
    }

    /// Temporarily view the list via an immutable reference.
    pub fn view(&self) -> &DoublyLinkedList<T> {
        self.list
    }

    /// Add an element before the cursor position.
    ///
    /// After insertion, the cursor stays put but its `index` becomes
    /// `index + 1`. At the head node this is an insertion at the front,
    /// at the ghost node an insertion at the back.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let (prev, next) = (self.prev_node(), self.current);
        let node = Node::new_detached(item);
        // SAFETY: `current.prev` and `current` are adjacent nodes of the list.
        unsafe { self.list.attach_node(prev, next, node) };
        #[cfg(feature = "length")]
        {
            self.index += 1;
        }
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the ghost node. After removal, the cursor
    /// is moved to the next node.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter(0..5);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// assert_eq!(cursor.remove(), Some(2));
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 3, 4]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        let next = self.next_node();
        // SAFETY: `self.current` is a valid non-ghost node in the list.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = next;
        Some(Node::into_element(node))
    }

    /// Remove the element before the cursor and return it, or return `None` if
    /// the cursor is at the head node. The cursor is not moved, but its
    /// `index` becomes `index - 1`.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }

    /// Split the list into two at the cursor. The returned list holds
    /// everything from the cursor (inclusive) to the tail.
    ///
    /// If the cursor is pointing at the ghost node, `None` will be returned.
    ///
    /// This operation should compute in *O*(*1*) time with the `length`
    /// feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// let list2 = cursor.split().unwrap();
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(Vec::from_iter(list2), vec![5, 6, 7, 8, 9]);
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn split(&mut self) -> Option<DoublyLinkedList<T>> {
        if self.is_ghost_node() {
            return None;
        }
        #[cfg(feature = "length")]
        let len = self.list.len - self.index;
        // After splitting, the cursor sits on the ghost node.
        let current = std::mem::replace(&mut self.current, self.list.ghost_node());
        let back = self.list.back_node();
        // SAFETY: `current` is a non-ghost node, so `current..=back` is a valid
        // range of the list.
        unsafe {
            Some(DoublyLinkedList::from_detached(self.list.detach_nodes(
                current,
                back,
                #[cfg(feature = "length")]
                len,
            )))
        }
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
