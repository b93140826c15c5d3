use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::doubly::cursor::{Cursor, CursorMut};
use crate::doubly::iterator::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// A doubly-linked list with owned nodes, closed into a ring by a ghost node.
///
/// Inserting or removing at either end takes *O*(1) time, and so does
/// unlinking a node once a cursor sits on it. Finding an element by value
/// takes *O*(*n*) time.
///
/// The `DoublyLinkedList` contains:
/// - a pointer `ghost` to the ghost node, whose `next` is the head of the
///   list and whose `prev` is the tail;
/// - a length field `len`. It can be disabled by disabling the `length`
///   feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// linked_seq = { default-features = false }
/// ```
///
/// An empty list is a ghost node linked to itself, so "head is null",
/// "tail is null" and "the list is empty" are one and the same check.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct DoublyLinkedList<T> {
    ghost: NonNull<Node<MaybeUninit<T>>>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Nodes fragment detached from a list, used in list splitting or
/// appending.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    #[cfg(feature = "length")]
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Link `prev -> next` and `prev <- next`.
///
/// Both pointers must be nodes (or the ghost node) of the same live list.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

// private methods
impl<T> DoublyLinkedList<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        // `Node<MaybeUninit<T>>` and `Node<T>` share one layout; the ghost's
        // element is never read through the cast pointer.
        self.ghost.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { self.ghost_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { self.ghost_node().as_ref().prev }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list,
    /// or whether it is the ghost node.
    ///
    /// Whichever of the four positions `node` holds (sole, head, tail or
    /// interior), its two neighbours are relinked directly: the ghost node
    /// stands in for the missing neighbour at either end.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` from the list, and return the detached
    /// nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid range
    /// of this list, or that `len` is its length.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        #[cfg(feature = "length")] len: usize,
    ) -> DetachedNodes<T> {
        #[cfg(feature = "length")]
        {
            self.len -= len;
        }
        connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes::new(
            front,
            back,
            #[cfg(feature = "length")]
            len,
        )
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        #[cfg(feature = "length")]
        {
            self.len += detached.len;
        }
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }

    /// Detach all nodes from the list, or return `None` if the list is empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `front_node()..=back_node()` is the whole, non-empty list.
        unsafe {
            Some(self.detach_nodes(
                self.front_node(),
                self.back_node(),
                #[cfg(feature = "length")]
                self.len,
            ))
        }
    }

    /// Construct a list from detached nodes.
    pub(crate) fn from_detached(detached: DetachedNodes<T>) -> Self {
        let mut list = DoublyLinkedList::new();
        // SAFETY: the ghost node of an empty list is adjacent to itself.
        unsafe {
            list.attach_nodes(list.ghost_node(), list.ghost_node(), detached);
        }
        list
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty `DoublyLinkedList`.
    ///
    /// # Examples
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// let list: DoublyLinkedList<u32> = DoublyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            #[cfg(feature = "length")]
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the list holds no elements, i.e. both its head
    /// and its tail are absent.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// *O*(1) with the `length` feature, *O*(*n*) without.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements, counted by walking the ring.
    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the head element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the head element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list holds an element, and
        // the returned borrow is tied to `&mut self`.
        unsafe { Some(&mut (*self.front_node().as_ptr()).element) }
    }

    /// Provides a reference to the tail element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_front(0);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the tail element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list holds an element, and
        // the returned borrow is tied to `&mut self`.
        unsafe { Some(&mut (*self.back_node().as_ptr()).element) }
    }

    /// Makes `elt` the new head of the list.
    ///
    /// The new node's `prev` is the ghost node and the old head's `prev`
    /// becomes the new node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the head element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        self.cursor_start_mut().remove()
    }

    /// Appends `elt` after the current tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the tail element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        self.cursor_end_mut().backspace()
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the ghost node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides a cursor at the head node, or at the ghost node if the list
    /// is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.front_node(),
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor at the ghost node, right after the tail.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.ghost_node(),
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// Provides a cursor with editing operations at the node with given index.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides a cursor with editing operations at the head node.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(
            self,
            front,
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor with editing operations at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let ghost = self.ghost_node();
        #[cfg(feature = "length")]
        let len = self.len;
        CursorMut::new(
            self,
            ghost,
            #[cfg(feature = "length")]
            len,
        )
    }

    /// Provides a double-ended iterator from head to tail.
    ///
    /// Calling `rev()` on it (or using [`iter_back`]) walks from tail to
    /// head instead.
    ///
    /// [`iter_back`]: DoublyLinkedList::iter_back
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Walks the list from tail to head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// assert_eq!(Vec::from_iter(list.iter_back()), vec![&3, &2, &1]);
    /// ```
    #[inline]
    pub fn iter_back(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list, leaving
    /// `other` empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list1 = DoublyLinkedList::from_iter(['a']);
    /// let mut list2 = DoublyLinkedList::from_iter(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    /// assert_eq!(Vec::from_iter(list1), vec!['a', 'b', 'c']);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the back node and the ghost node are adjacent nodes of `self`.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Moves all elements from `other` to the start of the list, leaving
    /// `other` empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the ghost node and the front node are adjacent nodes of `self`.
            unsafe { self.attach_nodes(self.ghost_node(), self.front_node(), detached) }
        }
    }

    /// Splits the list into two at the given index. Returns everything after
    /// the given index (inclusive).
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// let split = list.split_off(2);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2]);
    /// assert_eq!(Vec::from_iter(split), vec![3]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> DoublyLinkedList<T> {
        self.cursor_mut(at).split().unwrap_or_default()
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`
    pub fn remove(&mut self, at: usize) -> T {
        self.cursor_mut(at)
            .remove()
            .expect("Cannot remove at an index outside of the list bounds")
    }

    /// Adds an element at the given index in the list.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4);
    /// list.insert(4, 5);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) {
        self.cursor_mut(at).insert(elt);
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. Its links dangle until it
    /// is attached to a list.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// It is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range and its length must be equal to `len` (with
    /// `#[cfg(feature = "length")]`).
    unsafe fn new(
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        #[cfg(feature = "length")] len: usize,
    ) -> Self {
        #[cfg(feature = "length")]
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            #[cfg(feature = "length")]
            len,
            _marker: PhantomData,
        }
    }
}

fn new_ghost<T>() -> NonNull<Node<MaybeUninit<T>>> {
    let ghost = Node::new_detached(MaybeUninit::uninit());
    // SAFETY: `ghost` was just allocated and nothing else points to it.
    unsafe { connect(ghost, ghost) };
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost was leaked from a box in `new_ghost` and no
        // element node refers to it any more.
        unsafe { drop(Box::from_raw(self.ghost.as_ptr())) };
    }
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}

unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

// Ensure that the list and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: DoublyLinkedList<&'static str>) -> DoublyLinkedList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::doubly::{DoublyLinkedList, Node};
    use std::cell::RefCell;
    use std::iter::FromIterator;

    /// Walk the ring checking that every `next` is mirrored by a `prev`.
    fn assert_links<T>(list: &DoublyLinkedList<T>) {
        let ghost = list.ghost_node();
        let mut node = ghost;
        let mut steps = 0;
        loop {
            let next = unsafe { node.as_ref().next };
            assert_eq!(unsafe { next.as_ref().prev }, node);
            node = next;
            if node == ghost {
                break;
            }
            steps += 1;
        }
        assert_eq!(steps, list.len());
    }

    fn head_and_tail<T>(list: &DoublyLinkedList<T>) -> (Option<&T>, Option<&T>) {
        (list.front(), list.back())
    }

    #[test]
    fn list_create() {
        let mut list = DoublyLinkedList::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        assert_links(&list);
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl Drop for DropChecker<'_> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut list = DoublyLinkedList::new();
        for value in 1..=3 {
            list.push_back(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(list.delete_where(|checker| checker.value == 2));
        assert_eq!(dropped.borrow().as_slice(), &[2]);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 1, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = DoublyLinkedList::new();
        assert_eq!(head_and_tail(&list), (None, None));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(head_and_tail(&list), (Some(&1), Some(&1)));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_links(&list);
        assert_eq!(head_and_tail(&list), (Some(&2), Some(&3)));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(head_and_tail(&list), (None, None));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_delete_positions() {
        // sole node
        let mut list = DoublyLinkedList::from_iter([7]);
        assert_eq!(list.delete(&7), Some(7));
        assert_eq!(head_and_tail(&list), (None, None));
        assert_links(&list);

        // head, tail, interior
        let mut list = DoublyLinkedList::from_iter(1..=5);
        assert_eq!(list.delete(&1), Some(1));
        assert_eq!(head_and_tail(&list), (Some(&2), Some(&5)));
        assert_eq!(list.delete(&5), Some(5));
        assert_eq!(head_and_tail(&list), (Some(&2), Some(&4)));
        assert_eq!(list.delete(&3), Some(3));
        assert_links(&list);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 4]);
        assert_eq!(Vec::from_iter(list.iter_back().copied()), vec![4, 2]);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = DoublyLinkedList::from_iter(0..10);
        list.insert(5, 10);
        assert_eq!(
            Vec::from_iter(list.iter().copied()),
            Vec::from_iter((0..5).chain(Some(10)).chain(5..10))
        );

        assert_eq!(list.remove(10), 9);
        assert_eq!(list.back(), Some(&8));

        list.insert(0, 11);
        assert_eq!(list.front(), Some(&11));
        assert_eq!(list.remove(0), 11);
        assert_links(&list);
        assert_eq!(list.len(), 10);
    }

    #[test]
    fn list_split_and_append() {
        let mut list = DoublyLinkedList::from_iter(0..5);
        let mut other = DoublyLinkedList::from_iter(5..7);

        list.append(&mut other);
        assert!(other.is_empty());
        assert_eq!(list, DoublyLinkedList::from_iter(0..7));
        assert_links(&list);

        let mut split = list.split_off(5);
        assert_eq!(list, DoublyLinkedList::from_iter(0..5));
        assert_eq!(split, DoublyLinkedList::from_iter(5..7));
        assert_links(&split);

        split.prepend(&mut list);
        assert!(list.is_empty());
        assert_eq!(split, DoublyLinkedList::from_iter(0..7));
        assert_eq!(split.len(), 7);

        let empty = split.split_off(7);
        assert!(empty.is_empty());
        assert_links(&split);
    }

    #[test]
    fn list_node_is_detached_until_attached() {
        let node = Node::new_detached(3);
        let boxed = unsafe { Box::from_raw(node.as_ptr()) };
        assert_eq!(Node::into_element(boxed), 3);
    }
}
