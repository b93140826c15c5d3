use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use crate::singly::iterator::{Iter, IterMut};

pub mod iterator;

/// A singly-linked list with owned nodes.
///
/// Each node owns its successor through a `Box`, and the list owns the head.
/// No tail pointer is kept: pushing to the front takes *O*(1) time, while
/// pushing to the back walks the whole chain in *O*(*n*) time. If that
/// matters, use [`DoublyLinkedList`] instead.
///
/// [`DoublyLinkedList`]: crate::DoublyLinkedList
///
/// # Examples
///
/// ```
/// use linked_seq::SinglyLinkedList;
/// use std::iter::FromIterator;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_front(2);
/// list.push_front(1);
/// list.push_back(3);
///
/// assert_eq!(Vec::from_iter(list.iter()), vec![&1, &2, &3]);
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    #[cfg(feature = "length")]
    /// the length of the list
    len: usize,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty `SinglyLinkedList`.
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements, counted by walking the chain.
    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the head element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Provides a mutable reference to the head element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.element)
    }

    /// Makes `elt` the new head; its `next` is the old head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { element: elt, next }));
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Removes the head element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { element, next } = *node;
        self.head = next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(element)
    }

    /// Appends `elt` after the last node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: the last node is
    /// found by walking from the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::SinglyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(Vec::from_iter(list), vec![1, 2]);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node {
            element: elt,
            next: None,
        }));
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Returns `true` if the list contains an element equal to the given value.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Removes the first element (from the head) equal to `value` and
    /// returns it, or returns `None` if the list is empty or no element
    /// matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::SinglyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyLinkedList::from_iter([1, 2, 3, 2]);
    ///
    /// assert_eq!(list.delete(&2), Some(2));
    /// assert_eq!(list.delete(&9), None);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 2]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq<T>,
    {
        self.delete_where(|e| e == value)
    }

    /// Removes the first element for which `pred` returns `true`.
    ///
    /// The scan keeps a handle on the link that owns the current node (the
    /// list's head, or the predecessor's `next`), so a match is spliced out
    /// by pointing that link at the match's successor.
    pub fn delete_where<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut link = &mut self.head;
        loop {
            match link {
                None => return None,
                Some(node) if pred(&node.element) => break,
                Some(node) => link = &mut node.next,
            }
        }
        let node = link.take()?;
        let Node { element, next } = *node;
        *link = next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(element)
    }

    /// Provides a forward iterator from the head.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    pub(crate) fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub(crate) fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    // Unlink node by node; dropping the head box directly would recurse
    // once per node.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}
