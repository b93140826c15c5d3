use crate::doubly::DoublyLinkedList;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for DoublyLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for DoublyLinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> DoublyLinkedList<T> {
    /// Returns `true` if the list contains an element equal to the given value.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyLinkedList::from_iter([1, 2, 3, 4]);
    ///
    /// assert_eq!(list.contains(&4), true);
    /// assert_eq!(list.contains(&6), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Removes the first element (from the head) equal to `value` and
    /// returns it, or returns `None` if there is no such element.
    ///
    /// Later duplicates are left untouched, and a miss leaves the list
    /// unchanged.
    ///
    /// # Complexity
    ///
    /// *O*(*n*) to find the element, *O*(1) to unlink it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([1, 2, 3, 2]);
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
    /// The scan runs from the head; once a match is found the node is
    /// unlinked through its own `prev`/`next` links, without walking the
    /// list a second time.
    pub fn delete_where<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor_start_mut();
        loop {
            if pred(cursor.current()?) {
                return cursor.remove();
            }
            cursor.move_next_cyclic();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::DoublyLinkedList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn delete_first_match_only() {
        let mut list = DoublyLinkedList::from_iter([5, 1, 5, 2, 5]);
        assert_eq!(list.delete(&5), Some(5));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 5, 2, 5]);
        assert_eq!(list.delete(&5), Some(5));
        assert_eq!(list.delete(&5), Some(5));
        assert_eq!(list.delete(&5), None);
        assert_eq!(Vec::from_iter(list.iter_back().copied()), vec![2, 1]);
    }

    #[test]
    fn delete_miss_is_noop() {
        let mut list = DoublyLinkedList::from_iter(1..=3);
        let before = list.clone();
        assert_eq!(list.delete(&42), None);
        assert_eq!(list, before);
        assert_eq!(list.len(), 3);

        let mut empty = DoublyLinkedList::<i32>::new();
        assert_eq!(empty.delete(&99), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn compare_and_hash() {
        let a = DoublyLinkedList::from_iter([1, 2, 3]);
        let b = DoublyLinkedList::from_iter([1, 2, 4]);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
    }
}
