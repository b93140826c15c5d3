use crate::singly::{Node, SinglyLinkedList};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `SinglyLinkedList`, head to tail.
///
/// # Examples
///
/// ```compile_fail
/// use linked_seq::SinglyLinkedList;
/// use std::iter::FromIterator;
///
/// let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_front(0);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    next: Option<&'a Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a SinglyLinkedList<T>) -> Self {
        Self {
            next: list.head(),
            #[cfg(feature = "length")]
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&node.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `SinglyLinkedList`.
pub struct IterMut<'a, T: 'a> {
    next: Option<&'a mut Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut SinglyLinkedList<T>) -> Self {
        #[cfg(feature = "length")]
        let len = list.len();
        Self {
            next: list.head_mut(),
            #[cfg(feature = "length")]
            len,
        }
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&mut node.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `SinglyLinkedList`.
///
/// This `struct` is created by the [`into_iter`] method on [`SinglyLinkedList`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: SinglyLinkedList::into_iter
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("list", &self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    /// Builds the list in iteration order.
    ///
    /// Elements are pushed to the front of a scratch list and the result is
    /// reversed, so collecting stays linear despite the missing tail pointer.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut reversed = SinglyLinkedList::new();
        for item in iter {
            reversed.push_front(item);
        }
        let mut list = SinglyLinkedList::new();
        while let Some(item) = reversed.pop_front() {
            list.push_front(item);
        }
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::SinglyLinkedList;
    use std::iter::FromIterator;

    #[test]
    fn iter_in_insertion_order() {
        let list = SinglyLinkedList::from_iter(0..10);
        let mut iter = list.iter();
        for i in 0..10 {
            #[cfg(feature = "length")]
            assert_eq!(iter.len(), 10 - i);
            assert_eq!(iter.next(), Some(&i));
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_mut_edits_in_place() {
        let mut list = SinglyLinkedList::from_iter(1..=4);
        for x in &mut list {
            *x *= 10;
        }
        assert_eq!(Vec::from_iter(list), vec![10, 20, 30, 40]);
    }

    #[test]
    fn extend_appends_at_the_end() {
        let mut list = SinglyLinkedList::from_iter([1, 2]);
        list.extend(&[3, 4]);
        list.extend(vec![5]);
        assert_eq!(list.len(), 5);
        assert_eq!(Vec::from_iter(list.into_iter()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_iterators() {
        let mut list = SinglyLinkedList::<u8>::new();
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter_mut().next(), None);
        assert_eq!(list.into_iter().next(), None);
    }
}
