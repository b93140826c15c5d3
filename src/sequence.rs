//! The contract shared by the linked lists of this crate.
//!
//! [`LinkedSequence`] is what both [`SinglyLinkedList`] and
//! [`DoublyLinkedList`] offer: insertion at either end, first-match deletion,
//! linear search and forward traversal. [`BackwardTraversal`] is the extra
//! capability only the doubly-linked list has.
//!
//! ```
//! use linked_seq::{DoublyLinkedList, LinkedSequence, SinglyLinkedList};
//!
//! fn fill<S: LinkedSequence<i32> + Default>() -> S {
//!     let mut seq = S::default();
//!     seq.insert_first(2);
//!     seq.insert_first(1);
//!     seq.insert_last(3);
//!     seq
//! }
//!
//! let singly: SinglyLinkedList<i32> = fill();
//! let doubly: DoublyLinkedList<i32> = fill();
//! assert!(singly.forward().eq(doubly.forward()));
//! ```
//!
//! [`SinglyLinkedList`]: crate::SinglyLinkedList
//! [`DoublyLinkedList`]: crate::DoublyLinkedList

use crate::doubly::{self, DoublyLinkedList};
use crate::singly::{self, SinglyLinkedList};
use std::iter::Rev;

/// An ordered sequence of elements stored in linked nodes.
///
/// Forward traversal visits the elements from head to tail. Every call to
/// [`forward`](LinkedSequence::forward) starts from the head again.
pub trait LinkedSequence<T> {
    /// The forward iterator, head to tail.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Makes `value` the new head.
    fn insert_first(&mut self, value: T);

    /// Makes `value` the new tail.
    fn insert_last(&mut self, value: T);

    /// Removes the first element equal to `value`, scanning from the head.
    ///
    /// Returns `None`, leaving the sequence unchanged, if the sequence is
    /// empty or holds no such element.
    fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq;

    /// Returns `true` if some element equals `value`.
    fn search(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Iterates from head to tail.
    fn forward(&self) -> Self::Iter<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`LinkedSequence`] that can also be walked from tail to head.
///
/// The backward iterator yields exactly the reverse of
/// [`forward`](LinkedSequence::forward).
pub trait BackwardTraversal<T>: LinkedSequence<T> {
    type BackIter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Iterates from tail to head.
    fn backward(&self) -> Self::BackIter<'_>;
}

impl<T> LinkedSequence<T> for SinglyLinkedList<T> {
    type Iter<'a> = singly::iterator::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn insert_first(&mut self, value: T) {
        self.push_front(value)
    }

    #[inline]
    fn insert_last(&mut self, value: T) {
        self.push_back(value)
    }

    #[inline]
    fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        SinglyLinkedList::delete(self, value)
    }

    #[inline]
    fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(value)
    }

    #[inline]
    fn forward(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        SinglyLinkedList::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        SinglyLinkedList::is_empty(self)
    }
}

impl<T> LinkedSequence<T> for DoublyLinkedList<T> {
    type Iter<'a> = doubly::iterator::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn insert_first(&mut self, value: T) {
        self.push_front(value)
    }

    #[inline]
    fn insert_last(&mut self, value: T) {
        self.push_back(value)
    }

    #[inline]
    fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        DoublyLinkedList::delete(self, value)
    }

    #[inline]
    fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(value)
    }

    #[inline]
    fn forward(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        DoublyLinkedList::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        DoublyLinkedList::is_empty(self)
    }
}

impl<T> BackwardTraversal<T> for DoublyLinkedList<T> {
    type BackIter<'a> = Rev<doubly::iterator::Iter<'a, T>>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn backward(&self) -> Self::BackIter<'_> {
        self.iter_back()
    }
}

#[cfg(test)]
mod tests {
    use crate::{BackwardTraversal, DoublyLinkedList, LinkedSequence, SinglyLinkedList};

    fn forward_vec<S: LinkedSequence<i32>>(seq: &S) -> Vec<i32> {
        seq.forward().copied().collect()
    }

    fn scenario_one<S: LinkedSequence<i32> + Default>() -> S {
        let mut seq = S::default();
        seq.insert_first(3);
        seq.insert_first(2);
        seq.insert_first(1);
        seq.insert_last(4);
        seq.insert_last(5);
        seq
    }

    macro_rules! sequence_tests {
        ($name:ident, $Seq:ident) => {
            mod $name {
                use super::*;

                #[test]
                fn insert_at_both_ends() {
                    let seq: $Seq<i32> = scenario_one();
                    assert_eq!(forward_vec(&seq), vec![1, 2, 3, 4, 5]);
                    assert_eq!(seq.len(), 5);
                }

                #[test]
                fn delete_interior() {
                    let mut seq: $Seq<i32> = scenario_one();
                    assert_eq!(LinkedSequence::delete(&mut seq, &3), Some(3));
                    assert_eq!(forward_vec(&seq), vec![1, 2, 4, 5]);
                    assert_eq!(seq.forward().count(), seq.len());
                }

                #[test]
                fn delete_on_empty_is_noop() {
                    let mut seq = $Seq::<i32>::default();
                    assert_eq!(LinkedSequence::delete(&mut seq, &99), None);
                    assert!(LinkedSequence::is_empty(&seq));
                    assert_eq!(seq.forward().next(), None);
                }

                #[test]
                fn search_hits_and_misses() {
                    let mut seq = $Seq::<i32>::default();
                    for x in (1..=4).rev() {
                        seq.insert_first(x);
                    }
                    assert!(seq.search(&4));
                    assert!(!seq.search(&6));
                }

                #[test]
                fn delete_absent_keeps_order() {
                    let mut seq: $Seq<i32> = scenario_one();
                    assert_eq!(LinkedSequence::delete(&mut seq, &42), None);
                    assert_eq!(forward_vec(&seq), vec![1, 2, 3, 4, 5]);
                    assert_eq!(LinkedSequence::len(&seq), 5);
                }

                #[test]
                fn delete_each_position_until_empty() {
                    let mut seq: $Seq<i32> = scenario_one();
                    // head, tail, interior, then the remaining two
                    for (value, rest) in [
                        (1, vec![2, 3, 4, 5]),
                        (5, vec![2, 3, 4]),
                        (3, vec![2, 4]),
                        (2, vec![4]),
                        (4, vec![]),
                    ] {
                        assert_eq!(LinkedSequence::delete(&mut seq, &value), Some(value));
                        assert_eq!(forward_vec(&seq), rest);
                        assert_eq!(seq.forward().count(), LinkedSequence::len(&seq));
                    }
                    assert!(LinkedSequence::is_empty(&seq));
                    seq.insert_last(7);
                    assert_eq!(forward_vec(&seq), vec![7]);
                }

                #[test]
                fn forward_restarts() {
                    let seq: $Seq<i32> = scenario_one();
                    let first: Vec<_> = seq.forward().collect();
                    let second: Vec<_> = seq.forward().collect();
                    assert_eq!(first, second);
                }
            }
        };
    }

    sequence_tests!(singly, SinglyLinkedList);
    sequence_tests!(doubly, DoublyLinkedList);

    #[test]
    fn backward_is_reverse_of_forward() {
        let mut seq: DoublyLinkedList<i32> = scenario_one();
        assert_eq!(seq.backward().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);

        LinkedSequence::delete(&mut seq, &3);
        let mut forward = forward_vec(&seq);
        forward.reverse();
        assert_eq!(seq.backward().copied().collect::<Vec<_>>(), forward);
    }

    #[test]
    fn delete_sole_element_empties_both_ends() {
        let mut seq = DoublyLinkedList::new();
        seq.insert_first(10);
        assert_eq!(LinkedSequence::delete(&mut seq, &10), Some(10));
        assert_eq!(seq.front(), None);
        assert_eq!(seq.back(), None);
        assert_eq!(seq.backward().next(), None);
    }
}
