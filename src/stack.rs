use crate::sequence::LinkedSequence;
use crate::singly::iterator::Iter;
use crate::SinglyLinkedList;
use std::fmt::{Debug, Formatter};
use std::iter::FromIterator;

/// A last-in, first-out stack on top of a [`SinglyLinkedList`].
///
/// The top of the stack is the head of the list, so `push`, `pop` and
/// `peek` all take *O*(1) time.
///
/// # Examples
///
/// ```
/// use linked_seq::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: SinglyLinkedList::new(),
        }
    }

    /// Puts `value` on top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.list.insert_first(value);
    }

    /// Takes the top value off the stack, or returns `None` if it is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Iterates from the top of the stack to the bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.forward()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the items in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

#[cfg(test)]
mod tests {
    use crate::Stack;
    use std::iter::FromIterator;

    #[test]
    fn stack_lifo_order() {
        let mut stack = Stack::from_iter(1..=4);
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(stack.pop(), Some(4));
        stack.push(9);
        assert_eq!(stack.pop(), Some(9));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn stack_peek() {
        let mut stack = Stack::new();
        assert_eq!(stack.peek(), None);
        stack.push(String::from("a"));
        if let Some(top) = stack.peek_mut() {
            top.push('b');
        }
        assert_eq!(stack.peek().map(String::as_str), Some("ab"));
        assert_eq!(format!("{:?}", stack), r#"["ab"]"#);
    }
}
