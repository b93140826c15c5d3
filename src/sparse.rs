use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;

/// An array kept as an index-to-value map plus a length.
///
/// Indices `0..len()` are always present. Removing from the middle with
/// [`delete`](SparseArray::delete) shifts every later value one index to the
/// left, so no holes are left behind.
///
/// # Examples
///
/// ```
/// use linked_seq::SparseArray;
///
/// let mut array = SparseArray::new();
/// array.push(1);
/// array.push(2);
/// array.push(3);
///
/// assert_eq!(array.get(3), None);
/// assert_eq!(array.pop(), Some(3));
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.to_string(), "1, 2");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SparseArray<T> {
    data: HashMap<usize, T>,
    length: usize,
}

impl<T> SparseArray<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            length: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the value at `index`, or `None` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(&index)
    }

    /// Appends `item` and returns the new length.
    pub fn push(&mut self, item: T) -> usize {
        self.data.insert(self.length, item);
        self.length += 1;
        self.length
    }

    /// Removes the last value and returns it, or `None` if the array is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }
        let item = self.data.remove(&(self.length - 1));
        self.length -= 1;
        item
    }

    /// Removes the value at `index` and shifts the later values left.
    ///
    /// Returns `None`, leaving the array unchanged, if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::SparseArray;
    /// use std::iter::FromIterator;
    ///
    /// let mut array = SparseArray::from_iter(['a', 'b', 'c']);
    ///
    /// assert_eq!(array.delete(0), Some('a'));
    /// assert_eq!(array.delete(5), None);
    /// assert_eq!(array.get(0), Some(&'b'));
    /// assert_eq!(array.get(1), Some(&'c'));
    /// assert_eq!(array.get(2), None);
    /// ```
    pub fn delete(&mut self, index: usize) -> Option<T> {
        if index >= self.length {
            return None;
        }
        let deleted = self.data.remove(&index);
        for i in index + 1..self.length {
            if let Some(item) = self.data.remove(&i) {
                self.data.insert(i - 1, item);
            }
        }
        self.length -= 1;
        deleted
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.length = 0;
    }

    /// Iterates the values in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.length).filter_map(move |i| self.data.get(&i))
    }

    /// Calls `f` with each value and its index, in index order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.iter().enumerate() {
            f(item, index);
        }
    }

    /// Builds a new array from what `f` returns for each value and index.
    pub fn map<U, F>(&self, mut f: F) -> SparseArray<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.iter()
            .enumerate()
            .map(|(index, item)| f(item, index))
            .collect()
    }

    /// Builds a new array from the values for which `f` returns `true`.
    ///
    /// Kept values are re-indexed from zero.
    pub fn filter<F>(&self, mut f: F) -> SparseArray<T>
    where
        F: FnMut(&T, usize) -> bool,
        T: Clone,
    {
        self.iter()
            .enumerate()
            .filter(|(index, item)| f(*item, *index))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Folds the values into one, in index order.
    ///
    /// With no `initial` value the first element seeds the accumulator and
    /// `f` starts from the second one. Returns `None` only when the array is
    /// empty and no `initial` value is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::SparseArray;
    /// use std::iter::FromIterator;
    ///
    /// let array = SparseArray::from_iter([1, 2, 3, 4]);
    ///
    /// assert_eq!(array.reduce(|acc, x, _| acc + x, None), Some(10));
    /// assert_eq!(array.reduce(|acc, x, _| acc * x, Some(2)), Some(48));
    /// assert_eq!(SparseArray::new().reduce(|acc: i32, x, _| acc + x, None), None);
    /// ```
    pub fn reduce<F>(&self, mut f: F, initial: Option<T>) -> Option<T>
    where
        F: FnMut(T, &T, usize) -> T,
        T: Clone,
    {
        let mut accumulator = initial;
        for (index, item) in self.iter().enumerate() {
            accumulator = Some(match accumulator {
                Some(acc) => f(acc, item, index),
                None => item.clone(),
            });
        }
        accumulator
    }

    /// Folds the values into an accumulator of any type, starting from
    /// `init`.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        self.iter()
            .enumerate()
            .fold(init, |acc, (index, item)| f(acc, item, index))
    }
}

impl<T> Default for SparseArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SparseArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = SparseArray::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for SparseArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Display> Display for SparseArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for SparseArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Data<'a, T>(&'a SparseArray<T>);

        impl<T: Debug> Debug for Data<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.0.iter().enumerate()).finish()
            }
        }

        f.debug_struct("SparseArray")
            .field("length", &self.length)
            .field("data", &Data(self))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::SparseArray;
    use std::iter::FromIterator;

    #[test]
    fn push_get_pop() {
        let mut array = SparseArray::new();
        assert_eq!(array.push(1), 1);
        assert_eq!(array.push(2), 2);
        assert_eq!(array.push(3), 3);
        assert_eq!(array.get(3), None);
        assert_eq!(array.pop(), Some(3));
        assert_eq!(array.len(), 2);
        assert_eq!(array.get(0), Some(&1));
        assert_eq!(array.get(1), Some(&2));
        assert_eq!(
            format!("{:?}", array),
            "SparseArray { length: 2, data: {0: 1, 1: 2} }"
        );
    }

    #[test]
    fn pop_empty() {
        let mut array = SparseArray::<u8>::new();
        assert_eq!(array.pop(), None);
        assert_eq!(array.len(), 0);
    }

    #[test]
    fn delete_shifts_left() {
        let mut array = SparseArray::from_iter(10..15);
        assert_eq!(array.delete(1), Some(11));
        assert_eq!(array.len(), 4);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![10, 12, 13, 14]);
        assert_eq!(array.delete(3), Some(14));
        assert_eq!(array.delete(3), None);
        assert_eq!(array.to_string(), "10, 12, 13");
        assert_eq!(array.push(20), 4);
        assert_eq!(array.get(3), Some(&20));
    }

    #[test]
    fn clear_resets_length() {
        let mut array = SparseArray::from_iter(["x", "y"]);
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.get(0), None);
        assert_eq!(array.to_string(), "");
        assert_eq!(array.push("z"), 1);
    }

    #[test]
    fn for_each_map_filter() {
        let array = SparseArray::from_iter([3, 4, 5, 6]);

        let mut seen = Vec::new();
        array.for_each(|item, index| seen.push((index, *item)));
        assert_eq!(seen, vec![(0, 3), (1, 4), (2, 5), (3, 6)]);

        let mapped = array.map(|item, index| item * 10 + index as i32);
        assert_eq!(mapped.to_string(), "30, 41, 52, 63");

        let evens = array.filter(|item, _| item % 2 == 0);
        assert_eq!(evens.len(), 2);
        assert_eq!(evens.get(0), Some(&4));
        assert_eq!(evens.get(1), Some(&6));

        let odd_positions = array.filter(|_, index| index % 2 == 1);
        assert_eq!(odd_positions.to_string(), "4, 6");
    }

    #[test]
    fn reduce_and_fold() {
        let array = SparseArray::from_iter([1, 2, 3]);
        assert_eq!(array.reduce(|acc, x, _| acc + x, None), Some(6));
        assert_eq!(array.reduce(|acc, x, _| acc + x, Some(10)), Some(16));
        let listed = array.fold(String::new(), |acc, x, i| format!("{}{}:{} ", acc, i, x));
        assert_eq!(listed, "0:1 1:2 2:3 ");

        let single = SparseArray::from_iter([7]);
        assert_eq!(single.reduce(|_, _, _| unreachable!(), None), Some(7));
    }
}
