//! Growable, index-addressable list.
//!
//! This module provides [`ArrayList`], a contiguous `Vec`-backed list that
//! supports insertion and removal at arbitrary positions as well as lookup by
//! value or by position.

use core::fmt;

use crate::error::{ArrayListError, Result};

/// An ordered list backed by a contiguous, growable buffer.
///
/// Positions are zero-based and always lie in `[0, size)`. Every fallible
/// operation validates its arguments before touching the list, so a failed
/// call leaves the contents unchanged.
///
/// Lookups by value ([`index_of`](Self::index_of), [`remove`](Self::remove),
/// ...) use structural equality through [`PartialEq`].
///
/// `ArrayList` does no internal locking. Mutating one list from several
/// threads requires external synchronization such as a `Mutex`.
///
/// # Examples
///
/// ```rust
/// use array_list::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.add([1, 2, 3]);
/// list.add_at(1, [99]).unwrap();
/// assert_eq!(list.as_slice(), &[1, 99, 2, 3]);
///
/// assert_eq!(list.remove_at(1), Ok(99));
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.get(2), Ok(&3));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates a new, empty `ArrayList`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::ArrayList;
    ///
    /// let list: ArrayList<u32> = ArrayList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add(["a", "b"]);
    /// assert_eq!(list.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `elements` to the end of the list, keeping their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add([1]);
    /// list.add(vec![2, 3]);
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn add<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.items.len();
        self.items.extend(elements);
        tracing::trace!(added = self.items.len() - before, size = self.items.len(), "add");
    }

    /// Inserts `elements` at the start of the list.
    ///
    /// The first given element ends up first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add([3]);
    /// list.add_first([1, 2]);
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn add_first<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_all(0, elements);
    }

    /// Inserts `elements` so that the first of them lands at `position`.
    ///
    /// `position` may equal the current size, which appends.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::IndexOutOfRange`] if `position > size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::{ArrayList, ArrayListError};
    ///
    /// let mut list = ArrayList::from(vec![1, 2, 3]);
    /// list.add_at(1, [99]).unwrap();
    /// assert_eq!(list.as_slice(), &[1, 99, 2, 3]);
    ///
    /// assert_eq!(
    ///     list.add_at(9, [0]),
    ///     Err(ArrayListError::IndexOutOfRange { position: 9, size: 4 })
    /// );
    /// ```
    pub fn add_at<I>(&mut self, position: usize, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        if position > self.items.len() {
            return Err(self.out_of_range(position));
        }

        match position {
            0 => self.add_first(elements),
            p if p == self.items.len() => self.add(elements),
            _ => self.insert_all(position, elements),
        }

        Ok(())
    }

    /// Returns a reference to the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::IndexOutOfRange`] if `position >= size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from(vec![1, 2, 3]);
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(
    ///     list.get(5).unwrap_err().to_string(),
    ///     "Index 5 is out of range from a list size of 3"
    /// );
    /// ```
    pub fn get(&self, position: usize) -> Result<&T> {
        self.check_range(position)?;
        Ok(&self.items[position])
    }

    /// Returns a mutable reference to the element at `position`.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T> {
        self.check_range(position)?;
        Ok(&mut self.items[position])
    }

    /// Replaces the element at `position`, returning the previous one.
    pub fn set(&mut self, position: usize, element: T) -> Result<T> {
        let slot = self.get_mut(position)?;
        Ok(core::mem::replace(slot, element))
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes the element at `position`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::IndexOutOfRange`] if `position >= size`.
    pub fn remove_at(&mut self, position: usize) -> Result<T> {
        self.check_range(position)?;
        let removed = self.items.remove(position);
        tracing::trace!(position, size = self.items.len(), "remove_at");
        Ok(removed)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        let removed = self.items.len();
        self.items.clear();
        tracing::trace!(removed, "clear");
    }

    /// Borrowed view of the elements in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an independent copy of the elements.
    ///
    /// Changes to the returned `Vec` never reach the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from(vec![1, 2]);
    /// let mut copy = list.to_vec();
    /// copy.push(3);
    /// copy[0] = 10;
    /// assert_eq!(list.as_slice(), &[1, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Iterator over the elements in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutable iterator over the elements in order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn insert_all<I>(&mut self, position: usize, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let tail = self.items.split_off(position);
        let before = self.items.len() + tail.len();
        self.items.extend(elements);
        self.items.extend(tail);
        tracing::trace!(
            position,
            added = self.items.len() - before,
            size = self.items.len(),
            "insert"
        );
    }

    fn check_range(&self, position: usize) -> Result<()> {
        if position >= self.items.len() {
            return Err(self.out_of_range(position));
        }
        Ok(())
    }

    fn out_of_range(&self, position: usize) -> ArrayListError {
        let size = self.items.len();
        tracing::debug!(position, size, "index out of range");
        ArrayListError::IndexOutOfRange { position, size }
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Position of the first element equal to `target`, or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from(vec!['a', 'b', 'a']);
    /// assert_eq!(list.index_of(&'a'), Some(0));
    /// assert_eq!(list.last_index_of(&'a'), Some(2));
    /// assert_eq!(list.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, target: &T) -> Option<usize> {
        self.items.iter().position(|item| item == target)
    }

    /// Position of the last element equal to `target`, or `None`.
    pub fn last_index_of(&self, target: &T) -> Option<usize> {
        self.items.iter().rposition(|item| item == target)
    }

    /// Returns `true` if some element equals `target`.
    pub fn contains(&self, target: &T) -> bool {
        self.index_of(target).is_some()
    }
}

impl<T: PartialEq + fmt::Debug> ArrayList<T> {
    /// Removes the first element equal to `target` and returns it.
    ///
    /// Later duplicates stay in place.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::ElementNotFound`] carrying the `Debug`
    /// rendering of `target` when nothing matches. Strings and chars keep the
    /// quotes `Debug` adds, so removing a missing `"b"` reports
    /// `"b" element was not found in this list.`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from(vec![1, 2, 3, 2]);
    /// assert_eq!(list.remove(&2), Ok(2));
    /// assert_eq!(list.as_slice(), &[1, 3, 2]);
    ///
    /// let err = list.remove(&7).unwrap_err();
    /// assert_eq!(err.to_string(), "7 element was not found in this list.");
    ///
    /// let mut names = ArrayList::from(vec!["a"]);
    /// let err = names.remove(&"b").unwrap_err();
    /// assert_eq!(err.to_string(), "\"b\" element was not found in this list.");
    /// ```
    pub fn remove(&mut self, target: &T) -> Result<T> {
        match self.index_of(target) {
            Some(position) => self.remove_at(position),
            None => {
                tracing::debug!(?target, "element not found");
                Err(ArrayListError::ElementNotFound(format!("{target:?}")))
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<ArrayList<T>> for Vec<T> {
    fn from(list: ArrayList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
