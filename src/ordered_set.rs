use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;

use crate::ordered_map::{self, OrderedMap};

mod capacity;
#[cfg(feature = "serde")]
mod serialization;

/// A hash set that remembers the order in which its values were first inserted.
///
/// Implemented as an [`OrderedMap`] whose values are `()`, so it follows the
/// same rules:
///
/// - inserting a value that is already present does nothing, not even move it,
/// - removing a value and inserting it again moves it to the end.
///
/// With the `serde` feature (enabled by default) the set serializes as an array
/// in insertion order. Deserializing an array keeps the first occurrence of
/// every value.
///
/// # Examples
///
/// ```
/// use insertion_order::OrderedSet;
///
/// let mut set = OrderedSet::from(["a", "b"]);
/// set.insert("d");
/// set.insert("c");
/// set.remove(&"d");
///
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
/// ```
pub struct OrderedSet<T> {
    map: OrderedMap<T, ()>,
}

/// An iterator over the items of an `OrderedSet`, in insertion order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedSet`].
///
/// [`iter`]: OrderedSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: ordered_map::Keys<'a, T, ()>,
}

/// An owning iterator over the items of an `OrderedSet`, in insertion order.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: OrderedSet#method.into_iter
pub struct IntoIter<T> {
    inner: ordered_map::IntoKeys<T, ()>,
}

impl<T> OrderedSet<T> {
    /// Makes a new, empty `OrderedSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    ///
    /// // entries can now be inserted into the empty set
    /// set.insert(1);
    /// ```
    #[must_use]
    pub fn new() -> OrderedSet<T> {
        OrderedSet { map: OrderedMap::new() }
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let mut v = OrderedSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the first inserted element still in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 1, 2]);
    /// assert_eq!(set.first(), Some(&3));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.map.first().map(|(value, ())| value)
    }

    /// Returns the most recently inserted element still in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 1, 2]);
    /// assert_eq!(set.last(), Some(&2));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.map.last().map(|(value, ())| value)
    }

    /// Retains only the elements specified by the predicate, keeping their
    /// relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([6, 5, 4, 3, 2, 1]);
    /// // Keep only the even numbers.
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.iter().eq([6, 4, 2].iter()));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.map.retain(|value, ()| f(value));
    }

    /// Gets an iterator that visits the elements in the `OrderedSet` in
    /// insertion order.
    ///
    /// The elements are collected and sorted up front, so the iterator is a
    /// snapshot of the set at the time of the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let mut v = OrderedSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let mut v = OrderedSet::new();
    /// assert!(v.is_empty());
    /// v.insert(1);
    /// assert!(!v.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T: Hash + Eq> OrderedSet<T> {
    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the element in the set, if any, that is equal to
    /// the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_key_value(value).map(|(value, ())| value)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned and the value is placed after every value inserted before it.
    /// - If the set already contained an equal value, `false` is returned, and
    ///   the set keeps the existing element at its existing position.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(1), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [2, 1]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        match self.map.entry(value) {
            ordered_map::Entry::Occupied(_) => false,
            ordered_map::Entry::Vacant(vacant) => {
                vacant.insert(());
                true
            }
        }
    }

    /// If the set contains an element equal to the value, removes it from the
    /// set and drops it. Returns whether such an element was present.
    ///
    /// Removing an absent value does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove(value).is_some()
    }

    /// Removes and returns the element in the set, if any, that is equal to
    /// the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove_entry(value).map(|(value, ())| value)
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for OrderedSet<T> {
    fn clone(&self) -> Self {
        OrderedSet { map: self.map.clone() }
    }
}

impl<T> Default for OrderedSet<T> {
    /// Creates an empty `OrderedSet`.
    fn default() -> OrderedSet<T> {
        OrderedSet::new()
    }
}

/// Two sets are equal when they hold equal elements in the same order.
impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &OrderedSet<T>) -> bool {
        self.map == other.map
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: Hash + Eq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> OrderedSet<T> {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for OrderedSet<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Hash + Eq + Copy> Extend<&'a T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for OrderedSet<T> {
    /// Converts a `[T; N]` into an `OrderedSet<T>`, keeping the first
    /// occurrence of every value.
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let set = OrderedSet::from(["b", "a", "b"]);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["b", "a"]);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `OrderedSet`'s contents in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use insertion_order::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 1, 2, 3]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [3, 1, 2]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.map.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ─── Iterator implementations ───────────────────────────────────────────────

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for Iter<'_, T> {
    /// Creates an empty `ordered_set::Iter`.
    ///
    /// ```
    /// use insertion_order::ordered_set;
    ///
    /// let iter: ordered_set::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            inner: ordered_map::Keys::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        IntoIter {
            inner: ordered_map::IntoKeys::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}
