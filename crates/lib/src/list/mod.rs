//! Array-backed ordered list.
//!
//! This module provides [`OrderedList`], an index-addressable collection that
//! keeps its elements contiguous in a growable buffer. Every positional
//! mutation is a splice on that buffer: inserting shifts the tail right,
//! removing shifts it left, so indices `0..size()` always hold live elements.
//!
//! # Bounds rules
//!
//! - **Get rule** (`get`, `get_mut`, `set`, `remove_at`): `index` must be
//!   less than `size()`.
//! - **Insertion rule** (`add_at`, `add_all_at`): `index` may also equal
//!   `size()`, which appends.
//! - **Range rule** (`remove_range`, `sublist`): `from <= to <= size()`.
//!
//! Violations return [`ListError::IndexOutOfRange`] and leave the list
//! untouched.

use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    ops::{Index, IndexMut},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};
use tracing::{debug, trace};

use crate::codec::{Codec, CodecError, JsonCodec, ListRecord, record::ListRecordRef};

pub mod equality;
pub mod errors;

pub use equality::{EqBy, Equality, NativeEq, by_key};
pub use errors::ListError;

/// An ordered, index-addressable list backed by a contiguous array.
///
/// `OrderedList` is generic over its element type `T` and over the
/// [`Equality`] strategy `E` used by search and removal. The default
/// strategy, [`NativeEq`], uses the element's `PartialEq`.
///
/// # Examples
///
/// ```
/// use ordered_list::OrderedList;
///
/// let mut list = OrderedList::from(vec![1, 2, 4]);
/// list.add_at(2, 3).unwrap();
///
/// assert_eq!(list.to_display_string(), "[1, 2, 3, 4]");
/// assert_eq!(list.size(), 4);
/// assert_eq!(list.index_of(&3), Some(2));
///
/// list.remove_all([1, 3]);
/// assert_eq!(list.to_array(), vec![2, 4]);
/// ```
#[derive(Clone)]
pub struct OrderedList<T, E = NativeEq> {
    /// Live elements; `elements.len()` is the list size
    elements: Vec<T>,
    /// Strategy used by `index_of`, `remove`, `remove_all` and friends
    equality: E,
}

impl<T> OrderedList<T> {
    /// Creates a new empty list using native equality
    pub fn new() -> Self {
        Self::with_equality(NativeEq)
    }
}

impl<T, E> OrderedList<T, E> {
    /// Creates a new empty list that compares elements with `equality`.
    pub fn with_equality(equality: E) -> Self {
        Self::from_vec_with_equality(Vec::new(), equality)
    }

    /// Creates a list holding `elements` in order, compared with `equality`.
    pub fn from_vec_with_equality(elements: Vec<T>, equality: E) -> Self {
        Self {
            elements,
            equality,
        }
    }

    /// Creates an independent snapshot of `other`.
    ///
    /// Later mutations of either list are not visible in the other.
    pub fn from_list(other: &Self) -> Self
    where
        T: Clone,
        E: Clone,
    {
        other.clone()
    }

    /// Returns the equality strategy of this list
    pub fn equality(&self) -> &E {
        &self.equality
    }

    /// Returns the number of elements in the list
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the list
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns true if the list contains no elements
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns true if `index` addresses a live element
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.size()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] if `index >= size()`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let size = self.size();
        self.elements
            .get(index)
            .ok_or_else(|| ListError::out_of_range(index, size))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] if `index >= size()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let size = self.size();
        self.elements
            .get_mut(index)
            .ok_or_else(|| ListError::out_of_range(index, size))
    }

    /// Returns a read-only view of the live elements
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a copy of the live elements, in order.
    ///
    /// The returned vector does not alias the list's storage.
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Renders the list as `[e0, e1, ..., en-1]`; an empty list renders `[]`.
    pub fn to_display_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Appends `element` to the end of the list.
    ///
    /// Appending always succeeds, so this always returns `true`.
    pub fn add(&mut self, element: T) -> bool {
        self.elements.push(element);
        true
    }

    /// Inserts `element` at `index`, shifting the elements at `index..` one
    /// position to the right. Inserting at `size()` appends.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] if `index > size()`.
    pub fn add_at(&mut self, index: usize, element: T) -> Result<(), ListError> {
        self.check_insert_index(index)?;
        self.elements.insert(index, element);
        Ok(())
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] if `index >= size()`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, ListError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, element))
    }

    /// Removes and returns the element at `index`, shifting the elements
    /// after it one position to the left.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] if `index >= size()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        Ok(self.elements.remove(index))
    }

    /// Appends every element of `collection`, in its iteration order.
    ///
    /// Returns `true` if `collection` yielded at least one element. The result
    /// reflects the size of the input only.
    pub fn add_all<I>(&mut self, collection: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.size();
        self.elements.extend(collection);
        let added = self.size() - before;
        trace!(added, size = self.size(), "add_all");
        added != 0
    }

    /// Inserts every element of `collection` so that the first one lands at
    /// `index`; the elements previously at `index..` shift right by the
    /// number inserted.
    ///
    /// Returns `true` if `collection` yielded at least one element.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] if `index > size()`.
    pub fn add_all_at<I>(&mut self, index: usize, collection: I) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert_index(index)?;
        let before = self.size();
        self.elements.splice(index..index, collection);
        let added = self.size() - before;
        trace!(index, added, size = self.size(), "add_all_at");
        Ok(added != 0)
    }

    /// Removes the elements in the half-open range `from..to`.
    ///
    /// `from == to` removes nothing.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] if `to > size()` or `from > to`.
    pub fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        self.check_range(from, to)?;
        self.elements.drain(from..to);
        trace!(from, to, size = self.size(), "remove_range");
        Ok(())
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        trace!(removed = self.size(), "clear");
        self.elements.clear();
    }

    /// Sorts the list in its natural order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.elements.sort();
    }

    /// Sorts the list with a three-way comparator.
    ///
    /// The sort is stable: elements comparing `Equal` keep their relative
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::from(vec![3, 1, 2]);
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(list.to_display_string(), "[3, 2, 1]");
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.elements.sort_by(compare);
    }

    /// Sorts the list by the natural order of a key extracted from each
    /// element.
    pub fn sort_by_key<K, F>(&mut self, key: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.elements.sort_by_key(key);
    }

    /// Returns a new, independent list holding the elements in `from..to`.
    ///
    /// The new list uses a clone of this list's equality strategy.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] if `to > size()` or `from > to`.
    pub fn sublist(&self, from: usize, to: usize) -> Result<Self, ListError>
    where
        T: Clone,
        E: Clone,
    {
        self.check_range(from, to)?;
        Ok(Self::from_vec_with_equality(
            self.elements[from..to].to_vec(),
            self.equality.clone(),
        ))
    }

    /// Returns an iterator over the elements, in index order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an iterator that allows modifying each element in place
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Calls `f` on each element, in index order
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.elements.iter().for_each(f);
    }

    /// Encodes the list as a `{elements, size}` record with `codec`.
    ///
    /// # Errors
    /// Returns [`CodecError::EncodeFailed`] if the codec rejects an element.
    pub fn serialize_with<C: Codec>(&self, codec: &C) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize,
    {
        let bytes = codec.encode(self)?;
        debug!(
            codec = codec.name(),
            size = self.size(),
            bytes = bytes.len(),
            "Encoded list"
        );
        Ok(bytes)
    }

    /// Rebuilds a list from a record produced by [`serialize_with`](Self::serialize_with).
    ///
    /// # Errors
    /// Returns [`CodecError::DecodeFailed`] for malformed input and
    /// [`CodecError::SizeMismatch`] when the recorded size disagrees with the
    /// number of encoded elements.
    pub fn deserialize_with<C: Codec>(codec: &C, bytes: &[u8]) -> Result<Self, CodecError>
    where
        T: DeserializeOwned,
        E: Default,
    {
        let record: ListRecord<T> = codec.decode(bytes)?;
        let list = record.into_list()?;
        debug!(
            codec = codec.name(),
            size = list.size(),
            bytes = bytes.len(),
            "Decoded list"
        );
        Ok(list)
    }

    /// Encodes the list as a JSON string.
    ///
    /// # Errors
    /// Returns [`CodecError::EncodeFailed`] if an element cannot be
    /// represented in JSON.
    pub fn to_json(&self) -> Result<String, CodecError>
    where
        T: Serialize,
    {
        JsonCodec::default().encode_to_string(self)
    }

    /// Rebuilds a list from the JSON produced by [`to_json`](Self::to_json).
    ///
    /// # Errors
    /// See [`deserialize_with`](Self::deserialize_with).
    pub fn from_json(json: &str) -> Result<Self, CodecError>
    where
        T: DeserializeOwned,
        E: Default,
    {
        Self::deserialize_with(&JsonCodec::default(), json.as_bytes())
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index >= self.size() {
            return Err(ListError::out_of_range(index, self.size()));
        }
        Ok(())
    }

    fn check_insert_index(&self, index: usize) -> Result<(), ListError> {
        if index > self.size() {
            return Err(ListError::out_of_range(index, self.size()));
        }
        Ok(())
    }

    fn check_range(&self, from: usize, to: usize) -> Result<(), ListError> {
        if to > self.size() {
            return Err(ListError::out_of_range(to, self.size()));
        }
        if from > to {
            return Err(ListError::out_of_range(from, self.size()));
        }
        Ok(())
    }
}

impl<T, E> OrderedList<T, E>
where
    E: Equality<T>,
{
    /// Returns the index of the first element equal to `element`, or `None`
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements
            .iter()
            .position(|candidate| self.equality.equal(candidate, element))
    }

    /// Returns the index of the last element equal to `element`, or `None`
    pub fn last_index_of(&self, element: &T) -> Option<usize> {
        self.elements
            .iter()
            .rposition(|candidate| self.equality.equal(candidate, element))
    }

    /// Returns true if some element equals `element`
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Removes the first element equal to `element`.
    ///
    /// Returns `false`, leaving the list unchanged, if there is none.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes every element equal to any member of `collection`, keeping the
    /// survivors in their relative order.
    ///
    /// Returns `true` if `collection` yielded at least one element, whether or
    /// not anything matched.
    pub fn remove_all<I>(&mut self, collection: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let removals: Vec<I::Item> = collection.into_iter().collect();
        let before = self.size();
        let equality = &self.equality;
        self.elements.retain(|element| {
            !removals
                .iter()
                .any(|removal| equality.equal(element, removal.borrow()))
        });
        trace!(
            requested = removals.len(),
            removed = before - self.elements.len(),
            size = self.elements.len(),
            "remove_all"
        );
        !removals.is_empty()
    }
}

impl<T, E: Default> Default for OrderedList<T, E> {
    fn default() -> Self {
        Self::with_equality(E::default())
    }
}

impl<T: fmt::Debug, E> fmt::Debug for OrderedList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedList")
            .field("elements", &self.elements)
            .field("size", &self.size())
            .finish()
    }
}

impl<T: fmt::Display, E> fmt::Display for OrderedList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

// Lists are equal when their elements are, whatever their strategies
impl<T: PartialEq, E, E2> PartialEq<OrderedList<T, E2>> for OrderedList<T, E> {
    fn eq(&self, other: &OrderedList<T, E2>) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, E> Eq for OrderedList<T, E> {}

impl<T: PartialEq, E> PartialEq<Vec<T>> for OrderedList<T, E> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.elements == other
    }
}

impl<T: PartialEq, E, const N: usize> PartialEq<[T; N]> for OrderedList<T, E> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.elements.as_slice() == other.as_slice()
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec_with_equality(elements, NativeEq)
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for OrderedList<T> {
    fn from(elements: &[T]) -> Self {
        Self::from(elements.to_vec())
    }
}

impl<T, E: Default> FromIterator<T> for OrderedList<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_equality(iter.into_iter().collect(), E::default())
    }
}

impl<T, E> Extend<T> for OrderedList<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T, E> IntoIterator for OrderedList<T, E> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a OrderedList<T, E> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut OrderedList<T, E> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

/// # Panics
/// Panics if `index >= size()`. Use [`OrderedList::get`] for checked access.
impl<T, E> Index<usize> for OrderedList<T, E> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.elements.get(index) {
            Some(element) => element,
            None => panic!("{}", ListError::out_of_range(index, self.size())),
        }
    }
}

/// # Panics
/// Panics if `index >= size()`. Use [`OrderedList::set`] for checked writes.
impl<T, E> IndexMut<usize> for OrderedList<T, E> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let size = self.size();
        match self.elements.get_mut(index) {
            Some(element) => element,
            None => panic!("{}", ListError::out_of_range(index, size)),
        }
    }
}

// Serialized through the same `{elements, size}` record the codecs use, so a
// list can be nested inside other serde types.
impl<T: Serialize, E> Serialize for OrderedList<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ListRecordRef::from_slice(&self.elements).serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for OrderedList<T, E>
where
    T: Deserialize<'de>,
    E: Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = ListRecord::<T>::deserialize(deserializer)?;
        record.into_list().map_err(serde::de::Error::custom)
    }
}
