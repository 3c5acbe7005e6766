//! Assertions over iterators, lists, collections, maps and arrays.
//!
//! An actual element matches an expected one when it can be borrowed as the
//! expected type, so `values.iter()` and `values.into_iter()` can both be
//! checked against the same expected slice.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use super::{raise, reject};
use crate::config;
use crate::error::{AssertionError, ContainerKind};

/// A container queried by size and membership, regardless of order.
pub trait Collection<T> {
    /// Number of elements, duplicates included.
    fn len(&self) -> usize;

    /// Whether the container holds no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `element` is a member of the container.
    fn contains_element(&self, element: &T) -> bool;
}

impl<T: PartialEq> Collection<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq, const N: usize> Collection<T> for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn contains_element(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: PartialEq> Collection<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn contains_element(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: PartialEq> Collection<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Collection<T> for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: Ord> Collection<T> for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T, C: Collection<T> + ?Sized> Collection<T> for &C {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn contains_element(&self, element: &T) -> bool {
        (**self).contains_element(element)
    }
}

/// A container of unique keys queried by lookup and size.
pub trait MapLike<K, V> {
    /// Number of entries.
    fn len(&self) -> usize;

    /// Whether the map holds no entry.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value associated with `key`, if any.
    fn lookup(&self, key: &K) -> Option<&V>;
}

impl<K: Eq + Hash, V, S: BuildHasher> MapLike<K, V> for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K: Ord, V> MapLike<K, V> for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, M: MapLike<K, V> + ?Sized> MapLike<K, V> for &M {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        (**self).lookup(key)
    }
}

fn check_size(kind: ContainerKind, expected: usize, actual: usize) -> Result<(), AssertionError> {
    if expected != actual {
        return Err(reject(AssertionError::SizeMismatch {
            kind,
            expected,
            actual,
        }));
    }

    Ok(())
}

/// Checks that `iterator` yields exactly `expected`, in order, and nothing
/// more. The iterator is consumed up to the first mismatch.
///
/// # Arguments
///
/// * `iterator` - The iterator to verify
/// * `expected` - The expected elements, in order
///
/// # Returns
///
/// * `Ok(())` - If the iterator yields exactly the expected elements
/// * `Err(AssertionError)` - If it ends early, yields another element, or has elements left over
pub fn check_iterator_contains<I, E>(mut iterator: I, expected: &[E]) -> Result<(), AssertionError>
where
    I: Iterator,
    I::Item: Borrow<E> + Debug,
    E: PartialEq + Debug,
{
    let config = config::current();

    for (index, expected_element) in expected.iter().enumerate() {
        let actual = match iterator.next() {
            Some(actual) => actual,
            None => {
                return Err(reject(AssertionError::SequenceExhausted {
                    consumed: index,
                    expected: expected.len(),
                }))
            }
        };

        if Borrow::<E>::borrow(&actual) != expected_element {
            return Err(reject(AssertionError::ElementMismatch {
                index,
                expected: config.render(expected_element),
                actual: config.render(&actual),
            }));
        }
    }

    if let Some(next) = iterator.next() {
        return Err(reject(AssertionError::UnexpectedElement {
            expected: expected.len(),
            next: config.render(&next),
        }));
    }

    Ok(())
}

/// Checks that `iterator` yields nothing.
pub fn check_iterator_empty<I>(mut iterator: I) -> Result<(), AssertionError>
where
    I: Iterator,
    I::Item: Debug,
{
    match iterator.next() {
        Some(next) => Err(reject(AssertionError::UnexpectedElement {
            expected: 0,
            next: config::current().render(&next),
        })),
        None => Ok(()),
    }
}

/// Checks that `iterable` yields exactly `expected`, in order.
///
/// # Arguments
///
/// * `iterable` - Anything convertible into an iterator
/// * `expected` - The expected elements, in order
///
/// # Returns
///
/// * `Ok(())` - If the iterator of `iterable` yields exactly the expected elements
/// * `Err(AssertionError)` - Otherwise, as for [`check_iterator_contains`]
pub fn check_iterable_contains<I, E>(iterable: I, expected: &[E]) -> Result<(), AssertionError>
where
    I: IntoIterator,
    I::Item: Borrow<E> + Debug,
    E: PartialEq + Debug,
{
    check_iterator_contains(iterable.into_iter(), expected)
}

/// Checks the size of `list` first, then its elements in order.
///
/// # Arguments
///
/// * `list` - The list to verify
/// * `expected` - The expected elements, in order
///
/// # Returns
///
/// * `Ok(())` - If the list holds exactly the expected elements
/// * `Err(AssertionError)` - `SizeMismatch` on a size difference, otherwise the first ordering failure
pub fn check_list_contains<T, E>(list: &[T], expected: &[E]) -> Result<(), AssertionError>
where
    T: Borrow<E> + Debug,
    E: PartialEq + Debug,
{
    check_size(ContainerKind::List, expected.len(), list.len())?;

    check_iterator_contains(list.iter().map(<T as Borrow<E>>::borrow), expected)
}

/// Checks the size of `collection`, then that every expected element is a
/// member of it. Order is ignored; extra duplicates only show up through the
/// size check.
///
/// # Arguments
///
/// * `collection` - The collection to verify
/// * `expected` - The expected elements, in any order
///
/// # Returns
///
/// * `Ok(())` - If the sizes match and every expected element is a member
/// * `Err(AssertionError)` - `SizeMismatch` or `MissingElement`
pub fn check_collection_contains<C, E>(collection: &C, expected: &[E]) -> Result<(), AssertionError>
where
    C: Collection<E> + Debug + ?Sized,
    E: Debug,
{
    check_size(ContainerKind::Collection, expected.len(), collection.len())?;

    let config = config::current();
    for element in expected {
        if !collection.contains_element(element) {
            return Err(reject(AssertionError::MissingElement {
                collection: config.render(collection),
                element: config.render(element),
            }));
        }
    }

    Ok(())
}

/// Checks that `map` holds exactly the given entries.
///
/// # Arguments
///
/// * `map` - The map to verify
/// * `entries` - The expected key/value pairs
///
/// # Returns
///
/// * `Ok(())` - If the map has as many entries as given and each key maps to its value
/// * `Err(AssertionError)` - `SizeMismatch`, `MissingKey` or `ValueMismatch`
pub fn check_map_contains<M, K, V>(map: &M, entries: &[(K, V)]) -> Result<(), AssertionError>
where
    M: MapLike<K, V> + Debug + ?Sized,
    K: Debug,
    V: PartialEq + Debug,
{
    check_size(ContainerKind::Map, entries.len(), map.len())?;

    let config = config::current();
    for (key, value) in entries {
        let actual = map.lookup(key).ok_or_else(|| {
            reject(AssertionError::MissingKey {
                map: config.render(map),
                key: config.render(key),
            })
        })?;

        if actual != value {
            return Err(reject(AssertionError::ValueMismatch {
                key: config.render(key),
                expected: config.render(value),
                actual: config.render(actual),
            }));
        }
    }

    Ok(())
}

/// Checks that `map` holds only `key`, associated with `value`.
///
/// # Arguments
///
/// * `map` - The map to verify
/// * `key` - The only expected key
/// * `value` - The value expected for `key`
///
/// # Returns
///
/// * `Ok(())` - If the map holds exactly this one entry
/// * `Err(AssertionError)` - If the map has another size, lacks the key, or holds another value
pub fn check_map_contains_entry<M, K, V>(map: &M, key: K, value: V) -> Result<(), AssertionError>
where
    M: MapLike<K, V> + Debug + ?Sized,
    K: Debug,
    V: PartialEq + Debug,
{
    check_map_contains(map, &[(key, value)])
}

/// Checks that `map` holds only the two given entries.
///
/// # Arguments
///
/// * `map` - The map to verify
/// * `first` - The first expected key/value pair
/// * `second` - The second expected key/value pair
///
/// # Returns
///
/// * `Ok(())` - If the map holds exactly these two entries
/// * `Err(AssertionError)` - If the map has another size, lacks a key, or holds another value
pub fn check_map_contains_entries<M, K, V>(
    map: &M,
    first: (K, V),
    second: (K, V),
) -> Result<(), AssertionError>
where
    M: MapLike<K, V> + Debug + ?Sized,
    K: Debug,
    V: PartialEq + Debug,
{
    check_map_contains(map, &[first, second])
}

/// Checks the length of `array`, then positional equality at every index.
///
/// # Arguments
///
/// * `array` - The array to verify
/// * `expected` - The expected elements, by position
///
/// # Returns
///
/// * `Ok(())` - If the lengths match and every position holds the expected element
/// * `Err(AssertionError)` - `SizeMismatch` or the first `ElementMismatch`
pub fn check_array_contains<T, E>(array: &[T], expected: &[E]) -> Result<(), AssertionError>
where
    T: Borrow<E> + Debug,
    E: PartialEq + Debug,
{
    check_size(ContainerKind::Array, expected.len(), array.len())?;

    let config = config::current();
    for (index, (actual, expected_element)) in array.iter().zip(expected).enumerate() {
        if Borrow::<E>::borrow(actual) != expected_element {
            return Err(reject(AssertionError::ElementMismatch {
                index,
                expected: config.render(expected_element),
                actual: config.render(actual),
            }));
        }
    }

    Ok(())
}

/// Checks that `list` is empty.
pub fn check_list_empty<T>(list: &[T]) -> Result<(), AssertionError>
where
    T: PartialEq + Debug,
{
    check_list_contains::<T, T>(list, &[])
}

/// Checks that `collection` holds no element.
pub fn check_collection_empty<C, E>(collection: &C) -> Result<(), AssertionError>
where
    C: Collection<E> + ?Sized,
{
    if !collection.is_empty() {
        return Err(reject(AssertionError::SizeMismatch {
            kind: ContainerKind::Collection,
            expected: 0,
            actual: collection.len(),
        }));
    }

    Ok(())
}

/// Checks that `map` holds no entry.
pub fn check_map_empty<M, K, V>(map: &M) -> Result<(), AssertionError>
where
    M: MapLike<K, V> + ?Sized,
{
    if !map.is_empty() {
        return Err(reject(AssertionError::SizeMismatch {
            kind: ContainerKind::Map,
            expected: 0,
            actual: map.len(),
        }));
    }

    Ok(())
}

/// Checks that `array` has no element.
pub fn check_array_empty<T>(array: &[T]) -> Result<(), AssertionError>
where
    T: PartialEq + Debug,
{
    check_array_contains::<T, T>(array, &[])
}

/// Panicking form of [`check_iterator_contains`].
#[track_caller]
pub fn assert_iterator_contains<I, E>(iterator: I, expected: &[E])
where
    I: Iterator,
    I::Item: Borrow<E> + Debug,
    E: PartialEq + Debug,
{
    raise(check_iterator_contains(iterator, expected));
}

/// Panicking form of [`check_iterator_empty`].
#[track_caller]
pub fn assert_iterator_empty<I>(iterator: I)
where
    I: Iterator,
    I::Item: Debug,
{
    raise(check_iterator_empty(iterator));
}

/// Panicking form of [`check_iterable_contains`].
#[track_caller]
pub fn assert_iterable_contains<I, E>(iterable: I, expected: &[E])
where
    I: IntoIterator,
    I::Item: Borrow<E> + Debug,
    E: PartialEq + Debug,
{
    raise(check_iterable_contains(iterable, expected));
}

/// Panicking form of [`check_list_contains`].
#[track_caller]
pub fn assert_list_contains<T, E>(list: &[T], expected: &[E])
where
    T: Borrow<E> + Debug,
    E: PartialEq + Debug,
{
    raise(check_list_contains(list, expected));
}

/// Panicking form of [`check_collection_contains`].
#[track_caller]
pub fn assert_collection_contains<C, E>(collection: &C, expected: &[E])
where
    C: Collection<E> + Debug + ?Sized,
    E: Debug,
{
    raise(check_collection_contains(collection, expected));
}

/// Panicking form of [`check_map_contains`].
#[track_caller]
pub fn assert_map_contains<M, K, V>(map: &M, entries: &[(K, V)])
where
    M: MapLike<K, V> + Debug + ?Sized,
    K: Debug,
    V: PartialEq + Debug,
{
    raise(check_map_contains(map, entries));
}

/// Panicking form of [`check_map_contains_entry`].
#[track_caller]
pub fn assert_map_contains_entry<M, K, V>(map: &M, key: K, value: V)
where
    M: MapLike<K, V> + Debug + ?Sized,
    K: Debug,
    V: PartialEq + Debug,
{
    raise(check_map_contains_entry(map, key, value));
}

/// Panicking form of [`check_map_contains_entries`].
#[track_caller]
pub fn assert_map_contains_entries<M, K, V>(map: &M, first: (K, V), second: (K, V))
where
    M: MapLike<K, V> + Debug + ?Sized,
    K: Debug,
    V: PartialEq + Debug,
{
    raise(check_map_contains_entries(map, first, second));
}

/// Panicking form of [`check_array_contains`].
#[track_caller]
pub fn assert_array_contains<T, E>(array: &[T], expected: &[E])
where
    T: Borrow<E> + Debug,
    E: PartialEq + Debug,
{
    raise(check_array_contains(array, expected));
}

/// Panicking form of [`check_list_empty`].
#[track_caller]
pub fn assert_list_empty<T>(list: &[T])
where
    T: PartialEq + Debug,
{
    raise(check_list_empty(list));
}

/// Panicking form of [`check_collection_empty`].
#[track_caller]
pub fn assert_collection_empty<C, E>(collection: &C)
where
    C: Collection<E> + ?Sized,
{
    raise(check_collection_empty(collection));
}

/// Panicking form of [`check_map_empty`].
#[track_caller]
pub fn assert_map_empty<M, K, V>(map: &M)
where
    M: MapLike<K, V> + ?Sized,
{
    raise(check_map_empty(map));
}

/// Panicking form of [`check_array_empty`].
#[track_caller]
pub fn assert_array_empty<T>(array: &[T])
where
    T: PartialEq + Debug,
{
    raise(check_array_empty(array));
}
